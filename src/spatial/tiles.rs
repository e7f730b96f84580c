//! Tile types, edge labels and the rotation-aware compatibility catalog
//!
//! Every tile carries four edge labels in the fixed order Left, Bottom,
//! Right, Top. Rotating a tile by one quarter turn shifts which stored edge
//! is presented on each side, so a single catalog entry stands in for up to
//! four placements without duplicating the tile definition.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::io::error::{Result, invalid_catalog};

/// Integer tag on one side of a tile describing the kind of connection
pub type EdgeLabel = i32;

/// Query-only label matching any edge
pub const WILDCARD: EdgeLabel = -1;

/// Label for a blocked side that carries no pathway
pub const NO_CONNECTION: EdgeLabel = 0;

/// Number of sides on a square tile, and of distinct quarter-turn rotations
pub const SIDE_COUNT: usize = 4;

/// Four edge labels indexed by [`Side::index`]
pub type EdgeSet = [EdgeLabel; SIDE_COUNT];

/// Constraint that every placement satisfies
pub const ALL_WILDCARD: EdgeSet = [WILDCARD; SIDE_COUNT];

/// Whether a label denotes a pathway connection (strictly positive)
pub const fn is_pathway(label: EdgeLabel) -> bool {
    label > 0
}

/// One side of a square cell
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Towards x - 1
    Left,
    /// Towards y + 1
    Bottom,
    /// Towards x + 1
    Right,
    /// Towards y - 1
    Top,
}

impl Side {
    /// All sides in index order
    pub const ALL: [Self; SIDE_COUNT] = [Self::Left, Self::Bottom, Self::Right, Self::Top];

    /// Position of this side in an [`EdgeSet`]
    pub const fn index(self) -> usize {
        match self {
            Self::Left => 0,
            Self::Bottom => 1,
            Self::Right => 2,
            Self::Top => 3,
        }
    }

    /// Side for an index, wrapping modulo 4
    pub const fn from_index(index: usize) -> Self {
        match index % SIDE_COUNT {
            0 => Self::Left,
            1 => Self::Bottom,
            2 => Self::Right,
            _ => Self::Top,
        }
    }

    /// The side a neighbor presents back towards this one
    pub const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Bottom => Self::Top,
            Self::Right => Self::Left,
            Self::Top => Self::Bottom,
        }
    }

    /// Grid step `[dx, dy]` towards the neighbor on this side
    pub const fn offset(self) -> [isize; 2] {
        match self {
            Self::Left => [-1, 0],
            Self::Bottom => [0, 1],
            Self::Right => [1, 0],
            Self::Top => [0, -1],
        }
    }
}

const fn default_rotatable() -> bool {
    true
}

/// A tile definition loaded from the tileset
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileType {
    /// Opaque identity handed back to the spawn step
    pub name: String,
    /// Edge labels in Left, Bottom, Right, Top order
    pub edges: EdgeSet,
    /// Whether quarter-turn rotations of this tile may be placed
    #[serde(default = "default_rotatable")]
    pub rotatable: bool,
}

impl TileType {
    /// Create a tile definition
    pub fn new(name: impl Into<String>, edges: EdgeSet, rotatable: bool) -> Self {
        Self {
            name: name.into(),
            edges,
            rotatable,
        }
    }

    /// Label this tile presents on `side` after `rotation` quarter turns
    ///
    /// Non-rotatable tiles ignore the rotation entirely.
    pub fn effective_edge(&self, side: Side, rotation: u8) -> EdgeLabel {
        let shift = if self.rotatable { rotation as usize } else { 0 };
        self.edges
            .get((side.index() + shift) % SIDE_COUNT)
            .copied()
            .unwrap_or(NO_CONNECTION)
    }

    /// Check every non-wildcard side of `constraint` against this orientation
    pub fn is_compatible(&self, constraint: &EdgeSet, rotation: u8) -> bool {
        Side::ALL.iter().zip(constraint.iter()).all(|(&side, &label)| {
            label == WILDCARD || label == self.effective_edge(side, rotation)
        })
    }

    /// Number of distinct orientations this tile may be placed in
    pub const fn orientation_count(&self) -> usize {
        if self.rotatable { SIDE_COUNT } else { 1 }
    }
}

/// One placement orientation of a catalog tile
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CandidateTile {
    /// Index into the tile catalog
    pub tile: usize,
    /// Quarter turns applied, in `0..4`
    pub rotation: u8,
}

impl CandidateTile {
    /// Create a candidate, wrapping the rotation into `0..4`
    pub const fn new(tile: usize, rotation: u8) -> Self {
        Self {
            tile,
            rotation: rotation % SIDE_COUNT as u8,
        }
    }
}

/// Immutable list of tile types with placement enumeration
#[derive(Clone, Debug)]
pub struct TileCatalog {
    tiles: Vec<TileType>,
}

impl TileCatalog {
    /// Build a catalog from tile definitions
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The catalog is empty (contradiction recovery needs tile 0)
    /// - A tile edge uses the query-only wildcard label
    /// - Two tiles share a name
    pub fn new(tiles: Vec<TileType>) -> Result<Self> {
        if tiles.is_empty() {
            return Err(invalid_catalog(&"catalog must contain at least one tile"));
        }

        let mut names = HashSet::with_capacity(tiles.len());
        for (index, tile) in tiles.iter().enumerate() {
            if tile.edges.iter().any(|&label| label < NO_CONNECTION) {
                return Err(invalid_catalog(&format!(
                    "tile {index} ('{}') has a negative edge label {:?}; -1 is reserved for queries",
                    tile.name, tile.edges
                )));
            }
            if !names.insert(tile.name.as_str()) {
                return Err(invalid_catalog(&format!(
                    "tile name '{}' appears more than once",
                    tile.name
                )));
            }
        }

        Ok(Self { tiles })
    }

    /// Number of tile types
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the catalog has no tiles (never true for a constructed catalog)
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// All tile definitions in index order
    pub fn tiles(&self) -> &[TileType] {
        &self.tiles
    }

    /// Tile definition at `index`
    pub fn get(&self, index: usize) -> Option<&TileType> {
        self.tiles.get(index)
    }

    /// Index of the tile with the given name
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.tiles.iter().position(|tile| tile.name == name)
    }

    /// Upper bound on the candidate count of any cell
    pub fn max_candidates(&self) -> usize {
        self.tiles.iter().map(TileType::orientation_count).sum()
    }

    /// Label a placed candidate presents on `side`
    pub fn effective_edge(&self, candidate: CandidateTile, side: Side) -> Option<EdgeLabel> {
        self.get(candidate.tile)
            .map(|tile| tile.effective_edge(side, candidate.rotation))
    }

    /// Enumerate every placement satisfying `constraint`
    ///
    /// Tiles are scanned in index order and rotations in ascending order.
    /// That order is kept in the result and later serves as the tie-break.
    pub fn valid_placements(&self, constraint: &EdgeSet) -> Vec<CandidateTile> {
        let mut placements = Vec::with_capacity(self.tiles.len());

        for (index, tile) in self.tiles.iter().enumerate() {
            for rotation in 0..tile.orientation_count() as u8 {
                if tile.is_compatible(constraint, rotation) {
                    placements.push(CandidateTile::new(index, rotation));
                }
            }
        }

        placements
    }

    /// Enumerate placements for an unchecked constraint slice
    ///
    /// A slice that doesn't hold exactly four labels is logged and treated as
    /// having no valid placement.
    pub fn valid_placements_from_slice(&self, constraint: &[EdgeLabel]) -> Vec<CandidateTile> {
        match <&EdgeSet>::try_from(constraint) {
            Ok(edges) => self.valid_placements(edges),
            Err(_) => {
                tracing::warn!(
                    arity = constraint.len(),
                    "edge constraint must have exactly {SIDE_COUNT} labels; no placement is valid"
                );
                Vec::new()
            }
        }
    }
}
