//! Per-cell wave state stored in a row-major grid
//!
//! Each cell is either still open (a narrowing candidate list), fixed by an
//! input override, or committed to one placement. The grid itself knows
//! nothing about constraints; propagation and selection live in
//! [`crate::algorithm`].

use ndarray::Array2;

use crate::spatial::tiles::{CandidateTile, Side};

/// State of a single grid cell
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CellState {
    /// Not yet decided; candidates keep catalog scan order
    Open {
        /// Placements still compatible with known neighbors
        candidates: Vec<CandidateTile>,
        /// Set once any constraint on this cell was a pathway label
        has_pathway: bool,
    },
    /// Pre-placed input tile, presented at rotation 0
    Fixed {
        /// Catalog index of the input tile
        tile: usize,
    },
    /// Chosen by the collapse loop
    Committed {
        /// Final placement
        placement: CandidateTile,
        /// Pathway flag carried over from the open state
        has_pathway: bool,
    },
}

impl CellState {
    /// Open cell with the given candidates
    pub const fn open(candidates: Vec<CandidateTile>) -> Self {
        Self::Open {
            candidates,
            has_pathway: false,
        }
    }

    /// Whether the cell is fixed or committed
    pub const fn is_resolved(&self) -> bool {
        !matches!(self, Self::Open { .. })
    }

    /// Remaining candidates (empty once resolved)
    pub fn candidates(&self) -> &[CandidateTile] {
        match self {
            Self::Open { candidates, .. } => candidates,
            Self::Fixed { .. } | Self::Committed { .. } => &[],
        }
    }

    /// Informal entropy: candidates left, or 1 once resolved
    pub fn candidate_count(&self) -> usize {
        match self {
            Self::Open { candidates, .. } => candidates.len(),
            Self::Fixed { .. } | Self::Committed { .. } => 1,
        }
    }

    /// Whether a pathway constraint has reached this cell
    pub const fn has_pathway(&self) -> bool {
        match self {
            Self::Open { has_pathway, .. } | Self::Committed { has_pathway, .. } => *has_pathway,
            Self::Fixed { .. } => false,
        }
    }

    /// The single placement this cell presents to its neighbors, if decided
    ///
    /// Open cells narrowed to exactly one candidate count as decided.
    pub fn known_placement(&self) -> Option<CandidateTile> {
        match self {
            Self::Open { candidates, .. } => match candidates.as_slice() {
                [only] => Some(*only),
                _ => None,
            },
            Self::Fixed { tile } => Some(CandidateTile::new(*tile, 0)),
            Self::Committed { placement, .. } => Some(*placement),
        }
    }

    /// Placement for output, with the input flag
    pub const fn placed(&self) -> Option<(CandidateTile, bool)> {
        match self {
            Self::Open { .. } => None,
            Self::Fixed { tile } => Some((CandidateTile::new(*tile, 0), true)),
            Self::Committed { placement, .. } => Some((*placement, false)),
        }
    }
}

/// Wave state for a `width` x `height` grid, indexed `[y, x]`
#[derive(Clone, Debug)]
pub struct WaveGrid {
    cells: Array2<CellState>,
}

impl WaveGrid {
    /// Create a grid where every cell starts open with `initial` candidates
    pub fn new(width: usize, height: usize, initial: &[CandidateTile]) -> Self {
        Self {
            cells: Array2::from_elem((height, width), CellState::open(initial.to_vec())),
        }
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.cells.ncols()
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.cells.nrows()
    }

    /// Total number of cells
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Cell at `(x, y)`
    pub fn cell(&self, x: usize, y: usize) -> Option<&CellState> {
        self.cells.get([y, x])
    }

    /// Mutable cell at `(x, y)`
    pub fn cell_mut(&mut self, x: usize, y: usize) -> Option<&mut CellState> {
        self.cells.get_mut([y, x])
    }

    /// Cell at flat row-major `index = y * width + x`
    pub fn cell_at(&self, index: usize) -> Option<&CellState> {
        let (x, y) = self.coordinates(index)?;
        self.cell(x, y)
    }

    /// Convert a flat row-major index to `(x, y)`
    pub fn coordinates(&self, index: usize) -> Option<(usize, usize)> {
        let width = self.width();
        (width > 0 && index < self.cell_count()).then(|| (index % width, index / width))
    }

    /// Coordinates of the neighbor on `side`, or `None` past the boundary
    pub fn neighbor(&self, x: usize, y: usize, side: Side) -> Option<(usize, usize)> {
        let [dx, dy] = side.offset();
        let nx = x.checked_add_signed(dx)?;
        let ny = y.checked_add_signed(dy)?;
        (nx < self.width() && ny < self.height()).then_some((nx, ny))
    }

    /// Iterate `((x, y), cell)` in row-major order, x fastest
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), &CellState)> {
        self.cells.indexed_iter().map(|((y, x), cell)| ((x, y), cell))
    }

    /// Number of fixed or committed cells
    pub fn resolved_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_resolved()).count()
    }

    /// Number of cells committed by the collapse loop
    pub fn committed_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|cell| matches!(cell, CellState::Committed { .. }))
            .count()
    }
}
