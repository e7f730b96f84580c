//! World-space layout of a generated grid
//!
//! Converts resolved cells into placement transforms for whatever spawns the
//! tiles. The grid's x axis maps to world forward and its y axis to world
//! right; a tile's rotation becomes a yaw in quarter turns.

use serde::{Deserialize, Serialize};

use crate::spatial::grid::WaveGrid;
use crate::spatial::tiles::TileCatalog;

/// Yaw applied per quarter-turn rotation
pub const DEGREES_PER_ROTATION: f32 = 90.0;

/// World size of one grid cell
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CellSize {
    /// Extent along the grid x axis
    pub x: f32,
    /// Extent along the grid y axis
    pub y: f32,
    /// Vertical extent
    pub z: f32,
}

impl Default for CellSize {
    fn default() -> Self {
        Self {
            x: 1.0,
            y: 1.0,
            z: 1.0,
        }
    }
}

/// Axis-aligned box covering the whole generator footprint
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Half-size on each axis
    pub extent: [f32; 3],
    /// Center relative to the origin of cell (0, 0)
    pub center: [f32; 3],
}

/// Bounding box of a `width` x `height` grid
///
/// Cell origins sit at cell centers, so the box is shifted back by half a
/// cell on the horizontal axes.
pub fn bounding_box(width: usize, height: usize, cell_size: CellSize) -> BoundingBox {
    let half_x = cell_size.x * width as f32 / 2.0;
    let half_y = cell_size.y * height as f32 / 2.0;
    let half_z = cell_size.z / 2.0;

    BoundingBox {
        extent: [half_x, half_y, half_z],
        center: [half_x - cell_size.x / 2.0, half_y - cell_size.y / 2.0, half_z],
    }
}

/// One resolved cell ready to spawn
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    /// Grid column
    pub x: usize,
    /// Grid row
    pub y: usize,
    /// Catalog index
    pub tile: usize,
    /// Catalog name of the tile
    pub name: String,
    /// Quarter turns applied
    pub rotation: u8,
    /// World offset from the grid origin
    pub position: [f32; 3],
    /// Rotation about the vertical axis
    pub yaw_degrees: f32,
    /// Whether the tile came from an input override
    pub from_input: bool,
}

/// Collect placements for every resolved cell, row by row
///
/// Open cells are skipped; they stay empty in the generated layout.
pub fn placements(grid: &WaveGrid, catalog: &TileCatalog, cell_size: CellSize) -> Vec<Placement> {
    grid.iter()
        .filter_map(|((x, y), cell)| {
            let (candidate, from_input) = cell.placed()?;
            let name = catalog.get(candidate.tile)?.name.clone();
            Some(Placement {
                x,
                y,
                tile: candidate.tile,
                name,
                rotation: candidate.rotation,
                position: [x as f32 * cell_size.x, y as f32 * cell_size.y, 0.0],
                yaw_degrees: f32::from(candidate.rotation) * DEGREES_PER_ROTATION,
                from_input,
            })
        })
        .collect()
}
