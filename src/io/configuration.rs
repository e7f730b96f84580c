//! Generator constants and runtime configuration defaults

use serde::{Deserialize, Serialize};

use crate::io::error::{Result, invalid_parameter};
use crate::spatial::layout::CellSize;
use crate::spatial::tiles::{EdgeLabel, NO_CONNECTION};

/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

/// Default grid width in cells
pub const DEFAULT_WIDTH: usize = 5;

/// Default grid height in cells
pub const DEFAULT_HEIGHT: usize = 5;

// Outer boundary reads as a closed wall unless configured otherwise
/// Default label used for constraints past the grid edge
pub const DEFAULT_EDGE_LABEL: EdgeLabel = NO_CONNECTION;

// Without at least one forced placement a fully walled-in grid places nothing
/// Default number of placements allowed without a pathway
pub const DEFAULT_FORCE_SPAWN_COUNT: i64 = 1;

// Each step scans every cell, so a full run is quadratic in the cell count
/// Maximum allowed grid width or height
pub const MAX_GRID_DIMENSION: usize = 1_024;

/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_layout";

/// Side length in pixels of one cell in the PNG preview
pub const DEFAULT_PREVIEW_SCALE: u32 = 9;

/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

const fn default_seed() -> u64 {
    DEFAULT_SEED
}

const fn default_width() -> usize {
    DEFAULT_WIDTH
}

const fn default_height() -> usize {
    DEFAULT_HEIGHT
}

const fn default_edge_label() -> EdgeLabel {
    DEFAULT_EDGE_LABEL
}

const fn default_force_spawn_count() -> i64 {
    DEFAULT_FORCE_SPAWN_COUNT
}

/// Generator parameters, loadable from the tileset file
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Grid columns
    #[serde(default = "default_width")]
    pub width: usize,
    /// Grid rows
    #[serde(default = "default_height")]
    pub height: usize,
    /// World size of a cell, used only for layout output
    #[serde(default)]
    pub cell_size: CellSize,
    /// Constraint label at the outer boundary
    #[serde(default = "default_edge_label")]
    pub edge_label: EdgeLabel,
    /// Placements permitted on cells without a pathway
    #[serde(default = "default_force_spawn_count")]
    pub force_spawn_count: i64,
    /// Random seed
    #[serde(default = "default_seed")]
    pub seed: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            cell_size: CellSize::default(),
            edge_label: DEFAULT_EDGE_LABEL,
            force_spawn_count: DEFAULT_FORCE_SPAWN_COUNT,
            seed: DEFAULT_SEED,
        }
    }
}

impl GeneratorConfig {
    /// Check dimensions and boundary label
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Width or height is zero or exceeds [`MAX_GRID_DIMENSION`]
    /// - The boundary label is negative (the wildcard is query-only)
    pub fn validate(&self) -> Result<()> {
        for (parameter, value) in [("width", self.width), ("height", self.height)] {
            if value == 0 {
                return Err(invalid_parameter(parameter, &value, &"must be positive"));
            }
            if value > MAX_GRID_DIMENSION {
                return Err(invalid_parameter(
                    parameter,
                    &value,
                    &format!("must not exceed {MAX_GRID_DIMENSION}"),
                ));
            }
        }

        if self.edge_label < NO_CONNECTION {
            return Err(invalid_parameter(
                "edge_label",
                &self.edge_label,
                &"boundary label must be 0 or a pathway label",
            ));
        }

        Ok(())
    }

    /// Number of cells in the configured grid
    pub const fn cell_count(&self) -> usize {
        self.width * self.height
    }
}
