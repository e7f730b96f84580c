//! Edge-label wave function collapse for rotatable square tiles
//!
//! Tiles carry one integer label per side. A cell's candidate placements are
//! narrowed from the labels its neighbors present, the most constrained cell
//! reachable by a pathway is committed at random, and the process repeats
//! until no reachable cell is left. The result is a grid of committed or
//! pre-placed tiles ready for a spawn step.

#![forbid(unsafe_code)]

/// Constraint propagation, cell selection and the collapse loop
pub mod algorithm;
/// Tileset loading, configuration, export and error handling
pub mod io;
/// Tile catalog, grid state and world layout
pub mod spatial;

pub use algorithm::executor::{GenerationReport, StepOutcome, WaveFunction};
pub use io::error::{GenerationError, Result};
pub use spatial::tiles::{CandidateTile, TileCatalog, TileType};
