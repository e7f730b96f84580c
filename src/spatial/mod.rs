//! Spatial data structures for tiles and grids
//!
//! This module contains spatial-related functionality including:
//! - Tile definitions and rotation-aware edge compatibility
//! - Per-cell wave state
//! - World-space layout of resolved cells

/// Per-cell wave state
pub mod grid;
/// World placement transforms and bounds
pub mod layout;
/// Tile types, edge labels and the catalog
pub mod tiles;

pub use grid::{CellState, WaveGrid};
