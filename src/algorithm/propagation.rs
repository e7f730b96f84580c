//! One-hop constraint propagation from neighbors into a single cell
//!
//! A cell's constraint is read from its four neighbors: the grid boundary
//! contributes the configured boundary label, a decided neighbor contributes
//! the label it presents on the facing side, and anything still undecided
//! contributes a wildcard. Propagation never recurses; the executor re-runs
//! it around each committed cell.

use crate::spatial::grid::{CellState, WaveGrid};
use crate::spatial::tiles::{ALL_WILDCARD, EdgeLabel, EdgeSet, Side, TileCatalog, WILDCARD, is_pathway};

/// Build the edge constraint imposed on `(x, y)` by its neighbors
pub fn neighbor_constraint(
    grid: &WaveGrid,
    catalog: &TileCatalog,
    boundary_label: EdgeLabel,
    x: usize,
    y: usize,
) -> EdgeSet {
    let mut constraint = ALL_WILDCARD;

    for (slot, side) in constraint.iter_mut().zip(Side::ALL) {
        *slot = match grid.neighbor(x, y, side) {
            None => boundary_label,
            Some((nx, ny)) => grid
                .cell(nx, ny)
                .and_then(CellState::known_placement)
                .and_then(|placement| catalog.effective_edge(placement, side.opposite()))
                .unwrap_or(WILDCARD),
        };
    }

    constraint
}

/// Re-derive the candidates of an open cell from its current neighbors
///
/// Fixed and committed cells are left untouched. The pathway flag only ever
/// turns on. Returns whether the cell was open and got re-enumerated.
pub fn collapse_cell(
    grid: &mut WaveGrid,
    catalog: &TileCatalog,
    boundary_label: EdgeLabel,
    x: usize,
    y: usize,
) -> bool {
    if grid.cell(x, y).is_none_or(CellState::is_resolved) {
        return false;
    }

    let constraint = neighbor_constraint(grid, catalog, boundary_label, x, y);
    let narrowed = catalog.valid_placements(&constraint);
    let constrained_by_path = constraint.iter().copied().any(is_pathway);

    if let Some(CellState::Open {
        candidates,
        has_pathway,
    }) = grid.cell_mut(x, y)
    {
        *candidates = narrowed;
        *has_pathway |= constrained_by_path;
        return true;
    }

    false
}

/// Collapse every in-bounds neighbor of `(x, y)`
pub fn collapse_neighbors(
    grid: &mut WaveGrid,
    catalog: &TileCatalog,
    boundary_label: EdgeLabel,
    x: usize,
    y: usize,
) {
    for side in Side::ALL {
        if let Some((nx, ny)) = grid.neighbor(x, y, side) {
            collapse_cell(grid, catalog, boundary_label, nx, ny);
        }
    }
}

/// Raster pass over the whole grid, x outer and y inner
pub fn collapse_all(grid: &mut WaveGrid, catalog: &TileCatalog, boundary_label: EdgeLabel) {
    for x in 0..grid.width() {
        for y in 0..grid.height() {
            collapse_cell(grid, catalog, boundary_label, x, y);
        }
    }
}
