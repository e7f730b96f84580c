//! Text rendering of a generated grid
//!
//! Each cell becomes one box-drawing glyph showing which of its sides carry
//! a pathway label. Open cells render as `·`, resolved cells without any
//! pathway as `□`.

use crate::spatial::grid::WaveGrid;
use crate::spatial::tiles::{Side, TileCatalog, is_pathway};

/// Glyph for an unresolved cell
pub const OPEN_GLYPH: char = '·';

// Indexed by pathway bitmask: Left = 1, Bottom = 2, Right = 4, Top = 8
const PATHWAY_GLYPHS: [char; 16] = [
    '□', '╴', '╷', '┐', '╶', '─', '┌', '┬', '╵', '┘', '│', '┤', '└', '┴', '├', '┼',
];

/// Bitmask of the sides on which `(x, y)` presents a pathway label
///
/// Returns `None` for open or out-of-range cells.
pub fn pathway_mask(grid: &WaveGrid, catalog: &TileCatalog, x: usize, y: usize) -> Option<u8> {
    let (placement, _) = grid.cell(x, y)?.placed()?;
    let mask = Side::ALL
        .iter()
        .filter(|&&side| catalog.effective_edge(placement, side).is_some_and(is_pathway))
        .fold(0_u8, |mask, side| mask | (1 << side.index()));
    Some(mask)
}

/// Glyph for one cell
pub fn cell_glyph(grid: &WaveGrid, catalog: &TileCatalog, x: usize, y: usize) -> char {
    pathway_mask(grid, catalog, x, y)
        .and_then(|mask| PATHWAY_GLYPHS.get(mask as usize).copied())
        .unwrap_or(OPEN_GLYPH)
}

/// Render the whole grid, one text line per row
pub fn render_ascii(grid: &WaveGrid, catalog: &TileCatalog) -> String {
    let mut output = String::with_capacity((grid.width() + 1) * grid.height() * 3);
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            output.push(cell_glyph(grid, catalog, x, y));
        }
        output.push('\n');
    }
    output
}
