//! PNG preview export of a generated layout

use image::{ImageBuffer, Rgba};
use std::path::Path;

use crate::io::error::{GenerationError, Result, invalid_parameter};
use crate::io::visualization::pathway_mask;
use crate::spatial::grid::{CellState, WaveGrid};
use crate::spatial::tiles::{Side, TileCatalog};

/// Background of an unresolved cell
pub const OPEN_COLOR: Rgba<u8> = Rgba([0, 0, 0, 0]);
/// Body of a committed cell
pub const COMMITTED_COLOR: Rgba<u8> = Rgba([64, 64, 72, 255]);
/// Body of an input override cell
pub const FIXED_COLOR: Rgba<u8> = Rgba([40, 72, 140, 255]);
/// Pathway strokes
pub const PATHWAY_COLOR: Rgba<u8> = Rgba([236, 228, 200, 255]);

// Which part of a cell a pixel falls in, split into thirds on each axis
fn pathway_side(px: u32, py: u32, scale: u32) -> Option<Option<Side>> {
    let third = (scale / 3).max(1);
    let band = |v: u32| {
        if v < third {
            0
        } else if v >= scale - third {
            2
        } else {
            1
        }
    };

    match (band(px), band(py)) {
        (1, 1) => Some(None),
        (0, 1) => Some(Some(Side::Left)),
        (2, 1) => Some(Some(Side::Right)),
        (1, 0) => Some(Some(Side::Top)),
        (1, 2) => Some(Some(Side::Bottom)),
        _ => None,
    }
}

/// Render the grid into an RGBA buffer, `scale` pixels per cell side
///
/// # Errors
///
/// Returns an error if `scale` is smaller than 3 or the image would exceed
/// `u32` dimensions
pub fn render_preview(
    grid: &WaveGrid,
    catalog: &TileCatalog,
    scale: u32,
) -> Result<ImageBuffer<Rgba<u8>, Vec<u8>>> {
    if scale < 3 {
        return Err(invalid_parameter("scale", &scale, &"must be at least 3 pixels"));
    }

    let dimension = |cells: usize| {
        u32::try_from(cells)
            .ok()
            .and_then(|c| c.checked_mul(scale))
            .ok_or_else(|| invalid_parameter("scale", &scale, &"preview image is too large"))
    };
    let width = dimension(grid.width())?;
    let height = dimension(grid.height())?;

    let img = ImageBuffer::from_fn(width, height, |px, py| {
        let x = (px / scale) as usize;
        let y = (py / scale) as usize;

        let body = match grid.cell(x, y) {
            Some(CellState::Fixed { .. }) => FIXED_COLOR,
            Some(CellState::Committed { .. }) => COMMITTED_COLOR,
            _ => return OPEN_COLOR,
        };

        let mask = pathway_mask(grid, catalog, x, y).unwrap_or(0);
        match pathway_side(px % scale, py % scale, scale) {
            Some(None) if mask != 0 => PATHWAY_COLOR,
            Some(Some(side)) if mask & (1 << side.index()) != 0 => PATHWAY_COLOR,
            _ => body,
        }
    });

    Ok(img)
}

/// Export the grid preview as a PNG file
///
/// # Errors
///
/// Returns an error if:
/// - The preview cannot be rendered at this scale
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_grid_as_png(
    grid: &WaveGrid,
    catalog: &TileCatalog,
    scale: u32,
    output_path: &Path,
) -> Result<()> {
    let img = render_preview(grid, catalog, scale)?;

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| GenerationError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path)
        .map_err(|e| GenerationError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    tracing::debug!(path = %output_path.display(), width = img.width(), height = img.height(), "preview exported");

    Ok(())
}
