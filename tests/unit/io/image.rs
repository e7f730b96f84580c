//! Tests for PNG preview rendering and export

#[cfg(test)]
mod tests {
    use edgewave::io::image::{
        COMMITTED_COLOR, FIXED_COLOR, OPEN_COLOR, PATHWAY_COLOR, export_grid_as_png,
        render_preview,
    };
    use edgewave::spatial::grid::{CellState, WaveGrid};
    use edgewave::spatial::tiles::{CandidateTile, TileCatalog, TileType};
    use edgewave::GenerationError;

    fn setup() -> (WaveGrid, TileCatalog) {
        let catalog = TileCatalog::new(vec![
            TileType::new("wall", [0, 0, 0, 0], false),
            TileType::new("end", [1, 0, 0, 0], true),
        ])
        .unwrap();
        let mut grid = WaveGrid::new(2, 2, &[]);
        if let Some(cell) = grid.cell_mut(0, 0) {
            *cell = CellState::Fixed { tile: 0 };
        }
        if let Some(cell) = grid.cell_mut(1, 0) {
            *cell = CellState::Committed {
                placement: CandidateTile::new(1, 0),
                has_pathway: true,
            };
        }
        (grid, catalog)
    }

    // Tests cell bodies and pathway arms land on the expected pixels
    #[test]
    fn test_render_preview_pixels() {
        let (grid, catalog) = setup();
        let img = render_preview(&grid, &catalog, 9).unwrap();
        assert_eq!(img.dimensions(), (18, 18));

        // Fixed wall: solid body, no pathway
        assert_eq!(*img.get_pixel(4, 4), FIXED_COLOR);
        // Dead end opening Left: center and left arm drawn, right arm not
        assert_eq!(*img.get_pixel(13, 4), PATHWAY_COLOR);
        assert_eq!(*img.get_pixel(10, 4), PATHWAY_COLOR);
        assert_eq!(*img.get_pixel(16, 4), COMMITTED_COLOR);
        assert_eq!(*img.get_pixel(10, 0), COMMITTED_COLOR);
        // Open cells stay transparent
        assert_eq!(*img.get_pixel(4, 13), OPEN_COLOR);
    }

    // Tests scales too small to show arms are rejected
    #[test]
    fn test_render_preview_scale() {
        let (grid, catalog) = setup();
        assert!(matches!(
            render_preview(&grid, &catalog, 2),
            Err(GenerationError::InvalidParameter { parameter: "scale", .. })
        ));
        assert!(render_preview(&grid, &catalog, 3).is_ok());
    }

    // Tests export creates missing directories and a readable PNG
    #[test]
    fn test_export_creates_file() {
        let (grid, catalog) = setup();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("preview.png");

        export_grid_as_png(&grid, &catalog, 6, &path).unwrap();

        let loaded = image::open(&path).unwrap();
        assert_eq!((loaded.width(), loaded.height()), (12, 12));
    }

    // Tests an unwritable destination reports the directory failure
    #[test]
    fn test_export_error() {
        let (grid, catalog) = setup();
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        std::fs::write(&blocker, b"x").unwrap();

        let result = export_grid_as_png(&grid, &catalog, 6, &blocker.join("out.png"));
        assert!(matches!(result, Err(GenerationError::FileSystem { .. })));
    }
}
