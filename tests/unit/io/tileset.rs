//! Tests for tileset parsing and resolution

#[cfg(test)]
mod tests {
    use edgewave::io::configuration::DEFAULT_SEED;
    use edgewave::io::tileset::{TilesetFile, load_tileset};
    use edgewave::GenerationError;
    use std::fs;
    use std::path::Path;

    const RON: &str = r#"(
    config: (width: 3, height: 2, edge_label: 1),
    tiles: [
        (name: "wall", edges: (0, 0, 0, 0), rotatable: false),
        (name: "hall", edges: (1, 0, 1, 0)),
    ],
    inputs: [Some("hall"), None, Some("wall")],
)"#;

    const JSON: &str = r#"{
    "config": { "seed": 5 },
    "tiles": [
        { "name": "cross", "edges": [1, 1, 1, 1], "rotatable": false },
        { "name": "end", "edges": [1, 0, 0, 0] }
    ]
}"#;

    // Tests RON parsing with rotatable defaulting to true
    #[test]
    fn test_from_ron() {
        let file = TilesetFile::from_ron(RON, Path::new("set.ron")).unwrap();
        assert_eq!(file.tiles.len(), 2);
        assert!(!file.tiles[0].rotatable);
        assert!(file.tiles[1].rotatable);
        assert_eq!(file.config.width, 3);
        assert_eq!(file.config.edge_label, 1);
        assert_eq!(file.config.seed, DEFAULT_SEED);
        assert_eq!(file.inputs.len(), 3);
    }

    // Tests resolution turns override names into indices
    #[test]
    fn test_resolve() {
        let tileset = TilesetFile::from_ron(RON, Path::new("set.ron"))
            .unwrap()
            .resolve()
            .unwrap();
        assert_eq!(tileset.catalog.len(), 2);
        assert_eq!(tileset.prefill.cells(), &[Some(1), None, Some(0)]);
    }

    // Tests malformed text reports the file it came from
    #[test]
    fn test_parse_error() {
        let result = TilesetFile::from_ron("(tiles: [", Path::new("broken.ron"));
        assert!(matches!(
            result,
            Err(GenerationError::TilesetParse { ref path, .. }) if path == Path::new("broken.ron")
        ));
        let result = TilesetFile::from_json("{", Path::new("broken.json"));
        assert!(matches!(result, Err(GenerationError::TilesetParse { .. })));
    }

    // Tests validation failures surface from resolve
    #[test]
    fn test_resolve_errors() {
        let empty = TilesetFile::default();
        assert!(matches!(empty.resolve(), Err(GenerationError::InvalidCatalog { .. })));

        let mut file = TilesetFile::from_ron(RON, Path::new("set.ron")).unwrap();
        file.inputs.push(Some("altar".to_string()));
        assert!(matches!(file.resolve(), Err(GenerationError::UnknownTile { cell: 3, .. })));

        let mut file = TilesetFile::from_ron(RON, Path::new("set.ron")).unwrap();
        file.config.edge_label = -1;
        assert!(matches!(
            file.resolve(),
            Err(GenerationError::InvalidParameter { parameter: "edge_label", .. })
        ));
    }

    // Tests the loader picks the format from the extension
    #[test]
    fn test_load_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let ron_path = dir.path().join("a.ron");
        let json_path = dir.path().join("b.json");
        fs::write(&ron_path, RON).unwrap();
        fs::write(&json_path, JSON).unwrap();

        let from_ron = load_tileset(&ron_path).unwrap();
        assert_eq!(from_ron.catalog.index_of("hall"), Some(1));

        let from_json = load_tileset(&json_path).unwrap();
        assert_eq!(from_json.config.seed, 5);
        assert_eq!(from_json.catalog.index_of("end"), Some(1));
        assert!(from_json.prefill.is_empty());

        // JSON text behind a RON extension is a parse error
        let misnamed = dir.path().join("c.ron");
        fs::write(&misnamed, JSON).unwrap();
        assert!(matches!(load_tileset(&misnamed), Err(GenerationError::TilesetParse { .. })));
    }

    // Tests a missing file names the read operation
    #[test]
    fn test_load_missing_file() {
        let result = load_tileset(Path::new("/nonexistent/tileset.ron"));
        assert!(matches!(
            result,
            Err(GenerationError::FileSystem { operation: "read tileset", .. })
        ));
    }
}
