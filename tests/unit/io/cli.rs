//! Tests for command-line parsing, output naming and the end-to-end processor

#[cfg(test)]
mod tests {
    use clap::Parser;
    use edgewave::io::cli::{Cli, LayoutProcessor, output_path, write_json};
    use edgewave::io::configuration::{DEFAULT_PREVIEW_SCALE, GeneratorConfig};
    use edgewave::GenerationError;
    use std::fs;
    use std::path::{Path, PathBuf};

    const TILESET: &str = r#"(
    config: (width: 4, height: 3, seed: 9, force_spawn_count: 2),
    tiles: [
        (name: "wall", edges: (0, 0, 0, 0), rotatable: false),
        (name: "hall", edges: (1, 0, 1, 0)),
        (name: "corner", edges: (1, 1, 0, 0)),
        (name: "end", edges: (1, 0, 0, 0)),
    ],
    inputs: [None, Some("wall")],
)"#;

    // Tests parsing with only the tileset argument
    #[test]
    fn test_cli_parse_minimal_args() {
        let cli = Cli::parse_from(["edgewave", "dungeon.ron"]);

        assert_eq!(cli.tileset, PathBuf::from("dungeon.ron"));
        assert_eq!(cli.seed, None);
        assert_eq!(cli.width, None);
        assert_eq!(cli.scale, DEFAULT_PREVIEW_SCALE);
        assert!(!cli.png);
        assert!(!cli.json);
        assert!(cli.should_show_progress());
        assert_eq!(cli.verbose, 0);
    }

    // Tests every flag reaches the parsed struct
    #[test]
    fn test_cli_parse_all_args() {
        let cli = Cli::parse_from([
            "edgewave", "set.json", "-s", "7", "-W", "12", "-H", "8", "-e", "2", "-f", "-3",
            "--png", "--json", "--scale", "15", "--quiet", "-vv",
        ]);

        assert_eq!(cli.seed, Some(7));
        assert_eq!(cli.width, Some(12));
        assert_eq!(cli.height, Some(8));
        assert_eq!(cli.edge_label, Some(2));
        assert_eq!(cli.force_spawn, Some(-3));
        assert!(cli.png && cli.json);
        assert_eq!(cli.scale, 15);
        assert!(!cli.should_show_progress());
        assert_eq!(cli.verbose, 2);
    }

    // Tests only supplied options replace tileset values
    #[test]
    fn test_apply_overrides() {
        let base = GeneratorConfig {
            width: 3,
            height: 3,
            seed: 1,
            ..GeneratorConfig::default()
        };
        let cli = Cli::parse_from(["edgewave", "a.ron", "--width", "20", "-f", "0"]);
        let merged = cli.apply_overrides(base);

        assert_eq!(merged.width, 20);
        assert_eq!(merged.height, 3);
        assert_eq!(merged.seed, 1);
        assert_eq!(merged.force_spawn_count, 0);
        assert_eq!(merged.edge_label, base.edge_label);
    }

    // Tests outputs land next to the tileset with the layout suffix
    #[test]
    fn test_output_path() {
        assert_eq!(
            output_path(Path::new("maps/crypt.ron"), "png"),
            PathBuf::from("maps/crypt_layout.png")
        );
        assert_eq!(output_path(Path::new("crypt.json"), "json"), PathBuf::from("crypt_layout.json"));
    }

    // Tests a full run writes both exports and reports placements
    #[test]
    fn test_process_writes_outputs() {
        let dir = tempfile::tempdir().unwrap();
        let tileset = dir.path().join("crypt.ron");
        fs::write(&tileset, TILESET).unwrap();

        let cli = Cli::parse_from([
            "edgewave",
            tileset.to_str().unwrap(),
            "--png",
            "--json",
            "--quiet",
        ]);
        let report = LayoutProcessor::new(cli).process().unwrap();
        assert!(report.placed >= 2);

        assert!(dir.path().join("crypt_layout.png").exists());
        let json = fs::read_to_string(dir.path().join("crypt_layout.json")).unwrap();
        let document: serde_json::Value = serde_json::from_str(&json).unwrap();
        let placements = document["placements"].as_array().unwrap();

        // The fixed wall plus every committed cell
        assert_eq!(placements.len(), report.placed + 1);
        let fixed: Vec<_> = placements.iter().filter(|p| p["from_input"] == true).collect();
        assert_eq!(fixed.len(), 1);
        assert_eq!(fixed[0]["name"], "wall");
        assert_eq!((fixed[0]["x"].as_u64(), fixed[0]["y"].as_u64()), (Some(1), Some(0)));
        assert!(document["bounds"]["extent"].is_array());
    }

    // Tests a missing tileset surfaces as a file system error
    #[test]
    fn test_process_missing_tileset() {
        let cli = Cli::parse_from(["edgewave", "/nonexistent/dir/none.ron", "-q"]);
        let result = LayoutProcessor::new(cli).process();
        assert!(matches!(result, Err(GenerationError::FileSystem { .. })));
    }

    // Tests command-line dimensions are validated like tileset ones
    #[test]
    fn test_process_rejects_zero_width() {
        let dir = tempfile::tempdir().unwrap();
        let tileset = dir.path().join("crypt.ron");
        fs::write(&tileset, TILESET).unwrap();

        let cli = Cli::parse_from(["edgewave", tileset.to_str().unwrap(), "-W", "0", "-q"]);
        let result = LayoutProcessor::new(cli).process();
        assert!(matches!(
            result,
            Err(GenerationError::InvalidParameter { parameter: "width", .. })
        ));
    }

    // Tests writing into a missing directory fails with the target path
    #[test]
    fn test_write_json_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.json");
        let Err(GenerationError::FileSystem { path: failed, .. }) = write_json(&path, &[1, 2, 3])
        else {
            unreachable!("write into a missing directory must fail");
        };
        assert_eq!(failed, path);
    }
}
