//! Command-line interface for generating layouts from tileset files

use clap::Parser;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::algorithm::executor::{GenerationReport, WaveFunction};
use crate::io::configuration::{DEFAULT_PREVIEW_SCALE, GeneratorConfig, OUTPUT_SUFFIX};
use crate::io::error::{GenerationError, Result};
use crate::io::image::export_grid_as_png;
use crate::io::progress::GenerationProgress;
use crate::io::tileset::{Tileset, load_tileset};
use crate::io::visualization::render_ascii;
use crate::spatial::layout::{BoundingBox, Placement, bounding_box, placements};

#[derive(Parser, Debug)]
#[command(name = "edgewave")]
#[command(
    author,
    version,
    about = "Generate tile dungeon layouts with edge-label wave function collapse"
)]
/// Command-line arguments for the layout generator
pub struct Cli {
    /// Tileset file (RON, or JSON by extension)
    #[arg(value_name = "TILESET")]
    pub tileset: PathBuf,

    /// Random seed (overrides the tileset)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Grid width in cells (overrides the tileset)
    #[arg(short = 'W', long)]
    pub width: Option<usize>,

    /// Grid height in cells (overrides the tileset)
    #[arg(short = 'H', long)]
    pub height: Option<usize>,

    /// Boundary edge label (overrides the tileset)
    #[arg(short, long)]
    pub edge_label: Option<i32>,

    /// Placements allowed without a pathway (overrides the tileset)
    #[arg(short, long, allow_negative_numbers = true)]
    pub force_spawn: Option<i64>,

    /// Write a PNG preview next to the tileset (<stem>_layout.png)
    #[arg(short, long)]
    pub png: bool,

    /// Write the placement list next to the tileset (<stem>_layout.json)
    #[arg(short, long)]
    pub json: bool,

    /// Pixels per cell in the PNG preview
    #[arg(long, default_value_t = DEFAULT_PREVIEW_SCALE)]
    pub scale: u32,

    /// Suppress progress output and the text map
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (repeatable)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Apply command-line overrides on top of the tileset configuration
    pub fn apply_overrides(&self, mut config: GeneratorConfig) -> GeneratorConfig {
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(edge_label) = self.edge_label {
            config.edge_label = edge_label;
        }
        if let Some(force_spawn) = self.force_spawn {
            config.force_spawn_count = force_spawn;
        }
        config
    }

    /// Check if progress and the text map should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Sibling path `<stem>_layout.<extension>` of the tileset
pub fn output_path(tileset: &Path, extension: &str) -> PathBuf {
    let stem = tileset.file_stem().unwrap_or_default();
    let output_name = format!("{}{OUTPUT_SUFFIX}.{extension}", stem.to_string_lossy());

    tileset.parent().map_or_else(
        || PathBuf::from(&output_name),
        |parent| parent.join(&output_name),
    )
}

/// Runs one generation from parsed arguments
pub struct LayoutProcessor {
    cli: Cli,
}

impl LayoutProcessor {
    /// Create a processor with the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Load, generate and export
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The tileset cannot be loaded or fails validation
    /// - An output file cannot be written
    pub fn process(&self) -> Result<GenerationReport> {
        let start_time = Instant::now();
        let Tileset {
            catalog,
            config,
            prefill,
        } = load_tileset(&self.cli.tileset)?;
        let config = self.cli.apply_overrides(config);

        let mut wave = WaveFunction::new(catalog, &config, prefill.cells())?;

        let mut progress = if self.cli.should_show_progress() {
            let name = self
                .cli
                .tileset
                .file_stem()
                .unwrap_or_default()
                .to_string_lossy()
                .to_string();
            GenerationProgress::new(&name, wave.grid().cell_count(), wave.grid().resolved_count())
        } else {
            GenerationProgress::hidden()
        };

        let report = wave.run_with_progress(|outcome, _| progress.record(outcome));
        progress.finish();

        tracing::info!(
            seed = config.seed,
            elapsed_ms = start_time.elapsed().as_millis() as u64,
            "layout generated"
        );

        if self.cli.should_show_progress() {
            print_summary(&wave, &report);
        }

        if self.cli.png {
            let path = output_path(&self.cli.tileset, "png");
            export_grid_as_png(wave.grid(), wave.catalog(), self.cli.scale, &path)?;
        }

        if self.cli.json {
            let document = LayoutDocument {
                bounds: bounding_box(config.width, config.height, config.cell_size),
                placements: placements(wave.grid(), wave.catalog(), config.cell_size),
            };
            write_json(&output_path(&self.cli.tileset, "json"), &document)?;
        }

        Ok(report)
    }
}

/// JSON export consumed by the spawn step
#[derive(Debug, Serialize)]
pub struct LayoutDocument {
    /// Footprint of the whole grid
    pub bounds: BoundingBox,
    /// Resolved cells in row-major order
    pub placements: Vec<Placement>,
}

/// Serialize `value` as pretty JSON to `path`
///
/// # Errors
///
/// Returns an error if serialization or the write fails
pub fn write_json(path: &Path, value: &impl Serialize) -> Result<()> {
    let text = serde_json::to_string_pretty(value)?;
    std::fs::write(path, text).map_err(|e| GenerationError::FileSystem {
        path: path.to_path_buf(),
        operation: "write layout",
        source: e,
    })
}

// Allow print for the user-facing map and summary
#[allow(clippy::print_stdout)]
fn print_summary(wave: &WaveFunction, report: &GenerationReport) {
    print!("{}", render_ascii(wave.grid(), wave.catalog()));
    println!(
        "{} cells placed in {} iterations, {} contradictions",
        report.placed,
        report.iterations,
        report.contradictions.len()
    );
}
