//! Tileset file loading
//!
//! A tileset bundles the tile catalog with generator settings and optional
//! input overrides. Files ending in `.json` are read as JSON; everything else
//! is read as RON.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::io::configuration::GeneratorConfig;
use crate::io::error::{GenerationError, Result};
use crate::io::prefill::PrefillData;
use crate::spatial::tiles::{TileCatalog, TileType};

/// On-disk tileset description
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TilesetFile {
    /// Generator parameters
    #[serde(default)]
    pub config: GeneratorConfig,
    /// Tile definitions in catalog order
    pub tiles: Vec<TileType>,
    /// Row-major input overrides by tile name
    #[serde(default)]
    pub inputs: Vec<Option<String>>,
}

/// Tileset resolved into generator inputs
#[derive(Clone, Debug)]
pub struct Tileset {
    /// Validated tile catalog
    pub catalog: TileCatalog,
    /// Generator parameters
    pub config: GeneratorConfig,
    /// Input overrides resolved to catalog indices
    pub prefill: PrefillData,
}

impl TilesetFile {
    /// Parse RON text
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid RON tileset
    pub fn from_ron(text: &str, origin: &Path) -> Result<Self> {
        ron::from_str(text).map_err(|e| GenerationError::TilesetParse {
            path: origin.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Parse JSON text
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid JSON tileset
    pub fn from_json(text: &str, origin: &Path) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| GenerationError::TilesetParse {
            path: origin.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Validate the tiles and resolve input names into a [`Tileset`]
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The catalog fails validation
    /// - The configuration fails validation
    /// - An input override names a tile not in the catalog
    pub fn resolve(self) -> Result<Tileset> {
        let catalog = TileCatalog::new(self.tiles)?;
        self.config.validate()?;
        let prefill = PrefillData::from_names(&self.inputs, &catalog)?;

        if prefill.len() > self.config.cell_count() {
            tracing::warn!(
                inputs = prefill.len(),
                cells = self.config.cell_count(),
                "more input overrides than grid cells; the excess is ignored"
            );
        }

        tracing::debug!(fixed = prefill.fixed_count(), "input overrides resolved");

        Ok(Tileset {
            catalog,
            config: self.config,
            prefill,
        })
    }
}

/// Read and resolve a tileset file
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read
/// - The contents fail to parse
/// - The tileset fails validation
pub fn load_tileset(path: &Path) -> Result<Tileset> {
    let text = std::fs::read_to_string(path).map_err(|e| GenerationError::FileSystem {
        path: path.to_path_buf(),
        operation: "read tileset",
        source: e,
    })?;

    let file = if path.extension().and_then(|s| s.to_str()) == Some("json") {
        TilesetFile::from_json(&text, path)?
    } else {
        TilesetFile::from_ron(&text, path)?
    };

    tracing::debug!(
        path = %path.display(),
        tiles = file.tiles.len(),
        inputs = file.inputs.len(),
        "tileset loaded"
    );

    file.resolve()
}
