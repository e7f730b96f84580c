//! Input overrides: pre-placed tiles that bypass the collapse loop

use crate::io::error::{GenerationError, Result};
use crate::spatial::tiles::TileCatalog;

/// Row-major list of fixed tile indices
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PrefillData {
    cells: Vec<Option<usize>>,
}

impl PrefillData {
    /// Wrap already-resolved catalog indices
    pub const fn new(cells: Vec<Option<usize>>) -> Self {
        Self { cells }
    }

    /// Resolve tile names against the catalog
    ///
    /// # Errors
    ///
    /// Returns an error if a name is not in the catalog
    pub fn from_names(names: &[Option<String>], catalog: &TileCatalog) -> Result<Self> {
        names
            .iter()
            .enumerate()
            .map(|(cell, name)| {
                name.as_deref()
                    .map(|name| {
                        catalog.index_of(name).ok_or_else(|| GenerationError::UnknownTile {
                            name: name.to_string(),
                            cell,
                        })
                    })
                    .transpose()
            })
            .collect::<Result<Vec<_>>>()
            .map(Self::new)
    }

    /// Overrides in row-major order
    pub fn cells(&self) -> &[Option<usize>] {
        &self.cells
    }

    /// Length of the override list, gaps included
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the override list has no entries at all
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of cells that actually name a tile
    pub fn fixed_count(&self) -> usize {
        self.cells.iter().flatten().count()
    }
}
