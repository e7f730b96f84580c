//! Collapse loop orchestration
//!
//! [`WaveFunction`] owns the catalog, the grid and the random source. After
//! construction the grid has been seeded and narrowed by one raster pass;
//! each call to [`WaveFunction::step`] then commits exactly one cell, so a
//! full run never takes more iterations than the grid has cells.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::algorithm::propagation::{collapse_all, collapse_neighbors};
use crate::algorithm::selection::{RandomSelector, find_best_cell};
use crate::io::configuration::GeneratorConfig;
use crate::io::error::{GenerationError, Result};
use crate::spatial::grid::{CellState, WaveGrid};
use crate::spatial::tiles::{ALL_WILDCARD, CandidateTile, EdgeLabel, TileCatalog};

/// Placement used when a chosen cell has no valid candidate
pub const CONTRADICTION_FALLBACK: CandidateTile = CandidateTile::new(0, 0);

/// Result of a single collapse iteration
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// A cell was committed
    Placed {
        /// Grid column
        x: usize,
        /// Grid row
        y: usize,
        /// Committed placement
        placement: CandidateTile,
        /// Whether the fallback placement was forced
        contradiction: bool,
    },
    /// No eligible cell remains
    Done,
}

/// Summary of a generation run
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GenerationReport {
    /// Collapse iterations executed
    pub iterations: usize,
    /// Cells committed by the loop (input overrides excluded)
    pub placed: usize,
    /// Cells that fell back to the contradiction placement
    pub contradictions: Vec<(usize, usize)>,
    /// Whether the run stopped on a cancellation request
    pub cancelled: bool,
    /// Force-spawn budget left when the run ended (may be negative)
    pub force_spawn_remaining: i64,
}

/// Wave function collapse executor over an edge-label tile catalog
#[derive(Debug, Clone)]
pub struct WaveFunction {
    catalog: TileCatalog,
    grid: WaveGrid,
    boundary_label: EdgeLabel,
    force_spawn_count: i64,
    random_selector: RandomSelector,
    iteration: usize,
    contradictions: Vec<(usize, usize)>,
}

impl WaveFunction {
    /// Seed the grid, apply input overrides and run the initial raster pass
    ///
    /// `overrides` is read in row-major order; entries past the end of the
    /// grid are ignored and a shorter list leaves the remaining cells open.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configuration fails validation
    /// - An override references a tile index outside the catalog
    pub fn new(
        catalog: TileCatalog,
        config: &GeneratorConfig,
        overrides: &[Option<usize>],
    ) -> Result<Self> {
        Self::with_selector(
            catalog,
            config,
            overrides,
            RandomSelector::new(config.seed),
        )
    }

    /// Like [`WaveFunction::new`] with an injected random source
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configuration fails validation
    /// - An override references a tile index outside the catalog
    pub fn with_selector(
        catalog: TileCatalog,
        config: &GeneratorConfig,
        overrides: &[Option<usize>],
        random_selector: RandomSelector,
    ) -> Result<Self> {
        config.validate()?;

        let initial = catalog.valid_placements(&ALL_WILDCARD);
        let mut grid = WaveGrid::new(config.width, config.height, &initial);

        for (index, tile) in overrides.iter().enumerate().take(grid.cell_count()) {
            let Some(tile) = *tile else {
                continue;
            };
            if tile >= catalog.len() {
                return Err(GenerationError::InvalidTileIndex {
                    index: tile,
                    max_tiles: catalog.len(),
                });
            }
            if let Some(cell) = grid
                .coordinates(index)
                .and_then(|(x, y)| grid.cell_mut(x, y))
            {
                *cell = CellState::Fixed { tile };
            }
        }

        collapse_all(&mut grid, &catalog, config.edge_label);

        tracing::debug!(
            width = config.width,
            height = config.height,
            tiles = catalog.len(),
            initial_candidates = initial.len(),
            fixed = grid.resolved_count(),
            "wave grid initialized"
        );

        Ok(Self {
            catalog,
            grid,
            boundary_label: config.edge_label,
            force_spawn_count: config.force_spawn_count,
            random_selector,
            iteration: 0,
            contradictions: Vec::new(),
        })
    }

    /// Access the current grid
    pub const fn grid(&self) -> &WaveGrid {
        &self.grid
    }

    /// Access the tile catalog
    pub const fn catalog(&self) -> &TileCatalog {
        &self.catalog
    }

    /// Iterations executed so far
    pub const fn iteration(&self) -> usize {
        self.iteration
    }

    /// Current force-spawn budget
    pub const fn force_spawn_count(&self) -> i64 {
        self.force_spawn_count
    }

    /// Cells that needed the contradiction fallback so far
    pub fn contradictions(&self) -> &[(usize, usize)] {
        &self.contradictions
    }

    /// Give up ownership of the catalog and the final grid
    pub fn into_parts(self) -> (TileCatalog, WaveGrid) {
        (self.catalog, self.grid)
    }

    /// Commit one cell and propagate to its neighbors
    pub fn step(&mut self) -> StepOutcome {
        let Some((x, y)) = find_best_cell(&self.grid, self.force_spawn_count) else {
            return StepOutcome::Done;
        };

        self.iteration += 1;

        let (has_pathway, chosen) = match self.grid.cell(x, y) {
            Some(CellState::Open {
                candidates,
                has_pathway,
            }) => (*has_pathway, self.random_selector.choose(candidates)),
            _ => (false, None),
        };

        let contradiction = chosen.is_none();
        let placement = chosen.unwrap_or(CONTRADICTION_FALLBACK);
        if contradiction {
            tracing::warn!(
                x,
                y,
                "no suitable tile for cell; placing fallback tile 0. Make sure the tileset is complete"
            );
            self.contradictions.push((x, y));
        }

        if let Some(cell) = self.grid.cell_mut(x, y) {
            *cell = CellState::Committed {
                placement,
                has_pathway,
            };
        }

        collapse_neighbors(&mut self.grid, &self.catalog, self.boundary_label, x, y);
        self.force_spawn_count = self.force_spawn_count.saturating_sub(1);

        StepOutcome::Placed {
            x,
            y,
            placement,
            contradiction,
        }
    }

    /// Run the collapse loop until no eligible cell remains
    pub fn run(&mut self) -> GenerationReport {
        self.run_with_progress(|_, _| {})
    }

    /// Run to completion, reporting every step
    ///
    /// The callback receives the outcome and the iteration count so far.
    pub fn run_with_progress(&mut self, mut on_step: impl FnMut(&StepOutcome, usize)) -> GenerationReport {
        let start = self.iteration;
        loop {
            let outcome = self.step();
            on_step(&outcome, self.iteration);
            if outcome == StepOutcome::Done {
                break;
            }
        }
        self.report(start, false)
    }

    /// Run until done or until `cancel` is raised between iterations
    pub fn run_with_cancellation(&mut self, cancel: &AtomicBool) -> GenerationReport {
        let start = self.iteration;
        loop {
            if cancel.load(Ordering::Relaxed) {
                tracing::info!(iteration = self.iteration, "generation cancelled");
                return self.report(start, true);
            }
            if self.step() == StepOutcome::Done {
                return self.report(start, false);
            }
        }
    }

    fn report(&self, start: usize, cancelled: bool) -> GenerationReport {
        let report = GenerationReport {
            iterations: self.iteration - start,
            placed: self.grid.committed_count(),
            contradictions: self.contradictions.clone(),
            cancelled,
            force_spawn_remaining: self.force_spawn_count,
        };

        tracing::info!(
            iterations = report.iterations,
            placed = report.placed,
            contradictions = report.contradictions.len(),
            cancelled,
            "wave function finished"
        );

        report
    }
}
