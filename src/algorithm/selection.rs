//! Lowest-entropy cell selection and seeded candidate choice

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::spatial::grid::{CellState, WaveGrid};
use crate::spatial::tiles::CandidateTile;

/// Find the open cell with the fewest candidates that may be collapsed next
///
/// Only cells reached by a pathway are eligible, unless the force-spawn
/// budget is still positive. Ties keep the first cell in row-major order,
/// which biases generation towards the top-left corner.
pub fn find_best_cell(grid: &WaveGrid, force_spawn_count: i64) -> Option<(usize, usize)> {
    let forcing = force_spawn_count > 0;
    let mut best: Option<((usize, usize), usize)> = None;

    for (position, cell) in grid.iter() {
        let CellState::Open {
            candidates,
            has_pathway,
        } = cell
        else {
            continue;
        };

        if !(forcing || *has_pathway) {
            continue;
        }

        if best.is_none_or(|(_, smallest)| candidates.len() < smallest) {
            best = Some((position, candidates.len()));
        }
    }

    best.map(|(position, _)| position)
}

/// Seeded random selector for reproducible candidate choice
#[derive(Debug, Clone)]
pub struct RandomSelector {
    rng: StdRng,
}

impl RandomSelector {
    /// Create a deterministic random selector
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Wrap an existing generator
    pub const fn from_rng(rng: StdRng) -> Self {
        Self { rng }
    }

    /// Uniform index in `0..len`, or `None` for an empty range
    pub fn uniform_index(&mut self, len: usize) -> Option<usize> {
        (len > 0).then(|| self.rng.random_range(0..len))
    }

    /// Pick one candidate uniformly
    pub fn choose(&mut self, candidates: &[CandidateTile]) -> Option<CandidateTile> {
        let index = self.uniform_index(candidates.len())?;
        candidates.get(index).copied()
    }
}
