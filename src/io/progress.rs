//! Terminal progress display for a generation run

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

use crate::algorithm::executor::StepOutcome;
use crate::io::configuration::PROGRESS_BAR_WIDTH;

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "{{prefix}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} cells {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress bar tracking committed cells against the grid size
///
/// The loop usually ends before every cell is filled, since cells without a
/// pathway are never chosen once the force-spawn budget runs out.
pub struct GenerationProgress {
    bar: ProgressBar,
    contradictions: usize,
}

impl GenerationProgress {
    /// Create a bar for a grid of `cell_count` cells, `already_resolved` of
    /// which are input overrides
    pub fn new(name: &str, cell_count: usize, already_resolved: usize) -> Self {
        let bar = ProgressBar::new(cell_count as u64);
        bar.set_style(PROGRESS_STYLE.clone());
        bar.set_prefix(name.to_string());
        bar.set_position(already_resolved as u64);
        Self {
            bar,
            contradictions: 0,
        }
    }

    /// Hidden bar for quiet runs
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
            contradictions: 0,
        }
    }

    /// Record one collapse step
    pub fn record(&mut self, outcome: &StepOutcome) {
        if let StepOutcome::Placed { contradiction, .. } = outcome {
            self.bar.inc(1);
            if *contradiction {
                self.contradictions += 1;
                self.bar
                    .set_message(format!("({} contradictions)", self.contradictions));
            }
        }
    }

    /// Contradictions seen so far
    pub const fn contradictions(&self) -> usize {
        self.contradictions
    }

    /// Cells counted so far, input overrides included
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Stop drawing and leave the final state on screen
    pub fn finish(&self) {
        self.bar.finish();
    }
}
