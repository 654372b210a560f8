//! Generation observers
//!
//! Observers receive each generation's statistics as the loop runs, keeping
//! reporting out of the evolutionary step itself.

use tracing::info;

use crate::diagnostics::GenerationStats;

/// Callback invoked once per evaluated generation
pub trait GenerationObserver {
    fn on_generation(&mut self, stats: &GenerationStats);

    /// Whether `stats.diversity` should be filled in before `on_generation`
    fn tracks_diversity(&self) -> bool {
        false
    }
}

impl<F> GenerationObserver for F
where
    F: FnMut(&GenerationStats),
{
    fn on_generation(&mut self, stats: &GenerationStats) {
        self(stats)
    }
}

/// Observer that ignores every generation
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl GenerationObserver for NoopObserver {
    fn on_generation(&mut self, _stats: &GenerationStats) {}
}

/// Observer that logs every `every`-th generation through `tracing`
#[derive(Clone, Copy, Debug)]
pub struct TracingObserver {
    every: usize,
}

impl TracingObserver {
    /// Log every generation
    pub fn new() -> Self {
        Self { every: 1 }
    }

    /// Log one generation out of `every`
    pub fn every(every: usize) -> Self {
        Self {
            every: every.max(1),
        }
    }
}

impl Default for TracingObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl GenerationObserver for TracingObserver {
    fn on_generation(&mut self, stats: &GenerationStats) {
        if stats.generation % self.every == 0 {
            info!(
                generation = stats.generation,
                best = stats.best_fitness,
                mean = stats.mean_fitness,
                diversity = stats.diversity,
                "generation evaluated"
            );
        }
    }

    fn tracks_diversity(&self) -> bool {
        true
    }
}
