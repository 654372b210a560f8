//! Termination criteria
//!
//! This module provides the generation cap and external cancellation
//! criteria for the evolutionary loop.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Evolution state for termination checking
#[derive(Clone, Debug)]
pub struct EvolutionState {
    /// Number of generations evaluated so far
    pub generation: usize,
    /// Wall time since the run started
    pub elapsed: Duration,
}

/// Termination criterion trait
pub trait TerminationCriterion: Send + Sync {
    /// Check if evolution should terminate
    fn should_terminate(&self, state: &EvolutionState) -> bool;

    /// Get a description of why termination occurred
    fn reason(&self) -> &'static str;
}

/// Terminate after a maximum number of generations
#[derive(Clone, Debug)]
pub struct MaxGenerations(pub usize);

impl MaxGenerations {
    /// Create a new max generations criterion
    pub fn new(max: usize) -> Self {
        Self(max)
    }
}

impl TerminationCriterion for MaxGenerations {
    fn should_terminate(&self, state: &EvolutionState) -> bool {
        state.generation >= self.0
    }

    fn reason(&self) -> &'static str {
        "Maximum generations reached"
    }
}

/// Terminate once a wall-clock budget is spent
#[derive(Clone, Debug)]
pub struct Deadline(pub Duration);

impl Deadline {
    /// Create a new deadline criterion
    pub fn new(budget: Duration) -> Self {
        Self(budget)
    }

    /// Deadline of the given number of seconds
    pub fn from_secs(secs: u64) -> Self {
        Self(Duration::from_secs(secs))
    }
}

impl TerminationCriterion for Deadline {
    fn should_terminate(&self, state: &EvolutionState) -> bool {
        state.elapsed >= self.0
    }

    fn reason(&self) -> &'static str {
        "Deadline exceeded"
    }
}

/// Terminate when an external flag is raised
///
/// Clones share the same flag, so one handle can be kept by the caller while
/// another is handed to the algorithm.
#[derive(Clone, Debug, Default)]
pub struct AbortSignal {
    flag: Arc<AtomicBool>,
}

impl AbortSignal {
    /// Create a new, unraised signal
    pub fn new() -> Self {
        Self::default()
    }

    /// Request termination
    pub fn abort(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    /// Check whether termination was requested
    pub fn is_aborted(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }
}

impl TerminationCriterion for AbortSignal {
    fn should_terminate(&self, _state: &EvolutionState) -> bool {
        self.is_aborted()
    }

    fn reason(&self) -> &'static str {
        "Aborted"
    }
}

/// Combine criteria with OR logic (any one triggers termination)
pub struct AnyOf {
    criteria: Vec<Box<dyn TerminationCriterion>>,
}

impl AnyOf {
    /// Create a new AnyOf combinator
    pub fn new(criteria: Vec<Box<dyn TerminationCriterion>>) -> Self {
        Self { criteria }
    }

    /// Add a criterion
    pub fn push<T: TerminationCriterion + 'static>(&mut self, criterion: T) {
        self.criteria.push(Box::new(criterion));
    }

    /// Check if no criteria are registered
    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }

    /// The first criterion that fires, if any
    pub fn triggered(&self, state: &EvolutionState) -> Option<&dyn TerminationCriterion> {
        self.criteria
            .iter()
            .find(|c| c.should_terminate(state))
            .map(|c| c.as_ref())
    }
}

impl Default for AnyOf {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

pub mod prelude {
    pub use super::{
        AbortSignal, AnyOf, Deadline, EvolutionState, MaxGenerations, TerminationCriterion,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(generation: usize, elapsed: Duration) -> EvolutionState {
        EvolutionState {
            generation,
            elapsed,
        }
    }

    #[test]
    fn test_max_generations() {
        let criterion = MaxGenerations::new(3);
        assert!(!criterion.should_terminate(&state(2, Duration::ZERO)));
        assert!(criterion.should_terminate(&state(3, Duration::ZERO)));
        assert_eq!(criterion.reason(), "Maximum generations reached");
    }

    #[test]
    fn test_deadline() {
        let criterion = Deadline::from_secs(5);
        assert!(!criterion.should_terminate(&state(0, Duration::from_secs(4))));
        assert!(criterion.should_terminate(&state(0, Duration::from_secs(5))));
    }

    #[test]
    fn test_abort_signal_shared_between_clones() {
        let signal = AbortSignal::new();
        let handle = signal.clone();
        assert!(!signal.should_terminate(&state(0, Duration::ZERO)));

        handle.abort();
        assert!(signal.is_aborted());
        assert!(signal.should_terminate(&state(0, Duration::ZERO)));
    }

    #[test]
    fn test_any_of_reports_first_trigger() {
        let signal = AbortSignal::new();
        let mut any = AnyOf::default();
        assert!(any.is_empty());
        any.push(Deadline::from_secs(60));
        any.push(signal.clone());

        assert!(any.triggered(&state(0, Duration::from_secs(1))).is_none());

        signal.abort();
        let fired = any.triggered(&state(0, Duration::from_secs(1))).unwrap();
        assert_eq!(fired.reason(), "Aborted");
    }
}
