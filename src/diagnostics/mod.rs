//! Diagnostics and statistics
//!
//! This module provides statistics collection for evolutionary runs and the
//! result type a run produces.

pub mod observer;

use std::collections::VecDeque;
use std::fmt;
use std::hash::Hash;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::fitness::traits::FitnessValue;
use crate::genome::traits::EvolutionaryGenome;
use crate::population::individual::Individual;
use crate::population::population::Population;

/// Statistics for a single generation
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GenerationStats {
    /// Generation number
    pub generation: usize,
    /// Total fitness evaluations so far
    pub evaluations: usize,
    /// Best fitness in this generation
    pub best_fitness: f64,
    /// Worst fitness in this generation
    pub worst_fitness: f64,
    /// Mean fitness
    pub mean_fitness: f64,
    /// Share of distinct genomes, when requested
    pub diversity: Option<f64>,
}

impl GenerationStats {
    /// Compute fitness statistics from an evaluated population
    pub fn from_population<G, F>(
        population: &Population<G, F>,
        generation: usize,
        evaluations: usize,
    ) -> Self
    where
        G: EvolutionaryGenome,
        F: FitnessValue,
    {
        let fitnesses: Vec<f64> = population
            .iter()
            .filter_map(Individual::fitness_f64)
            .collect();

        if fitnesses.is_empty() {
            return Self {
                generation,
                evaluations,
                best_fitness: f64::NEG_INFINITY,
                worst_fitness: f64::INFINITY,
                mean_fitness: 0.0,
                diversity: None,
            };
        }

        let best = fitnesses.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let worst = fitnesses.iter().copied().fold(f64::INFINITY, f64::min);
        let mean = fitnesses.iter().sum::<f64>() / fitnesses.len() as f64;

        Self {
            generation,
            evaluations,
            best_fitness: best,
            worst_fitness: worst,
            mean_fitness: mean,
            diversity: None,
        }
    }

    /// Attach the share of distinct genomes
    ///
    /// Hashes every genome of the population.
    pub fn with_diversity<G, F>(mut self, population: &Population<G, F>) -> Self
    where
        G: EvolutionaryGenome + Eq + Hash,
        F: FitnessValue,
    {
        self.diversity = Some(population.diversity());
        self
    }
}

/// Generations kept in `EvolutionStats` unless configured otherwise
pub const DEFAULT_HISTORY_LIMIT: usize = 1000;

/// Statistics collector for an entire evolution run
///
/// Only the most recent `history_limit` generations are kept. The generation
/// count and the best fitness cover the whole run.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EvolutionStats {
    /// Most recent generations, oldest first
    pub recent: VecDeque<GenerationStats>,
    /// Maximum length of `recent`
    pub history_limit: usize,
    /// Generations recorded over the whole run
    pub generations: usize,
    /// Best fitness over the whole run
    pub best_fitness: Option<f64>,
    /// Total runtime in milliseconds
    pub total_runtime_ms: f64,
    /// Reason for termination
    pub termination_reason: Option<String>,
}

impl Default for EvolutionStats {
    fn default() -> Self {
        Self::with_history_limit(DEFAULT_HISTORY_LIMIT)
    }
}

impl EvolutionStats {
    /// Create a new stats collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a collector that keeps at most `limit` generations
    pub fn with_history_limit(limit: usize) -> Self {
        Self {
            recent: VecDeque::with_capacity(limit.min(DEFAULT_HISTORY_LIMIT)),
            history_limit: limit,
            generations: 0,
            best_fitness: None,
            total_runtime_ms: 0.0,
            termination_reason: None,
        }
    }

    /// Record a generation's statistics
    pub fn record(&mut self, stats: GenerationStats) {
        self.generations += 1;
        self.best_fitness = Some(match self.best_fitness {
            Some(best) => best.max(stats.best_fitness),
            None => stats.best_fitness,
        });

        if self.history_limit == 0 {
            return;
        }
        if self.recent.len() == self.history_limit {
            self.recent.pop_front();
        }
        self.recent.push_back(stats);
    }

    /// Get the number of generations recorded
    pub fn num_generations(&self) -> usize {
        self.generations
    }

    /// Get the best fitness across all generations
    pub fn best_fitness(&self) -> Option<f64> {
        self.best_fitness
    }

    /// The last recorded generation, if retained
    pub fn last(&self) -> Option<&GenerationStats> {
        self.recent.back()
    }

    /// Best fitness of each retained generation
    pub fn best_fitness_history(&self) -> Vec<f64> {
        self.recent.iter().map(|g| g.best_fitness).collect()
    }

    /// Mean fitness of each retained generation
    pub fn mean_fitness_history(&self) -> Vec<f64> {
        self.recent.iter().map(|g| g.mean_fitness).collect()
    }

    /// Set the termination reason
    pub fn set_termination_reason(&mut self, reason: &str) {
        self.termination_reason = Some(reason.to_string());
    }

    /// Set the total runtime
    pub fn set_runtime(&mut self, duration: Duration) {
        self.total_runtime_ms = duration.as_secs_f64() * 1000.0;
    }

    /// Get a summary of the evolution run
    pub fn summary(&self) -> String {
        format!(
            "Evolution Summary:\n\
             - Generations: {}\n\
             - Best fitness: {:.1}\n\
             - Runtime: {:.2}ms\n\
             - Termination: {}",
            self.num_generations(),
            self.best_fitness().unwrap_or(f64::NEG_INFINITY),
            self.total_runtime_ms,
            self.termination_reason.as_deref().unwrap_or("unknown")
        )
    }
}

/// Terminal state of a search
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchStatus {
    /// An exact solution was found
    Found,
    /// The generation cap was reached without a solution
    MaxGenerationsReached,
    /// An external criterion stopped the search
    Cancelled(String),
}

impl fmt::Display for SearchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Found => write!(f, "Solution found"),
            Self::MaxGenerationsReached => write!(f, "Maximum generations reached"),
            Self::Cancelled(reason) => write!(f, "Cancelled: {}", reason),
        }
    }
}

/// Result of a search run
#[derive(Clone, Debug)]
pub struct SearchResult<G, F = usize>
where
    G: EvolutionaryGenome,
    F: FitnessValue,
{
    /// How the search ended
    pub status: SearchStatus,
    /// The exact solution, present only when `status` is `Found`
    pub solution: Option<G>,
    /// Best individual of the last evaluated generation
    pub best: Option<Individual<G, F>>,
    /// Number of generations evaluated
    pub generations: usize,
    /// Total fitness evaluations
    pub evaluations: usize,
    /// Statistics for the run
    pub stats: EvolutionStats,
}

impl<G, F> SearchResult<G, F>
where
    G: EvolutionaryGenome,
    F: FitnessValue,
{
    /// Check if an exact solution was found
    pub fn is_found(&self) -> bool {
        self.status == SearchStatus::Found
    }

    /// Generation index the solution was found in
    pub fn found_at(&self) -> Option<usize> {
        self.solution.as_ref().map(|_| self.generations - 1)
    }
}

pub mod prelude {
    pub use super::observer::*;
    pub use super::{
        EvolutionStats, GenerationStats, SearchResult, SearchStatus, DEFAULT_HISTORY_LIMIT,
    };
}
