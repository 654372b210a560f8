//! Selection operators
//!
//! Truncation selection picks the survivors of a generation; uniform
//! selection draws parents from them.

use std::cmp::Ordering;

use rand::Rng;

use crate::error::ConfigError;
use crate::genome::traits::EvolutionaryGenome;
use crate::operators::traits::{ParentSelection, SelectionOperator};

/// Truncation selection
///
/// Keeps the top `round(truncation_ratio * N)` individuals, never fewer than
/// one. Individuals with equal fitness keep their population order.
#[derive(Clone, Debug)]
pub struct TruncationSelection {
    /// Fraction of population to keep, in (0, 1]
    pub truncation_ratio: f64,
}

impl TruncationSelection {
    /// Create a new truncation selection
    pub fn new(truncation_ratio: f64) -> Result<Self, ConfigError> {
        if !(truncation_ratio > 0.0 && truncation_ratio <= 1.0) {
            return Err(ConfigError::SelectionThreshold(truncation_ratio));
        }
        Ok(Self { truncation_ratio })
    }

    /// Number of survivors kept from a population of `population_size`
    pub fn survivor_count(&self, population_size: usize) -> usize {
        if population_size == 0 {
            return 0;
        }
        let cutoff = (population_size as f64 * self.truncation_ratio).round() as usize;
        cutoff.clamp(1, population_size)
    }
}

impl Default for TruncationSelection {
    fn default() -> Self {
        Self {
            truncation_ratio: 0.2,
        }
    }
}

impl<G: EvolutionaryGenome> SelectionOperator<G> for TruncationSelection {
    fn select(&self, population: &[(G, f64)]) -> Vec<G> {
        let mut indices: Vec<usize> = (0..population.len()).collect();
        // Stable: ties keep insertion order
        indices.sort_by(|&a, &b| {
            population[b]
                .1
                .partial_cmp(&population[a].1)
                .unwrap_or(Ordering::Equal)
        });

        indices
            .into_iter()
            .take(self.survivor_count(population.len()))
            .map(|i| population[i].0.clone())
            .collect()
    }
}

/// Uniform parent selection
///
/// Every member of the pool is equally likely, with replacement.
#[derive(Clone, Debug, Default)]
pub struct UniformSelection;

impl UniformSelection {
    pub fn new() -> Self {
        Self
    }
}

impl<G: EvolutionaryGenome> ParentSelection<G> for UniformSelection {
    fn select_parent<R: Rng>(&self, pool: &[G], rng: &mut R) -> usize {
        assert!(!pool.is_empty(), "Parent pool cannot be empty");
        rng.gen_range(0..pool.len())
    }
}
