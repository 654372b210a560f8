//! Fitness traits
//!
//! This module defines the fitness evaluation traits.

use std::fmt::Debug;

use serde::{de::DeserializeOwned, Serialize};

use crate::genome::traits::EvolutionaryGenome;

/// Trait bound for fitness values
///
/// Fitness values must be comparable and convertible to f64 for
/// statistics. They must also be serializable so results can be reported.
pub trait FitnessValue:
    PartialOrd + Clone + Send + Sync + Debug + Serialize + DeserializeOwned + 'static
{
    /// Convert fitness to f64
    fn to_f64(&self) -> f64;

    /// Check if this fitness is better than another
    fn is_better_than(&self, other: &Self) -> bool;
}

impl FitnessValue for usize {
    fn to_f64(&self) -> f64 {
        *self as f64
    }

    fn is_better_than(&self, other: &Self) -> bool {
        self > other
    }
}

/// Fitness evaluation trait
///
/// Defines how to evaluate the fitness of a genome. Evaluation must be free of
/// side effects: scoring the same genome twice yields the same value.
pub trait Fitness {
    /// The genome type being evaluated
    type Genome: EvolutionaryGenome;

    /// The fitness value type
    type Value: FitnessValue;

    /// Evaluate fitness (higher = better by convention)
    fn evaluate(&self, genome: &Self::Genome) -> Self::Value;

    /// Genome length this function can score, if it only accepts one
    ///
    /// Used to reject a mismatched search space before a run starts.
    fn genome_length(&self) -> Option<usize> {
        None
    }

    /// The best attainable value, if known
    ///
    /// A genome scoring this value is an exact solution and ends the search.
    fn optimum(&self) -> Option<Self::Value> {
        None
    }

    /// Check whether a value is the known optimum
    fn is_optimal(&self, value: &Self::Value) -> bool {
        match self.optimum() {
            Some(optimum) => !optimum.is_better_than(value),
            None => false,
        }
    }
}
