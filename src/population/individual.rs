//! Scored candidates
//!
//! An `Individual` pairs a genome with the score it received, if any.

use crate::fitness::traits::FitnessValue;
use crate::genome::traits::EvolutionaryGenome;

/// A candidate in the population
///
/// The score is filled in lazily by `Population::evaluate`; a fresh child
/// or a carried-over survivor starts unscored.
#[derive(Clone, Debug)]
pub struct Individual<G, F = usize>
where
    G: EvolutionaryGenome,
    F: FitnessValue,
{
    /// The candidate genome
    pub genome: G,
    /// Score against the fitness function, `None` until evaluated
    pub fitness: Option<F>,
}

impl<G, F> Individual<G, F>
where
    G: EvolutionaryGenome,
    F: FitnessValue,
{
    /// An unscored candidate
    pub fn new(genome: G) -> Self {
        Self {
            genome,
            fitness: None,
        }
    }

    /// A candidate with a known score
    pub fn with_fitness(genome: G, fitness: F) -> Self {
        Self {
            genome,
            fitness: Some(fitness),
        }
    }

    pub fn is_evaluated(&self) -> bool {
        self.fitness.is_some()
    }

    /// Score as f64, for statistics and selection
    pub fn fitness_f64(&self) -> Option<f64> {
        self.fitness.as_ref().map(FitnessValue::to_f64)
    }

    pub fn set_fitness(&mut self, fitness: F) {
        self.fitness = Some(fitness);
    }

    /// Strictly better score; any score beats none
    pub fn is_better_than(&self, other: &Self) -> bool {
        match (&self.fitness, &other.fitness) {
            (Some(mine), Some(theirs)) => mine.is_better_than(theirs),
            (Some(_), None) => true,
            (None, _) => false,
        }
    }
}
