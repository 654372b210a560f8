//! Operator traits
//!
//! This module defines the core operator traits for genetic algorithms.

use rand::Rng;

use crate::error::GenomeError;
use crate::genome::traits::EvolutionaryGenome;

/// Survivor selection trait
///
/// Chooses which individuals seed the next generation.
pub trait SelectionOperator<G: EvolutionaryGenome> {
    /// Select survivors from (genome, fitness) pairs
    ///
    /// Returns the surviving genomes, best first, without their scores. A
    /// non-empty population always yields at least one survivor.
    fn select(&self, population: &[(G, f64)]) -> Vec<G>;
}

/// Parent selection trait
///
/// Picks a parent from the survivor pool for each offspring.
pub trait ParentSelection<G: EvolutionaryGenome> {
    /// Select a single parent, returning its index in `pool`
    fn select_parent<R: Rng>(&self, pool: &[G], rng: &mut R) -> usize;
}

/// Crossover operator trait
///
/// Combines genetic material from two parents into one child.
pub trait CrossoverOperator<G: EvolutionaryGenome> {
    /// Apply crossover to two parents and produce a single offspring
    fn crossover<R: Rng>(&self, parent1: &G, parent2: &G, rng: &mut R)
        -> Result<G, GenomeError>;
}

/// Mutation operator trait
///
/// Applies random changes to a freshly produced offspring.
pub trait MutationOperator<G: EvolutionaryGenome> {
    /// Apply mutation to a genome in place
    fn mutate<R: Rng>(&self, genome: &mut G, rng: &mut R);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genome::char_string::CharString;

    struct KeepAll;

    impl SelectionOperator<CharString> for KeepAll {
        fn select(&self, population: &[(CharString, f64)]) -> Vec<CharString> {
            population.iter().map(|(g, _)| g.clone()).collect()
        }
    }

    struct FirstParent;

    impl CrossoverOperator<CharString> for FirstParent {
        fn crossover<R: Rng>(
            &self,
            parent1: &CharString,
            _parent2: &CharString,
            _rng: &mut R,
        ) -> Result<CharString, GenomeError> {
            Ok(parent1.clone())
        }
    }

    struct Uppercase;

    impl MutationOperator<CharString> for Uppercase {
        fn mutate<R: Rng>(&self, genome: &mut CharString, _rng: &mut R) {
            for c in genome.genes_mut() {
                *c = c.to_ascii_uppercase();
            }
        }
    }

    #[test]
    fn test_mock_selection() {
        let pool = vec![(CharString::from("a"), 1.0), (CharString::from("b"), 0.0)];
        assert_eq!(KeepAll.select(&pool).len(), 2);
    }

    #[test]
    fn test_mock_crossover_and_mutation() {
        let mut rng = rand::thread_rng();
        let mut child = FirstParent
            .crossover(&CharString::from("abc"), &CharString::from("xyz"), &mut rng)
            .unwrap();
        Uppercase.mutate(&mut child, &mut rng);
        assert_eq!(child.to_string(), "ABC");
    }
}
