//! Crossover operators
//!
//! This module provides uniform crossover for fixed-length genomes.

use rand::Rng;

use crate::error::GenomeError;
use crate::genome::traits::EvolutionaryGenome;
use crate::operators::traits::CrossoverOperator;

/// Uniform crossover
///
/// Each gene of the child is copied from either parent with equal
/// probability, independently per position.
#[derive(Clone, Debug, Default)]
pub struct UniformCrossover;

impl UniformCrossover {
    /// Create a new uniform crossover
    pub fn new() -> Self {
        Self
    }
}

impl<G: EvolutionaryGenome> CrossoverOperator<G> for UniformCrossover {
    fn crossover<R: Rng>(
        &self,
        parent1: &G,
        parent2: &G,
        rng: &mut R,
    ) -> Result<G, GenomeError> {
        if parent1.dimension() != parent2.dimension() {
            return Err(GenomeError::DimensionMismatch {
                expected: parent1.dimension(),
                actual: parent2.dimension(),
            });
        }

        let genes = parent1
            .genes()
            .iter()
            .zip(parent2.genes())
            .map(|(a, b)| if rng.gen::<bool>() { a.clone() } else { b.clone() })
            .collect();

        G::from_genes(genes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genome::char_string::CharString;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_uniform_crossover_takes_from_parents() {
        let mut rng = StdRng::seed_from_u64(42);
        let p1 = CharString::from("AAAAAAAAAAAAAAAAAAAA");
        let p2 = CharString::from("bbbbbbbbbbbbbbbbbbbb");

        let child = UniformCrossover::new().crossover(&p1, &p2, &mut rng).unwrap();

        assert_eq!(child.len(), 20);
        assert!(child.chars().iter().all(|&c| c == 'A' || c == 'b'));
        // With 20 independent coin flips both parents contribute
        assert!(child.chars().contains(&'A'));
        assert!(child.chars().contains(&'b'));
    }

    #[test]
    fn test_uniform_crossover_positional() {
        let mut rng = StdRng::seed_from_u64(9);
        let p1 = CharString::from("ABCD");
        let p2 = CharString::from("wxyz");

        for _ in 0..50 {
            let child = UniformCrossover.crossover(&p1, &p2, &mut rng).unwrap();
            for i in 0..4 {
                assert!(child[i] == p1[i] || child[i] == p2[i]);
            }
        }
    }

    #[test]
    fn test_uniform_crossover_same_parent() {
        let mut rng = StdRng::seed_from_u64(1);
        let p = CharString::from("Same1");
        let child = UniformCrossover.crossover(&p, &p, &mut rng).unwrap();
        assert_eq!(child, p);
    }

    #[test]
    fn test_uniform_crossover_dimension_mismatch() {
        let mut rng = StdRng::seed_from_u64(1);
        let result = UniformCrossover.crossover(
            &CharString::from("ABC"),
            &CharString::from("AB"),
            &mut rng,
        );
        assert_eq!(
            result,
            Err(GenomeError::DimensionMismatch {
                expected: 3,
                actual: 2
            })
        );
    }
}
