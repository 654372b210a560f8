//! Mutation operators
//!
//! This module provides random-reset mutation for character genomes.

use rand::Rng;
use rand_distr::{Bernoulli, Distribution};

use crate::error::ConfigError;
use crate::genome::space::Alphabet;
use crate::genome::traits::EvolutionaryGenome;
use crate::operators::traits::MutationOperator;

/// Random-reset mutation
///
/// Each position is independently replaced, with probability
/// `mutation_probability`, by a symbol drawn uniformly from the mutation
/// alphabet. The default alphabet is upper case letters and digits only,
/// narrower than the alphabet initial candidates are drawn from.
#[derive(Clone, Debug)]
pub struct RandomResetMutation {
    trial: Bernoulli,
    alphabet: Alphabet,
}

impl RandomResetMutation {
    /// Create a new random-reset mutation over `{A-Z, 0-9}`
    pub fn new(mutation_probability: f64) -> Result<Self, ConfigError> {
        Self::with_alphabet(mutation_probability, Alphabet::uppercase_digits())
    }

    /// Create with a custom replacement alphabet
    pub fn with_alphabet(mutation_probability: f64, alphabet: Alphabet) -> Result<Self, ConfigError> {
        let trial = Bernoulli::new(mutation_probability)
            .map_err(|_| ConfigError::MutationProbability(mutation_probability))?;
        Ok(Self {
            trial,
            alphabet,
        })
    }

    /// The alphabet replacement characters are drawn from
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }
}

impl<G> MutationOperator<G> for RandomResetMutation
where
    G: EvolutionaryGenome<Allele = char>,
{
    fn mutate<R: Rng>(&self, genome: &mut G, rng: &mut R) {
        for gene in genome.genes_mut() {
            if self.trial.sample(rng) {
                *gene = self.alphabet.sample(rng);
            }
        }
    }
}
