//! Population type
//!
//! This module provides the Population container type.

use std::collections::HashSet;
use std::hash::Hash;

use rand::Rng;

use crate::error::{EvoResult, EvolutionError};
use crate::fitness::traits::{Fitness, FitnessValue};
use crate::genome::space::SearchSpace;
use crate::genome::traits::EvolutionaryGenome;
use crate::population::individual::Individual;

/// A population of individuals
#[derive(Clone, Debug)]
pub struct Population<G, F = usize>
where
    G: EvolutionaryGenome,
    F: FitnessValue,
{
    individuals: Vec<Individual<G, F>>,
    generation: usize,
}

impl<G, F> Population<G, F>
where
    G: EvolutionaryGenome,
    F: FitnessValue,
{
    /// Create an empty population
    pub fn new() -> Self {
        Self {
            individuals: Vec::new(),
            generation: 0,
        }
    }

    /// Create a population with the given capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            individuals: Vec::with_capacity(capacity),
            generation: 0,
        }
    }

    /// Create a population from a vector of individuals
    pub fn from_individuals(individuals: Vec<Individual<G, F>>) -> Self {
        Self {
            individuals,
            generation: 0,
        }
    }

    /// Create an unevaluated population from genomes
    pub fn from_genomes(genomes: Vec<G>) -> Self {
        Self::from_individuals(genomes.into_iter().map(Individual::new).collect())
    }

    /// Create a random population of `size` independent genomes
    ///
    /// Duplicates are allowed. A size of zero is rejected.
    pub fn random<R: Rng>(size: usize, space: &SearchSpace, rng: &mut R) -> EvoResult<Self> {
        if size == 0 {
            return Err(EvolutionError::EmptyPopulation);
        }
        let individuals = (0..size)
            .map(|_| Individual::new(G::generate(rng, space)))
            .collect();
        Ok(Self {
            individuals,
            generation: 0,
        })
    }

    /// Get the current generation
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Set the generation number
    pub fn set_generation(&mut self, generation: usize) {
        self.generation = generation;
    }

    /// Get the population size
    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    /// Check if the population is empty
    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// Get an individual by index
    pub fn get(&self, index: usize) -> Option<&Individual<G, F>> {
        self.individuals.get(index)
    }

    /// Add an individual to the population
    pub fn push(&mut self, individual: Individual<G, F>) {
        self.individuals.push(individual);
    }

    /// Get an iterator over the individuals
    pub fn iter(&self) -> impl Iterator<Item = &Individual<G, F>> {
        self.individuals.iter()
    }

    /// Get the underlying vector of individuals
    pub fn individuals(&self) -> &[Individual<G, F>] {
        &self.individuals
    }

    /// Get the best individual (by fitness)
    ///
    /// Among equal fitness the earliest individual wins.
    pub fn best(&self) -> Option<&Individual<G, F>> {
        self.individuals
            .iter()
            .filter(|i| i.is_evaluated())
            .fold(None, |best: Option<&Individual<G, F>>, candidate| match best {
                Some(current) if !candidate.is_better_than(current) => Some(current),
                _ => Some(candidate),
            })
    }

    /// Check if all individuals have been evaluated
    pub fn all_evaluated(&self) -> bool {
        self.individuals.iter().all(|i| i.is_evaluated())
    }

    /// Get genome-fitness pairs as owned tuples, in population order
    pub fn as_fitness_pairs(&self) -> Vec<(G, f64)> {
        self.individuals
            .iter()
            .filter_map(|i| i.fitness.as_ref().map(|f| (i.genome.clone(), f.to_f64())))
            .collect()
    }

    /// Evaluate all unevaluated individuals with the given fitness function
    ///
    /// Genomes are left untouched. Returns the number of evaluations performed.
    pub fn evaluate<Fit>(&mut self, fitness: &Fit) -> usize
    where
        Fit: Fitness<Genome = G, Value = F>,
    {
        let mut evaluations = 0;
        for individual in &mut self.individuals {
            if !individual.is_evaluated() {
                individual.set_fitness(fitness.evaluate(&individual.genome));
                evaluations += 1;
            }
        }
        evaluations
    }

    /// First evaluated individual whose fitness is the known optimum
    pub fn find_optimal<Fit>(&self, fitness: &Fit) -> Option<&Individual<G, F>>
    where
        Fit: Fitness<Genome = G, Value = F>,
    {
        self.individuals
            .iter()
            .find(|i| i.fitness.as_ref().is_some_and(|f| fitness.is_optimal(f)))
    }

    /// Compute mean fitness
    pub fn mean_fitness(&self) -> Option<f64> {
        let evaluated: Vec<f64> = self
            .individuals
            .iter()
            .filter_map(Individual::fitness_f64)
            .collect();

        if evaluated.is_empty() {
            None
        } else {
            Some(evaluated.iter().sum::<f64>() / evaluated.len() as f64)
        }
    }

    /// Share of distinct genomes in the population, in [0, 1]
    pub fn diversity(&self) -> f64
    where
        G: Eq + Hash,
    {
        if self.individuals.is_empty() {
            return 0.0;
        }
        let distinct: HashSet<&G> = self.individuals.iter().map(|i| &i.genome).collect();
        distinct.len() as f64 / self.individuals.len() as f64
    }
}

impl<G, F> Default for Population<G, F>
where
    G: EvolutionaryGenome,
    F: FitnessValue,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<G, F> std::ops::Index<usize> for Population<G, F>
where
    G: EvolutionaryGenome,
    F: FitnessValue,
{
    type Output = Individual<G, F>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.individuals[index]
    }
}

impl<G, F> IntoIterator for Population<G, F>
where
    G: EvolutionaryGenome,
    F: FitnessValue,
{
    type Item = Individual<G, F>;
    type IntoIter = std::vec::IntoIter<Individual<G, F>>;

    fn into_iter(self) -> Self::IntoIter {
        self.individuals.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fitness::string_match::TargetMatch;
    use crate::genome::char_string::CharString;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn scored(items: &[(&str, usize)]) -> Population<CharString> {
        Population::from_individuals(
            items
                .iter()
                .map(|(s, f)| Individual::with_fitness(CharString::from(*s), *f))
                .collect(),
        )
    }

    #[test]
    fn test_population_random() {
        let mut rng = StdRng::seed_from_u64(42);
        let space = SearchSpace::alphanumeric(16);
        let pop: Population<CharString> = Population::random(1000, &space, &mut rng).unwrap();
        assert_eq!(pop.len(), 1000);
        assert_eq!(pop.generation(), 0);
        assert!(pop.iter().all(|i| i.genome.len() == 16));
        assert!(!pop.all_evaluated());
    }

    #[test]
    fn test_population_random_zero_size() {
        let mut rng = StdRng::seed_from_u64(42);
        let space = SearchSpace::alphanumeric(4);
        let result: EvoResult<Population<CharString>> = Population::random(0, &space, &mut rng);
        assert!(matches!(result, Err(EvolutionError::EmptyPopulation)));
    }

    #[test]
    fn test_population_evaluate() {
        let fitness = TargetMatch::new(CharString::from("AB12"));
        let mut pop = Population::from_genomes(vec![
            CharString::from("AB12"),
            CharString::from("AB00"),
            CharString::from("xxxx"),
        ]);

        assert_eq!(pop.evaluate(&fitness), 3);
        assert!(pop.all_evaluated());
        assert_eq!(pop[0].fitness, Some(4));
        assert_eq!(pop[1].fitness, Some(2));
        assert_eq!(pop[2].fitness, Some(0));

        // Already scored individuals are not evaluated again
        assert_eq!(pop.evaluate(&fitness), 0);
    }

    #[test]
    fn test_population_rescoring_is_stable() {
        let mut rng = StdRng::seed_from_u64(8);
        let fitness = TargetMatch::random(&mut rng, 10);
        let unscored: Population<CharString> =
            Population::random(50, &fitness.search_space(), &mut rng).unwrap();

        let mut first = unscored.clone();
        let mut second = unscored;
        first.evaluate(&fitness);
        second.evaluate(&fitness);

        let a: Vec<_> = first.iter().map(|i| i.fitness).collect();
        let b: Vec<_> = second.iter().map(|i| i.fitness).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_find_optimal() {
        let fitness = TargetMatch::new(CharString::from("AB12"));
        let mut pop = Population::from_genomes(vec![
            CharString::from("xB12"),
            CharString::from("AB12"),
            CharString::from("A012"),
        ]);
        assert!(pop.find_optimal(&fitness).is_none());

        pop.evaluate(&fitness);
        let found = pop.find_optimal(&fitness).unwrap();
        assert_eq!(found.genome.to_string(), "AB12");
    }

    #[test]
    fn test_population_best_prefers_earliest_tie() {
        let pop = scored(&[("aa", 1), ("bb", 2), ("cc", 2), ("dd", 0)]);
        assert_eq!(pop.best().unwrap().genome.to_string(), "bb");
    }

    #[test]
    fn test_population_fitness_pairs_order() {
        let pop = scored(&[("aa", 1), ("bb", 3)]);
        let pairs = pop.as_fitness_pairs();
        assert_eq!(pairs[0], (CharString::from("aa"), 1.0));
        assert_eq!(pairs[1], (CharString::from("bb"), 3.0));
    }

    #[test]
    fn test_population_mean_fitness() {
        let pop = scored(&[("aa", 1), ("bb", 2), ("cc", 6)]);
        assert_relative_eq!(pop.mean_fitness().unwrap(), 3.0);
        assert!(Population::<CharString>::new().mean_fitness().is_none());
    }

    #[test]
    fn test_population_diversity() {
        let pop = scored(&[("aa", 1), ("aa", 1), ("bb", 2), ("cc", 0)]);
        assert_relative_eq!(pop.diversity(), 0.75);
        assert_relative_eq!(Population::<CharString>::new().diversity(), 0.0);
    }
}
