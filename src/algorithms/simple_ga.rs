//! Simple Genetic Algorithm
//!
//! This module implements a generational genetic algorithm with truncation
//! survivors, uniform parent draws, crossover and mutation.
//!
//! Each generation the population is evaluated; if a member scores the
//! fitness optimum the search ends. Otherwise the survivors are copied into
//! the next population, which is then filled with mutated offspring of
//! survivor pairs.

use std::path::Path;
use std::time::Instant;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::diagnostics::observer::{GenerationObserver, NoopObserver};
use crate::diagnostics::{
    EvolutionStats, GenerationStats, SearchResult, SearchStatus, DEFAULT_HISTORY_LIMIT,
};
use crate::error::{ConfigError, EvoResult, EvolutionError, GenomeError};
use crate::fitness::string_match::TargetMatch;
use crate::fitness::traits::{Fitness, FitnessValue};
use crate::genome::char_string::CharString;
use crate::genome::space::SearchSpace;
use crate::genome::traits::EvolutionaryGenome;
use crate::operators::crossover::UniformCrossover;
use crate::operators::mutation::RandomResetMutation;
use crate::operators::selection::{TruncationSelection, UniformSelection};
use crate::operators::traits::{
    CrossoverOperator, MutationOperator, ParentSelection, SelectionOperator,
};
use crate::population::individual::Individual;
use crate::population::population::Population;
use crate::termination::{AnyOf, Deadline, EvolutionState, MaxGenerations, TerminationCriterion};

/// Configuration for the Simple GA
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimpleGAConfig {
    /// Length of the target and of every candidate
    pub target_length: usize,
    /// Population size
    pub population_size: usize,
    /// Fraction of the population kept as survivors, in (0, 1]
    pub selection_threshold: f64,
    /// Per-position mutation probability, in [0, 1]
    pub mutation_probability: f64,
    /// Maximum number of generations evaluated
    pub max_generations: usize,
    /// Random seed (None draws one from entropy)
    pub seed: Option<u64>,
    /// Optional wall-clock budget in seconds
    pub max_duration_secs: Option<u64>,
    /// Number of recent generations kept in the run statistics
    pub history_limit: usize,
}

impl Default for SimpleGAConfig {
    fn default() -> Self {
        Self {
            target_length: 16,
            population_size: 1000,
            selection_threshold: 0.2,
            mutation_probability: 0.9,
            max_generations: 1_000_000,
            seed: None,
            max_duration_secs: None,
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

impl SimpleGAConfig {
    /// Check every field, failing on the first invalid one
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size < 1 {
            return Err(ConfigError::PopulationSize(self.population_size));
        }
        if self.target_length < 1 {
            return Err(ConfigError::TargetLength(self.target_length));
        }
        if !(self.selection_threshold > 0.0 && self.selection_threshold <= 1.0) {
            return Err(ConfigError::SelectionThreshold(self.selection_threshold));
        }
        if !(0.0..=1.0).contains(&self.mutation_probability) {
            return Err(ConfigError::MutationProbability(self.mutation_probability));
        }
        Ok(())
    }

    /// Parse and validate a JSON configuration
    ///
    /// Missing fields take their default values.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON configuration file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}

/// Builder for SimpleGA
pub struct SimpleGABuilder<G, F, S, C, M, Fit>
where
    G: EvolutionaryGenome,
    F: FitnessValue,
{
    config: SimpleGAConfig,
    space: Option<SearchSpace>,
    selection: Option<S>,
    crossover: Option<C>,
    mutation: Option<M>,
    fitness: Option<Fit>,
    initial_population: Option<Vec<G>>,
    termination: AnyOf,
    _phantom: std::marker::PhantomData<F>,
}

impl<G, F> SimpleGABuilder<G, F, (), (), (), ()>
where
    G: EvolutionaryGenome,
    F: FitnessValue,
{
    /// Create a new builder with default configuration
    pub fn new() -> Self {
        Self {
            config: SimpleGAConfig::default(),
            space: None,
            selection: None,
            crossover: None,
            mutation: None,
            fitness: None,
            initial_population: None,
            termination: AnyOf::default(),
            _phantom: std::marker::PhantomData,
        }
    }
}

impl<G, F> Default for SimpleGABuilder<G, F, (), (), (), ()>
where
    G: EvolutionaryGenome,
    F: FitnessValue,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<G, F, S, C, M, Fit> SimpleGABuilder<G, F, S, C, M, Fit>
where
    G: EvolutionaryGenome,
    F: FitnessValue,
{
    /// Replace the whole configuration record
    pub fn config(mut self, config: SimpleGAConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the length of every candidate
    pub fn target_length(mut self, length: usize) -> Self {
        self.config.target_length = length;
        self
    }

    /// Set the population size
    pub fn population_size(mut self, size: usize) -> Self {
        self.config.population_size = size;
        self
    }

    /// Set the generation cap
    pub fn max_generations(mut self, max: usize) -> Self {
        self.config.max_generations = max;
        self
    }

    /// Set the search space random genomes are drawn from
    pub fn space(mut self, space: SearchSpace) -> Self {
        self.space = Some(space);
        self
    }

    /// Start from the given genomes instead of a random population
    pub fn initial_population(mut self, genomes: Vec<G>) -> Self {
        self.initial_population = Some(genomes);
        self
    }

    /// Add an external stop condition (deadline, abort signal, ...)
    pub fn termination<T: TerminationCriterion + 'static>(mut self, criterion: T) -> Self {
        self.termination.push(criterion);
        self
    }

    /// Set the survivor selection operator
    pub fn selection<NewS>(self, selection: NewS) -> SimpleGABuilder<G, F, NewS, C, M, Fit>
    where
        NewS: SelectionOperator<G>,
    {
        SimpleGABuilder {
            config: self.config,
            space: self.space,
            selection: Some(selection),
            crossover: self.crossover,
            mutation: self.mutation,
            fitness: self.fitness,
            initial_population: self.initial_population,
            termination: self.termination,
            _phantom: std::marker::PhantomData,
        }
    }

    /// Set the crossover operator
    pub fn crossover<NewC>(self, crossover: NewC) -> SimpleGABuilder<G, F, S, NewC, M, Fit>
    where
        NewC: CrossoverOperator<G>,
    {
        SimpleGABuilder {
            config: self.config,
            space: self.space,
            selection: self.selection,
            crossover: Some(crossover),
            mutation: self.mutation,
            fitness: self.fitness,
            initial_population: self.initial_population,
            termination: self.termination,
            _phantom: std::marker::PhantomData,
        }
    }

    /// Set the mutation operator
    pub fn mutation<NewM>(self, mutation: NewM) -> SimpleGABuilder<G, F, S, C, NewM, Fit>
    where
        NewM: MutationOperator<G>,
    {
        SimpleGABuilder {
            config: self.config,
            space: self.space,
            selection: self.selection,
            crossover: self.crossover,
            mutation: Some(mutation),
            fitness: self.fitness,
            initial_population: self.initial_population,
            termination: self.termination,
            _phantom: std::marker::PhantomData,
        }
    }

    /// Set the fitness function
    pub fn fitness<NewFit>(self, fitness: NewFit) -> SimpleGABuilder<G, F, S, C, M, NewFit>
    where
        NewFit: Fitness<Genome = G, Value = F>,
    {
        SimpleGABuilder {
            config: self.config,
            space: self.space,
            selection: self.selection,
            crossover: self.crossover,
            mutation: self.mutation,
            fitness: Some(fitness),
            initial_population: self.initial_population,
            termination: self.termination,
            _phantom: std::marker::PhantomData,
        }
    }
}

impl<G, F, S, C, M, Fit> SimpleGABuilder<G, F, S, C, M, Fit>
where
    G: EvolutionaryGenome + Eq + std::hash::Hash,
    F: FitnessValue,
    S: SelectionOperator<G>,
    C: CrossoverOperator<G>,
    M: MutationOperator<G>,
    Fit: Fitness<Genome = G, Value = F>,
{
    /// Build the SimpleGA instance
    pub fn build(self) -> Result<SimpleGA<G, F, S, C, M, Fit>, EvolutionError> {
        self.config.validate()?;

        let space = self.space.ok_or_else(|| {
            EvolutionError::Configuration("Search space must be specified".to_string())
        })?;

        let selection = self.selection.ok_or_else(|| {
            EvolutionError::Configuration("Selection operator must be specified".to_string())
        })?;

        let crossover = self.crossover.ok_or_else(|| {
            EvolutionError::Configuration("Crossover operator must be specified".to_string())
        })?;

        let mutation = self.mutation.ok_or_else(|| {
            EvolutionError::Configuration("Mutation operator must be specified".to_string())
        })?;

        let fitness = self.fitness.ok_or_else(|| {
            EvolutionError::Configuration("Fitness function must be specified".to_string())
        })?;

        if space.length != self.config.target_length {
            return Err(GenomeError::DimensionMismatch {
                expected: self.config.target_length,
                actual: space.length,
            }
            .into());
        }
        if let Some(length) = fitness.genome_length() {
            if length != space.length {
                return Err(GenomeError::DimensionMismatch {
                    expected: space.length,
                    actual: length,
                }
                .into());
            }
        }

        if let Some(genomes) = &self.initial_population {
            if genomes.len() != self.config.population_size {
                return Err(EvolutionError::Configuration(format!(
                    "Initial population has {} genomes, expected {}",
                    genomes.len(),
                    self.config.population_size
                )));
            }
            if let Some(genome) = genomes.iter().find(|g| g.dimension() != space.length) {
                return Err(GenomeError::DimensionMismatch {
                    expected: space.length,
                    actual: genome.dimension(),
                }
                .into());
            }
        }

        Ok(SimpleGA {
            config: self.config,
            space,
            selection,
            parents: UniformSelection,
            crossover,
            mutation,
            fitness,
            initial_population: self.initial_population,
            termination: self.termination,
            _phantom: std::marker::PhantomData,
        })
    }
}

/// Simple Genetic Algorithm
///
/// A generational GA with configurable operators and an exact-match stop.
pub struct SimpleGA<G, F, S, C, M, Fit>
where
    G: EvolutionaryGenome,
    F: FitnessValue,
{
    config: SimpleGAConfig,
    space: SearchSpace,
    selection: S,
    parents: UniformSelection,
    crossover: C,
    mutation: M,
    fitness: Fit,
    initial_population: Option<Vec<G>>,
    termination: AnyOf,
    _phantom: std::marker::PhantomData<F>,
}

/// The string search assembled from a configuration record
pub type StringGA = SimpleGA<
    CharString,
    usize,
    TruncationSelection,
    UniformCrossover,
    RandomResetMutation,
    TargetMatch,
>;

impl StringGA {
    /// Assemble the standard string search for `target` from `config`
    ///
    /// Uses truncation selection at `selection_threshold`, uniform crossover,
    /// and random-reset mutation over `{A-Z, 0-9}` at `mutation_probability`.
    pub fn from_config(config: SimpleGAConfig, target: TargetMatch) -> EvoResult<Self> {
        config.validate()?;

        let mut builder = SimpleGABuilder::new()
            .space(target.search_space())
            .selection(TruncationSelection::new(config.selection_threshold)?)
            .crossover(UniformCrossover::new())
            .mutation(RandomResetMutation::new(config.mutation_probability)?)
            .fitness(target);
        if let Some(secs) = config.max_duration_secs {
            builder = builder.termination(Deadline::from_secs(secs));
        }
        builder.config(config).build()
    }
}

impl<G, F, S, C, M, Fit> SimpleGA<G, F, S, C, M, Fit>
where
    G: EvolutionaryGenome + Eq + std::hash::Hash,
    F: FitnessValue,
    S: SelectionOperator<G>,
    C: CrossoverOperator<G>,
    M: MutationOperator<G>,
    Fit: Fitness<Genome = G, Value = F>,
{
    /// Create a builder for SimpleGA
    pub fn builder() -> SimpleGABuilder<G, F, (), (), (), ()> {
        SimpleGABuilder::new()
    }

    /// The validated configuration
    pub fn config(&self) -> &SimpleGAConfig {
        &self.config
    }

    /// The fitness function
    pub fn fitness(&self) -> &Fit {
        &self.fitness
    }

    /// Run the genetic algorithm
    pub fn run<R: Rng>(&self, rng: &mut R) -> EvoResult<SearchResult<G, F>> {
        self.run_with_observer(rng, &mut NoopObserver)
    }

    /// Run the genetic algorithm, reporting every evaluated generation
    #[instrument(
        level = "debug",
        skip_all,
        fields(
            population_size = self.config.population_size,
            max_generations = self.config.max_generations
        )
    )]
    pub fn run_with_observer<R: Rng, O: GenerationObserver>(
        &self,
        rng: &mut R,
        observer: &mut O,
    ) -> EvoResult<SearchResult<G, F>> {
        let start_time = Instant::now();
        let cap = MaxGenerations::new(self.config.max_generations);

        let mut population = self.initial_population(rng)?;
        let mut stats = EvolutionStats::with_history_limit(self.config.history_limit);
        let mut evaluations = 0;
        let mut generation = 0;
        let mut solution = None;

        let status = loop {
            let state = EvolutionState {
                generation,
                elapsed: start_time.elapsed(),
            };
            if let Some(criterion) = self.termination.triggered(&state) {
                break SearchStatus::Cancelled(criterion.reason().to_string());
            }
            if cap.should_terminate(&state) {
                break SearchStatus::MaxGenerationsReached;
            }

            population.set_generation(generation);
            evaluations += population.evaluate(&self.fitness);

            let mut gen_stats =
                GenerationStats::from_population(&population, generation, evaluations);
            if observer.tracks_diversity() {
                gen_stats = gen_stats.with_diversity(&population);
            }
            debug!(generation, best = gen_stats.best_fitness, "generation evaluated");
            observer.on_generation(&gen_stats);
            stats.record(gen_stats);

            if let Some(found) = population.find_optimal(&self.fitness) {
                solution = Some(found.genome.clone());
                generation += 1;
                break SearchStatus::Found;
            }

            generation += 1;
            if generation < self.config.max_generations {
                population = self.next_generation(&population, rng)?;
            }
        };

        stats.set_termination_reason(&status.to_string());
        stats.set_runtime(start_time.elapsed());
        info!(%status, generations = generation, evaluations, "search finished");

        Ok(SearchResult {
            status,
            solution,
            best: population.best().cloned(),
            generations: generation,
            evaluations,
            stats,
        })
    }

    /// Produce the next population from an evaluated one
    ///
    /// Survivors are copied forward unchanged, then offspring of two
    /// uniformly drawn survivors are crossed over, mutated and appended
    /// until the configured population size is reached. Draws from `rng`
    /// in a fixed order: for each child, both parents, then crossover, then
    /// mutation.
    pub fn next_generation<R: Rng>(
        &self,
        population: &Population<G, F>,
        rng: &mut R,
    ) -> EvoResult<Population<G, F>> {
        let pool = population.as_fitness_pairs();
        let survivors = self.selection.select(&pool);
        if survivors.is_empty() {
            return Err(EvolutionError::EmptyPopulation);
        }

        let size = self.config.population_size;
        let next_generation = population.generation() + 1;
        let mut next = Population::with_capacity(size);

        for survivor in survivors.iter().take(size) {
            next.push(Individual::new(survivor.clone()));
        }

        while next.len() < size {
            let parent1 = self.parents.select_parent(&survivors, rng);
            let parent2 = self.parents.select_parent(&survivors, rng);
            let mut child =
                self.crossover
                    .crossover(&survivors[parent1], &survivors[parent2], rng)?;
            self.mutation.mutate(&mut child, rng);
            next.push(Individual::new(child));
        }

        next.set_generation(next_generation);
        Ok(next)
    }

    fn initial_population<R: Rng>(&self, rng: &mut R) -> EvoResult<Population<G, F>> {
        match &self.initial_population {
            Some(genomes) => Ok(Population::from_genomes(genomes.clone())),
            None => Population::random(self.config.population_size, &self.space, rng),
        }
    }
}
