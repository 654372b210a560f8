use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, Level};

use string_evo::prelude::*;

/// Evolve a random population of strings toward a target string.
#[derive(Parser, Debug)]
#[command(name = "string-evo")]
#[command(about = "Genetic algorithm that evolves strings toward a target")]
#[command(version)]
struct Cli {
    /// JSON configuration file; flags below override its fields.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Length of the random target.
    #[arg(long, conflicts_with = "target")]
    length: Option<usize>,

    /// Number of candidates per generation.
    #[arg(long)]
    population: Option<usize>,

    /// Per-position mutation probability, in [0, 1].
    #[arg(long)]
    mutation_probability: Option<f64>,

    /// Fraction of each generation kept as survivors, in (0, 1].
    #[arg(long)]
    selection_threshold: Option<f64>,

    /// Maximum number of generations to evaluate.
    #[arg(long)]
    max_generations: Option<usize>,

    /// Random seed; drawn from entropy when absent.
    #[arg(long)]
    seed: Option<u64>,

    /// Stop after this many seconds of wall time.
    #[arg(long)]
    max_duration_secs: Option<u64>,

    /// Search for this alphanumeric string instead of a random target.
    #[arg(long)]
    target: Option<String>,

    /// Do not print a line per generation.
    #[arg(long, default_value_t = false)]
    quiet: bool,

    /// Log run details, including per-generation statistics, to stderr.
    #[arg(long, short, default_value_t = false)]
    verbose: bool,
}

impl Cli {
    fn apply(&self, config: &mut SimpleGAConfig) {
        if let Some(length) = self.length {
            config.target_length = length;
        }
        if let Some(population) = self.population {
            config.population_size = population;
        }
        if let Some(p) = self.mutation_probability {
            config.mutation_probability = p;
        }
        if let Some(threshold) = self.selection_threshold {
            config.selection_threshold = threshold;
        }
        if let Some(max) = self.max_generations {
            config.max_generations = max;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if self.max_duration_secs.is_some() {
            config.max_duration_secs = self.max_duration_secs;
        }
    }
}

/// Prints a progress line per generation and, with `--verbose`, logs stats.
struct Progress {
    target_length: usize,
    print: bool,
    log: Option<TracingObserver>,
}

impl Progress {
    fn new(cli: &Cli, target_length: usize) -> Self {
        Self {
            target_length,
            print: !cli.quiet,
            log: cli.verbose.then(TracingObserver::new),
        }
    }

    fn line(&self, stats: &GenerationStats) -> String {
        format!(
            "generation {} best {}/{}",
            stats.generation, stats.best_fitness, self.target_length
        )
    }
}

impl GenerationObserver for Progress {
    fn on_generation(&mut self, stats: &GenerationStats) {
        if self.print {
            println!("{}", self.line(stats));
        }
        if let Some(log) = self.log.as_mut() {
            log.on_generation(stats);
        }
    }

    fn tracks_diversity(&self) -> bool {
        self.log.is_some()
    }
}

fn outcome(result: &SearchResult<CharString>) -> String {
    match (&result.solution, result.found_at()) {
        (Some(solution), Some(generation)) => {
            format!("found: {} at generation {}", solution, generation)
        }
        _ => format!(
            "not found after {} generations ({})",
            result.generations, result.status
        ),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.verbose { Level::INFO } else { Level::WARN })
        .init();

    let mut config = match &cli.config {
        Some(path) => SimpleGAConfig::from_json_file(path)?,
        None => SimpleGAConfig::default(),
    };
    cli.apply(&mut config);

    let fixed_target = cli
        .target
        .as_deref()
        .map(|t| TargetMatch::parse(t, &Alphabet::alphanumeric()))
        .transpose()?;
    if let Some(target) = &fixed_target {
        config.target_length = target.length();
    }
    config.validate()?;

    let seed = config.seed.unwrap_or_else(|| {
        let seed: u64 = rand::random();
        info!(seed, "no seed given, drew one from entropy");
        seed
    });
    let mut rng = StdRng::seed_from_u64(seed);

    let target = match fixed_target {
        Some(target) => target,
        None => TargetMatch::random(&mut rng, config.target_length),
    };

    let mut progress = Progress::new(&cli, target.length());
    let ga = StringGA::from_config(config, target)?;
    let result = ga.run_with_observer(&mut rng, &mut progress)?;

    info!("{}", result.stats.summary());

    println!("seed: {}", seed);
    println!("target: {}", ga.fitness().target());
    println!("{}", outcome(&result));

    Ok(())
}
