//! Error types for string-evo
//!
//! This module defines all error types used throughout the library.

use thiserror::Error;

/// Error type for genome operations
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GenomeError {
    /// Dimension mismatch
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// An alphabet must contain at least one symbol
    #[error("Alphabet must not be empty")]
    EmptyAlphabet,

    /// Character that is not part of the alphabet
    #[error("Character {character:?} at position {position} is not in the alphabet")]
    InvalidCharacter { character: char, position: usize },
}

/// Error type for configuration validation and loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Population size must be at least 1, got {0}")]
    PopulationSize(usize),

    #[error("Target length must be at least 1, got {0}")]
    TargetLength(usize),

    #[error("Selection threshold must be in (0, 1], got {0}")]
    SelectionThreshold(f64),

    #[error("Mutation probability must be in [0, 1], got {0}")]
    MutationProbability(f64),

    /// Malformed JSON configuration
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// IO error while reading a configuration file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Top-level error type for evolution operations
#[derive(Debug, Error)]
pub enum EvolutionError {
    /// Genome error
    #[error("Genome error: {0}")]
    Genome(#[from] GenomeError),

    /// Invalid configuration record
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// Invalid builder setup
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    /// Empty population
    #[error("Empty population")]
    EmptyPopulation,
}

/// Result type alias for evolution operations
pub type EvoResult<T> = Result<T, EvolutionError>;
