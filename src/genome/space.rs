//! Alphabets and search spaces for string genomes
//!
//! This module provides the symbol sets genes are drawn from and the
//! fixed-length search space that random genomes are generated in.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::GenomeError;

/// Upper case letters, lower case letters and digits
pub const ALPHANUMERIC: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Upper case letters and digits
pub const UPPERCASE_DIGITS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// A non-empty set of symbols sampled uniformly
///
/// Serialized as a plain string; deserializing an empty one fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Alphabet {
    symbols: Vec<char>,
}

impl Alphabet {
    /// Create an alphabet from the characters of a string
    ///
    /// Repeated characters are kept and weight the sampling accordingly.
    pub fn new(symbols: &str) -> Result<Self, GenomeError> {
        if symbols.is_empty() {
            return Err(GenomeError::EmptyAlphabet);
        }
        Ok(Self {
            symbols: symbols.chars().collect(),
        })
    }

    /// The 62-symbol alphabet used to generate targets and initial candidates
    pub fn alphanumeric() -> Self {
        Self {
            symbols: ALPHANUMERIC.chars().collect(),
        }
    }

    /// The 36-symbol alphabet mutation draws replacement characters from
    pub fn uppercase_digits() -> Self {
        Self {
            symbols: UPPERCASE_DIGITS.chars().collect(),
        }
    }

    /// Number of symbols
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always false for a constructed alphabet
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// The symbols of this alphabet
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Check if a character belongs to the alphabet
    pub fn contains(&self, c: char) -> bool {
        self.symbols.contains(&c)
    }

    /// Draw a symbol uniformly at random
    pub fn sample<R: Rng>(&self, rng: &mut R) -> char {
        self.symbols[rng.gen_range(0..self.symbols.len())]
    }

    /// Check that every character of `s` is in the alphabet
    pub fn validate(&self, s: &str) -> Result<(), GenomeError> {
        match s.chars().enumerate().find(|(_, c)| !self.contains(*c)) {
            Some((position, character)) => Err(GenomeError::InvalidCharacter {
                character,
                position,
            }),
            None => Ok(()),
        }
    }
}

impl TryFrom<String> for Alphabet {
    type Error = GenomeError;

    fn try_from(symbols: String) -> Result<Self, Self::Error> {
        Self::new(&symbols)
    }
}

impl From<Alphabet> for String {
    fn from(alphabet: Alphabet) -> Self {
        alphabet.symbols.into_iter().collect()
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::alphanumeric()
    }
}

/// Fixed-length string search space
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchSpace {
    /// Length of every genome in the space
    pub length: usize,
    /// Alphabet random genomes are drawn from
    pub alphabet: Alphabet,
}

impl SearchSpace {
    /// Create a new search space
    pub fn new(length: usize, alphabet: Alphabet) -> Self {
        Self { length, alphabet }
    }

    /// Alphanumeric strings of the given length
    pub fn alphanumeric(length: usize) -> Self {
        Self::new(length, Alphabet::alphanumeric())
    }

    /// Genome length
    pub fn dimension(&self) -> usize {
        self.length
    }
}
