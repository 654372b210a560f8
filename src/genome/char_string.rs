//! Character string genome
//!
//! This module provides a fixed-length character string genome, used both for
//! candidates and for the target they are evolved toward.

use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::GenomeError;
use crate::genome::space::{Alphabet, SearchSpace};
use crate::genome::traits::EvolutionaryGenome;

/// Fixed-length character string genome
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CharString {
    chars: Vec<char>,
}

impl CharString {
    /// Create a new string genome from its characters
    pub fn new(chars: Vec<char>) -> Self {
        Self { chars }
    }

    /// Draw `length` characters uniformly, with replacement, from `alphabet`
    pub fn random<R: Rng>(rng: &mut R, length: usize, alphabet: &Alphabet) -> Self {
        Self {
            chars: (0..length).map(|_| alphabet.sample(rng)).collect(),
        }
    }

    /// Get the length of the string
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Check if the string is empty
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Get the character at `index`
    pub fn get(&self, index: usize) -> Option<char> {
        self.chars.get(index).copied()
    }

    /// The characters of this string
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Number of positions where both strings hold the same character
    ///
    /// # Panics
    /// Panics if the strings differ in length.
    pub fn matching_positions(&self, other: &Self) -> usize {
        assert_eq!(
            self.chars.len(),
            other.chars.len(),
            "Compared strings must have equal length"
        );
        self.chars
            .iter()
            .zip(&other.chars)
            .filter(|(a, b)| a == b)
            .count()
    }
}

impl EvolutionaryGenome for CharString {
    type Allele = char;

    fn generate<R: Rng>(rng: &mut R, space: &SearchSpace) -> Self {
        Self::random(rng, space.length, &space.alphabet)
    }

    fn genes(&self) -> &[char] {
        &self.chars
    }

    fn genes_mut(&mut self) -> &mut [char] {
        &mut self.chars
    }

    fn from_genes(genes: Vec<char>) -> Result<Self, GenomeError> {
        Ok(Self { chars: genes })
    }
}

impl std::ops::Index<usize> for CharString {
    type Output = char;

    fn index(&self, index: usize) -> &Self::Output {
        &self.chars[index]
    }
}

impl From<&str> for CharString {
    fn from(s: &str) -> Self {
        Self {
            chars: s.chars().collect(),
        }
    }
}

impl From<Vec<char>> for CharString {
    fn from(chars: Vec<char>) -> Self {
        Self { chars }
    }
}

impl FromStr for CharString {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl std::fmt::Display for CharString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for c in &self.chars {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_char_string_from_str() {
        let s = CharString::from("AB12");
        assert_eq!(s.len(), 4);
        assert_eq!(s.chars(), &['A', 'B', '1', '2']);
        assert_eq!(s[2], '1');
        assert_eq!(s.get(4), None);
    }

    #[test]
    fn test_char_string_display() {
        let s: CharString = "Hello42".parse().unwrap();
        assert_eq!(s.to_string(), "Hello42");
    }

    #[test]
    fn test_char_string_random_length_and_alphabet() {
        let mut rng = StdRng::seed_from_u64(3);
        let alphabet = Alphabet::alphanumeric();
        let s = CharString::random(&mut rng, 16, &alphabet);
        assert_eq!(s.len(), 16);
        assert!(s.chars().iter().all(|c| alphabet.contains(*c)));
    }

    #[test]
    fn test_char_string_random_is_reproducible() {
        let alphabet = Alphabet::alphanumeric();
        let a = CharString::random(&mut StdRng::seed_from_u64(99), 32, &alphabet);
        let b = CharString::random(&mut StdRng::seed_from_u64(99), 32, &alphabet);
        assert_eq!(a, b);
    }

    #[test]
    fn test_char_string_generate_uses_space() {
        let mut rng = StdRng::seed_from_u64(5);
        let space = SearchSpace::new(8, Alphabet::new("Q").unwrap());
        assert_eq!(CharString::generate(&mut rng, &space).to_string(), "QQQQQQQQ");
    }

    #[test]
    fn test_matching_positions() {
        let a = CharString::from("AB12");
        let b = CharString::from("Ab1x");
        assert_eq!(a.matching_positions(&b), 2);
        assert_eq!(a.matching_positions(&a), 4);
    }

    #[test]
    #[should_panic(expected = "equal length")]
    fn test_matching_positions_length_mismatch() {
        CharString::from("AB").matching_positions(&CharString::from("ABC"));
    }

    #[test]
    fn test_char_string_serialization() {
        let s = CharString::from("xY9");
        let serialized = serde_json::to_string(&s).unwrap();
        let deserialized: CharString = serde_json::from_str(&serialized).unwrap();
        assert_eq!(s, deserialized);
    }
}
