//! Target string matching
//!
//! Scores a candidate by the number of positions at which it agrees with a
//! fixed target string. The target is an exact solution with fitness equal to
//! its length.

use rand::Rng;

use crate::error::GenomeError;
use crate::fitness::traits::Fitness;
use crate::genome::char_string::CharString;
use crate::genome::space::{Alphabet, SearchSpace};

/// Positional match count against a hidden target
#[derive(Clone, Debug)]
pub struct TargetMatch {
    target: CharString,
}

impl TargetMatch {
    /// Match against a known target
    pub fn new(target: CharString) -> Self {
        Self { target }
    }

    /// Match against a random alphanumeric target of the given length
    pub fn random<R: Rng>(rng: &mut R, length: usize) -> Self {
        Self::new(CharString::random(rng, length, &Alphabet::alphanumeric()))
    }

    /// Parse a target, rejecting characters outside `alphabet`
    pub fn parse(target: &str, alphabet: &Alphabet) -> Result<Self, GenomeError> {
        alphabet.validate(target)?;
        Ok(Self::new(CharString::from(target)))
    }

    /// The target string
    pub fn target(&self) -> &CharString {
        &self.target
    }

    /// Target length
    pub fn length(&self) -> usize {
        self.target.len()
    }

    /// Alphanumeric search space with the target's length
    pub fn search_space(&self) -> SearchSpace {
        SearchSpace::alphanumeric(self.target.len())
    }
}

impl Fitness for TargetMatch {
    type Genome = CharString;
    type Value = usize;

    /// # Panics
    /// Panics if the candidate length differs from the target length.
    fn evaluate(&self, genome: &CharString) -> usize {
        genome.matching_positions(&self.target)
    }

    fn genome_length(&self) -> Option<usize> {
        Some(self.target.len())
    }

    fn optimum(&self) -> Option<usize> {
        Some(self.target.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_target_scores_full_length() {
        let fitness = TargetMatch::new(CharString::from("AB12"));
        let score = fitness.evaluate(&CharString::from("AB12"));
        assert_eq!(score, 4);
        assert!(fitness.is_optimal(&score));
    }

    #[test]
    fn test_partial_match() {
        let fitness = TargetMatch::new(CharString::from("AB12"));
        assert_eq!(fitness.evaluate(&CharString::from("AX1Y")), 2);
        assert_eq!(fitness.evaluate(&CharString::from("ab34")), 0);
        assert!(!fitness.is_optimal(&3));
    }

    #[test]
    fn test_order_matters() {
        let fitness = TargetMatch::new(CharString::from("AB12"));
        assert_eq!(fitness.evaluate(&CharString::from("21BA")), 0);
    }

    #[test]
    fn test_random_target() {
        let mut rng = StdRng::seed_from_u64(1);
        let fitness = TargetMatch::random(&mut rng, 16);
        assert_eq!(fitness.length(), 16);
        assert_eq!(fitness.optimum(), Some(16));
        assert_eq!(fitness.genome_length(), Some(16));
        let alphabet = Alphabet::alphanumeric();
        assert!(fitness.target().chars().iter().all(|c| alphabet.contains(*c)));
    }

    #[test]
    fn test_parse_rejects_foreign_characters() {
        let alphabet = Alphabet::alphanumeric();
        assert!(TargetMatch::parse("Hello World", &alphabet).is_err());
        let fitness = TargetMatch::parse("HelloWorld", &alphabet).unwrap();
        assert_eq!(fitness.search_space().length, 10);
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let fitness = TargetMatch::new(CharString::from("zz99QQ"));
        let candidate = CharString::from("zA9xQQ");
        let first = fitness.evaluate(&candidate);
        let second = fitness.evaluate(&candidate);
        assert_eq!(first, second);
    }

    #[test]
    #[should_panic]
    fn test_length_mismatch_panics() {
        let fitness = TargetMatch::new(CharString::from("AB12"));
        fitness.evaluate(&CharString::from("AB1"));
    }
}
