//! Fitness evaluation
//!
//! This module provides the fitness abstraction and target string matching.

pub mod string_match;
pub mod traits;

pub mod prelude {
    pub use super::string_match::*;
    pub use super::traits::*;
}
