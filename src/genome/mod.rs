//! Genome abstractions and implementations
//!
//! This module provides the core `EvolutionaryGenome` trait and the string genome.

pub mod char_string;
pub mod space;
pub mod traits;

pub mod prelude {
    pub use super::char_string::*;
    pub use super::space::*;
    pub use super::traits::*;
}
