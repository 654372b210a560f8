//! Evolutionary algorithms
//!
//! This module provides the generational string-search algorithm.

pub mod simple_ga;

pub mod prelude {
    pub use super::simple_ga::*;
}
