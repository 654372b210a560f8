//! # string-evo
//!
//! A generational genetic algorithm that evolves random strings toward a
//! target string.
//!
//! Candidates are scored by the number of positions that match the target.
//! Each generation keeps the best fraction of the population, then refills
//! it with children bred by uniform crossover and random-reset mutation,
//! until a candidate matches exactly or the generation cap is reached.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use string_evo::prelude::*;
//! use rand::SeedableRng;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(42);
//!
//! let config = SimpleGAConfig {
//!     target_length: 8,
//!     population_size: 200,
//!     ..SimpleGAConfig::default()
//! };
//! let target = TargetMatch::random(&mut rng, config.target_length);
//!
//! let result = StringGA::from_config(config, target)?.run(&mut rng)?;
//! println!("{}", result.status);
//! ```

pub mod algorithms;
pub mod diagnostics;
pub mod error;
pub mod fitness;
pub mod genome;
pub mod operators;
pub mod population;
pub mod termination;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::algorithms::prelude::*;
    pub use crate::diagnostics::prelude::*;
    pub use crate::error::*;
    pub use crate::fitness::prelude::*;
    pub use crate::genome::prelude::*;
    pub use crate::operators::prelude::*;
    pub use crate::population::prelude::*;
    pub use crate::termination::prelude::*;
}
