//! Generational evolutionary search for closed tours (the Traveling
//! Salesman Problem) on small complete weighted graphs.
//!
//! The core is a single parameterized engine: tournament selection,
//! segment-copy order crossover, swap mutation, and a fixed-count
//! generation loop with whole-population replacement. Fitness is the
//! closed-tour length under a validated cost matrix; lower is better.
//!
//! # Modules
//!
//! - [`distance`] — validated cost matrix and closed-tour length
//! - [`tour`] — permutation representation and population initialization
//! - [`config`] — run parameters (policies, tournament size, seed)
//! - [`selection`] — tournament parent selection
//! - [`operators`] — crossover and mutation
//! - [`runner`] — the generation loop
//! - [`report`] — display glue (names, map URL, browser), outside the core
//!
//! # Example
//!
//! ```
//! use evotsp::{DistanceMatrix, EvolveConfig, Evolver};
//!
//! let matrix = DistanceMatrix::new(vec![
//!     vec![0.0, 2.0, 5.0],
//!     vec![2.0, 0.0, 3.0],
//!     vec![5.0, 3.0, 0.0],
//! ])?;
//! let config = EvolveConfig::default()
//!     .with_population_size(30)
//!     .with_generations(100)
//!     .with_seed(42);
//! let result = Evolver::run(&matrix, &config)?;
//! println!("{:?} -> {}", result.best.order(), result.best_length);
//! # Ok::<(), evotsp::EvolveError>(())
//! ```

pub mod config;
pub mod distance;
pub mod error;
pub mod operators;
pub mod report;
pub mod runner;
pub mod selection;
pub mod tour;

pub use config::{EvolveConfig, InitPolicy, MutationPolicy};
pub use distance::DistanceMatrix;
pub use error::EvolveError;
pub use runner::{EvolveResult, Evolver};
pub use tour::Tour;
