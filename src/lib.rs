//! Generic evolutionary optimization engine.
//!
//! Evolves a population of fixed-length integer chromosomes toward higher
//! fitness with a classic generational Genetic Algorithm:
//!
//! - **Engine** ([`ga`]): initialization, evaluation, elitist crossover and
//!   mutation, with pluggable selection, crossover and mutation strategies.
//! - **Problems** ([`problems`]): ready-made binary and permutation problems
//!   that double as templates for user-defined ones.
//! - **Errors** ([`error`]): configuration and runtime failures as typed
//!   values; hook failures pass through unchanged.
//!
//! # Example
//!
//! ```
//! use u_evolve::ga::{GaConfig, GaRunner, Selection};
//! use u_evolve::problems::OneMax;
//!
//! let problem = OneMax::new(16);
//! let config = GaConfig::default()
//!     .with_population_size(40)
//!     .with_selection(Selection::Tournament)
//!     .with_seed(7);
//! let result = GaRunner::new(&problem, &config).run()?;
//! assert_eq!(result.best.len(), 16);
//! # Ok::<(), u_evolve::GaError>(())
//! ```

pub mod error;
pub mod ga;
pub mod problems;

pub use error::{ConfigError, GaError};
