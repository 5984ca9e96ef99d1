//! Genetic Algorithm engine.
//!
//! A generic, domain-agnostic GA over fixed-length integer chromosomes.
//! Users describe their problem by implementing [`Problem`] (or building a
//! [`FnProblem`] from closures): how long a chromosome is, how to fill one,
//! and how to score it. Selection, crossover and mutation are picked from
//! built-in strategies through [`GaConfig`].
//!
//! # Core Types
//!
//! - [`Individual`]: A chromosome of [`Gene`]s with a cached fitness
//! - [`Population`]: An ordered collection of individuals with rank queries
//! - [`Problem`]: Problem definition (shape, initialization, evaluation)
//!
//! # Strategies
//!
//! - [`Selection`]: Roulette wheel or tournament
//! - [`Crossover`]: Uniform, single-point, two-point or ordered (OX)
//! - [`Mutation`]: Bit flip or swap
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters (population size, rates, elitism)
//! - [`GaRunner`]: Executes the evolutionary loop
//! - [`GaResult`]: Final optimization result with statistics
//!
//! # Submodules
//!
//! - [`operators`]: The gene-level crossover and mutation primitives
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Davis (1985), *Applying Adaptive Algorithms to Epistatic Domains* (order crossover)

mod config;
mod crossover;
mod individual;
mod mutation;
pub mod operators;
mod population;
mod runner;
mod selection;
mod types;

pub use config::GaConfig;
pub use crossover::Crossover;
pub use individual::{Gene, Individual};
pub use mutation::Mutation;
pub use population::Population;
pub use runner::{EngineState, GaResult, GaRunner};
pub use selection::Selection;
pub use types::{FnProblem, Problem};
