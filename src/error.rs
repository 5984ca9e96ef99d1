//! Error types for the GA engine.
//!
//! [`ConfigError`] covers parameter validation and is raised on entry to
//! [`GaRunner::run`](crate::ga::GaRunner::run). [`GaError`] covers everything
//! that can abort a run once it has started.

use crate::ga::Gene;

/// Invalid engine configuration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("population_size must be at least 2, got {0}")]
    PopulationTooSmall(usize),
    #[error("chromosome length must be at least 1")]
    ZeroChromosomeLength,
    #[error("max_generations must be at least 1")]
    ZeroGenerations,
    #[error("{name} must be within [0, 1], got {value}")]
    RateOutOfRange { name: &'static str, value: f64 },
    #[error(
        "elitism_count too high: {elitism_count} elites fill a population of {population_size}"
    )]
    ElitismTooLarge {
        elitism_count: usize,
        population_size: usize,
    },
    #[error("tournament_ratio must be within (0, 1], got {0}")]
    TournamentRatioOutOfRange(f64),
}

/// Errors that abort a GA run.
#[derive(Debug, thiserror::Error)]
pub enum GaError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("degenerate population: roulette selection needs a positive aggregate fitness and no negative members, aggregate is {aggregate_fitness:?}")]
    DegeneratePopulation { aggregate_fitness: Option<f64> },
    #[error("cannot select from an empty population")]
    EmptyPopulation,
    #[error("parents must have equal length: {left} != {right}")]
    LengthMismatch { left: usize, right: usize },
    #[error("ordered crossover requires parents that are permutations of the same genes")]
    NotAPermutation,
    #[error("bit flip requires a binary gene, found {value} at locus {index}")]
    NonBinaryGene { index: usize, value: Gene },
    #[error("fitness function returned {value}")]
    InvalidFitness { value: f64 },
    #[error("problem hook failed: {0}")]
    Hook(#[from] anyhow::Error),
}

impl GaError {
    pub(crate) fn degenerate(aggregate_fitness: Option<f64>) -> Self {
        Self::DegeneratePopulation { aggregate_fitness }
    }

    pub(crate) fn length_mismatch(left: usize, right: usize) -> Self {
        Self::LengthMismatch { left, right }
    }
}
