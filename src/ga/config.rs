//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use super::crossover::Crossover;
use super::mutation::Mutation;
use super::selection::{self, Selection};
use crate::error::ConfigError;

/// Configuration for the Genetic Algorithm.
///
/// Controls population size, operator strategies and rates, elitism,
/// termination and parallelism.
///
/// Builders store values as given; out-of-range values are reported by
/// [`validate`](Self::validate), which [`GaRunner::run`](super::GaRunner::run)
/// calls before doing any work.
///
/// # Defaults
///
/// ```
/// use u_evolve::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.max_generations, 1000);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_evolve::ga::{Crossover, GaConfig, Mutation, Selection};
///
/// let config = GaConfig::default()
///     .with_population_size(200)
///     .with_selection(Selection::Tournament)
///     .with_crossover(Crossover::Ordered)
///     .with_mutation(Mutation::Swap)
///     .with_elitism_count(4)
///     .with_mutation_rate(0.02);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of individuals per generation.
    pub population_size: usize,

    /// Probability that any single locus mutates in a generation (0.0–1.0).
    ///
    /// Generally small, on the order of 0.1 or less.
    pub mutation_rate: f64,

    /// Probability that a non-elite individual is replaced by an offspring
    /// (0.0–1.0).
    pub crossover_rate: f64,

    /// Number of top-ranked individuals copied unchanged into the next
    /// generation, exempt from both crossover and mutation.
    pub elitism_count: usize,

    /// Hard cap on the number of generations.
    pub max_generations: usize,

    /// Strategy for choosing the second parent.
    pub selection: Selection,

    /// Strategy for recombining two parents.
    pub crossover: Crossover,

    /// Strategy for perturbing a locus.
    pub mutation: Mutation,

    /// Tournament size as a fraction of the population (0.0–1.0].
    ///
    /// Only used by [`Selection::Tournament`]. The size is at least 1.
    pub tournament_ratio: f64,

    /// Whether to evaluate individuals in parallel using rayon.
    ///
    /// Ignored unless the crate is built with the `parallel` feature.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            mutation_rate: 0.01,
            crossover_rate: 0.95,
            elitism_count: 2,
            max_generations: 1000,
            selection: Selection::default(),
            crossover: Crossover::default(),
            mutation: Mutation::default(),
            tournament_ratio: 0.1,
            parallel: false,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the per-locus mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate;
        self
    }

    /// Sets the number of elite individuals.
    pub fn with_elitism_count(mut self, n: usize) -> Self {
        self.elitism_count = n;
        self
    }

    /// Sets the maximum number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the selection strategy.
    pub fn with_selection(mut self, sel: Selection) -> Self {
        self.selection = sel;
        self
    }

    /// Sets the crossover strategy.
    pub fn with_crossover(mut self, crossover: Crossover) -> Self {
        self.crossover = crossover;
        self
    }

    /// Sets the mutation strategy.
    pub fn with_mutation(mut self, mutation: Mutation) -> Self {
        self.mutation = mutation;
        self
    }

    /// Sets the tournament size as a fraction of the population.
    pub fn with_tournament_ratio(mut self, ratio: f64) -> Self {
        self.tournament_ratio = ratio;
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of contestants per tournament draw.
    pub fn tournament_size(&self) -> usize {
        selection::tournament_size(self.population_size, self.tournament_ratio)
    }

    /// Validates the configuration.
    ///
    /// Returns the first invalid parameter found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size < 2 {
            return Err(ConfigError::PopulationTooSmall(self.population_size));
        }
        if self.max_generations == 0 {
            return Err(ConfigError::ZeroGenerations);
        }
        check_rate("mutation_rate", self.mutation_rate)?;
        check_rate("crossover_rate", self.crossover_rate)?;
        if self.elitism_count >= self.population_size {
            return Err(ConfigError::ElitismTooLarge {
                elitism_count: self.elitism_count,
                population_size: self.population_size,
            });
        }
        if !(self.tournament_ratio > 0.0 && self.tournament_ratio <= 1.0) {
            return Err(ConfigError::TournamentRatioOutOfRange(self.tournament_ratio));
        }
        Ok(())
    }
}

fn check_rate(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::RateOutOfRange { name, value })
    }
}
