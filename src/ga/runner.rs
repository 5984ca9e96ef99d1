//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the complete evolutionary process:
//! initialization → evaluation → termination check → crossover → mutation
//! → evaluation → repeat.
//!
//! Each phase is also exposed on its own so a caller can drive or inspect a
//! single generation transition.

use super::config::GaConfig;
use super::individual::Individual;
use super::population::Population;
use super::selection;
use super::types::Problem;
use crate::error::{ConfigError, GaError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Where the engine is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// No population yet.
    Uninitialized,
    /// The current population has been evaluated.
    Evaluated,
    /// A generation transition (crossover, mutation) is in progress.
    Evolving,
    /// The run ended.
    Terminated,
}

/// Result of a GA optimization run.
///
/// Contains the fittest individual of the final population, along with
/// statistics about the evolutionary process.
#[derive(Debug, Clone)]
pub struct GaResult {
    /// Rank 0 of the final population.
    pub best: Individual,

    /// Best fitness value (same as `best.fitness()`).
    pub best_fitness: f64,

    /// Number of generation transitions executed.
    pub generations: usize,

    /// Whether the problem's own termination criterion ended the run.
    pub converged: bool,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// Best fitness of the initial population and of each later generation.
    pub fitness_history: Vec<f64>,
}

/// Executes the GA evolutionary loop for one problem.
///
/// # Usage
///
/// ```ignore
/// let problem = MyProblem::new();
/// let config = GaConfig::default().with_seed(42);
/// let result = GaRunner::new(&problem, &config).run()?;
/// println!("Best: {}", result.best);
/// ```
pub struct GaRunner<'a, P: Problem> {
    problem: &'a P,
    config: &'a GaConfig,
    rng: StdRng,
    state: EngineState,
    population: Option<Population>,
}

impl<'a, P: Problem> GaRunner<'a, P> {
    /// Creates an engine. The configuration is validated by [`run`](Self::run).
    pub fn new(problem: &'a P, config: &'a GaConfig) -> Self {
        let seed = config.seed.unwrap_or_else(rand::random);
        Self {
            problem,
            config,
            rng: StdRng::seed_from_u64(seed),
            state: EngineState::Uninitialized,
            population: None,
        }
    }

    pub fn config(&self) -> &GaConfig {
        self.config
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    /// The population the last run ended with.
    pub fn population(&self) -> Option<&Population> {
        self.population.as_ref()
    }

    /// Runs the GA optimization.
    ///
    /// # Errors
    /// - [`GaError::Config`] if the configuration is invalid; nothing runs
    /// - [`GaError::Hook`] if a problem hook fails
    /// - any operator error (degenerate roulette, non-binary bit flip,
    ///   non-permutation ordered crossover)
    pub fn run(&mut self) -> Result<GaResult, GaError> {
        self.run_with_cancel(None)
    }

    /// Runs the GA with an optional cancellation token.
    ///
    /// If `cancel` is `Some` and the flag is set to `true`, the GA will
    /// stop before the next generation transition and return the fittest
    /// individual of the current population.
    #[instrument(
        level = "info",
        skip(self, cancel),
        fields(
            population_size = self.config.population_size,
            chromosome_length = self.problem.chromosome_length()
        )
    )]
    pub fn run_with_cancel(
        &mut self,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<GaResult, GaError> {
        self.config.validate()?;
        if self.problem.chromosome_length() == 0 {
            return Err(ConfigError::ZeroChromosomeLength.into());
        }

        info!(
            selection = ?self.config.selection,
            crossover = %self.config.crossover,
            crossover_rate = self.config.crossover_rate,
            mutation = %self.config.mutation,
            mutation_rate = self.config.mutation_rate,
            elitism_count = self.config.elitism_count,
            "Starting GA run"
        );

        // 1. Initialize and evaluate
        self.state = EngineState::Uninitialized;
        let mut population = self.init_population()?;
        self.eval_population(&mut population)?;
        self.state = EngineState::Evaluated;

        // The cap may be far above the generations a run actually needs
        let mut fitness_history =
            Vec::with_capacity(self.config.max_generations.saturating_add(1).min(1024));
        let initial_best = population.fittest(0);
        fitness_history.push(initial_best.fitness());
        self.problem.on_generation(1, initial_best);

        let mut generation = 1usize;
        let mut converged = false;
        let mut cancelled = false;

        // 2. Evolutionary loop
        loop {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    warn!(generation, "GA run cancelled");
                    cancelled = true;
                    break;
                }
            }

            if self.is_termination_condition_met(&population, generation) {
                converged = self.problem.is_termination_condition_met(&population, generation);
                break;
            }

            self.state = EngineState::Evolving;
            debug!(generation, best = %population.fittest(0), "Best solution");

            let offspring = self.crossover_population(&mut population)?;
            population = self.mutate_population(offspring)?;
            self.eval_population(&mut population)?;
            self.state = EngineState::Evaluated;

            generation += 1;

            let gen_best = population.fittest(0);
            fitness_history.push(gen_best.fitness());
            self.problem.on_generation(generation, gen_best);
        }

        let best = population.fittest(0).clone();
        info!(
            generations = generation - 1,
            converged,
            best = %best,
            "GA run finished"
        );

        self.state = EngineState::Terminated;
        self.population = Some(population);

        Ok(GaResult {
            best_fitness: best.fitness(),
            best,
            generations: generation - 1,
            converged,
            cancelled,
            fitness_history,
        })
    }

    /// Builds a population of `population_size` individuals, each filled by
    /// [`Problem::populate_chromosome`].
    pub fn init_population(&mut self) -> Result<Population, GaError> {
        let length = self.problem.chromosome_length();
        (0..self.config.population_size)
            .map(|_| -> Result<Individual, GaError> {
                let mut individual = Individual::new(length);
                self.problem
                    .populate_chromosome(&mut individual, &mut self.rng)?;
                if individual.len() != length {
                    return Err(GaError::length_mismatch(individual.len(), length));
                }
                Ok(individual)
            })
            .collect()
    }

    /// Scores every member and stores the sum as the aggregate fitness.
    ///
    /// # Errors
    /// [`GaError::Hook`] if the fitness function fails, or
    /// [`GaError::InvalidFitness`] if it returns NaN. Fitness values are only
    /// written once every member has been scored successfully.
    pub fn eval_population(&self, population: &mut Population) -> Result<(), GaError> {
        let fitnesses = self.score_members(population.members())?;

        let mut aggregate = 0.0;
        for (individual, fitness) in population.members_mut().iter_mut().zip(fitnesses) {
            individual.set_fitness(fitness);
            aggregate += fitness;
        }
        population.set_aggregate_fitness(aggregate);
        Ok(())
    }

    fn score_members(&self, members: &[Individual]) -> Result<Vec<f64>, GaError> {
        let problem = self.problem;

        #[cfg(feature = "parallel")]
        let scores: anyhow::Result<Vec<f64>> = if self.config.parallel {
            members
                .par_iter()
                .map(|ind| problem.calc_fitness(ind))
                .collect()
        } else {
            members.iter().map(|ind| problem.calc_fitness(ind)).collect()
        };

        #[cfg(not(feature = "parallel"))]
        let scores: anyhow::Result<Vec<f64>> =
            members.iter().map(|ind| problem.calc_fitness(ind)).collect();

        let scores = scores?;
        if let Some(&value) = scores.iter().find(|f| f.is_nan()) {
            return Err(GaError::InvalidFitness { value });
        }
        Ok(scores)
    }

    /// Whether the run should stop before producing another generation.
    ///
    /// True once `generation` exceeds `max_generations`, or when the
    /// problem's own criterion fires. Generation 1 is the initial population.
    pub fn is_termination_condition_met(&self, population: &Population, generation: usize) -> bool {
        generation > self.config.max_generations
            || self.problem.is_termination_condition_met(population, generation)
    }

    /// Derives the next population by crossover.
    ///
    /// Walks the evaluated input in rank order. Ranks below `elitism_count`
    /// are copied unchanged. Every other rank is, with probability
    /// `crossover_rate`, replaced in the same slot by the offspring of the
    /// rank's individual and a second parent picked by the selection
    /// strategy; otherwise it is copied unchanged.
    ///
    /// The output's slot order is the input's rank order.
    pub fn crossover_population(
        &mut self,
        population: &mut Population,
    ) -> Result<Population, GaError> {
        population.sort();
        let population: &Population = population;

        let tournament_size =
            selection::tournament_size(population.len(), self.config.tournament_ratio);
        let mut next = Vec::with_capacity(population.len());

        for (rank, parent1) in population.iter().enumerate() {
            if rank >= self.config.elitism_count
                && self.rng.random::<f64>() < self.config.crossover_rate
            {
                let parent2 =
                    self.config
                        .selection
                        .select(population, tournament_size, &mut self.rng)?;
                let offspring = self
                    .config
                    .crossover
                    .crossover(parent1, parent2, &mut self.rng)?;
                next.push(offspring);
            } else {
                next.push(parent1.clone());
            }
        }

        Ok(Population::new(next))
    }

    /// Mutates a rank-ordered population (as produced by
    /// [`crossover_population`](Self::crossover_population)).
    ///
    /// Slot `i` is treated as rank `i`. Slots below `elitism_count` are left
    /// alone; every locus of every other slot mutates with probability
    /// `mutation_rate`.
    pub fn mutate_population(&mut self, population: Population) -> Result<Population, GaError> {
        let mut members = population.into_members();

        for individual in members.iter_mut().skip(self.config.elitism_count) {
            for locus in 0..individual.len() {
                if self.rng.random::<f64>() < self.config.mutation_rate {
                    self.config
                        .mutation
                        .mutate_gene(individual, locus, &mut self.rng)?;
                }
            }
        }

        Ok(Population::new(members))
    }
}

// ============================================================================
// Tests
// ============================================================================
