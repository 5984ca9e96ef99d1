//! Problem extension points.
//!
//! [`Problem`] is the contract between the generic engine and a concrete
//! problem: how long a chromosome is, how to fill it, and how to score it.
//! [`FnProblem`] builds one from closures.

use super::individual::Individual;
use super::population::Population;
use rand::{Rng, RngCore};

/// Defines a GA optimization problem.
///
/// This is the main trait that users implement to plug their domain-specific
/// logic into the generic engine. It covers:
///
/// 1. **Shape**: The fixed chromosome length
/// 2. **Initialization**: How to fill a fresh chromosome
/// 3. **Evaluation**: How to compute fitness (higher is better)
/// 4. **Termination**: Optional problem-specific success criterion
///
/// Selection, crossover and mutation are chosen through
/// [`GaConfig`](super::GaConfig), not implemented here.
///
/// # Errors
///
/// Hooks return `anyhow::Result`. An error aborts the run and is surfaced
/// unchanged inside [`GaError::Hook`](crate::error::GaError::Hook).
///
/// # Thread Safety
///
/// `Problem` must be `Send + Sync` because the engine may evaluate
/// individuals in parallel using rayon (`parallel` feature).
pub trait Problem: Send + Sync {
    /// Number of genes in every chromosome.
    fn chromosome_length(&self) -> usize;

    /// Fills a zeroed chromosome of [`chromosome_length`](Self::chromosome_length)
    /// genes with an initial candidate.
    fn populate_chromosome<R: Rng + ?Sized>(
        &self,
        individual: &mut Individual,
        rng: &mut R,
    ) -> anyhow::Result<()>;

    /// Scores an individual. Pure function of the chromosome.
    ///
    /// This is typically the most expensive operation. The engine may call
    /// it in parallel across the population.
    fn calc_fitness(&self, individual: &Individual) -> anyhow::Result<f64>;

    /// Problem-specific success criterion, checked once per generation.
    ///
    /// The engine always stops after `max_generations` regardless; this can
    /// only end a run earlier. The default never fires.
    fn is_termination_condition_met(
        &self,
        _population: &Population,
        _generation: usize,
    ) -> bool {
        false
    }

    /// Called after every evaluated generation with the current best.
    ///
    /// Generation 1 is the initial population. Useful for logging or
    /// external progress reporting. The default implementation is a no-op.
    fn on_generation(&self, _generation: usize, _best: &Individual) {}
}

type InitFn = dyn Fn(&mut Individual, &mut dyn RngCore) -> anyhow::Result<()> + Send + Sync;
type FitnessFn = dyn Fn(&Individual) -> anyhow::Result<f64> + Send + Sync;
type TerminationFn = dyn Fn(&Population, usize) -> bool + Send + Sync;
type ObserverFn = dyn Fn(usize, &Individual) + Send + Sync;

/// A [`Problem`] assembled from closures.
///
/// ```
/// use u_evolve::ga::{FnProblem, Individual};
///
/// let problem = FnProblem::new(
///     16,
///     |ind: &mut Individual, rng| {
///         ind.randomize_binary(rng);
///         Ok(())
///     },
///     |ind: &Individual| Ok(ind.chromosome().iter().sum::<i32>() as f64),
/// )
/// .with_termination(|pop, _| pop.iter().any(|ind| ind.fitness() >= 16.0));
/// ```
pub struct FnProblem {
    length: usize,
    init: Box<InitFn>,
    fitness: Box<FitnessFn>,
    termination: Option<Box<TerminationFn>>,
    observer: Option<Box<ObserverFn>>,
}

impl FnProblem {
    /// Creates a problem from the two mandatory hooks.
    pub fn new<I, F>(length: usize, init: I, fitness: F) -> Self
    where
        I: Fn(&mut Individual, &mut dyn RngCore) -> anyhow::Result<()> + Send + Sync + 'static,
        F: Fn(&Individual) -> anyhow::Result<f64> + Send + Sync + 'static,
    {
        Self {
            length,
            init: Box::new(init),
            fitness: Box::new(fitness),
            termination: None,
            observer: None,
        }
    }

    /// Adds a success criterion checked once per generation.
    pub fn with_termination<T>(mut self, termination: T) -> Self
    where
        T: Fn(&Population, usize) -> bool + Send + Sync + 'static,
    {
        self.termination = Some(Box::new(termination));
        self
    }

    /// Adds a per-generation observer.
    pub fn with_observer<O>(mut self, observer: O) -> Self
    where
        O: Fn(usize, &Individual) + Send + Sync + 'static,
    {
        self.observer = Some(Box::new(observer));
        self
    }
}

impl Problem for FnProblem {
    fn chromosome_length(&self) -> usize {
        self.length
    }

    fn populate_chromosome<R: Rng + ?Sized>(
        &self,
        individual: &mut Individual,
        mut rng: &mut R,
    ) -> anyhow::Result<()> {
        (self.init)(individual, &mut rng)
    }

    fn calc_fitness(&self, individual: &Individual) -> anyhow::Result<f64> {
        (self.fitness)(individual)
    }

    fn is_termination_condition_met(&self, population: &Population, generation: usize) -> bool {
        self.termination
            .as_ref()
            .is_some_and(|done| done(population, generation))
    }

    fn on_generation(&self, generation: usize, best: &Individual) {
        if let Some(observer) = &self.observer {
            observer(generation, best);
        }
    }
}

impl std::fmt::Debug for FnProblem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnProblem")
            .field("length", &self.length)
            .field("termination", &self.termination.is_some())
            .field("observer", &self.observer.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn ones() -> FnProblem {
        FnProblem::new(
            4,
            |ind: &mut Individual, rng| {
                ind.randomize_binary(rng);
                Ok(())
            },
            |ind: &Individual| Ok(ind.chromosome().iter().filter(|&&g| g == 1).count() as f64),
        )
    }

    #[test]
    fn test_fn_problem_hooks() {
        let problem = ones();
        let mut rng = StdRng::seed_from_u64(42);
        let mut ind = Individual::new(problem.chromosome_length());
        problem.populate_chromosome(&mut ind, &mut rng).unwrap();

        assert!(ind.chromosome().iter().all(|&g| g == 0 || g == 1));
        let expected = ind.chromosome().iter().sum::<i32>() as f64;
        assert_eq!(problem.calc_fitness(&ind).unwrap(), expected);
    }

    #[test]
    fn test_default_termination_never_fires() {
        let problem = ones();
        assert!(!problem.is_termination_condition_met(&Population::default(), usize::MAX));
    }

    #[test]
    fn test_termination_override() {
        let problem = ones().with_termination(|_, generation| generation >= 3);
        let pop = Population::default();
        assert!(!problem.is_termination_condition_met(&pop, 2));
        assert!(problem.is_termination_condition_met(&pop, 3));
    }

    #[test]
    fn test_observer_is_called() {
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = calls.clone();
        let problem = ones().with_observer(move |_, _| {
            seen.fetch_add(1, Ordering::Relaxed);
        });
        problem.on_generation(0, &Individual::new(4));
        problem.on_generation(1, &Individual::new(4));
        assert_eq!(calls.load(Ordering::Relaxed), 2);
    }

    #[test]
    fn test_hook_errors_pass_through() {
        let problem = FnProblem::new(
            1,
            |_: &mut Individual, _| Ok(()),
            |_: &Individual| Err(anyhow::anyhow!("simulator crashed")),
        );
        let err = problem.calc_fitness(&Individual::new(1)).unwrap_err();
        assert_eq!(err.to_string(), "simulator crashed");
    }
}
