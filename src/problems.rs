//! Reference problems.
//!
//! Small, fully worked [`Problem`] implementations. They are used by the
//! demos, benchmarks and tests, and are a starting point for real problems.

use crate::ga::{Gene, Individual, Population, Problem};
use rand::Rng;

// ============================================================================
// OneMax
// ============================================================================

/// Binary "all ones" problem.
///
/// Fitness is the fraction of genes equal to 1, so it lies in `[0, 1]`. The
/// run stops as soon as any individual reaches 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OneMax {
    length: usize,
}

impl OneMax {
    pub fn new(length: usize) -> Self {
        Self { length }
    }
}

impl Problem for OneMax {
    fn chromosome_length(&self) -> usize {
        self.length
    }

    fn populate_chromosome<R: Rng + ?Sized>(
        &self,
        individual: &mut Individual,
        rng: &mut R,
    ) -> anyhow::Result<()> {
        individual.randomize_binary(rng);
        Ok(())
    }

    fn calc_fitness(&self, individual: &Individual) -> anyhow::Result<f64> {
        if individual.is_empty() {
            anyhow::bail!("cannot score an empty chromosome");
        }
        let ones = individual.chromosome().iter().filter(|&&g| g == 1).count();
        Ok(ones as f64 / individual.len() as f64)
    }

    fn is_termination_condition_met(&self, population: &Population, _generation: usize) -> bool {
        population.iter().any(|ind| ind.fitness() >= 1.0)
    }
}

// ============================================================================
// Permutation
// ============================================================================

/// Permutation problem over the genes `1..=n`.
///
/// Every chromosome starts as a uniformly shuffled tour and is scored by the
/// caller's fitness function. Pair it with [`Crossover::Ordered`] and
/// [`Mutation::Swap`] to keep chromosomes valid permutations.
///
/// [`Crossover::Ordered`]: crate::ga::Crossover::Ordered
/// [`Mutation::Swap`]: crate::ga::Mutation::Swap
///
/// ```
/// use u_evolve::problems::Permutation;
///
/// // Reward genes that sit at their natural position
/// let problem = Permutation::new(8, |tour| {
///     tour.iter().enumerate().filter(|&(i, &g)| g == i as i32 + 1).count() as f64
/// })
/// .with_target(8.0);
/// ```
pub struct Permutation<F> {
    length: usize,
    fitness: F,
    target: Option<f64>,
}

impl<F> Permutation<F>
where
    F: Fn(&[Gene]) -> f64 + Send + Sync,
{
    pub fn new(length: usize, fitness: F) -> Self {
        Self {
            length,
            fitness,
            target: None,
        }
    }

    /// Stop once any individual reaches `target` fitness.
    pub fn with_target(mut self, target: f64) -> Self {
        self.target = Some(target);
        self
    }
}

impl<F> Problem for Permutation<F>
where
    F: Fn(&[Gene]) -> f64 + Send + Sync,
{
    fn chromosome_length(&self) -> usize {
        self.length
    }

    fn populate_chromosome<R: Rng + ?Sized>(
        &self,
        individual: &mut Individual,
        rng: &mut R,
    ) -> anyhow::Result<()> {
        let length = Gene::try_from(individual.len())?;
        for (index, gene) in (1..=length).enumerate() {
            individual.set_gene(index, gene);
        }
        individual.shuffle(rng);
        Ok(())
    }

    fn calc_fitness(&self, individual: &Individual) -> anyhow::Result<f64> {
        Ok((self.fitness)(individual.chromosome()))
    }

    fn is_termination_condition_met(&self, population: &Population, _generation: usize) -> bool {
        self.target
            .is_some_and(|target| population.iter().any(|ind| ind.fitness() >= target))
    }
}

impl<F> std::fmt::Debug for Permutation<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Permutation")
            .field("length", &self.length)
            .field("target", &self.target)
            .finish_non_exhaustive()
    }
}
