//! Parent selection strategies.
//!
//! Selection picks one parent from the current population. Different
//! strategies provide different selection pressure.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use super::individual::Individual;
use super::population::Population;
use crate::error::GaError;
use rand::Rng;

/// Selection strategy for choosing parents.
///
/// All strategies assume **maximization** (higher fitness = better).
///
/// # Examples
///
/// ```
/// use u_evolve::ga::Selection;
///
/// // Fitness-proportionate (the default)
/// let sel = Selection::Roulette;
///
/// // Tournament; the size comes from `GaConfig::tournament_ratio`
/// let sel = Selection::Tournament;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Selection {
    /// Fitness-proportionate (roulette wheel) selection.
    ///
    /// Probability of selection is `fitness / aggregate_fitness`. Requires
    /// a positive aggregate fitness already stored on the population and no
    /// member with negative fitness.
    ///
    /// # Complexity
    /// O(n) per selection (linear scan)
    #[default]
    Roulette,

    /// Tournament selection: sample `k` distinct members uniformly at
    /// random, select the fittest of them.
    ///
    /// Higher `k` = stronger selection pressure, faster loss of diversity.
    ///
    /// # Complexity
    /// O(k) per selection
    Tournament,
}

impl Selection {
    /// Select a parent from the population.
    ///
    /// `tournament_size` is only consulted by [`Selection::Tournament`];
    /// it is clamped to `1..=population.len()`.
    pub fn select<'p, R: Rng + ?Sized>(
        &self,
        population: &'p Population,
        tournament_size: usize,
        rng: &mut R,
    ) -> Result<&'p Individual, GaError> {
        if population.is_empty() {
            return Err(GaError::EmptyPopulation);
        }

        match self {
            Selection::Roulette => roulette(population, rng),
            Selection::Tournament => Ok(tournament(population, tournament_size, rng)),
        }
    }
}

/// Number of contestants for a tournament over `population_size` members.
pub(crate) fn tournament_size(population_size: usize, ratio: f64) -> usize {
    ((population_size as f64 * ratio) as usize).clamp(1, population_size.max(1))
}

/// Tournament selection: sample k distinct members, return the fittest.
fn tournament<'p, R: Rng + ?Sized>(
    population: &'p Population,
    k: usize,
    rng: &mut R,
) -> &'p Individual {
    let n = population.len();
    let k = k.clamp(1, n);

    let members = population.members();
    let mut contestants = rand::seq::index::sample(rng, n, k).into_iter();
    // k >= 1 so the sample is never empty
    let mut best = &members[contestants.next().unwrap_or(0)];
    for idx in contestants {
        if members[idx].fitness() > best.fitness() {
            best = &members[idx];
        }
    }
    best
}

/// Roulette wheel selection over raw fitness.
///
/// Spins a threshold in `[0, aggregate)` and walks the members accumulating
/// fitness until the running sum passes it. A negative member would shadow
/// the slices that follow it, so any negative fitness is degenerate too.
fn roulette<'p, R: Rng + ?Sized>(
    population: &'p Population,
    rng: &mut R,
) -> Result<&'p Individual, GaError> {
    let total = match population.aggregate_fitness() {
        Some(total) if total.is_finite() && total > 0.0 => total,
        other => return Err(GaError::degenerate(other)),
    };
    if population.iter().any(|ind| ind.fitness() < 0.0) {
        return Err(GaError::degenerate(Some(total)));
    }

    let threshold = rng.random_range(0.0..total);
    let mut cumulative = 0.0;
    for individual in population.iter() {
        cumulative += individual.fitness();
        if cumulative > threshold {
            return Ok(individual);
        }
    }

    // floating-point fallback
    Ok(&population.members()[population.len() - 1])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn make_population(fitnesses: &[f64]) -> Population {
        let mut pop: Population = fitnesses
            .iter()
            .enumerate()
            .map(|(i, &f)| {
                let mut ind = Individual::from_chromosome(vec![i as i32]);
                ind.set_fitness(f);
                ind
            })
            .collect();
        pop.set_aggregate_fitness(fitnesses.iter().sum());
        pop
    }

    fn select_counts(sel: Selection, pop: &Population, k: usize, n: usize) -> Vec<u32> {
        let mut rng = StdRng::seed_from_u64(42);
        let mut counts = vec![0u32; pop.len()];
        for _ in 0..n {
            let picked = sel.select(pop, k, &mut rng).unwrap();
            counts[picked.gene(0) as usize] += 1;
        }
        counts
    }

    #[test]
    fn test_roulette_proportional() {
        let pop = make_population(&[1.0, 3.0]);
        let counts = select_counts(Selection::Roulette, &pop, 1, 10000);
        // Expect 25% / 75%
        assert!(
            (2200..2800).contains(&counts[0]),
            "expected ~2500 picks of the weak member, got {counts:?}"
        );
    }

    #[test]
    fn test_roulette_single_positive_member() {
        let pop = make_population(&[0.0, 0.0, 0.7, 0.0, 0.0]);
        let counts = select_counts(Selection::Roulette, &pop, 1, 2000);
        assert_eq!(counts, vec![0, 0, 2000, 0, 0]);
    }

    #[test]
    fn test_roulette_zero_aggregate_is_degenerate() {
        let pop = make_population(&[0.0, 0.0]);
        let mut rng = StdRng::seed_from_u64(42);
        let err = Selection::Roulette.select(&pop, 1, &mut rng).unwrap_err();
        assert!(matches!(
            err,
            GaError::DegeneratePopulation {
                aggregate_fitness: Some(0.0)
            }
        ));
    }

    #[test]
    fn test_roulette_negative_aggregate_is_degenerate() {
        let pop = make_population(&[-1.0, 0.5]);
        let mut rng = StdRng::seed_from_u64(42);
        assert!(matches!(
            Selection::Roulette.select(&pop, 1, &mut rng),
            Err(GaError::DegeneratePopulation { .. })
        ));
    }

    #[test]
    fn test_roulette_rejects_negative_member_with_positive_aggregate() {
        let pop = make_population(&[-5.0, 1.0, 10.0]);
        let mut rng = StdRng::seed_from_u64(42);
        let err = Selection::Roulette.select(&pop, 1, &mut rng).unwrap_err();
        assert!(matches!(
            err,
            GaError::DegeneratePopulation {
                aggregate_fitness: Some(total)
            } if total == 6.0
        ));
    }

    #[test]
    fn test_roulette_requires_computed_aggregate() {
        let mut ind = Individual::new(1);
        ind.set_fitness(1.0);
        let pop = Population::new(vec![ind]);
        let mut rng = StdRng::seed_from_u64(42);
        assert!(matches!(
            Selection::Roulette.select(&pop, 1, &mut rng),
            Err(GaError::DegeneratePopulation {
                aggregate_fitness: None
            })
        ));
    }

    #[test]
    fn test_tournament_full_size_picks_best() {
        let pop = make_population(&[0.1, 0.5, 0.9, 0.3]);
        // Sampling without replacement: k = n always contains the best
        let counts = select_counts(Selection::Tournament, &pop, 4, 1000);
        assert_eq!(counts, vec![0, 0, 1000, 0]);
    }

    #[test]
    fn test_tournament_size_1_is_random() {
        let pop = make_population(&[0.1, 0.5, 0.9, 0.3]);
        let counts = select_counts(Selection::Tournament, &pop, 1, 10000);
        for &c in &counts {
            assert!(c > 2000, "expected uniform, got counts: {counts:?}");
        }
    }

    #[test]
    fn test_tournament_pressure_grows_with_size() {
        let pop = make_population(&[0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9, 1.0]);
        let small = select_counts(Selection::Tournament, &pop, 2, 10000);
        let large = select_counts(Selection::Tournament, &pop, 5, 10000);
        assert!(
            large[9] > small[9],
            "larger tournaments should favor the best more: k=2 {} vs k=5 {}",
            small[9],
            large[9]
        );
    }

    #[test]
    fn test_tournament_works_without_aggregate() {
        let mut ind = Individual::new(1);
        ind.set_fitness(-3.0);
        let pop = Population::new(vec![ind]);
        let mut rng = StdRng::seed_from_u64(42);
        let picked = Selection::Tournament.select(&pop, 10, &mut rng).unwrap();
        assert_eq!(picked.fitness(), -3.0);
    }

    #[test]
    fn test_empty_population() {
        let pop = Population::default();
        let mut rng = StdRng::seed_from_u64(42);
        assert!(matches!(
            Selection::Tournament.select(&pop, 3, &mut rng),
            Err(GaError::EmptyPopulation)
        ));
    }

    #[test]
    fn test_tournament_size_from_ratio() {
        assert_eq!(tournament_size(100, 0.1), 10);
        assert_eq!(tournament_size(10, 0.1), 1);
        assert_eq!(tournament_size(5, 0.01), 1);
        assert_eq!(tournament_size(4, 1.0), 4);
    }
}
