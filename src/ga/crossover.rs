//! Crossover strategies.

use super::individual::Individual;
use super::operators;
use crate::error::GaError;
use rand::Rng;
use std::fmt;

/// Crossover strategy: combines two parents into one offspring.
///
/// The offspring always has the parents' length and starts unevaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Crossover {
    /// Per-locus coin flip between the parents.
    #[default]
    Uniform,

    /// Prefix from parent1, suffix from parent2, split at one random cut.
    SinglePoint,

    /// Region between two random (unsorted) cuts comes from parent2.
    TwoPoint,

    /// Order crossover (OX); keeps permutation chromosomes valid.
    ///
    /// Both parents must be permutations of the same genes.
    Ordered,
}

impl Crossover {
    /// Produce one offspring from `parent1` and `parent2`.
    ///
    /// # Errors
    /// - [`GaError::LengthMismatch`] if the parents differ in length
    /// - [`GaError::NotAPermutation`] for [`Crossover::Ordered`] on
    ///   parents that are not permutations of each other
    pub fn crossover<R: Rng + ?Sized>(
        &self,
        parent1: &Individual,
        parent2: &Individual,
        rng: &mut R,
    ) -> Result<Individual, GaError> {
        let (p1, p2) = (parent1.chromosome(), parent2.chromosome());
        let genes = match self {
            Crossover::Uniform => operators::uniform_crossover(p1, p2, rng)?,
            Crossover::SinglePoint => operators::single_point_crossover(p1, p2, rng)?,
            Crossover::TwoPoint => operators::two_point_crossover(p1, p2, rng)?,
            Crossover::Ordered => operators::ordered_crossover(p1, p2, rng)?,
        };
        Ok(Individual::from_chromosome(genes))
    }
}

impl fmt::Display for Crossover {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Crossover::Uniform => "uniform",
            Crossover::SinglePoint => "single-point",
            Crossover::TwoPoint => "two-point",
            Crossover::Ordered => "ordered",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn evaluated(genes: Vec<i32>) -> Individual {
        let mut ind = Individual::from_chromosome(genes);
        ind.set_fitness(1.0);
        ind
    }

    #[test]
    fn test_all_strategies_preserve_length() {
        let mut rng = StdRng::seed_from_u64(42);
        let p1 = evaluated(vec![0, 1, 2, 3, 4, 5, 6, 7]);
        let p2 = evaluated(vec![7, 6, 5, 4, 3, 2, 1, 0]);

        for strategy in [
            Crossover::Uniform,
            Crossover::SinglePoint,
            Crossover::TwoPoint,
            Crossover::Ordered,
        ] {
            for _ in 0..50 {
                let child = strategy.crossover(&p1, &p2, &mut rng).unwrap();
                assert_eq!(child.len(), 8, "{strategy} changed the length");
                assert!(!child.is_evaluated());
            }
        }
    }

    #[test]
    fn test_ordered_keeps_permutation() {
        let mut rng = StdRng::seed_from_u64(3);
        let p1 = evaluated(vec![1, 2, 3, 4, 5, 6]);
        let p2 = evaluated(vec![4, 6, 2, 1, 5, 3]);
        for _ in 0..100 {
            let child = Crossover::Ordered.crossover(&p1, &p2, &mut rng).unwrap();
            for gene in 1..=6 {
                assert!(child.contains_gene(gene), "{child} is missing {gene}");
            }
        }
    }

    #[test]
    fn test_identical_parents_reproduce() {
        let mut rng = StdRng::seed_from_u64(42);
        let p = evaluated(vec![3, 1, 2, 0]);
        for strategy in [
            Crossover::Uniform,
            Crossover::SinglePoint,
            Crossover::TwoPoint,
            Crossover::Ordered,
        ] {
            let child = strategy.crossover(&p, &p, &mut rng).unwrap();
            assert_eq!(child.chromosome(), p.chromosome(), "{strategy}");
        }
    }

    #[test]
    fn test_length_mismatch_is_reported() {
        let mut rng = StdRng::seed_from_u64(42);
        let p1 = evaluated(vec![0, 1, 0]);
        let p2 = evaluated(vec![0, 1]);
        assert!(matches!(
            Crossover::TwoPoint.crossover(&p1, &p2, &mut rng),
            Err(GaError::LengthMismatch { left: 3, right: 2 })
        ));
    }

    #[test]
    fn test_default_is_uniform() {
        assert_eq!(Crossover::default(), Crossover::Uniform);
        assert_eq!(Crossover::SinglePoint.to_string(), "single-point");
    }
}
