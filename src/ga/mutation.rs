//! Mutation strategies.
//!
//! A strategy only decides *how* a locus mutates. Whether a given locus
//! mutates at all is the engine's call, driven by the mutation rate.

use super::individual::Individual;
use super::operators;
use crate::error::GaError;
use rand::Rng;
use std::fmt;

/// Mutation strategy: perturbs one locus of an individual in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mutation {
    /// Toggle a binary gene. Only valid on 0/1 chromosomes.
    #[default]
    BitFlip,

    /// Exchange the locus with a uniformly random locus (possibly itself).
    ///
    /// Keeps permutation chromosomes valid.
    Swap,
}

impl Mutation {
    /// Mutate the gene at `index` in place.
    ///
    /// Any change resets the individual's fitness to unevaluated.
    ///
    /// # Errors
    /// [`GaError::NonBinaryGene`] for [`Mutation::BitFlip`] on a gene that
    /// is neither 0 nor 1; the individual is left untouched.
    ///
    /// # Panics
    /// Panics if `index >= individual.len()`.
    pub fn mutate_gene<R: Rng + ?Sized>(
        &self,
        individual: &mut Individual,
        index: usize,
        rng: &mut R,
    ) -> Result<(), GaError> {
        match self {
            Mutation::BitFlip => {
                let value = individual.gene(index);
                if value != 0 && value != 1 {
                    return Err(GaError::NonBinaryGene { index, value });
                }
                operators::bit_flip(individual.genes_mut(), index)
            }
            Mutation::Swap => {
                operators::swap_with_random(individual.genes_mut(), index, rng);
                Ok(())
            }
        }
    }
}

impl fmt::Display for Mutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mutation::BitFlip => f.write_str("bit-flip"),
            Mutation::Swap => f.write_str("swap"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_bit_flip_toggles_one_locus() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut ind = Individual::from_chromosome(vec![0, 1, 0, 1]);
        ind.set_fitness(0.5);

        Mutation::BitFlip.mutate_gene(&mut ind, 2, &mut rng).unwrap();
        assert_eq!(ind.chromosome(), &[0, 1, 1, 1]);
        assert!(!ind.is_evaluated());
    }

    #[test]
    fn test_bit_flip_on_permutation_fails() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut ind = Individual::from_chromosome(vec![3, 1, 2]);
        ind.set_fitness(0.5);

        let err = Mutation::BitFlip.mutate_gene(&mut ind, 0, &mut rng).unwrap_err();
        assert!(matches!(err, GaError::NonBinaryGene { index: 0, value: 3 }));
        assert_eq!(ind.chromosome(), &[3, 1, 2]);
        assert!(ind.is_evaluated());
    }

    #[test]
    fn test_swap_keeps_length_and_genes() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut ind = Individual::from_chromosome(vec![1, 2, 3, 4, 5]);
        for i in 0..5 {
            Mutation::Swap.mutate_gene(&mut ind, i, &mut rng).unwrap();
        }
        assert_eq!(ind.len(), 5);
        let mut genes = ind.chromosome().to_vec();
        genes.sort_unstable();
        assert_eq!(genes, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_swap_moves_the_locus_eventually() {
        let mut rng = StdRng::seed_from_u64(9);
        let original = Individual::from_chromosome(vec![1, 2, 3, 4, 5, 6]);
        let moved = (0..50).any(|_| {
            let mut ind = original.clone();
            Mutation::Swap.mutate_gene(&mut ind, 0, &mut rng).unwrap();
            ind.gene(0) != 1
        });
        assert!(moved, "swap should relocate locus 0 at least once");
    }

    #[test]
    #[should_panic]
    fn test_index_out_of_range_panics() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut ind = Individual::new(2);
        let _ = Mutation::Swap.mutate_gene(&mut ind, 2, &mut rng);
    }
}
