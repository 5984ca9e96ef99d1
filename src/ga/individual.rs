//! Candidate solutions.
//!
//! An [`Individual`] is a fixed-length integer chromosome plus a cached
//! fitness. What a gene means (a 0/1 flag, a permutation element, an index)
//! is up to the problem; the engine only moves genes around.

use rand::seq::SliceRandom;
use rand::Rng;
use std::cmp::Ordering;
use std::fmt;

/// One locus value. Semantics are problem-defined.
pub type Gene = i32;

/// A candidate solution in the GA population.
///
/// Higher fitness is better. A freshly built individual carries
/// [`Individual::UNEVALUATED`] until the engine evaluates it, and any change
/// to the chromosome resets it back, so a finite fitness always describes the
/// current genes.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Individual {
    chromosome: Vec<Gene>,
    fitness: f64,
}

impl Individual {
    /// Fitness sentinel for "not yet evaluated".
    ///
    /// Sorts below every real fitness value.
    pub const UNEVALUATED: f64 = f64::NEG_INFINITY;

    /// Creates an individual with `length` zero genes.
    pub fn new(length: usize) -> Self {
        Self::from_chromosome(vec![0; length])
    }

    /// Creates an individual owning the given chromosome.
    pub fn from_chromosome(chromosome: Vec<Gene>) -> Self {
        Self {
            chromosome,
            fitness: Self::UNEVALUATED,
        }
    }

    /// Number of loci. Fixed for the lifetime of the individual.
    pub fn len(&self) -> usize {
        self.chromosome.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chromosome.is_empty()
    }

    /// Borrowed view of the genes.
    pub fn chromosome(&self) -> &[Gene] {
        &self.chromosome
    }

    /// Mutable view of the genes for in-place operators.
    ///
    /// Resets the fitness to unevaluated.
    pub(crate) fn genes_mut(&mut self) -> &mut [Gene] {
        self.fitness = Self::UNEVALUATED;
        &mut self.chromosome
    }

    /// Consumes the individual, returning its genes.
    pub fn into_chromosome(self) -> Vec<Gene> {
        self.chromosome
    }

    /// Returns the gene at `index`.
    ///
    /// # Panics
    /// Panics if `index >= self.len()`.
    pub fn gene(&self, index: usize) -> Gene {
        assert!(
            index < self.chromosome.len(),
            "gene index {index} out of range for chromosome of length {}",
            self.chromosome.len()
        );
        self.chromosome[index]
    }

    /// Returns the gene at `index`, or `None` when out of range.
    pub fn get_gene(&self, index: usize) -> Option<Gene> {
        self.chromosome.get(index).copied()
    }

    /// Overwrites the gene at `index`.
    ///
    /// # Panics
    /// Panics if `index >= self.len()`.
    pub fn set_gene(&mut self, index: usize, value: Gene) {
        assert!(
            index < self.chromosome.len(),
            "gene index {index} out of range for chromosome of length {}",
            self.chromosome.len()
        );
        self.chromosome[index] = value;
        self.fitness = Self::UNEVALUATED;
    }

    /// Exchanges the genes at `a` and `b`.
    ///
    /// # Panics
    /// Panics if either index is out of range.
    pub fn swap_genes(&mut self, a: usize, b: usize) {
        self.chromosome.swap(a, b);
        self.fitness = Self::UNEVALUATED;
    }

    /// Sets every gene to 0 or 1 with equal probability.
    pub fn randomize_binary<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for gene in self.chromosome.iter_mut() {
            *gene = Gene::from(rng.random_bool(0.5));
        }
        self.fitness = Self::UNEVALUATED;
    }

    /// Uniform random permutation of the genes in place (Fisher–Yates).
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.chromosome.shuffle(rng);
        self.fitness = Self::UNEVALUATED;
    }

    /// Linear scan for a gene value.
    pub fn contains_gene(&self, value: Gene) -> bool {
        self.chromosome.contains(&value)
    }

    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    /// Stores the fitness computed by the engine.
    pub fn set_fitness(&mut self, fitness: f64) {
        self.fitness = fitness;
    }

    /// Whether a fitness has been stored since the genes last changed.
    pub fn is_evaluated(&self) -> bool {
        self.fitness != Self::UNEVALUATED
    }

    /// Rank ordering: higher fitness sorts first.
    ///
    /// Total over all `f64` values; equal fitness compares `Equal`.
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        other.fitness.total_cmp(&self.fitness)
    }
}

impl fmt::Display for Individual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for gene in &self.chromosome {
            write!(f, "{gene}")?;
        }
        write!(f, "\t{}", self.fitness)
    }
}
