//! Chromosome-level genetic operators.
//!
//! Crossover and mutation primitives over `&[Gene]` slices. The strategy
//! enums ([`Crossover`](super::Crossover), [`Mutation`](super::Mutation))
//! draw the random parameters and delegate here; the deterministic
//! variants (`*_with_cuts`, `*_with_segment`) are public so callers can
//! reproduce a specific recombination exactly.
//!
//! # Crossover Operators
//!
//! - [`uniform_crossover`]: per-locus coin flip
//! - [`single_point_crossover`]: prefix from parent1, suffix from parent2
//! - [`two_point_crossover`]: middle region from parent2
//! - [`ordered_crossover`] (OX), Davis (1985): preserves relative order
//!
//! # Mutation Operators
//!
//! - [`bit_flip`]: toggle a binary gene, O(1)
//! - [`swap_with_random`]: exchange a locus with a random partner, O(1)
//!
//! # References
//!
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"
//! - Syswerda (1989), "Uniform Crossover in Genetic Algorithms"

use super::individual::Gene;
use crate::error::GaError;
use rand::Rng;
use std::collections::HashSet;

// ============================================================================
// Crossover operators
// ============================================================================

/// Uniform crossover: each locus comes from parent1 or parent2 with p = 0.5.
///
/// # Complexity
/// O(n)
pub fn uniform_crossover<R: Rng + ?Sized>(
    parent1: &[Gene],
    parent2: &[Gene],
    rng: &mut R,
) -> Result<Vec<Gene>, GaError> {
    check_lengths(parent1, parent2)?;
    Ok(parent1
        .iter()
        .zip(parent2)
        .map(|(&a, &b)| if rng.random_bool(0.5) { a } else { b })
        .collect())
}

/// Single-point crossover with a random cut in `[0, n]`.
///
/// Loci before the cut come from parent1, the rest from parent2.
pub fn single_point_crossover<R: Rng + ?Sized>(
    parent1: &[Gene],
    parent2: &[Gene],
    rng: &mut R,
) -> Result<Vec<Gene>, GaError> {
    check_lengths(parent1, parent2)?;
    let n = parent1.len();
    let cut = rng.random_range(0..=n);
    two_point_with_cuts(parent1, parent2, cut, n)
}

/// Two-point crossover with two independent random cuts in `[0, n]`.
///
/// The cuts are not sorted; see [`two_point_with_cuts`].
pub fn two_point_crossover<R: Rng + ?Sized>(
    parent1: &[Gene],
    parent2: &[Gene],
    rng: &mut R,
) -> Result<Vec<Gene>, GaError> {
    check_lengths(parent1, parent2)?;
    let n = parent1.len();
    let cut1 = rng.random_range(0..=n);
    let cut2 = rng.random_range(0..=n);
    two_point_with_cuts(parent1, parent2, cut1, cut2)
}

/// Two-point crossover with explicit cuts.
///
/// Locus `i` comes from parent1 when `i < cut1`, from parent2 when
/// `cut1 <= i < cut2`, and from parent1 otherwise. When `cut2 <= cut1` no
/// locus qualifies for parent2 and the offspring equals parent1.
pub fn two_point_with_cuts(
    parent1: &[Gene],
    parent2: &[Gene],
    cut1: usize,
    cut2: usize,
) -> Result<Vec<Gene>, GaError> {
    check_lengths(parent1, parent2)?;
    Ok((0..parent1.len())
        .map(|i| {
            if i < cut1 {
                parent1[i]
            } else if i < cut2 {
                parent2[i]
            } else {
                parent1[i]
            }
        })
        .collect())
}

/// Order Crossover (OX) for permutations.
///
/// Preserves the **relative order** of genes from parent2 around a segment
/// copied verbatim from parent1.
///
/// # Algorithm (Davis, 1985)
///
/// 1. Select a random segment `[start, end)` from parent1
/// 2. Copy segment to the offspring at the same positions
/// 3. Walk parent2 starting at `end`, wrapping around, and place every gene
///    not yet in the offspring into the next empty slot (also starting at
///    `end` and wrapping)
///
/// # Errors
/// [`GaError::NotAPermutation`] when the parents are not permutations of the
/// same genes and an offspring slot would be left empty.
pub fn ordered_crossover<R: Rng + ?Sized>(
    parent1: &[Gene],
    parent2: &[Gene],
    rng: &mut R,
) -> Result<Vec<Gene>, GaError> {
    check_lengths(parent1, parent2)?;
    let (start, end) = random_segment(parent1.len(), rng);
    ordered_with_segment(parent1, parent2, start, end)
}

/// Order Crossover with an explicit segment `[start, end)`.
///
/// # Panics
/// Panics if `start > end` or `end > parent1.len()`.
pub fn ordered_with_segment(
    parent1: &[Gene],
    parent2: &[Gene],
    start: usize,
    end: usize,
) -> Result<Vec<Gene>, GaError> {
    check_lengths(parent1, parent2)?;
    let n = parent1.len();
    assert!(
        start <= end && end <= n,
        "invalid segment [{start}, {end}) for length {n}"
    );
    if n == 0 {
        return Ok(Vec::new());
    }

    let mut child: Vec<Option<Gene>> = vec![None; n];
    let mut placed: HashSet<Gene> = HashSet::with_capacity(n);

    // Step 1: Copy segment from parent1
    for i in start..end {
        child[i] = Some(parent1[i]);
        placed.insert(parent1[i]);
    }

    // Step 2: Fill from parent2, starting at segment end, wrapping around
    let mut pos = end % n;
    let mut remaining = n - (end - start);
    for offset in 0..n {
        if remaining == 0 {
            break;
        }
        let gene = parent2[(end + offset) % n];
        if placed.insert(gene) {
            child[pos] = Some(gene);
            pos = (pos + 1) % n;
            remaining -= 1;
        }
    }

    child
        .into_iter()
        .collect::<Option<Vec<Gene>>>()
        .ok_or(GaError::NotAPermutation)
}

// ============================================================================
// Mutation operators
// ============================================================================

/// Toggles the binary gene at `index` (1 ↔ 0).
///
/// # Errors
/// [`GaError::NonBinaryGene`] if the gene is neither 0 nor 1.
pub fn bit_flip(genes: &mut [Gene], index: usize) -> Result<(), GaError> {
    match genes[index] {
        0 => genes[index] = 1,
        1 => genes[index] = 0,
        value => return Err(GaError::NonBinaryGene { index, value }),
    }
    Ok(())
}

/// Swaps the gene at `index` with one at a uniformly random locus.
///
/// The partner may be `index` itself, in which case nothing changes.
pub fn swap_with_random<R: Rng + ?Sized>(genes: &mut [Gene], index: usize, rng: &mut R) {
    let partner = rng.random_range(0..genes.len());
    genes.swap(index, partner);
}

// ============================================================================
// Helpers
// ============================================================================

fn check_lengths(parent1: &[Gene], parent2: &[Gene]) -> Result<(), GaError> {
    if parent1.len() != parent2.len() {
        return Err(GaError::length_mismatch(parent1.len(), parent2.len()));
    }
    Ok(())
}

/// Pick a random segment `[start, end)` within `0..=n` where `start <= end`.
fn random_segment<R: Rng + ?Sized>(n: usize, rng: &mut R) -> (usize, usize) {
    let a = rng.random_range(0..=n);
    let b = rng.random_range(0..=n);
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

// ============================================================================
// Tests
// ============================================================================
