//! The population container.
//!
//! Rank queries need the members in descending-fitness order. That order is
//! derived, not stored: [`Population::fittest`] sorts on demand and keeps the
//! sorted order until membership changes.

use super::individual::Individual;
use rand::seq::SliceRandom;
use rand::Rng;

/// An ordered collection of individuals plus a cached aggregate fitness.
#[derive(Debug, Clone, Default)]
pub struct Population {
    members: Vec<Individual>,
    aggregate_fitness: Option<f64>,
    sorted: bool,
}

impl Population {
    /// Creates a population owning `members`.
    pub fn new(members: Vec<Individual>) -> Self {
        Self {
            members,
            aggregate_fitness: None,
            sorted: false,
        }
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Returns the member at the given descending-fitness rank (0 = fittest).
    ///
    /// Sorts the members the first time it is called after membership
    /// changed. Ties keep their relative order (stable sort), so repeated
    /// queries against the same members are consistent.
    ///
    /// # Panics
    /// Panics if `rank >= self.len()`.
    pub fn fittest(&mut self, rank: usize) -> &Individual {
        assert!(
            rank < self.members.len(),
            "rank {rank} out of range for population of {}",
            self.members.len()
        );
        self.sort();
        &self.members[rank]
    }

    /// Sorts members into rank order if they are not already.
    pub fn sort(&mut self) {
        if !self.sorted {
            self.members.sort_by(Individual::rank_cmp);
            self.sorted = true;
        }
    }

    /// Whether members are currently stored in rank order.
    pub fn is_sorted(&self) -> bool {
        self.sorted
    }

    /// Returns the cached aggregate fitness, `None` until the engine sets it.
    pub fn aggregate_fitness(&self) -> Option<f64> {
        self.aggregate_fitness
    }

    pub fn set_aggregate_fitness(&mut self, value: f64) {
        self.aggregate_fitness = Some(value);
    }

    /// Returns the member stored in slot `index`.
    ///
    /// # Panics
    /// Panics if `index >= self.len()`.
    pub fn member(&self, index: usize) -> &Individual {
        assert!(
            index < self.members.len(),
            "member index {index} out of range for population of {}",
            self.members.len()
        );
        &self.members[index]
    }

    pub fn get_member(&self, index: usize) -> Option<&Individual> {
        self.members.get(index)
    }

    /// Replaces the member in slot `index`, returning the previous one.
    ///
    /// # Panics
    /// Panics if `index >= self.len()`.
    pub fn set_member(&mut self, index: usize, individual: Individual) -> Individual {
        assert!(
            index < self.members.len(),
            "member index {index} out of range for population of {}",
            self.members.len()
        );
        self.sorted = false;
        std::mem::replace(&mut self.members[index], individual)
    }

    /// Uniform random reordering of the members in place.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.members.shuffle(rng);
        self.sorted = false;
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Individual> {
        self.members.iter()
    }

    /// Mutable access to every member.
    ///
    /// Invalidates the cached rank order.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Individual> {
        self.sorted = false;
        self.members.iter_mut()
    }

    pub fn members(&self) -> &[Individual] {
        &self.members
    }

    pub(crate) fn members_mut(&mut self) -> &mut [Individual] {
        self.sorted = false;
        &mut self.members
    }

    /// Consumes the population, returning members in their current order.
    pub fn into_members(self) -> Vec<Individual> {
        self.members
    }
}

impl FromIterator<Individual> for Population {
    fn from_iter<T: IntoIterator<Item = Individual>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Population {
    type Item = &'a Individual;
    type IntoIter = std::slice::Iter<'a, Individual>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}
