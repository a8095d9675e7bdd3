//! Enemies domain: budgeted random composition of a room's enemies.

use rand::Rng;
use thiserror::Error;

use crate::enemies::registry::EnemyRegistry;

/// Source of uniformly distributed indices.
pub trait RandomIndexSource {
    /// Returns an index in `0..=max_inclusive`.
    fn uniform(&mut self, max_inclusive: usize) -> usize;
}

impl<R: Rng + ?Sized> RandomIndexSource for R {
    fn uniform(&mut self, max_inclusive: usize) -> usize {
        self.random_range(0..=max_inclusive)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("rank budget must not be negative, got {0}")]
    NegativeBudget(i32),
}

/// Spawn count per archetype, indexed by rank-sorted registry position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Composition {
    counts: Vec<u32>,
}

impl Composition {
    pub fn empty(archetypes: usize) -> Self {
        Self {
            counts: vec![0; archetypes],
        }
    }

    pub fn count(&self, index: usize) -> u32 {
        self.counts.get(index).copied().unwrap_or(0)
    }

    /// Archetypes with at least one enemy, as `(index, count)`.
    pub fn iter(&self) -> impl Iterator<Item = (usize, u32)> + '_ {
        self.counts
            .iter()
            .copied()
            .enumerate()
            .filter(|(_, count)| *count > 0)
    }

    pub fn total_enemies(&self) -> u32 {
        self.counts.iter().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total_enemies() == 0
    }

    pub fn total_cost(&self, registry: &EnemyRegistry) -> u32 {
        self.iter()
            .map(|(index, count)| registry.rank_cost(index).unwrap_or(0) * count)
            .sum()
    }

    fn add(&mut self, index: usize) {
        self.counts[index] += 1;
    }
}

/// Fills compositions from a frozen registry.
///
/// This is not a packing optimizer: each draw picks uniformly among every
/// archetype still affordable, so cheap archetypes accumulate more picks and
/// leftover budget below the cheapest cost is simply left unspent.
#[derive(Debug, Clone, Copy)]
pub struct CompositionSelector<'a> {
    registry: &'a EnemyRegistry,
}

impl<'a> CompositionSelector<'a> {
    pub fn new(registry: &'a EnemyRegistry) -> Self {
        Self { registry }
    }

    pub fn select<R: RandomIndexSource + ?Sized>(
        &self,
        budget: i32,
        rng: &mut R,
    ) -> Result<Composition, SelectionError> {
        let mut remaining =
            u32::try_from(budget).map_err(|_| SelectionError::NegativeBudget(budget))?;
        let mut composition = Composition::empty(self.registry.count());

        while remaining > 0 {
            let Some(max_index) = self.registry.max_index_for_rank(remaining) else {
                break;
            };

            // Out-of-range picks fall back to the most expensive affordable entry.
            let chosen = rng.uniform(max_index).min(max_index);
            let cost = self.registry.rank_cost(chosen).unwrap_or(remaining);

            composition.add(chosen);
            remaining -= cost;
        }

        Ok(composition)
    }
}
