//! Enemies domain: frozen, rank-sorted catalog of enemy archetypes.

use std::collections::HashSet;
use std::sync::Arc;

use bevy::prelude::*;
use thiserror::Error;

/// A single enemy archetype and what it costs to place in a room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnemyEntry {
    pub id: String,
    pub rank: u32,
}

impl EnemyEntry {
    pub fn new(id: impl Into<String>, rank: u32) -> Self {
        Self {
            id: id.into(),
            rank,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("enemy registry must contain at least one archetype")]
    Empty,
    #[error("enemy archetype '{0}' must have a rank cost greater than zero")]
    ZeroRank(String),
    #[error("enemy archetype '{0}' is registered more than once")]
    DuplicateArchetype(String),
}

/// Ordered catalog of enemy archetypes, sorted ascending by rank cost.
///
/// The ordering is load-bearing: every archetype affordable under a budget
/// sits in a contiguous prefix, so lookups are a single partition point.
/// The registry has no mutators once built, and clones share the same
/// backing slice.
#[derive(Resource, Debug, Clone)]
pub struct EnemyRegistry {
    entries: Arc<[EnemyEntry]>,
}

impl EnemyRegistry {
    /// Builds and freezes the registry. Entries are stably sorted by rank so
    /// archetypes of equal cost keep their authored order.
    pub fn new(mut entries: Vec<EnemyEntry>) -> Result<Self, RegistryError> {
        if entries.is_empty() {
            return Err(RegistryError::Empty);
        }

        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if entry.rank == 0 {
                return Err(RegistryError::ZeroRank(entry.id.clone()));
            }
            if !seen.insert(entry.id.as_str()) {
                return Err(RegistryError::DuplicateArchetype(entry.id.clone()));
            }
        }

        entries.sort_by_key(|entry| entry.rank);

        Ok(Self {
            entries: entries.into(),
        })
    }

    /// Number of distinct archetypes.
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn entry(&self, index: usize) -> Option<&EnemyEntry> {
        self.entries.get(index)
    }

    /// Rank cost of the archetype at a rank-sorted position.
    pub fn rank_cost(&self, index: usize) -> Option<u32> {
        self.entries.get(index).map(|entry| entry.rank)
    }

    /// Largest rank-sorted position whose cost fits in `budget`, or `None` if
    /// even the cheapest archetype is too expensive.
    pub fn max_index_for_rank(&self, budget: u32) -> Option<usize> {
        self.entries
            .partition_point(|entry| entry.rank <= budget)
            .checked_sub(1)
    }

    pub fn iter(&self) -> impl Iterator<Item = &EnemyEntry> {
        self.entries.iter()
    }
}
