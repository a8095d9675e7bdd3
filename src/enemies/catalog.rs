//! Enemies domain: per-archetype stats and visuals aligned with the registry.

use bevy::prelude::*;

use crate::content::EnemyDef;
use crate::enemies::registry::{EnemyEntry, EnemyRegistry, RegistryError};

#[derive(Debug, Clone)]
pub struct EnemyArchetype {
    pub id: String,
    pub name: String,
    pub health: f32,
    pub move_speed: f32,
    pub color: Color,
}

/// Stats for each archetype, indexed by rank-sorted registry position.
#[derive(Resource, Debug, Clone, Default)]
pub struct EnemyCatalog {
    archetypes: Vec<EnemyArchetype>,
}

impl EnemyCatalog {
    pub fn get(&self, index: usize) -> Option<&EnemyArchetype> {
        self.archetypes.get(index)
    }

    pub fn len(&self) -> usize {
        self.archetypes.len()
    }
}

/// Freezes the authored enemy definitions into a registry and a catalog that
/// share the same ordering.
pub fn build_enemy_content(
    defs: &[EnemyDef],
) -> Result<(EnemyRegistry, EnemyCatalog), RegistryError> {
    let registry = EnemyRegistry::new(
        defs.iter()
            .map(|def| EnemyEntry::new(def.id.clone(), def.rank))
            .collect(),
    )?;

    let archetypes = registry
        .iter()
        .filter_map(|entry| defs.iter().find(|def| def.id == entry.id))
        .map(|def| EnemyArchetype {
            id: def.id.clone(),
            name: def.name.clone(),
            health: def.base_stats.health,
            move_speed: def.base_stats.move_speed,
            color: Color::srgb(def.color.0, def.color.1, def.color.2),
        })
        .collect();

    Ok((registry, EnemyCatalog { archetypes }))
}
