//! Enemies domain: archetype registry, room compositions, and live enemies.

mod catalog;
mod components;
mod events;
mod live;
mod registry;
mod selection;
mod systems;

#[cfg(test)]
mod tests;

pub use catalog::{EnemyArchetype, EnemyCatalog, build_enemy_content};
pub use components::{Enemy, EnemyMotion, Health, RoomEnemy};
pub use events::{DebuffEnemiesEvent, EnemyKilledEvent};
pub use live::LiveEnemySet;
pub use registry::{EnemyEntry, EnemyRegistry, RegistryError};
pub use selection::{Composition, CompositionSelector, RandomIndexSource, SelectionError};

use bevy::prelude::*;

use crate::core::GameState;
use crate::enemies::systems::{apply_debuffs, chase_player, despawn_defeated};

pub struct EnemiesPlugin;

impl Plugin for EnemiesPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LiveEnemySet>()
            .add_message::<EnemyKilledEvent>()
            .add_message::<DebuffEnemiesEvent>()
            .add_systems(
                Update,
                (chase_player, apply_debuffs, despawn_defeated)
                    .chain()
                    .run_if(in_state(GameState::Run)),
            );
    }
}
