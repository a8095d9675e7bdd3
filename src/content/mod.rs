//! Content domain: RON data files loaded once at startup.

mod data;
mod loader;

#[cfg(test)]
mod tests;

pub use data::{
    CameraDefaults, CardDefaults, DataFile, DungeonDefaults, EnemyDef, EnemyStatsDef, ExitClock,
    LayoutParams, RoomDefaults, TransitionDefaults,
};
pub use loader::{
    ContentLoadError, load_data_file, load_dungeon_defaults, load_enemies, load_single_file,
    parse_ron,
};

use std::path::Path;

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::core::GameState;
use crate::enemies::build_enemy_content;

/// Directory the data files are read from, relative to the working directory.
pub const DATA_DIR: &str = "assets/data";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<DungeonDefaults>()
            .add_systems(Startup, load_content);
    }
}

/// Loads enemy archetypes and dungeon defaults, then starts the run.
///
/// Dungeon defaults fall back to built-in values; enemies have no fallback
/// and a bad enemy list stops the app.
fn load_content(
    mut commands: Commands,
    mut next_state: ResMut<NextState<GameState>>,
    mut app_exit: MessageWriter<AppExit>,
) {
    let base_path = Path::new(DATA_DIR);

    let defs = match load_enemies(base_path) {
        Ok(defs) => defs,
        Err(err) => {
            error!("[CONTENT] {}", err);
            app_exit.write(AppExit::error());
            return;
        }
    };

    let (registry, catalog) = match build_enemy_content(&defs) {
        Ok(content) => content,
        Err(err) => {
            error!("[CONTENT] Invalid enemy archetypes: {}", err);
            app_exit.write(AppExit::error());
            return;
        }
    };

    let defaults = load_dungeon_defaults(base_path).unwrap_or_else(|err| {
        error!("[CONTENT] {}, using built-in dungeon defaults", err);
        DungeonDefaults::default()
    });

    info!(
        "[CONTENT] Loaded {} enemy archetypes, {} rooms per dungeon",
        registry.count(),
        defaults.layout.room_count
    );

    commands.insert_resource(registry);
    commands.insert_resource(catalog);
    commands.insert_resource(defaults);
    next_state.set(GameState::Run);
}
