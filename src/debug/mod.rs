//! Debug/dev tooling for inspecting generated dungeons.
//!
//! Hotkeys (hold Ctrl):
//! - M: log an ASCII map of the dungeon
//! - J: log a JSON snapshot of every room
//! - K: kill every enemy in the current room
//! - R: replace (despawn) the current room's enemies
//! - D: halve the health of every live enemy
//! - T: toggle slow motion

mod map;
mod state;
mod systems;

#[cfg(test)]
mod tests;

pub use map::{DungeonSnapshot, RoomSnapshot, render_ascii_map, snapshot};
pub use state::{DebugAction, DebugState};

use bevy::prelude::*;

use crate::core::GameState;
use crate::debug::systems::handle_debug_hotkeys;

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(Update, handle_debug_hotkeys.run_if(in_state(GameState::Run)));
    }
}
