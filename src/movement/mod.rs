//! Movement domain: top-down player locomotion and strike wiring.

mod bootstrap;
mod components;
mod resources;
mod systems;

#[cfg(test)]
mod tests;

pub use components::{GameLayer, MovementState, Player};
pub use resources::{MovementInput, MovementTuning};

use bevy::prelude::*;

use crate::core::{GameState, player_input_active};
use crate::movement::bootstrap::spawn_player;
use crate::movement::systems::{
    apply_movement, player_strike, read_input, update_facing, update_timers,
};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<MovementInput>()
            .add_systems(OnEnter(GameState::Run), spawn_player)
            .add_systems(
                Update,
                (
                    read_input,
                    update_timers,
                    update_facing,
                    apply_movement,
                    player_strike.run_if(player_input_active),
                )
                    .chain()
                    .run_if(in_state(GameState::Run)),
            );
    }
}
