//! Core domain: run state, input routing, and the card-selection hand-off.

mod events;
mod resources;
mod state;
mod systems;

#[cfg(test)]
mod tests;

pub use events::{CardChosenEvent, FinishedCurrentRoomEvent, ScaleTimeEvent};
pub use resources::{ActionMap, CardSelection, InputRouting, RunConfig, player_input_active};
pub use state::GameState;

use bevy::prelude::*;

use crate::core::systems::{
    apply_time_scale, confirm_card_choice, handle_card_chosen, open_card_selection,
    track_window_focus,
};

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .init_resource::<RunConfig>()
            .init_resource::<InputRouting>()
            .init_resource::<CardSelection>()
            .add_message::<CardChosenEvent>()
            .add_message::<FinishedCurrentRoomEvent>()
            .add_message::<ScaleTimeEvent>()
            .add_systems(
                Update,
                (
                    open_card_selection,
                    confirm_card_choice,
                    handle_card_chosen,
                )
                    .chain()
                    .run_if(in_state(GameState::Run)),
            )
            .add_systems(Update, (apply_time_scale, track_window_focus));
    }
}
