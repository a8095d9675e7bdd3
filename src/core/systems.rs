//! Core domain: card-selection routing and time scaling.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;
use bevy::window::WindowFocused;

use crate::content::DungeonDefaults;
use crate::core::events::{CardChosenEvent, FinishedCurrentRoomEvent, ScaleTimeEvent};
use crate::core::resources::{ActionMap, CardSelection, InputRouting};
use crate::rooms::RoomClearedEvent;

/// Hands input to the card overlay when a room is cleared.
pub(crate) fn open_card_selection(
    mut cleared_events: MessageReader<RoomClearedEvent>,
    defaults: Option<Res<DungeonDefaults>>,
    mut routing: ResMut<InputRouting>,
    mut selection: ResMut<CardSelection>,
) {
    for event in cleared_events.read() {
        let choose_cards = defaults
            .as_ref()
            .map(|d| d.cards.choose_cards)
            .unwrap_or(true);
        if !choose_cards {
            continue;
        }

        info!("[CARDS] Room {} cleared, offering cards", event.coord);
        selection.open = true;
        routing.set_action_map(ActionMap::Ui);
    }
}

/// Stand-in for the overlay's confirm button.
pub(crate) fn confirm_card_choice(
    keyboard: Res<ButtonInput<KeyCode>>,
    routing: Res<InputRouting>,
    selection: Res<CardSelection>,
    mut chosen_events: MessageWriter<CardChosenEvent>,
) {
    if !selection.open || !routing.ui_actions_enabled() {
        return;
    }

    if keyboard.just_pressed(KeyCode::Enter) || keyboard.just_pressed(KeyCode::KeyE) {
        chosen_events.write(CardChosenEvent);
    }
}

/// Returns input to the player once a card is chosen.
pub(crate) fn handle_card_chosen(
    mut chosen_events: MessageReader<CardChosenEvent>,
    mut routing: ResMut<InputRouting>,
    mut selection: ResMut<CardSelection>,
    mut finished_events: MessageWriter<FinishedCurrentRoomEvent>,
) {
    for _ in chosen_events.read() {
        if !selection.open {
            continue;
        }
        selection.open = false;
        routing.set_action_map(ActionMap::Player);
        finished_events.write(FinishedCurrentRoomEvent);
        info!("[CARDS] Card chosen, returning control to player");
    }
}

pub(crate) fn apply_time_scale(
    mut scale_events: MessageReader<ScaleTimeEvent>,
    mut time: ResMut<Time<Virtual>>,
) {
    for event in scale_events.read() {
        let scale = event.scale.max(0.0);
        time.set_relative_speed(scale);
        info!("[TIME] Game clock scaled to {:.2}", scale);
    }
}

/// Mutes both action maps while the window is unfocused.
pub(crate) fn track_window_focus(
    mut focus_events: MessageReader<WindowFocused>,
    mut routing: ResMut<InputRouting>,
) {
    let Some(event) = focus_events.read().last() else {
        return;
    };
    debug!("[INPUT] Window focused: {}", event.focused);
    routing.set_player_enabled(event.focused);
    routing.set_ui_enabled(event.focused);
}
