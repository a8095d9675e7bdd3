//! Core domain: events for run flow, card selection, and time scaling.

use bevy::ecs::message::Message;

/// Fired by the card-selection overlay once the player has picked a card.
#[derive(Debug)]
pub struct CardChosenEvent;

impl Message for CardChosenEvent {}

/// Fired after the reward for a cleared room has been resolved.
#[derive(Debug)]
pub struct FinishedCurrentRoomEvent;

impl Message for FinishedCurrentRoomEvent {}

/// Request to change the speed of the scaled game clock (1.0 = normal).
#[derive(Debug)]
pub struct ScaleTimeEvent {
    pub scale: f32,
}

impl Message for ScaleTimeEvent {}
