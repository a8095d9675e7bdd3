//! Rooms domain: events for room transitions and clears.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::rooms::node::NodeId;

/// Fired after the player has moved into a different room.
#[derive(Debug, Clone, Copy)]
pub struct RoomChangedEvent {
    pub from: Option<NodeId>,
    pub to: NodeId,
    pub coord: IVec2,
}

impl Message for RoomChangedEvent {}

/// Fired once when the last enemy of a populated room dies.
#[derive(Debug, Clone, Copy)]
pub struct RoomClearedEvent {
    pub room: NodeId,
    pub coord: IVec2,
}

impl Message for RoomClearedEvent {}
