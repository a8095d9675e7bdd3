//! Rooms domain: entity components and markers for spawned rooms.

use bevy::prelude::*;

use crate::rooms::node::NodeId;

/// Parent of every entity that makes up one room.
#[derive(Component, Debug, Clone, Copy)]
pub struct RoomRoot {
    pub node: NodeId,
}

/// Sensor volume covering a room's interior. The player touching it is the
/// boundary-crossing signal for `node`.
#[derive(Component, Debug, Clone, Copy)]
pub struct RoomTrigger {
    pub node: NodeId,
}

/// Visual content that is only shown while the room is awake.
#[derive(Component, Debug, Clone, Copy)]
pub struct RoomContent {
    pub node: NodeId,
}

/// Static wall segment around a room.
#[derive(Component, Debug)]
pub struct RoomWall;

/// Framing target for a room. The main camera follows whichever of these has
/// the highest priority.
#[derive(Component, Debug, Clone, Copy)]
pub struct RoomCamera {
    pub node: NodeId,
    pub priority: i32,
}

#[derive(Component, Debug)]
pub struct MainCamera;
