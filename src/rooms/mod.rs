//! Rooms domain: dungeon graph, room lifecycle, and transition plugin wiring.

mod camera;
mod components;
mod controller;
mod direction;
mod events;
mod graph;
mod host;
mod instance;
mod layout;
mod node;
mod scheduler;
mod spawn;
mod systems;


pub use components::{MainCamera, RoomCamera, RoomContent, RoomRoot, RoomTrigger, RoomWall};
pub use controller::{RoomChanged, RoomCleared, RoomTransitionController, TransitionSettings};
pub use direction::Direction;
pub use events::{RoomChangedEvent, RoomClearedEvent};
pub use graph::{GraphError, LookupMiss, RoomGraph};
pub use host::{RoomEntities, RoomEntityIds, RoomHostParams, WorldRoomHost};
pub use instance::{CameraPriorities, RoomHost, RoomInstance, RoomStatus};
pub use layout::{DungeonLayout, LayoutCell, carve_random_walk};
pub use node::{NodeId, RoomNode};
pub use scheduler::{DeferredAction, DeferredScheduler, TimerHandle};

use bevy::prelude::*;

use crate::core::GameState;
use crate::rooms::camera::{blend_main_camera, spawn_main_camera};
use crate::rooms::spawn::generate_dungeon;
use crate::rooms::systems::{detect_boundary_crossings, handle_enemy_killed, tick_room_sleep};

pub struct RoomsPlugin;

impl Plugin for RoomsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<RoomEntities>()
            .add_message::<RoomChangedEvent>()
            .add_message::<RoomClearedEvent>()
            .add_systems(Startup, spawn_main_camera)
            .add_systems(OnEnter(GameState::Run), generate_dungeon)
            .add_systems(
                Update,
                (detect_boundary_crossings, tick_room_sleep, handle_enemy_killed)
                    .chain()
                    .run_if(in_state(GameState::Run)),
            )
            .add_systems(Update, blend_main_camera);
    }
}
