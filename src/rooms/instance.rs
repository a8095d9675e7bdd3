//! Rooms domain: live room lifecycle (Dormant -> Active -> Exiting -> Dormant).

use std::time::Duration;

use bevy::prelude::*;

use crate::enemies::Composition;
use crate::rooms::node::NodeId;
use crate::rooms::scheduler::{DeferredAction, DeferredScheduler, TimerHandle};

/// Side effects a room needs from the engine hosting it.
pub trait RoomHost {
    fn set_camera_priority(&mut self, room: NodeId, priority: i32);

    fn set_content_active(&mut self, room: NodeId, active: bool);

    /// Spawns the composition across the spawn points and returns how many
    /// enemies were created.
    fn spawn_enemies(
        &mut self,
        room: NodeId,
        composition: &Composition,
        spawn_points: &[Vec2],
    ) -> u32;

    fn despawn_enemies(&mut self, room: NodeId);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CameraPriorities {
    /// Must exceed every other room's priority so the entered room wins framing.
    pub in_priority: i32,
    pub out_priority: i32,
}

impl Default for CameraPriorities {
    fn default() -> Self {
        Self {
            in_priority: 10,
            out_priority: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoomStatus {
    /// Content hidden, no enemies.
    #[default]
    Dormant,
    /// Content visible, enemies present, camera framing this room.
    Active,
    /// Still visible while a deferred deactivation is pending.
    Exiting,
}

#[derive(Debug, Clone)]
pub struct RoomInstance {
    node: NodeId,
    status: RoomStatus,
    priorities: CameraPriorities,
    spawn_points: Vec<Vec2>,
    content_active: bool,
    enemies_spawned: bool,
    alive_enemies: u32,
    cleared: bool,
    pending_sleep: Option<TimerHandle>,
}

impl RoomInstance {
    pub fn new(node: NodeId, priorities: CameraPriorities, spawn_points: Vec<Vec2>) -> Self {
        Self {
            node,
            status: RoomStatus::Dormant,
            priorities,
            spawn_points,
            content_active: false,
            enemies_spawned: false,
            alive_enemies: 0,
            cleared: false,
            pending_sleep: None,
        }
    }

    pub fn node(&self) -> NodeId {
        self.node
    }

    pub fn status(&self) -> RoomStatus {
        self.status
    }

    pub fn is_content_active(&self) -> bool {
        self.content_active
    }

    pub fn alive_enemies(&self) -> u32 {
        self.alive_enemies
    }

    pub fn is_cleared(&self) -> bool {
        self.cleared
    }

    pub fn pending_sleep(&self) -> Option<TimerHandle> {
        self.pending_sleep
    }

    pub fn spawn_points(&self) -> &[Vec2] {
        &self.spawn_points
    }

    /// Activates the room. Returns `false` if it was already active, in which
    /// case nothing is respawned and the camera is left alone.
    pub fn enter(
        &mut self,
        composition: &Composition,
        scheduler: &mut DeferredScheduler,
        host: &mut dyn RoomHost,
    ) -> bool {
        if self.status == RoomStatus::Active {
            debug!("[ROOM] {:?} already active, ignoring enter", self.node);
            return false;
        }

        if let Some(handle) = self.pending_sleep.take() {
            scheduler.cancel(handle);
            debug!("[ROOM] {:?} re-entered while exiting, sleep cancelled", self.node);
        }

        host.set_camera_priority(self.node, self.priorities.in_priority);

        if !self.content_active {
            host.set_content_active(self.node, true);
            self.content_active = true;
        }

        if !self.enemies_spawned && !self.cleared {
            self.alive_enemies = host.spawn_enemies(self.node, composition, &self.spawn_points);
            self.enemies_spawned = true;
        }

        self.status = RoomStatus::Active;
        true
    }

    /// Gives up the camera and deactivates the room, immediately for a zero
    /// delay or after `delay` otherwise.
    pub fn exit(
        &mut self,
        delay: Duration,
        scheduler: &mut DeferredScheduler,
        host: &mut dyn RoomHost,
    ) {
        if self.status != RoomStatus::Active {
            debug!("[ROOM] {:?} is {:?}, ignoring exit", self.node, self.status);
            return;
        }

        host.set_camera_priority(self.node, self.priorities.out_priority);

        if delay.is_zero() {
            self.deactivate(host);
        } else {
            self.status = RoomStatus::Exiting;
            self.pending_sleep = Some(scheduler.schedule(delay, DeferredAction::Sleep(self.node)));
        }
    }

    /// Completes a deferred exit. Stale handles and rooms that were re-entered
    /// in the meantime are left untouched.
    pub fn finish_sleep(&mut self, handle: TimerHandle, host: &mut dyn RoomHost) -> bool {
        if self.status != RoomStatus::Exiting || self.pending_sleep != Some(handle) {
            return false;
        }
        self.deactivate(host);
        true
    }

    /// Destroys the spawned enemies. The composition is untouched, so the
    /// room repopulates from it after its next Dormant reset.
    pub fn replace_enemies(&mut self, host: &mut dyn RoomHost) {
        host.despawn_enemies(self.node);
        self.alive_enemies = 0;
    }

    /// Stops the room from ever spawning again.
    pub fn mark_cleared(&mut self) {
        self.cleared = true;
    }

    /// Returns `true` exactly when this kill empties a populated, active room.
    /// Kills in a room the player has left are counted but never clear it.
    pub fn record_enemy_killed(&mut self) -> bool {
        if self.alive_enemies == 0 {
            return false;
        }
        self.alive_enemies -= 1;
        if self.alive_enemies == 0 && !self.cleared && self.status == RoomStatus::Active {
            self.cleared = true;
            return true;
        }
        false
    }

    fn deactivate(&mut self, host: &mut dyn RoomHost) {
        if self.content_active {
            host.set_content_active(self.node, false);
            self.content_active = false;
        }
        if self.enemies_spawned {
            host.despawn_enemies(self.node);
            self.enemies_spawned = false;
            self.alive_enemies = 0;
        }
        self.pending_sleep = None;
        self.status = RoomStatus::Dormant;
    }
}
