//! Rooms domain: orchestrates which room is current and drives transitions.

use std::collections::HashMap;
use std::time::Duration;

use bevy::prelude::*;

use crate::rooms::direction::Direction;
use crate::rooms::graph::RoomGraph;
use crate::rooms::instance::{CameraPriorities, RoomHost, RoomInstance, RoomStatus};
use crate::rooms::node::{NodeId, RoomNode};
use crate::rooms::scheduler::{DeferredAction, DeferredScheduler};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionSettings {
    /// How long the previous room stays visible after a transition.
    pub sleep_delay: Duration,
    pub camera: CameraPriorities,
}

impl Default for TransitionSettings {
    fn default() -> Self {
        Self {
            sleep_delay: Duration::from_millis(500),
            camera: CameraPriorities::default(),
        }
    }
}

/// Published after every confirmed transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomChanged {
    pub from: Option<NodeId>,
    pub to: NodeId,
}

/// Published when the last enemy of a populated room dies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomCleared {
    pub room: NodeId,
}

/// Owns the dungeon for a run: the immutable graph, the rooms materialized so
/// far, and the single current room.
#[derive(Resource, Debug)]
pub struct RoomTransitionController {
    graph: RoomGraph,
    instances: HashMap<NodeId, RoomInstance>,
    current: Option<NodeId>,
    scheduler: DeferredScheduler,
    settings: TransitionSettings,
    spawn_points: Vec<Vec2>,
}

impl RoomTransitionController {
    pub fn new(graph: RoomGraph, settings: TransitionSettings, spawn_points: Vec<Vec2>) -> Self {
        Self {
            graph,
            instances: HashMap::new(),
            current: None,
            scheduler: DeferredScheduler::default(),
            settings,
            spawn_points,
        }
    }

    pub fn graph(&self) -> &RoomGraph {
        &self.graph
    }

    pub fn settings(&self) -> &TransitionSettings {
        &self.settings
    }

    pub fn current(&self) -> Option<NodeId> {
        self.current
    }

    pub fn current_node(&self) -> Option<&RoomNode> {
        self.current.and_then(|id| self.graph.node(id))
    }

    pub fn current_instance(&self) -> Option<&RoomInstance> {
        self.current.and_then(|id| self.instances.get(&id))
    }

    pub fn instance(&self, id: NodeId) -> Option<&RoomInstance> {
        self.instances.get(&id)
    }

    /// Status of a room, treating never-materialized rooms as dormant.
    pub fn status(&self, id: NodeId) -> RoomStatus {
        self.instances
            .get(&id)
            .map(RoomInstance::status)
            .unwrap_or_default()
    }

    pub fn scheduler(&self) -> &DeferredScheduler {
        &self.scheduler
    }

    /// Enters the graph's start room.
    pub fn begin(&mut self, host: &mut dyn RoomHost) -> Option<RoomChanged> {
        let start = self.graph.start();
        self.change_room(Some(start), host)
    }

    /// Moves into the neighbour of the current room in `direction`.
    pub fn cross(&mut self, direction: Direction, host: &mut dyn RoomHost) -> Option<RoomChanged> {
        let target = self
            .current
            .and_then(|current| self.graph.neighbor(current, direction));
        self.change_room(target, host)
    }

    /// Handles a boundary crossing into `target`.
    ///
    /// A missing target (dungeon edge) or the room already current is a
    /// no-op. Otherwise the previous room exits before the target enters.
    pub fn change_room(
        &mut self,
        target: Option<NodeId>,
        host: &mut dyn RoomHost,
    ) -> Option<RoomChanged> {
        let Some(target) = target else {
            warn!("[TRANSITION] Boundary crossing without a target room, ignoring");
            return None;
        };

        if self.current == Some(target) {
            debug!("[TRANSITION] Already in {:?}, ignoring crossing", target);
            return None;
        }

        let Some(node) = self.graph.node(target) else {
            warn!("[TRANSITION] Unknown room {:?}, ignoring crossing", target);
            return None;
        };

        let previous = self.current;
        if let Some(instance) = previous.and_then(|id| self.instances.get_mut(&id)) {
            instance.exit(self.settings.sleep_delay, &mut self.scheduler, host);
        }

        let settings = self.settings;
        let spawn_points = &self.spawn_points;
        let instance = self
            .instances
            .entry(target)
            .or_insert_with(|| RoomInstance::new(target, settings.camera, spawn_points.clone()));
        instance.enter(node.composition(), &mut self.scheduler, host);

        self.current = Some(target);

        info!(
            "[TRANSITION] {:?} -> room {} (rank {}, {} enemies)",
            previous.and_then(|id| self.graph.node(id)).map(RoomNode::coord),
            node.coord(),
            node.rank(),
            self.instances
                .get(&target)
                .map(RoomInstance::alive_enemies)
                .unwrap_or(0)
        );

        Some(RoomChanged {
            from: previous,
            to: target,
        })
    }

    /// Advances deferred deactivations and returns how many completed.
    pub fn tick(&mut self, delta: Duration, host: &mut dyn RoomHost) -> usize {
        let mut completed = 0;
        for (handle, action) in self.scheduler.tick(delta) {
            match action {
                DeferredAction::Sleep(room) => {
                    let Some(instance) = self.instances.get_mut(&room) else {
                        continue;
                    };
                    if instance.finish_sleep(handle, host) {
                        debug!("[ROOM] {:?} went dormant", room);
                        completed += 1;
                    }
                }
            }
        }
        completed
    }

    /// Records a kill in `room`, returning the clear notification if it was
    /// the last enemy.
    pub fn enemy_killed(&mut self, room: NodeId) -> Option<RoomCleared> {
        let instance = self.instances.get_mut(&room)?;
        instance
            .record_enemy_killed()
            .then_some(RoomCleared { room })
    }

    pub fn replace_enemies(&mut self, room: NodeId, host: &mut dyn RoomHost) -> bool {
        match self.instances.get_mut(&room) {
            Some(instance) => {
                instance.replace_enemies(host);
                true
            }
            None => false,
        }
    }
}
