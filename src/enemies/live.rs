//! Enemies domain: the set of enemy instances currently alive in the world.

use std::collections::HashMap;

use bevy::prelude::*;

use crate::rooms::NodeId;

/// Live enemy entities grouped by the room that spawned them.
///
/// This is the read surface for anything that acts on "all current
/// enemies", as opposed to the static archetype registry.
#[derive(Resource, Debug, Default)]
pub struct LiveEnemySet {
    by_room: HashMap<NodeId, Vec<Entity>>,
    rooms: HashMap<Entity, NodeId>,
}

impl LiveEnemySet {
    pub fn register(&mut self, room: NodeId, entity: Entity) {
        self.by_room.entry(room).or_default().push(entity);
        self.rooms.insert(entity, room);
    }

    /// Forgets one enemy, returning the room it belonged to.
    pub fn remove(&mut self, entity: Entity) -> Option<NodeId> {
        let room = self.rooms.remove(&entity)?;
        if let Some(entities) = self.by_room.get_mut(&room) {
            entities.retain(|e| *e != entity);
            if entities.is_empty() {
                self.by_room.remove(&room);
            }
        }
        Some(room)
    }

    /// Forgets every enemy of `room` and hands them back for despawning.
    pub fn take_room(&mut self, room: NodeId) -> Vec<Entity> {
        let entities = self.by_room.remove(&room).unwrap_or_default();
        for entity in &entities {
            self.rooms.remove(entity);
        }
        entities
    }

    pub fn in_room(&self, room: NodeId) -> &[Entity] {
        self.by_room.get(&room).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = Entity> + '_ {
        self.rooms.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}
