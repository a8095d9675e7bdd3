//! Rooms domain: the ECS side of room lifecycle side effects.

use std::collections::HashMap;

use avian2d::prelude::*;
use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

use crate::enemies::{
    Composition, Enemy, EnemyCatalog, EnemyMotion, EnemyRegistry, Health, LiveEnemySet, RoomEnemy,
};
use crate::movement::GameLayer;
use crate::rooms::components::RoomCamera;
use crate::rooms::instance::RoomHost;
use crate::rooms::node::NodeId;

const ENEMY_SIZE: f32 = 28.0;
const ENEMY_DETECTION_RANGE: f32 = 420.0;
/// Offset applied each time the spawn points wrap around.
const SPAWN_LAP_OFFSET: f32 = 18.0;

/// Entities spawned for one room at generation time.
#[derive(Debug, Clone, Copy)]
pub struct RoomEntityIds {
    pub content: Entity,
    pub camera: Entity,
    pub center: Vec2,
}

#[derive(Resource, Debug, Default)]
pub struct RoomEntities {
    rooms: HashMap<NodeId, RoomEntityIds>,
}

impl RoomEntities {
    pub fn insert(&mut self, node: NodeId, ids: RoomEntityIds) {
        self.rooms.insert(node, ids);
    }

    pub fn get(&self, node: NodeId) -> Option<&RoomEntityIds> {
        self.rooms.get(&node)
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }
}

/// Applies room lifecycle side effects through `Commands`.
pub struct WorldRoomHost<'a, 'w, 's> {
    pub commands: &'a mut Commands<'w, 's>,
    pub entities: &'a RoomEntities,
    pub registry: &'a EnemyRegistry,
    pub catalog: &'a EnemyCatalog,
    pub live: &'a mut LiveEnemySet,
}

impl RoomHost for WorldRoomHost<'_, '_, '_> {
    fn set_camera_priority(&mut self, room: NodeId, priority: i32) {
        let Some(ids) = self.entities.get(room) else {
            warn!("[ROOM] No entities for {:?}, cannot set camera priority", room);
            return;
        };
        self.commands.entity(ids.camera).insert(RoomCamera {
            node: room,
            priority,
        });
    }

    fn set_content_active(&mut self, room: NodeId, active: bool) {
        let Some(ids) = self.entities.get(room) else {
            warn!("[ROOM] No entities for {:?}, cannot toggle content", room);
            return;
        };
        let visibility = if active {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };
        self.commands.entity(ids.content).insert(visibility);
    }

    fn spawn_enemies(
        &mut self,
        room: NodeId,
        composition: &Composition,
        spawn_points: &[Vec2],
    ) -> u32 {
        let Some(ids) = self.entities.get(room).copied() else {
            warn!("[ROOM] No entities for {:?}, cannot spawn enemies", room);
            return 0;
        };

        let enemy_layers = CollisionLayers::new(
            GameLayer::Enemy,
            [GameLayer::Wall, GameLayer::Player, GameLayer::Enemy],
        );

        let mut spawned = 0u32;
        for (archetype_index, count) in composition.iter() {
            let Some(archetype) = self.catalog.get(archetype_index) else {
                warn!(
                    "[ROOM] Archetype {} ({:?}) missing from catalog, skipping",
                    archetype_index,
                    self.registry.entry(archetype_index).map(|e| e.id.as_str())
                );
                continue;
            };

            for _ in 0..count {
                let slot = spawned as usize;
                let local = if spawn_points.is_empty() {
                    Vec2::ZERO
                } else {
                    let lap = (slot / spawn_points.len()) as f32;
                    spawn_points[slot % spawn_points.len()] + Vec2::splat(lap * SPAWN_LAP_OFFSET)
                };
                let position = ids.center + local;

                let entity = self
                    .commands
                    .spawn((
                        Name::new(archetype.name.clone()),
                        Enemy,
                        RoomEnemy {
                            room,
                            archetype: archetype_index,
                        },
                        Health::new(archetype.health),
                        EnemyMotion {
                            move_speed: archetype.move_speed,
                            detection_range: ENEMY_DETECTION_RANGE,
                        },
                        Sprite {
                            color: archetype.color,
                            custom_size: Some(Vec2::splat(ENEMY_SIZE)),
                            ..default()
                        },
                        Transform::from_translation(position.extend(2.0)),
                        RigidBody::Dynamic,
                        Collider::circle(ENEMY_SIZE / 2.0),
                        LockedAxes::ROTATION_LOCKED,
                        LinearVelocity::default(),
                        enemy_layers,
                    ))
                    .id();
                self.live.register(room, entity);
                spawned += 1;
            }
        }

        info!("[ROOM] Spawned {} enemies in {:?}", spawned, room);
        spawned
    }

    fn despawn_enemies(&mut self, room: NodeId) {
        let entities = self.live.take_room(room);
        if entities.is_empty() {
            return;
        }
        debug!("[ROOM] Despawning {} enemies in {:?}", entities.len(), room);
        for entity in entities {
            self.commands.entity(entity).despawn();
        }
    }
}

/// Everything a system needs to build a [`WorldRoomHost`].
#[derive(SystemParam)]
pub struct RoomHostParams<'w, 's> {
    pub commands: Commands<'w, 's>,
    pub entities: Res<'w, RoomEntities>,
    pub registry: Res<'w, EnemyRegistry>,
    pub catalog: Res<'w, EnemyCatalog>,
    pub live: ResMut<'w, LiveEnemySet>,
}

impl<'w, 's> RoomHostParams<'w, 's> {
    pub fn host(&mut self) -> WorldRoomHost<'_, 'w, 's> {
        WorldRoomHost {
            commands: &mut self.commands,
            entities: &self.entities,
            registry: &self.registry,
            catalog: &self.catalog,
            live: &mut self.live,
        }
    }
}
