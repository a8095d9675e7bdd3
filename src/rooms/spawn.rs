//! Rooms domain: dungeon generation and room entity spawning.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::content::DungeonDefaults;
use crate::core::RunConfig;
use crate::enemies::{EnemyCatalog, EnemyRegistry, LiveEnemySet};
use crate::movement::GameLayer;
use crate::rooms::components::{RoomCamera, RoomContent, RoomRoot, RoomTrigger, RoomWall};
use crate::rooms::controller::{RoomTransitionController, TransitionSettings};
use crate::rooms::direction::Direction;
use crate::rooms::events::RoomChangedEvent;
use crate::rooms::graph::RoomGraph;
use crate::rooms::host::{RoomEntities, RoomEntityIds, WorldRoomHost};
use crate::rooms::instance::CameraPriorities;
use crate::rooms::layout::carve_random_walk;
use crate::rooms::node::{NodeId, RoomNode};

const WALL_THICKNESS: f32 = 40.0;
const DOOR_WIDTH: f32 = 120.0;

/// Generates the run's dungeon, spawns every room asleep, and wakes the start
/// room.
pub(crate) fn generate_dungeon(
    mut commands: Commands,
    run_config: Res<RunConfig>,
    defaults: Res<DungeonDefaults>,
    registry: Res<EnemyRegistry>,
    catalog: Res<EnemyCatalog>,
    mut live: ResMut<LiveEnemySet>,
    mut changed_events: MessageWriter<RoomChangedEvent>,
    mut app_exit: MessageWriter<AppExit>,
) {
    let mut rng = run_config.generation_rng();
    let layout = carve_random_walk(&defaults.layout, &mut rng);

    let graph = match RoomGraph::build(&layout, &registry, &mut rng) {
        Ok(graph) => graph,
        Err(err) => {
            error!("[DUNGEON] Failed to build dungeon (seed {}): {}", run_config.seed, err);
            app_exit.write(AppExit::error());
            return;
        }
    };

    info!("[DUNGEON] Seed {} produced {} rooms", run_config.seed, graph.len());

    let mut entities = RoomEntities::default();
    for (id, node) in graph.iter() {
        let ids = spawn_room(&mut commands, &defaults, id, node);
        entities.insert(id, ids);
    }

    let camera = CameraPriorities {
        in_priority: defaults.camera.in_priority,
        out_priority: defaults.camera.out_priority,
    };
    if camera.in_priority <= camera.out_priority {
        warn!(
            "[DUNGEON] Camera in priority {} does not exceed out priority {}",
            camera.in_priority, camera.out_priority
        );
    }

    let settings = TransitionSettings {
        sleep_delay: defaults.transition.sleep_delay(),
        camera,
    };
    let mut controller =
        RoomTransitionController::new(graph, settings, defaults.room.spawn_points());

    let mut host = WorldRoomHost {
        commands: &mut commands,
        entities: &entities,
        registry: &registry,
        catalog: &catalog,
        live: &mut live,
    };
    if let Some(changed) = controller.begin(&mut host) {
        if let Some(node) = controller.graph().node(changed.to) {
            changed_events.write(RoomChangedEvent {
                from: changed.from,
                to: changed.to,
                coord: node.coord(),
            });
        }
    }

    commands.insert_resource(entities);
    commands.insert_resource(controller);
}

/// World-space center of the room at `coord`.
pub(crate) fn room_center(coord: IVec2, room_size: Vec2) -> Vec2 {
    coord.as_vec2() * room_size
}

fn spawn_room(
    commands: &mut Commands,
    defaults: &DungeonDefaults,
    id: NodeId,
    node: &RoomNode,
) -> RoomEntityIds {
    let size = defaults.room.size();
    let center = room_center(node.coord(), size);
    let interior = (size - Vec2::splat(2.0 * WALL_THICKNESS)).max(Vec2::ONE);

    let heat = (node.rank() as f32 / defaults.layout.max_rank.max(1) as f32).min(1.0);
    let floor_color = Color::srgb(0.2 + 0.25 * heat, 0.22, 0.26 - 0.08 * heat);

    let root = commands
        .spawn((
            Name::new(format!("Room {}", node.coord())),
            RoomRoot { node: id },
            Transform::from_translation(center.extend(0.0)),
            Visibility::default(),
        ))
        .id();

    let content = commands
        .spawn((
            RoomContent { node: id },
            Sprite {
                color: floor_color,
                custom_size: Some(interior),
                ..default()
            },
            Transform::from_xyz(0.0, 0.0, -10.0),
            Visibility::Hidden,
            ChildOf(root),
        ))
        .id();

    let camera = commands
        .spawn((
            RoomCamera {
                node: id,
                priority: defaults.camera.out_priority,
            },
            Transform::default(),
            ChildOf(root),
        ))
        .id();

    commands.spawn((
        RoomTrigger { node: id },
        Transform::from_translation(center.extend(0.0)),
        Collider::rectangle(interior.x, interior.y),
        Sensor,
        CollisionEventsEnabled,
        CollisionLayers::new(GameLayer::Sensor, [GameLayer::Player]),
    ));

    for direction in Direction::ALL {
        let has_door = node.neighbor(direction).is_some();
        spawn_wall_side(commands, center, size, direction, has_door);
    }

    RoomEntityIds {
        content,
        camera,
        center,
    }
}

/// Walls sit just inside the room's edge; a side with a neighbour gets a
/// doorway in its middle.
fn spawn_wall_side(
    commands: &mut Commands,
    center: Vec2,
    room_size: Vec2,
    direction: Direction,
    has_door: bool,
) {
    let wall_color = Color::srgb(0.3, 0.3, 0.4);
    let wall_layers = CollisionLayers::new(GameLayer::Wall, [GameLayer::Player, GameLayer::Enemy]);

    let normal = direction.to_vector().as_vec2();
    let tangent = normal.perp();
    let (side_length, half_depth) = if direction.is_horizontal() {
        (room_size.y, room_size.x / 2.0)
    } else {
        (room_size.x, room_size.y / 2.0)
    };
    let side_center = center + normal * (half_depth - WALL_THICKNESS / 2.0);

    let segments: Vec<(f32, f32)> = if has_door {
        let segment = ((side_length - DOOR_WIDTH) / 2.0).max(0.0);
        let offset = DOOR_WIDTH / 2.0 + segment / 2.0;
        vec![(-offset, segment), (offset, segment)]
    } else {
        vec![(0.0, side_length)]
    };

    for (offset, length) in segments {
        if length <= 0.0 {
            continue;
        }
        let extent = if direction.is_horizontal() {
            Vec2::new(WALL_THICKNESS, length)
        } else {
            Vec2::new(length, WALL_THICKNESS)
        };
        let position = side_center + tangent * offset;
        commands.spawn((
            RoomWall,
            Sprite {
                color: wall_color,
                custom_size: Some(extent),
                ..default()
            },
            Transform::from_translation(position.extend(1.0)),
            RigidBody::Static,
            Collider::rectangle(extent.x, extent.y),
            wall_layers,
        ));
    }
}
