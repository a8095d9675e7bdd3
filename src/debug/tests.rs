//! Debug domain: tests for map rendering and snapshots.

use bevy::prelude::{IVec2, Vec2};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::{render_ascii_map, snapshot};
use crate::enemies::{Composition, EnemyEntry, EnemyRegistry};
use crate::rooms::{
    Direction, DungeonLayout, NodeId, RoomGraph, RoomHost, RoomTransitionController,
    TransitionSettings,
};

struct NullHost;

impl RoomHost for NullHost {
    fn set_camera_priority(&mut self, _: NodeId, _: i32) {}

    fn set_content_active(&mut self, _: NodeId, _: bool) {}

    fn spawn_enemies(&mut self, _: NodeId, composition: &Composition, _: &[Vec2]) -> u32 {
        composition.total_enemies()
    }

    fn despawn_enemies(&mut self, _: NodeId) {}
}

fn registry() -> EnemyRegistry {
    EnemyRegistry::new(vec![EnemyEntry::new("goomba", 1)]).unwrap()
}

/// An L-shaped dungeon: start at the origin, one room east, one room north.
fn controller() -> RoomTransitionController {
    let layout = DungeonLayout::new(IVec2::ZERO)
        .with_room(IVec2::new(0, 0), 0)
        .with_room(IVec2::new(1, 0), 2)
        .with_room(IVec2::new(0, 1), 4);
    let graph = RoomGraph::build(&layout, &registry(), &mut ChaCha8Rng::seed_from_u64(3)).unwrap();
    let mut controller =
        RoomTransitionController::new(graph, TransitionSettings::default(), vec![Vec2::ZERO]);
    controller.begin(&mut NullHost);
    controller
}

#[test]
fn test_ascii_map_marks_current_room_and_doors() {
    let controller = controller();
    assert_eq!(render_ascii_map(&controller), "4\n|\n@-2");
}

#[test]
fn test_ascii_map_marks_cleared_rooms() {
    let mut controller = controller();
    controller.cross(Direction::East, &mut NullHost);
    let room = controller.current().unwrap();
    for _ in 0..2 {
        controller.enemy_killed(room);
    }
    controller.cross(Direction::West, &mut NullHost);

    assert_eq!(render_ascii_map(&controller), "4\n|\n@-x");
}

#[test]
fn test_snapshot_describes_every_room() {
    let controller = controller();
    let snapshot = snapshot(&controller, &registry(), 77);

    assert_eq!(snapshot.seed, 77);
    assert_eq!(snapshot.current, Some([0, 0]));
    assert_eq!(snapshot.rooms.len(), 3);

    let east = snapshot
        .rooms
        .iter()
        .find(|room| room.coord == [1, 0])
        .unwrap();
    assert_eq!(east.rank, 2);
    assert_eq!(east.status, "Dormant");
    assert_eq!(east.composition, [("goomba".to_string(), 2)]);
    assert_eq!(east.doors, [Direction::West]);

    let json = serde_json::to_string(&snapshot).unwrap();
    assert!(json.contains("\"seed\":77"));
    assert!(json.contains("\"West\""));
}
