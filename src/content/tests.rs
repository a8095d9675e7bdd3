//! Content domain: tests for the shipped data files and their defaults.

use std::path::{Path, PathBuf};
use std::time::Duration;

use super::{
    ContentLoadError, DATA_DIR, DungeonDefaults, EnemyDef, ExitClock, RoomDefaults,
    TransitionDefaults, load_dungeon_defaults, load_enemies, parse_ron,
};
use crate::enemies::build_enemy_content;

fn data_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(DATA_DIR)
}

// -----------------------------------------------------------------------------
// Shipped data tests
// -----------------------------------------------------------------------------

#[test]
fn test_shipped_enemies_build_a_registry() {
    let defs = load_enemies(&data_dir()).unwrap();
    assert!(!defs.is_empty());

    let (registry, catalog) = build_enemy_content(&defs).unwrap();
    assert_eq!(registry.count(), defs.len());
    assert_eq!(catalog.len(), defs.len());

    let ranks: Vec<u32> = registry.iter().map(|entry| entry.rank).collect();
    assert!(ranks.windows(2).all(|pair| pair[0] <= pair[1]));
    assert_eq!(ranks.first(), Some(&1));
}

#[test]
fn test_shipped_dungeon_defaults_parse() {
    let defaults = load_dungeon_defaults(&data_dir()).unwrap();
    assert_eq!(defaults.schema_version, 1);
    assert!(defaults.layout.room_count > 1);
    assert!(defaults.camera.in_priority > defaults.camera.out_priority);
    assert!(!defaults.room.spawn_points().is_empty());
}

#[test]
fn test_missing_file_reports_io_error() {
    let err = load_dungeon_defaults(Path::new("does/not/exist")).unwrap_err();
    assert!(matches!(err, ContentLoadError::Io { .. }));
    assert!(err.to_string().contains("dungeon.ron"));
}

#[test]
fn test_malformed_file_reports_parse_error() {
    let err = parse_ron::<DungeonDefaults>(Path::new("dungeon.ron"), "(layout: oops").unwrap_err();
    assert!(matches!(err, ContentLoadError::Parse { .. }));
}

#[test]
fn test_enemy_def_parses_without_wrapper_noise() {
    let def: EnemyDef = parse_ron(
        Path::new("inline.ron"),
        r#"(
            id: "bat",
            name: "Bat",
            rank: 1,
            base_stats: (health: 10.0, move_speed: 200.0),
            color: (0.5, 0.2, 0.6),
        )"#,
    )
    .unwrap();
    assert_eq!(def.id, "bat");
    assert_eq!(def.rank, 1);
}

// -----------------------------------------------------------------------------
// Defaults tests
// -----------------------------------------------------------------------------

#[test]
fn test_sleep_delay_clamps_bad_values() {
    let mut transition = TransitionDefaults::default();
    assert_eq!(transition.sleep_delay(), Duration::from_millis(500));
    assert_eq!(transition.clock, ExitClock::Scaled);

    transition.sleep_delay_secs = -1.0;
    assert_eq!(transition.sleep_delay(), Duration::ZERO);

    transition.sleep_delay_secs = f32::NAN;
    assert_eq!(transition.sleep_delay(), Duration::ZERO);
}

#[test]
fn test_spawn_points_fill_the_grid_inside_margin() {
    let room = RoomDefaults::default();
    let points = room.spawn_points();
    assert_eq!(points.len(), 12);

    let limit = room.size() * 0.5 - bevy::prelude::Vec2::splat(room.spawn_margin);
    for point in &points {
        assert!(point.x.abs() <= limit.x + 1e-3);
        assert!(point.y.abs() <= limit.y + 1e-3);
    }
}

#[test]
fn test_single_spawn_point_is_room_center() {
    let room = RoomDefaults {
        spawn_columns: 1,
        spawn_rows: 1,
        ..RoomDefaults::default()
    };
    assert_eq!(room.spawn_points(), [bevy::prelude::Vec2::ZERO]);
}
