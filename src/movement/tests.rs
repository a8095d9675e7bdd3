//! Movement domain: tests for locomotion helpers.

use bevy::prelude::Vec2;

use super::systems::movement::approach;
use super::{MovementState, MovementTuning};

#[test]
fn test_approach_reaches_close_target() {
    let next = approach(Vec2::new(10.0, 0.0), Vec2::new(12.0, 0.0), 5.0);
    assert_eq!(next, Vec2::new(12.0, 0.0));
}

#[test]
fn test_approach_is_capped_by_max_delta() {
    let next = approach(Vec2::ZERO, Vec2::new(300.0, 400.0), 50.0);
    assert!((next - Vec2::new(30.0, 40.0)).length() < 1e-4);
}

#[test]
fn test_approach_stays_put_at_target() {
    assert_eq!(approach(Vec2::ONE, Vec2::ONE, 0.0), Vec2::ONE);
}

#[test]
fn test_default_tuning_is_sane() {
    let tuning = MovementTuning::default();
    assert!(tuning.max_speed > 0.0);
    assert!(tuning.accel > 0.0 && tuning.decel > 0.0);
    assert!(tuning.strike_radius > 0.0);
    assert!(tuning.strike_cooldown > 0.0);
}

#[test]
fn test_player_starts_facing_east() {
    let state = MovementState::default();
    assert_eq!(state.facing, Vec2::X);
    assert_eq!(state.strike_cooldown_timer, 0.0);
}
