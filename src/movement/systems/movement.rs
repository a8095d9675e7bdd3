//! Movement domain: locomotion systems for timers and physics.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{MovementInput, MovementState, MovementTuning, Player};

pub(crate) fn update_timers(time: Res<Time>, mut query: Query<&mut MovementState, With<Player>>) {
    let dt = time.delta_secs();

    for mut state in &mut query {
        if state.strike_cooldown_timer > 0.0 {
            state.strike_cooldown_timer -= dt;
        }
    }
}

/// Moves `current` toward `target` by at most `max_delta`.
pub(crate) fn approach(current: Vec2, target: Vec2, max_delta: f32) -> Vec2 {
    let delta = target - current;
    let distance = delta.length();
    if distance <= max_delta || distance == 0.0 {
        target
    } else {
        current + delta / distance * max_delta
    }
}

pub(crate) fn apply_movement(
    time: Res<Time>,
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    mut query: Query<&mut LinearVelocity, With<Player>>,
) {
    let dt = time.delta_secs();
    let axis = input.axis.normalize_or_zero();

    for mut velocity in &mut query {
        let target = axis * tuning.max_speed;
        let rate = if axis == Vec2::ZERO {
            tuning.decel
        } else {
            tuning.accel
        };
        velocity.0 = approach(velocity.0, target, rate * dt);
    }
}

pub(crate) fn update_facing(
    input: Res<MovementInput>,
    mut query: Query<&mut MovementState, With<Player>>,
) {
    let Some(facing) = input.axis.try_normalize() else {
        return;
    };
    for mut state in &mut query {
        state.facing = facing;
    }
}
