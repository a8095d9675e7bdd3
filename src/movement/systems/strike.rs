//! Movement domain: the player's melee strike.

use bevy::prelude::*;

use crate::enemies::{Enemy, Health};
use crate::movement::{MovementInput, MovementState, MovementTuning, Player};

/// Damages every enemy within reach of the player.
pub(crate) fn player_strike(
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    mut player_query: Query<(&Transform, &mut MovementState), With<Player>>,
    mut enemy_query: Query<(&Transform, &mut Health), (With<Enemy>, Without<Player>)>,
) {
    if !input.strike_just_pressed {
        return;
    }
    let Some((player_transform, mut state)) = player_query.iter_mut().next() else {
        return;
    };
    if state.strike_cooldown_timer > 0.0 {
        return;
    }
    state.strike_cooldown_timer = tuning.strike_cooldown;

    let origin = player_transform.translation.truncate();
    let mut hits = 0;
    for (transform, mut health) in &mut enemy_query {
        if transform.translation.truncate().distance(origin) <= tuning.strike_radius {
            health.take_damage(tuning.strike_damage);
            hits += 1;
        }
    }
    if hits > 0 {
        debug!("[COMBAT] Strike hit {} enemies", hits);
    }
}
