//! Enemies domain: chase behaviour, deaths, and enemy-wide debuffs.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::enemies::components::{Enemy, EnemyMotion, Health, RoomEnemy};
use crate::enemies::events::{DebuffEnemiesEvent, EnemyKilledEvent};
use crate::enemies::live::LiveEnemySet;
use crate::movement::Player;

pub(crate) fn chase_player(
    player_query: Query<&Transform, With<Player>>,
    mut enemy_query: Query<(&Transform, &EnemyMotion, &mut LinearVelocity), With<Enemy>>,
) {
    let Some(player_transform) = player_query.iter().next() else {
        return;
    };
    let player_pos = player_transform.translation.truncate();

    for (transform, motion, mut velocity) in &mut enemy_query {
        let to_player = player_pos - transform.translation.truncate();
        if to_player.length() > motion.detection_range {
            velocity.0 = Vec2::ZERO;
            continue;
        }
        velocity.0 = to_player.normalize_or_zero() * motion.move_speed;
    }
}

pub(crate) fn despawn_defeated(
    mut commands: Commands,
    query: Query<(Entity, &Health, &RoomEnemy), With<Enemy>>,
    mut live: ResMut<LiveEnemySet>,
    mut killed_events: MessageWriter<EnemyKilledEvent>,
) {
    for (entity, health, room_enemy) in &query {
        if !health.is_dead() {
            continue;
        }

        // Already reaped when its room despawned it this frame.
        if live.remove(entity).is_none() {
            continue;
        }

        commands.entity(entity).despawn();
        debug!(
            "[ENEMY] Archetype {} in {:?} defeated",
            room_enemy.archetype, room_enemy.room
        );
        killed_events.write(EnemyKilledEvent {
            entity,
            room: room_enemy.room,
        });
    }
}

pub(crate) fn apply_debuffs(
    mut debuff_events: MessageReader<DebuffEnemiesEvent>,
    live: Res<LiveEnemySet>,
    mut health_query: Query<&mut Health, With<Enemy>>,
) {
    for event in debuff_events.read() {
        let mut affected = 0;
        for entity in live.iter() {
            if let Ok(mut health) = health_query.get_mut(entity) {
                health.scale(event.health_multiplier);
                affected += 1;
            }
        }
        info!(
            "[ENEMY] Debuff x{:.2} health applied to {} enemies",
            event.health_multiplier, affected
        );
    }
}
