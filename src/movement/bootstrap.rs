//! Movement domain: player bootstrap.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, MovementState, Player};

const PLAYER_SIZE: f32 = 28.0;

/// Spawns the player in the start room, which always sits at the origin.
pub(crate) fn spawn_player(mut commands: Commands, existing_player: Query<Entity, With<Player>>) {
    if !existing_player.is_empty() {
        info!("Player already exists, skipping spawn");
        return;
    }

    commands.spawn((
        Name::new("Player"),
        Player,
        MovementState::default(),
        Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(Vec2::splat(PLAYER_SIZE)),
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, 5.0),
        RigidBody::Dynamic,
        Collider::circle(PLAYER_SIZE / 2.0),
        LockedAxes::ROTATION_LOCKED,
        LinearVelocity::default(),
        CollisionEventsEnabled,
        CollisionLayers::new(
            GameLayer::Player,
            [GameLayer::Wall, GameLayer::Enemy, GameLayer::Sensor],
        ),
    ));
}
