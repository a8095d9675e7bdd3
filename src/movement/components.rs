//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Room walls
    Wall,
    /// Player character
    Player,
    /// Enemy characters
    Enemy,
    /// Room triggers - should not block movement
    Sensor,
}

#[derive(Component, Debug)]
pub struct Player;

#[derive(Component, Debug)]
pub struct MovementState {
    /// Last non-zero input direction, normalized.
    pub facing: Vec2,
    pub strike_cooldown_timer: f32,
}

impl Default for MovementState {
    fn default() -> Self {
        Self {
            facing: Vec2::X,
            strike_cooldown_timer: 0.0,
        }
    }
}
