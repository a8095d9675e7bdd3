//! Enemies domain: components carried by spawned enemies.

use bevy::prelude::*;

use crate::rooms::NodeId;

#[derive(Component, Debug)]
pub struct Enemy;

/// Which room spawned this enemy and from which archetype.
#[derive(Component, Debug, Clone, Copy)]
pub struct RoomEnemy {
    pub room: NodeId,
    pub archetype: usize,
}

#[derive(Component, Debug)]
pub struct Health {
    pub current: f32,
    pub max: f32,
}

impl Health {
    pub fn new(max: f32) -> Self {
        Self { current: max, max }
    }

    pub fn take_damage(&mut self, amount: f32) -> f32 {
        let actual = amount.min(self.current);
        self.current -= actual;
        actual
    }

    /// Scales both current and maximum health, keeping the ratio.
    pub fn scale(&mut self, multiplier: f32) {
        let multiplier = multiplier.max(0.0);
        self.max *= multiplier;
        self.current *= multiplier;
    }

    pub fn is_dead(&self) -> bool {
        self.current <= 0.0
    }
}

#[derive(Component, Debug)]
pub struct EnemyMotion {
    pub move_speed: f32,
    /// Enemies only chase once the player is this close.
    pub detection_range: f32,
}
