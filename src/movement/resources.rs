//! Movement domain: tuning and input resources.

use bevy::prelude::*;

#[derive(Resource, Debug, Clone)]
pub struct MovementTuning {
    pub max_speed: f32,
    pub accel: f32,
    pub decel: f32,
    /// Enemies whose centers lie within this distance are hit by a strike.
    pub strike_radius: f32,
    pub strike_damage: f32,
    pub strike_cooldown: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            max_speed: 320.0,
            accel: 3000.0,
            decel: 2600.0,
            strike_radius: 72.0,
            strike_damage: 25.0,
            strike_cooldown: 0.35,
        }
    }
}

#[derive(Resource, Debug, Default)]
pub struct MovementInput {
    pub axis: Vec2,
    pub strike_just_pressed: bool,
}
