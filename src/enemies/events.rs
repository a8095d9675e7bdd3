//! Enemies domain: events for enemy deaths and enemy-wide effects.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::rooms::NodeId;

#[derive(Debug)]
pub struct EnemyKilledEvent {
    pub entity: Entity,
    pub room: NodeId,
}

impl Message for EnemyKilledEvent {}

/// Applies a debuff to every live enemy.
#[derive(Debug)]
pub struct DebuffEnemiesEvent {
    pub health_multiplier: f32,
}

impl Message for DebuffEnemiesEvent {}
