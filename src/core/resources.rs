//! Core domain: shared resources for run configuration and input routing.

use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

#[derive(Resource, Debug)]
pub struct RunConfig {
    pub seed: u64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: rand::rng().random(),
        }
    }
}

impl RunConfig {
    /// Deterministic generator for everything decided at generation time.
    pub fn generation_rng(&self) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(self.seed)
    }
}

/// Which set of actions input is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActionMap {
    #[default]
    Player,
    Ui,
}

/// Routes input either to the player character or to an overlay.
///
/// A map only receives input while it is both selected and enabled.
#[derive(Resource, Debug)]
pub struct InputRouting {
    action_map: ActionMap,
    player_enabled: bool,
    ui_enabled: bool,
}

impl Default for InputRouting {
    fn default() -> Self {
        Self {
            action_map: ActionMap::Player,
            player_enabled: true,
            ui_enabled: true,
        }
    }
}

impl InputRouting {
    pub fn action_map(&self) -> ActionMap {
        self.action_map
    }

    pub fn set_action_map(&mut self, action_map: ActionMap) {
        self.action_map = action_map;
    }

    pub fn set_player_enabled(&mut self, enabled: bool) {
        self.player_enabled = enabled;
    }

    pub fn set_ui_enabled(&mut self, enabled: bool) {
        self.ui_enabled = enabled;
    }

    pub fn player_actions_enabled(&self) -> bool {
        self.player_enabled && self.action_map == ActionMap::Player
    }

    pub fn ui_actions_enabled(&self) -> bool {
        self.ui_enabled && self.action_map == ActionMap::Ui
    }
}

/// Run condition: returns true only when input is routed to the player
pub fn player_input_active(routing: Res<InputRouting>) -> bool {
    routing.player_actions_enabled()
}

/// Tracks the card choice offered after a room clear.
#[derive(Resource, Debug, Default)]
pub struct CardSelection {
    pub open: bool,
}
