//! Core domain: game state definitions for the run flow.

use bevy::prelude::*;

#[derive(States, Debug, Hash, Eq, PartialEq, Clone, Default)]
pub enum GameState {
    /// Content is loading.
    #[default]
    Boot,
    /// A dungeon is generated and being traversed.
    Run,
}
