//! Debug domain: state and action definitions for debug tooling.

use bevy::prelude::*;

/// Resource tracking debug mode state
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    /// Whether the game clock is currently slowed down
    pub slow_time: bool,
}

/// Actions bound to debug hotkeys (always with Ctrl held)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebugAction {
    PrintMap,
    PrintSnapshot,
    KillRoomEnemies,
    ReplaceRoomEnemies,
    DebuffEnemies,
    ToggleSlowTime,
}

impl DebugAction {
    pub const ALL: [DebugAction; 6] = [
        DebugAction::PrintMap,
        DebugAction::PrintSnapshot,
        DebugAction::KillRoomEnemies,
        DebugAction::ReplaceRoomEnemies,
        DebugAction::DebuffEnemies,
        DebugAction::ToggleSlowTime,
    ];

    pub fn key(self) -> KeyCode {
        match self {
            DebugAction::PrintMap => KeyCode::KeyM,
            DebugAction::PrintSnapshot => KeyCode::KeyJ,
            DebugAction::KillRoomEnemies => KeyCode::KeyK,
            DebugAction::ReplaceRoomEnemies => KeyCode::KeyR,
            DebugAction::DebuffEnemies => KeyCode::KeyD,
            DebugAction::ToggleSlowTime => KeyCode::KeyT,
        }
    }
}
