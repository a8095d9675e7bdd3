//! Debug domain: debug hotkeys for inspecting and poking the dungeon.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::core::{RunConfig, ScaleTimeEvent};
use crate::debug::map::{render_ascii_map, snapshot};
use crate::debug::state::{DebugAction, DebugState};
use crate::enemies::{DebuffEnemiesEvent, Health};
use crate::rooms::{RoomHostParams, RoomTransitionController};

const DEBUFF_MULTIPLIER: f32 = 0.5;
const SLOW_TIME_SCALE: f32 = 0.25;

/// Handle Ctrl+key shortcuts for debug actions
pub(crate) fn handle_debug_hotkeys(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
    run_config: Res<RunConfig>,
    controller: Option<ResMut<RoomTransitionController>>,
    mut host_params: RoomHostParams,
    mut health_query: Query<&mut Health>,
    mut debuff_events: MessageWriter<DebuffEnemiesEvent>,
    mut scale_events: MessageWriter<ScaleTimeEvent>,
) {
    let ctrl = keyboard.pressed(KeyCode::ControlLeft) || keyboard.pressed(KeyCode::ControlRight);
    if !ctrl {
        return;
    }
    let Some(mut controller) = controller else {
        return;
    };

    for action in DebugAction::ALL {
        if !keyboard.just_pressed(action.key()) {
            continue;
        }

        match action {
            DebugAction::PrintMap => {
                info!("[DEBUG] Dungeon map:\n{}", render_ascii_map(&controller));
            }
            DebugAction::PrintSnapshot => {
                let snapshot = snapshot(&controller, &host_params.registry, run_config.seed);
                match serde_json::to_string_pretty(&snapshot) {
                    Ok(json) => info!("[DEBUG] Dungeon snapshot:\n{}", json),
                    Err(err) => error!("[DEBUG] Failed to serialize snapshot: {}", err),
                }
            }
            DebugAction::KillRoomEnemies => {
                let Some(room) = controller.current() else {
                    continue;
                };
                let mut killed = 0;
                for &entity in host_params.live.in_room(room) {
                    if let Ok(mut health) = health_query.get_mut(entity) {
                        health.current = 0.0;
                        killed += 1;
                    }
                }
                info!("[DEBUG] Killed {} enemies in {:?}", killed, room);
            }
            DebugAction::ReplaceRoomEnemies => {
                let Some(room) = controller.current() else {
                    continue;
                };
                let mut host = host_params.host();
                controller.replace_enemies(room, &mut host);
                info!("[DEBUG] Replaced enemies in {:?}", room);
            }
            DebugAction::DebuffEnemies => {
                debuff_events.write(DebuffEnemiesEvent {
                    health_multiplier: DEBUFF_MULTIPLIER,
                });
            }
            DebugAction::ToggleSlowTime => {
                debug_state.slow_time = !debug_state.slow_time;
                let scale = if debug_state.slow_time {
                    SLOW_TIME_SCALE
                } else {
                    1.0
                };
                scale_events.write(ScaleTimeEvent { scale });
            }
        }
    }
}
