//! Rooms domain: boundary crossings, deferred sleep, and room clears.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::content::{DungeonDefaults, ExitClock};
use crate::enemies::EnemyKilledEvent;
use crate::movement::Player;
use crate::rooms::components::RoomTrigger;
use crate::rooms::controller::RoomTransitionController;
use crate::rooms::events::{RoomChangedEvent, RoomClearedEvent};
use crate::rooms::host::RoomHostParams;

/// Turns the player touching a room's sensor into a room change.
pub(crate) fn detect_boundary_crossings(
    mut collision_start_events: MessageReader<CollisionStart>,
    trigger_query: Query<&RoomTrigger>,
    player_query: Query<Entity, With<Player>>,
    controller: Option<ResMut<RoomTransitionController>>,
    mut host_params: RoomHostParams,
    mut changed_events: MessageWriter<RoomChangedEvent>,
) {
    let (Some(player_entity), Some(mut controller)) = (player_query.iter().next(), controller)
    else {
        for _ in collision_start_events.read() {}
        return;
    };

    for event in collision_start_events.read() {
        let (trigger, other) = if let Ok(trigger) = trigger_query.get(event.collider1) {
            (trigger, event.collider2)
        } else if let Ok(trigger) = trigger_query.get(event.collider2) {
            (trigger, event.collider1)
        } else {
            continue;
        };

        if other != player_entity {
            continue;
        }

        let mut host = host_params.host();
        let Some(changed) = controller.change_room(Some(trigger.node), &mut host) else {
            continue;
        };

        if let Some(node) = controller.graph().node(changed.to) {
            changed_events.write(RoomChangedEvent {
                from: changed.from,
                to: changed.to,
                coord: node.coord(),
            });
        }
    }
}

/// Advances pending room deactivations on the configured clock.
pub(crate) fn tick_room_sleep(
    virtual_time: Res<Time<Virtual>>,
    real_time: Res<Time<Real>>,
    defaults: Option<Res<DungeonDefaults>>,
    controller: Option<ResMut<RoomTransitionController>>,
    mut host_params: RoomHostParams,
) {
    let Some(mut controller) = controller else {
        return;
    };
    if controller.scheduler().pending_count() == 0 {
        return;
    }

    let clock = defaults.map(|d| d.transition.clock).unwrap_or_default();
    let delta = match clock {
        ExitClock::Scaled => virtual_time.delta(),
        ExitClock::Unscaled => real_time.delta(),
    };

    let mut host = host_params.host();
    controller.tick(delta, &mut host);
}

/// Reports kills to the owning room and announces rooms that were emptied.
pub(crate) fn handle_enemy_killed(
    mut killed_events: MessageReader<EnemyKilledEvent>,
    controller: Option<ResMut<RoomTransitionController>>,
    mut cleared_events: MessageWriter<RoomClearedEvent>,
) {
    let Some(mut controller) = controller else {
        for _ in killed_events.read() {}
        return;
    };

    for event in killed_events.read() {
        let Some(cleared) = controller.enemy_killed(event.room) else {
            continue;
        };
        let coord = controller
            .graph()
            .node(cleared.room)
            .map(|node| node.coord())
            .unwrap_or_default();
        info!("[ROOM] Room {} cleared", coord);
        cleared_events.write(RoomClearedEvent {
            room: cleared.room,
            coord,
        });
    }
}
