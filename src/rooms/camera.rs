//! Rooms domain: main camera that blends toward the highest-priority room.

use bevy::prelude::*;

use crate::content::DungeonDefaults;
use crate::rooms::components::{MainCamera, RoomCamera};

pub(crate) fn spawn_main_camera(mut commands: Commands) {
    commands.spawn((Name::new("MainCamera"), Camera2d, MainCamera));
}

/// Picks the framing target: highest priority wins, ties go to the first
/// candidate seen.
pub(crate) fn highest_priority<T: Copy>(
    candidates: impl IntoIterator<Item = (i32, T)>,
) -> Option<T> {
    let mut best: Option<(i32, T)> = None;
    for (priority, target) in candidates {
        if best.is_none_or(|(current, _)| priority > current) {
            best = Some((priority, target));
        }
    }
    best.map(|(_, target)| target)
}

pub(crate) fn blend_main_camera(
    time: Res<Time<Real>>,
    defaults: Option<Res<DungeonDefaults>>,
    room_cameras: Query<(&RoomCamera, &GlobalTransform)>,
    mut main_camera: Query<&mut Transform, With<MainCamera>>,
) {
    let Ok(mut camera_transform) = main_camera.single_mut() else {
        return;
    };

    let Some(target) = highest_priority(
        room_cameras
            .iter()
            .map(|(camera, transform)| (camera.priority, transform.translation().truncate())),
    ) else {
        return;
    };

    let blend_rate = defaults
        .map(|d| d.camera.blend_rate)
        .unwrap_or(6.0)
        .max(0.0);
    let t = 1.0 - (-blend_rate * time.delta_secs()).exp();

    let current = camera_transform.translation.truncate();
    let next = current.lerp(target, t);
    camera_transform.translation.x = next.x;
    camera_transform.translation.y = next.y;
}
