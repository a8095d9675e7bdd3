//! Data definitions for the RON content files.
//!
//! These structs mirror the structure in assets/data/*.ron and are used
//! for deserialization.

use std::time::Duration;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

// ============================================================================
// Common wrapper for RON files with schema_version and items
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DataFile<T> {
    pub schema_version: u32,
    pub items: Vec<T>,
}

// ============================================================================
// Enemies (enemies.ron)
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize, Reflect)]
pub struct EnemyDef {
    pub id: String,
    pub name: String,
    /// Cost of placing one of these in a room. Must be positive.
    pub rank: u32,
    pub base_stats: EnemyStatsDef,
    /// sRGB components in 0..=1.
    pub color: (f32, f32, f32),
}

#[derive(Debug, Clone, Deserialize, Serialize, Reflect)]
pub struct EnemyStatsDef {
    pub health: f32,
    pub move_speed: f32,
}

// ============================================================================
// Dungeon defaults (dungeon.ron)
// ============================================================================

#[derive(Resource, Debug, Clone, Deserialize, Serialize, Reflect)]
pub struct DungeonDefaults {
    pub schema_version: u32,
    pub layout: LayoutParams,
    pub room: RoomDefaults,
    pub camera: CameraDefaults,
    pub transition: TransitionDefaults,
    pub cards: CardDefaults,
}

impl Default for DungeonDefaults {
    fn default() -> Self {
        Self {
            schema_version: 1,
            layout: LayoutParams::default(),
            room: RoomDefaults::default(),
            camera: CameraDefaults::default(),
            transition: TransitionDefaults::default(),
            cards: CardDefaults::default(),
        }
    }
}

/// Parameters for the random-walk layout carver.
#[derive(Debug, Clone, Deserialize, Serialize, Reflect)]
pub struct LayoutParams {
    pub room_count: u32,
    /// Rank added per step of distance from the start room.
    pub rank_per_step: u32,
    pub max_rank: u32,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            room_count: 12,
            rank_per_step: 2,
            max_rank: 10,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Reflect)]
pub struct RoomDefaults {
    pub width: f32,
    pub height: f32,
    /// Enemy spawn points are laid out on a grid of this many columns and rows.
    pub spawn_columns: u32,
    pub spawn_rows: u32,
    /// Distance kept between the spawn grid and the room edge.
    pub spawn_margin: f32,
}

impl Default for RoomDefaults {
    fn default() -> Self {
        Self {
            width: 960.0,
            height: 540.0,
            spawn_columns: 4,
            spawn_rows: 3,
            spawn_margin: 120.0,
        }
    }
}

impl RoomDefaults {
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Room-local spawn points, row by row from the bottom left.
    pub fn spawn_points(&self) -> Vec<Vec2> {
        let columns = self.spawn_columns.max(1);
        let rows = self.spawn_rows.max(1);
        let half_extent = (self.size() * 0.5 - Vec2::splat(self.spawn_margin)).max(Vec2::ZERO);

        let step = |index: u32, count: u32, half: f32| {
            if count == 1 {
                0.0
            } else {
                -half + 2.0 * half * index as f32 / (count - 1) as f32
            }
        };

        (0..rows)
            .flat_map(|row| {
                (0..columns).map(move |column| {
                    Vec2::new(
                        step(column, columns, half_extent.x),
                        step(row, rows, half_extent.y),
                    )
                })
            })
            .collect()
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Reflect)]
pub struct CameraDefaults {
    pub in_priority: i32,
    pub out_priority: i32,
    /// Fraction of the remaining distance the camera covers per second.
    pub blend_rate: f32,
}

impl Default for CameraDefaults {
    fn default() -> Self {
        Self {
            in_priority: 10,
            out_priority: 0,
            blend_rate: 6.0,
        }
    }
}

/// Which clock deferred room deactivation is measured on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Reflect, Default)]
pub enum ExitClock {
    /// Affected by time scaling.
    #[default]
    Scaled,
    /// Wall-clock time.
    Unscaled,
}

#[derive(Debug, Clone, Deserialize, Serialize, Reflect)]
pub struct TransitionDefaults {
    pub sleep_delay_secs: f32,
    pub clock: ExitClock,
}

impl Default for TransitionDefaults {
    fn default() -> Self {
        Self {
            sleep_delay_secs: 0.5,
            clock: ExitClock::Scaled,
        }
    }
}

impl TransitionDefaults {
    /// Non-positive or non-finite delays mean "deactivate immediately".
    pub fn sleep_delay(&self) -> Duration {
        Duration::try_from_secs_f32(self.sleep_delay_secs.max(0.0)).unwrap_or_default()
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Reflect)]
pub struct CardDefaults {
    /// Offer a card choice whenever a room is cleared.
    pub choose_cards: bool,
}

impl Default for CardDefaults {
    fn default() -> Self {
        Self { choose_cards: true }
    }
}
