//! Rooms domain: cardinal directions on the dungeon grid.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Cardinal direction between grid cells.
///
/// Discriminants are chosen so that horizontal directions have even
/// ordinals and opposite directions are two steps apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, Reflect)]
#[repr(u8)]
pub enum Direction {
    East = 0,
    North = 1,
    West = 2,
    South = 3,
}

impl Direction {
    pub const COUNT: usize = 4;

    pub const ALL: [Direction; Self::COUNT] = [
        Direction::East,
        Direction::North,
        Direction::West,
        Direction::South,
    ];

    pub fn ordinal(self) -> usize {
        self as usize
    }

    pub fn from_ordinal(ordinal: usize) -> Direction {
        Self::ALL[ordinal % Self::COUNT]
    }

    /// The direction rotated by 180 degrees.
    pub fn inverse(self) -> Direction {
        Self::from_ordinal(self.ordinal() + 2)
    }

    pub fn is_horizontal(self) -> bool {
        self.ordinal() % 2 == 0
    }

    /// Unit grid offset, with north as +y.
    pub fn to_vector(self) -> IVec2 {
        match self {
            Direction::East => IVec2::X,
            Direction::North => IVec2::Y,
            Direction::West => IVec2::NEG_X,
            Direction::South => IVec2::NEG_Y,
        }
    }

    /// Converts a grid offset back into a direction.
    ///
    /// Only axis-aligned, non-zero offsets are meaningful. Anything else is
    /// logged and resolved by sign: the x axis wins, then the y axis, and a
    /// zero vector falls back to south.
    pub fn from_vector(offset: IVec2) -> Direction {
        if (offset.x != 0 && offset.y != 0) || offset == IVec2::ZERO {
            warn!("[DIRECTION] Unsupported direction vector {}", offset);
        }

        if offset.x != 0 {
            if offset.x > 0 {
                Direction::East
            } else {
                Direction::West
            }
        } else if offset.y > 0 {
            Direction::North
        } else {
            Direction::South
        }
    }
}
