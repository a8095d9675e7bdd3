//! Rooms domain: generation-time layouts consumed by the room graph.

use std::collections::{HashMap, HashSet, VecDeque};

use bevy::prelude::*;
use rand::Rng;

use crate::content::LayoutParams;
use crate::rooms::direction::Direction;

/// One occupied grid cell and the rank budget assigned to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutCell {
    pub coord: IVec2,
    pub rank: i32,
}

/// Occupied coordinates for a single dungeon, plus where the player starts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DungeonLayout {
    pub start: IVec2,
    pub cells: Vec<LayoutCell>,
}

impl DungeonLayout {
    pub fn new(start: IVec2) -> Self {
        Self {
            start,
            cells: Vec::new(),
        }
    }

    pub fn with_room(mut self, coord: IVec2, rank: i32) -> Self {
        self.cells.push(LayoutCell { coord, rank });
        self
    }
}

/// Carves a connected layout by random walk from the origin.
///
/// Rooms further from the start (in steps through occupied cells) receive
/// larger budgets; the start room always has rank 0.
pub fn carve_random_walk<R: Rng + ?Sized>(params: &LayoutParams, rng: &mut R) -> DungeonLayout {
    let target = params.room_count.max(1) as usize;
    let max_steps = target.saturating_mul(64);

    let mut order = vec![IVec2::ZERO];
    let mut occupied = HashSet::from([IVec2::ZERO]);
    let mut cursor = IVec2::ZERO;
    let mut steps = 0;

    while order.len() < target && steps < max_steps {
        let direction = Direction::from_ordinal(rng.random_range(0..Direction::COUNT));
        cursor += direction.to_vector();
        if occupied.insert(cursor) {
            order.push(cursor);
        }
        steps += 1;
    }

    let distances = distances_from(IVec2::ZERO, &occupied);

    let mut layout = DungeonLayout::new(IVec2::ZERO);
    for coord in order {
        let distance = distances.get(&coord).copied().unwrap_or(0);
        let rank = distance.saturating_mul(params.rank_per_step).min(params.max_rank);
        layout = layout.with_room(coord, i32::try_from(rank).unwrap_or(i32::MAX));
    }
    layout
}

/// Breadth-first step counts from `start` through occupied cells.
fn distances_from(start: IVec2, occupied: &HashSet<IVec2>) -> HashMap<IVec2, u32> {
    let mut distances = HashMap::from([(start, 0)]);
    let mut queue = VecDeque::from([start]);

    while let Some(coord) = queue.pop_front() {
        let next_distance = distances[&coord] + 1;
        for direction in Direction::ALL {
            let neighbor = coord + direction.to_vector();
            if occupied.contains(&neighbor) && !distances.contains_key(&neighbor) {
                distances.insert(neighbor, next_distance);
                queue.push_back(neighbor);
            }
        }
    }

    distances
}
