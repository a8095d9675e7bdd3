//! Rooms domain: graph vertices.

use bevy::prelude::*;

use crate::enemies::Composition;
use crate::rooms::direction::Direction;

/// Index of a room inside its [`RoomGraph`](crate::rooms::RoomGraph).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A room in the dungeon graph. Structure and composition are fixed once the
/// graph is built; only the live instance varies afterwards.
#[derive(Debug, Clone)]
pub struct RoomNode {
    coord: IVec2,
    rank: u32,
    neighbors: [Option<NodeId>; Direction::COUNT],
    composition: Composition,
}

impl RoomNode {
    pub(crate) fn new(coord: IVec2, rank: u32, composition: Composition) -> Self {
        Self {
            coord,
            rank,
            neighbors: [None; Direction::COUNT],
            composition,
        }
    }

    pub fn coord(&self) -> IVec2 {
        self.coord
    }

    pub fn rank(&self) -> u32 {
        self.rank
    }

    pub fn composition(&self) -> &Composition {
        &self.composition
    }

    pub fn neighbor(&self, direction: Direction) -> Option<NodeId> {
        self.neighbors[direction.ordinal()]
    }

    /// Linked neighbors as `(direction, node)`.
    pub fn neighbors(&self) -> impl Iterator<Item = (Direction, NodeId)> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(|direction| self.neighbor(direction).map(|id| (direction, id)))
    }

    pub(crate) fn set_neighbor(&mut self, direction: Direction, node: NodeId) {
        self.neighbors[direction.ordinal()] = Some(node);
    }
}
