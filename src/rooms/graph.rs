//! Rooms domain: room graph construction and traversal.

use std::collections::HashMap;

use bevy::prelude::*;
use thiserror::Error;

use crate::enemies::{CompositionSelector, EnemyRegistry, RandomIndexSource, SelectionError};
use crate::rooms::direction::Direction;
use crate::rooms::layout::DungeonLayout;
use crate::rooms::node::{NodeId, RoomNode};

/// Reasons a layout cannot become a graph. Any of these rejects the whole
/// build; a partial graph is never returned.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("dungeon layout has no rooms")]
    EmptyLayout,
    #[error("coordinate {0} is occupied more than once")]
    DuplicateCoordinate(IVec2),
    #[error("room at {coord} has negative rank {rank}")]
    NegativeRank { coord: IVec2, rank: i32 },
    #[error("start coordinate {0} is not an occupied room")]
    StartNotOccupied(IVec2),
    #[error("room at {coord} links {direction:?} without a matching link back")]
    AsymmetricAdjacency { coord: IVec2, direction: Direction },
    #[error(transparent)]
    Selection(#[from] SelectionError),
}

/// A lookup that found nothing. Dungeon edges are expected, so callers treat
/// this as "no transition" rather than a failure.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("no room at {0}")]
pub struct LookupMiss(pub IVec2);

#[derive(Debug, Clone)]
pub struct RoomGraph {
    nodes: Vec<RoomNode>,
    by_coord: HashMap<IVec2, NodeId>,
    start: NodeId,
}

impl RoomGraph {
    /// Builds every room of `layout`, fixes each room's composition, and links
    /// orthogonal neighbours in both directions.
    pub fn build<R: RandomIndexSource + ?Sized>(
        layout: &DungeonLayout,
        registry: &EnemyRegistry,
        rng: &mut R,
    ) -> Result<Self, GraphError> {
        if layout.cells.is_empty() {
            return Err(GraphError::EmptyLayout);
        }

        let selector = CompositionSelector::new(registry);
        let mut nodes = Vec::with_capacity(layout.cells.len());
        let mut by_coord = HashMap::with_capacity(layout.cells.len());

        for cell in &layout.cells {
            if by_coord.contains_key(&cell.coord) {
                return Err(GraphError::DuplicateCoordinate(cell.coord));
            }
            let rank = u32::try_from(cell.rank).map_err(|_| GraphError::NegativeRank {
                coord: cell.coord,
                rank: cell.rank,
            })?;

            let composition = selector.select(cell.rank, rng)?;
            let id = NodeId(nodes.len());
            nodes.push(RoomNode::new(cell.coord, rank, composition));
            by_coord.insert(cell.coord, id);
        }

        let start = by_coord
            .get(&layout.start)
            .copied()
            .ok_or(GraphError::StartNotOccupied(layout.start))?;

        let mut graph = Self {
            nodes,
            by_coord,
            start,
        };
        graph.link_adjacent();
        graph.verify_symmetry()?;

        info!(
            "[DUNGEON] Built room graph: {} rooms, start at {}",
            graph.len(),
            layout.start
        );

        Ok(graph)
    }

    /// Each adjacent pair is discovered once, from its west or south member,
    /// and linked on both sides in the same step.
    fn link_adjacent(&mut self) {
        for index in 0..self.nodes.len() {
            let coord = self.nodes[index].coord();
            for direction in [Direction::East, Direction::North] {
                if let Some(&other) = self.by_coord.get(&(coord + direction.to_vector())) {
                    self.link(NodeId(index), other, direction);
                }
            }
        }
    }

    fn link(&mut self, from: NodeId, to: NodeId, direction: Direction) {
        self.nodes[from.0].set_neighbor(direction, to);
        self.nodes[to.0].set_neighbor(direction.inverse(), from);
    }

    pub fn verify_symmetry(&self) -> Result<(), GraphError> {
        for (index, node) in self.nodes.iter().enumerate() {
            for (direction, other) in node.neighbors() {
                let back = self
                    .nodes
                    .get(other.0)
                    .and_then(|other| other.neighbor(direction.inverse()));
                if back != Some(NodeId(index)) {
                    return Err(GraphError::AsymmetricAdjacency {
                        coord: node.coord(),
                        direction,
                    });
                }
            }
        }
        Ok(())
    }

    pub fn start(&self) -> NodeId {
        self.start
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn node(&self, id: NodeId) -> Option<&RoomNode> {
        self.nodes.get(id.0)
    }

    pub fn node_at(&self, coord: IVec2) -> Result<NodeId, LookupMiss> {
        self.by_coord.get(&coord).copied().ok_or(LookupMiss(coord))
    }

    /// `None` at the edge of the dungeon.
    pub fn neighbor(&self, id: NodeId, direction: Direction) -> Option<NodeId> {
        self.node(id).and_then(|node| node.neighbor(direction))
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &RoomNode)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(index, node)| (NodeId(index), node))
    }

    /// Smallest and largest occupied coordinates.
    pub fn bounds(&self) -> (IVec2, IVec2) {
        self.nodes.iter().fold(
            (IVec2::splat(i32::MAX), IVec2::splat(i32::MIN)),
            |(min, max), node| (min.min(node.coord()), max.max(node.coord())),
        )
    }
}
