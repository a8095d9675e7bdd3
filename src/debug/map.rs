//! Debug domain: text renderings of the current dungeon.

use bevy::prelude::IVec2;
use serde::Serialize;

use crate::enemies::EnemyRegistry;
use crate::rooms::{Direction, NodeId, RoomNode, RoomTransitionController};

/// Renders the dungeon as a grid, north at the top.
///
/// `@` marks the current room, `x` a cleared room, and every other room shows
/// its rank (capped at 9). `-` and `|` are doorways.
pub fn render_ascii_map(controller: &RoomTransitionController) -> String {
    let graph = controller.graph();
    let (min, max) = graph.bounds();
    let mut lines = Vec::new();

    for y in (min.y..=max.y).rev() {
        let mut rooms = String::new();
        let mut doors = String::new();
        for x in min.x..=max.x {
            let id = graph.node_at(IVec2::new(x, y)).ok();
            let node = id.and_then(|id| graph.node(id));

            rooms.push(match (id, node) {
                (Some(id), Some(node)) => room_char(controller, id, node),
                _ => ' ',
            });
            doors.push(
                if node.is_some_and(|n| n.neighbor(Direction::South).is_some()) {
                    '|'
                } else {
                    ' '
                },
            );

            if x < max.x {
                rooms.push(
                    if node.is_some_and(|n| n.neighbor(Direction::East).is_some()) {
                        '-'
                    } else {
                        ' '
                    },
                );
                doors.push(' ');
            }
        }
        lines.push(rooms.trim_end().to_string());
        if y > min.y {
            lines.push(doors.trim_end().to_string());
        }
    }

    lines.join("\n")
}

fn room_char(controller: &RoomTransitionController, id: NodeId, node: &RoomNode) -> char {
    if controller.current() == Some(id) {
        '@'
    } else if controller
        .instance(id)
        .is_some_and(|instance| instance.is_cleared())
    {
        'x'
    } else {
        char::from_digit(node.rank().min(9), 10).unwrap_or('#')
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RoomSnapshot {
    pub coord: [i32; 2],
    pub rank: u32,
    pub status: String,
    pub alive_enemies: u32,
    pub cleared: bool,
    /// Archetype id and count for every archetype present.
    pub composition: Vec<(String, u32)>,
    pub doors: Vec<Direction>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DungeonSnapshot {
    pub seed: u64,
    pub current: Option<[i32; 2]>,
    pub rooms: Vec<RoomSnapshot>,
}

pub fn snapshot(
    controller: &RoomTransitionController,
    registry: &EnemyRegistry,
    seed: u64,
) -> DungeonSnapshot {
    let graph = controller.graph();
    let rooms = graph
        .iter()
        .map(|(id, node)| {
            let instance = controller.instance(id);
            RoomSnapshot {
                coord: node.coord().to_array(),
                rank: node.rank(),
                status: format!("{:?}", controller.status(id)),
                alive_enemies: instance.map(|i| i.alive_enemies()).unwrap_or(0),
                cleared: instance.is_some_and(|i| i.is_cleared()),
                composition: node
                    .composition()
                    .iter()
                    .map(|(index, count)| {
                        let id = registry
                            .entry(index)
                            .map(|entry| entry.id.clone())
                            .unwrap_or_else(|| format!("#{index}"));
                        (id, count)
                    })
                    .collect(),
                doors: node.neighbors().map(|(direction, _)| direction).collect(),
            }
        })
        .collect();

    DungeonSnapshot {
        seed,
        current: controller
            .current_node()
            .map(|node| node.coord().to_array()),
        rooms,
    }
}
