//! Heuristic functions for A* search.
//!
//! A heuristic estimates the remaining distance from a node to the goal.
//! The engine requires it to be admissible (never overestimating the true
//! remaining distance) and relies on consistency across edges for the
//! first-pop-of-goal-is-optimal early exit. Both are the caller's
//! responsibility; debug builds spot-check consistency along explored
//! edges. When no domain estimate is available, [`zero`] is the valid
//! fallback and turns A* into plain Dijkstra.

use wayfind_graph::{NodeId, Weight};

/// The zero heuristic: no guidance, A* degrades to Dijkstra.
pub fn zero<W: Weight>(_node: NodeId, _goal: NodeId) -> W {
    W::ZERO
}

/// Manhattan distance for graphs whose node ids enumerate a grid of the
/// given width row by row (`node = row * width + column`).
///
/// Admissible and consistent as long as every move between adjacent cells
/// costs at least 1. The width belongs to the caller's node numbering,
/// not to the engine.
pub fn grid_manhattan(width: usize) -> impl Fn(NodeId, NodeId) -> f64 {
    move |node, goal| {
        let (node_row, node_col) = (node / width, node % width);
        let (goal_row, goal_col) = (goal / width, goal % width);
        let rows = if node_row > goal_row { node_row - goal_row } else { goal_row - node_row };
        let cols = if node_col > goal_col { node_col - goal_col } else { goal_col - node_col };
        (rows + cols) as f64
    }
}

#[test]
fn test_zero() {
    assert_eq!(zero::<f64>(3, 7), 0.0);
    assert_eq!(zero::<u32>(0, 0), 0);
}

#[test]
fn test_grid_manhattan() {
    let h = grid_manhattan(10);
    assert_eq!(h(0, 0), 0.0);
    assert_eq!(h(0, 9), 9.0);
    assert_eq!(h(0, 99), 18.0);
    assert_eq!(h(23, 45), 4.0);
    assert_eq!(h(45, 23), 4.0);
}
