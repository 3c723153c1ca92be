//! A* heuristic-guided path search.

use wayfind_graph::{Graph, NodeId, Weight};

use crate::dijkstra::{check_node, path_to, relax};
use crate::errors::Result;

/// Shortest path from `start` to `end` guided by a caller-supplied
/// heuristic, or `None` when `end` is unreachable.
///
/// This is the same relaxation core as [`shortest_path`], with frontier
/// priorities of `g + heuristic(node, end)` instead of plain `g`. The
/// heuristic must be a pure function of `(node, goal)` returning a
/// non-negative lower bound on the true remaining distance (admissible);
/// the early exit on the first pop of the goal additionally relies on
/// consistency, `h(u, goal) <= w(u, v) + h(v, goal)` across every edge.
/// Neither can be enforced in general, so both are preconditions; debug
/// builds spot-check them along every explored edge. With
/// [`heuristics::zero`] this search behaves exactly like plain Dijkstra.
///
/// [`shortest_path`]: crate::shortest_path
/// [`heuristics::zero`]: crate::heuristics::zero
///
/// ```rust
/// # use wayfind_graph::{Edge, Graph};
/// # use wayfind_search::{heuristics, shortest_path_astar};
/// let graph = Graph::new(vec![vec![Edge::new(1, 2.0)], vec![]]).unwrap();
/// let found = shortest_path_astar(&graph, 0, 1, heuristics::zero).unwrap();
/// assert_eq!(found, Some((vec![0, 1], 2.0)));
/// ```
pub fn shortest_path_astar<W, H>(
    graph: &Graph<W>,
    start: NodeId,
    end: NodeId,
    heuristic: H,
) -> Result<Option<(Vec<NodeId>, W)>>
where
    W: Weight,
    H: Fn(NodeId, NodeId) -> W,
{
    check_node(graph, start)?;
    check_node(graph, end)?;
    let state = relax(graph, start, Some(end), heuristic);
    Ok(path_to(&state, start, end))
}
