//! Dijkstra path search implementation.

use wayfind_graph::{Graph, NodeId, Weight};

use crate::errors::{Result, SearchError};
use crate::frontier::Frontier;
use crate::heuristics;
use crate::path::reconstruct;

/// Working state left behind by one relaxation run.
pub(crate) struct SearchState<W> {
    /// Best known distance per node, `None` while unreached.
    pub(crate) dist: Vec<Option<W>>,
    /// Predecessor per node on its best known path.
    pub(crate) prev: Vec<Option<NodeId>>,
}

/// Shortest distances from `start` to every node of the graph.
///
/// The returned vector is indexed by node id; `None` marks nodes that are
/// not reachable from `start`.
pub fn shortest_distances<W: Weight>(graph: &Graph<W>, start: NodeId) -> Result<Vec<Option<W>>> {
    check_node(graph, start)?;
    let state = relax(graph, start, None, heuristics::zero);
    Ok(state.dist)
}

/// Shortest path from `start` to `end`, or `None` when `end` is unreachable.
///
/// Stops as soon as `end` is finalized instead of exhausting the whole
/// graph. The returned path starts with `start` and ends with `end`; for
/// `start == end` it is the single-node path with distance zero.
pub fn shortest_path<W: Weight>(graph: &Graph<W>, start: NodeId, end: NodeId) -> Result<Option<(Vec<NodeId>, W)>> {
    check_node(graph, start)?;
    check_node(graph, end)?;
    let state = relax(graph, start, Some(end), heuristics::zero);
    Ok(path_to(&state, start, end))
}

/// Fail with `NodeNotFound` unless `node` belongs to the graph.
pub(crate) fn check_node<W: Weight>(graph: &Graph<W>, node: NodeId) -> Result<()> {
    if graph.contains(node) {
        Ok(())
    } else {
        Err(SearchError::NodeNotFound { node, node_count: graph.node_count() })
    }
}

/// Turn a finished run into the `(path, distance)` answer for `end`.
pub(crate) fn path_to<W: Weight>(state: &SearchState<W>, start: NodeId, end: NodeId) -> Option<(Vec<NodeId>, W)> {
    state.dist[end].map(|distance| (reconstruct(&state.prev, start, end), distance))
}

/// The relaxation core shared by Dijkstra and A*.
///
/// With a `target`, frontier priorities are `g + heuristic(node, target)`
/// and the run stops once the target is finalized; Dijkstra is the same
/// run under the zero heuristic. Without a target the heuristic is unused
/// and the run continues until the frontier is exhausted.
///
/// Nodes finalize in non-decreasing order of final distance (of `g + h`
/// for a consistent heuristic), which is what makes the early exit on the
/// first authoritative pop of the target sound.
pub(crate) fn relax<W, H>(graph: &Graph<W>, start: NodeId, target: Option<NodeId>, heuristic: H) -> SearchState<W>
where
    W: Weight,
    H: Fn(NodeId, NodeId) -> W,
{
    let node_count = graph.node_count();
    let mut dist: Vec<Option<W>> = vec![None; node_count];
    let mut prev: Vec<Option<NodeId>> = vec![None; node_count];
    let mut frontier = Frontier::new();

    dist[start] = Some(W::ZERO);
    let start_priority = match target {
        Some(goal) => heuristic(start, goal),
        None => W::ZERO,
    };
    frontier.push(start_priority, start, W::ZERO);

    while let Some((_, node, distance)) = frontier.pop() {
        // A pop whose distance no longer matches the table is superseded
        // by a later improvement and must be skipped, not re-finalized.
        if dist[node] != Some(distance) {
            continue;
        }

        if target == Some(node) {
            break;
        }

        for edge in graph.neighbors(node) {
            let candidate = distance + edge.weight;
            let improved = match dist[edge.to] {
                Some(current) => candidate < current,
                None => true,
            };
            if improved {
                if let Some(goal) = target {
                    debug_assert!(
                        !(W::ZERO > heuristic(edge.to, goal)),
                        "negative heuristic at node {}",
                        edge.to
                    );
                    debug_assert!(
                        !(heuristic(node, goal) > edge.weight + heuristic(edge.to, goal)),
                        "inconsistent heuristic across edge {} -> {}",
                        node,
                        edge.to
                    );
                }
                dist[edge.to] = Some(candidate);
                prev[edge.to] = Some(node);
                let priority = match target {
                    Some(goal) => candidate + heuristic(edge.to, goal),
                    None => candidate,
                };
                frontier.push(priority, edge.to, candidate);
            }
        }
    }

    SearchState { dist, prev }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wayfind_graph::Edge;

    fn graph(adjacency: Vec<Vec<(NodeId, f64)>>) -> Graph<f64> {
        let adjacency = adjacency
            .into_iter()
            .map(|links| links.into_iter().map(|(to, weight)| Edge::new(to, weight)).collect())
            .collect();
        Graph::new(adjacency).expect("invalid test graph")
    }

    #[test]
    fn test_shortest_distances() {
        let g = graph(vec![
            vec![(1, 4.0), (2, 1.0)],
            vec![(3, 1.0)],
            vec![(1, 2.0), (3, 5.0)],
            vec![],
        ]);
        let dist = shortest_distances(&g, 0).expect("search failed");
        assert_eq!(dist, vec![Some(0.0), Some(3.0), Some(1.0), Some(4.0)]);
    }

    #[test]
    fn test_shortest_distances_unreachable_is_none() {
        let g = graph(vec![vec![(1, 5.0)], vec![], vec![]]);
        let dist = shortest_distances(&g, 0).expect("search failed");
        assert_eq!(dist, vec![Some(0.0), Some(5.0), None]);
    }

    #[test]
    fn test_shortest_path() {
        let g = graph(vec![
            vec![(1, 4.0), (2, 1.0)],
            vec![(3, 1.0)],
            vec![(1, 2.0), (3, 5.0)],
            vec![],
        ]);
        let (path, distance) = shortest_path(&g, 0, 3).expect("search failed").expect("no path");
        assert_eq!(path, vec![0, 2, 1, 3]);
        assert_eq!(distance, 4.0);
    }

    #[test]
    fn test_shortest_path_prefers_later_improvement() {
        // Node 1 is first labeled at 4.0 via the direct edge, then improved
        // to 3.0 through node 2, leaving a superseded frontier entry behind.
        let g = graph(vec![
            vec![(1, 4.0), (2, 1.0)],
            vec![],
            vec![(1, 2.0)],
        ]);
        let (path, distance) = shortest_path(&g, 0, 1).expect("search failed").expect("no path");
        assert_eq!(path, vec![0, 2, 1]);
        assert_eq!(distance, 3.0);
    }

    #[test]
    fn test_no_path() {
        let g = graph(vec![vec![(1, 5.0)], vec![], vec![]]);
        assert_eq!(shortest_path(&g, 0, 2).expect("search failed"), None);
    }

    #[test]
    fn test_self_pair() {
        let g = graph(vec![vec![(1, 5.0)], vec![(0, 5.0)], vec![]]);
        let (path, distance) = shortest_path(&g, 1, 1).expect("search failed").expect("no path");
        assert_eq!(path, vec![1]);
        assert_eq!(distance, 0.0);
    }

    #[test]
    fn test_zero_weight_edges() {
        let g = graph(vec![vec![(1, 0.0)], vec![(2, 0.0)], vec![]]);
        let dist = shortest_distances(&g, 0).expect("search failed");
        assert_eq!(dist, vec![Some(0.0), Some(0.0), Some(0.0)]);
    }

    #[test]
    fn test_node_not_found() {
        let g = graph(vec![vec![]]);
        assert_eq!(
            shortest_distances(&g, 5).unwrap_err(),
            SearchError::NodeNotFound { node: 5, node_count: 1 }
        );
        assert_eq!(
            shortest_path(&g, 0, 9).unwrap_err(),
            SearchError::NodeNotFound { node: 9, node_count: 1 }
        );
    }

    #[test]
    fn test_early_exit_matches_full_run() {
        let g = graph(vec![
            vec![(1, 7.0), (2, 9.0), (5, 14.0)],
            vec![(0, 7.0), (2, 10.0), (3, 15.0)],
            vec![(0, 9.0), (1, 10.0), (3, 11.0), (5, 2.0)],
            vec![(1, 15.0), (2, 11.0), (4, 6.0)],
            vec![(3, 6.0), (5, 9.0)],
            vec![(0, 14.0), (2, 2.0), (4, 9.0)],
        ]);
        let full = shortest_distances(&g, 0).expect("search failed");
        for end in 0..g.node_count() {
            let found = shortest_path(&g, 0, end).expect("search failed");
            assert_eq!(found.map(|(_, d)| d), full[end]);
        }
    }
}
