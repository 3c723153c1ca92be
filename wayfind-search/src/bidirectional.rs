//! Bidirectional Dijkstra path search.

use wayfind_graph::{Graph, NodeId, Weight};

use crate::dijkstra::check_node;
use crate::errors::Result;
use crate::frontier::Frontier;

/// Shortest distance from `start` to `end` by meeting in the middle, or
/// `None` when `end` is unreachable.
///
/// Runs a forward search from `start` over the graph and a backward
/// search from `end` over its transpose, strictly alternating: each round
/// finalizes one node on the forward side, then one on the backward side.
///
/// The searches do not stop when they first touch. A best-complete-path
/// bound is maintained instead, tightened whenever a node is finalized by
/// both sides and whenever a relaxation lands on a node the other side
/// has already labeled; the run ends once the smallest remaining
/// priorities of the two frontiers sum to at least that bound, or once
/// either frontier empties (that side has then finalized everything it
/// can reach, so the bound is final). Stopping any earlier can return a
/// non-optimal distance.
pub fn shortest_distance_bidirectional<W: Weight>(graph: &Graph<W>, start: NodeId, end: NodeId) -> Result<Option<W>> {
    check_node(graph, start)?;
    check_node(graph, end)?;

    if start == end {
        return Ok(Some(W::ZERO));
    }

    let transpose = graph.transpose();
    let mut forward = Side::new(graph, start);
    let mut backward = Side::new(&transpose, end);
    let mut best: Option<W> = None;

    loop {
        match (forward.min_priority(), backward.min_priority(), best) {
            // No remaining pair of frontier entries can beat the bound.
            (Some(fwd), Some(bwd), Some(best)) if !(fwd + bwd < best) => break,
            (Some(_), Some(_), _) => {}
            // One side is exhausted; the bound cannot improve any more.
            _ => break,
        }
        forward.settle_one(&backward, &mut best);
        backward.settle_one(&forward, &mut best);
    }

    Ok(best)
}

/// One direction of the search: its own graph view, distance table,
/// finalized set and frontier.
struct Side<'g, W: Weight> {
    graph: &'g Graph<W>,
    dist: Vec<Option<W>>,
    finalized: Vec<bool>,
    frontier: Frontier<W>,
}

impl<'g, W: Weight> Side<'g, W> {
    fn new(graph: &'g Graph<W>, source: NodeId) -> Self {
        let node_count = graph.node_count();
        let mut side = Side {
            graph,
            dist: vec![None; node_count],
            finalized: vec![false; node_count],
            frontier: Frontier::new(),
        };
        side.dist[source] = Some(W::ZERO);
        side.frontier.push(W::ZERO, source, W::ZERO);
        side
    }

    /// Smallest priority still queued.
    ///
    /// Superseded leftovers can make this smaller than the next actual
    /// finalization, never larger, so the stopping rule stays on the
    /// conservative side.
    fn min_priority(&self) -> Option<W> {
        self.frontier.peek_priority()
    }

    /// Pop until one node is finalized (or the frontier is exhausted),
    /// relaxing its outgoing edges and tightening `best` on every meeting
    /// with the other side.
    fn settle_one(&mut self, other: &Side<'_, W>, best: &mut Option<W>) {
        while let Some((_, node, distance)) = self.frontier.pop() {
            if self.dist[node] != Some(distance) {
                continue; // superseded
            }
            self.finalized[node] = true;

            // Meeting node: both sides hold exact distances here.
            if other.finalized[node] {
                if let Some(other_distance) = other.dist[node] {
                    tighten(best, distance + other_distance);
                }
            }

            for edge in self.graph.neighbors(node) {
                let candidate = distance + edge.weight;
                let improved = match self.dist[edge.to] {
                    Some(current) => candidate < current,
                    None => true,
                };
                if improved {
                    self.dist[edge.to] = Some(candidate);
                    self.frontier.push(candidate, edge.to, candidate);
                    // A complete path through this edge: exact on our side
                    // up to `node`, the other side's best label from
                    // `edge.to` on. Meeting-node checks alone miss paths
                    // that cross between the frontiers over a single long
                    // edge whose endpoints are each finalized by one side
                    // only, so the bound must be tightened here as well.
                    if let Some(other_distance) = other.dist[edge.to] {
                        tighten(best, candidate + other_distance);
                    }
                }
            }
            return;
        }
    }
}

/// Lower `best` to `candidate` if it improves the bound.
fn tighten<W: Weight>(best: &mut Option<W>, candidate: W) {
    match *best {
        Some(current) if !(candidate < current) => {}
        _ => *best = Some(candidate),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dijkstra::shortest_path;
    use crate::errors::SearchError;
    use wayfind_graph::Edge;

    fn graph(adjacency: Vec<Vec<(NodeId, f64)>>) -> Graph<f64> {
        let adjacency = adjacency
            .into_iter()
            .map(|links| links.into_iter().map(|(to, weight)| Edge::new(to, weight)).collect())
            .collect();
        Graph::new(adjacency).expect("invalid test graph")
    }

    #[test]
    fn test_basic_distance() {
        let g = graph(vec![
            vec![(1, 4.0), (2, 1.0)],
            vec![(3, 1.0)],
            vec![(1, 2.0), (3, 5.0)],
            vec![],
        ]);
        assert_eq!(shortest_distance_bidirectional(&g, 0, 3).expect("search failed"), Some(4.0));
    }

    #[test]
    fn test_start_equals_end() {
        let g = graph(vec![vec![(1, 5.0)], vec![(0, 5.0)]]);
        assert_eq!(shortest_distance_bidirectional(&g, 1, 1).expect("search failed"), Some(0.0));
    }

    #[test]
    fn test_unreachable() {
        let g = graph(vec![vec![(1, 5.0)], vec![], vec![]]);
        assert_eq!(shortest_distance_bidirectional(&g, 0, 2).expect("search failed"), None);
    }

    #[test]
    fn test_respects_edge_direction() {
        // 2 reaches 0 but not the other way around.
        let g = graph(vec![vec![(1, 1.0)], vec![], vec![(0, 1.0)]]);
        assert_eq!(shortest_distance_bidirectional(&g, 2, 1).expect("search failed"), Some(2.0));
        assert_eq!(shortest_distance_bidirectional(&g, 0, 2).expect("search failed"), None);
    }

    #[test]
    fn test_optimal_path_crossing_a_long_middle_edge() {
        // Optimal route 0 -> 1 -> 2 -> 3 costs 12 but its middle edge is
        // long, so the fringes meet first at the decoy node 4 (13 in
        // total). A stopping rule that only considers nodes settled by
        // both sides would report 13 here.
        let g = graph(vec![
            vec![(1, 1.0), (4, 6.5)],
            vec![(2, 10.0)],
            vec![(3, 1.0)],
            vec![],
            vec![(3, 6.5)],
        ]);
        assert_eq!(shortest_distance_bidirectional(&g, 0, 3).expect("search failed"), Some(12.0));
    }

    #[test]
    fn test_matches_unidirectional_search() {
        let g = graph(vec![
            vec![(1, 7.0), (2, 9.0), (5, 14.0)],
            vec![(0, 7.0), (2, 10.0), (3, 15.0)],
            vec![(0, 9.0), (1, 10.0), (3, 11.0), (5, 2.0)],
            vec![(1, 15.0), (2, 11.0), (4, 6.0)],
            vec![(3, 6.0), (5, 9.0)],
            vec![(0, 14.0), (2, 2.0), (4, 9.0)],
        ]);
        for start in 0..g.node_count() {
            for end in 0..g.node_count() {
                let expected = shortest_path(&g, start, end).expect("search failed").map(|(_, d)| d);
                let actual = shortest_distance_bidirectional(&g, start, end).expect("search failed");
                assert_eq!(actual, expected, "mismatch for pair {} -> {}", start, end);
            }
        }
    }

    #[test]
    fn test_node_not_found() {
        let g = graph(vec![vec![]]);
        assert_eq!(
            shortest_distance_bidirectional(&g, 0, 7).unwrap_err(),
            SearchError::NodeNotFound { node: 7, node_count: 1 }
        );
    }
}
