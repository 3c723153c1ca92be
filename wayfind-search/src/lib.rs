//! Shortest path search in weighted directed graphs.
//!
//! Three strategies over one relaxation core: plain Dijkstra (single
//! source or single pair), heuristic-guided A*, and bidirectional Dijkstra
//! for point-to-point distances. All of them take an already validated
//! [`wayfind_graph::Graph`], run synchronously on the calling thread, and
//! own their working state, so one graph can serve any number of
//! concurrent searches.

pub use self::astar::shortest_path_astar;
pub use self::bidirectional::shortest_distance_bidirectional;
pub use self::dijkstra::{shortest_distances, shortest_path};
pub use self::errors::{Result, SearchError};

pub mod heuristics;

mod astar;
mod bidirectional;
mod dijkstra;
mod errors;
mod frontier;
mod path;

#[cfg(test)]
use wayfind_graph::{Edge, Graph, NodeId};

#[cfg(test)]
fn test_graph(adjacency: Vec<Vec<(NodeId, f64)>>) -> Graph<f64> {
    let adjacency = adjacency
        .into_iter()
        .map(|links| links.into_iter().map(|(to, weight)| Edge::new(to, weight)).collect())
        .collect();
    Graph::new(adjacency).expect("invalid test graph")
}

/// Random graph with integer-valued `f64` weights, so distance arithmetic
/// in the tests below stays exact.
#[cfg(test)]
fn random_graph(rng: &mut impl rand::Rng) -> Graph<f64> {
    let node_count = rng.gen_range(2, 24);
    let mut adjacency = Vec::with_capacity(node_count);
    for _ in 0..node_count {
        let degree = rng.gen_range(0, 4);
        let links = (0..degree)
            .map(|_| (rng.gen_range(0, node_count), rng.gen_range(0, 10) as f64))
            .collect();
        adjacency.push(links);
    }
    test_graph(adjacency)
}

#[test]
fn test_search_strategies() {
    let g = test_graph(vec![
        vec![(1, 4.0), (2, 1.0)],
        vec![(3, 1.0)],
        vec![(1, 2.0), (3, 5.0)],
        vec![],
    ]);

    let dist = shortest_distances(&g, 0).expect("search failed");
    assert_eq!(dist, vec![Some(0.0), Some(3.0), Some(1.0), Some(4.0)]);

    let found = shortest_path(&g, 0, 3).expect("search failed");
    assert_eq!(found, Some((vec![0, 2, 1, 3], 4.0)));

    let found = shortest_path_astar(&g, 0, 3, heuristics::zero).expect("search failed");
    assert_eq!(found, Some((vec![0, 2, 1, 3], 4.0)));

    let found = shortest_distance_bidirectional(&g, 0, 3).expect("search failed");
    assert_eq!(found, Some(4.0));
}

#[test]
fn test_triangle_inequality_on_random_graphs() {
    use rand::{rngs::SmallRng, SeedableRng};

    let mut rng = SmallRng::seed_from_u64(2);
    for _ in 0..100 {
        let g = random_graph(&mut rng);
        let dist = shortest_distances(&g, 0).expect("search failed");
        for node in 0..g.node_count() {
            let node_dist = match dist[node] {
                Some(d) => d,
                None => continue,
            };
            for edge in g.neighbors(node) {
                let neighbor_dist = dist[edge.to].expect("relaxed neighbor left unreached");
                assert!(
                    neighbor_dist <= node_dist + edge.weight,
                    "triangle inequality violated on edge {} -> {}",
                    node,
                    edge.to
                );
            }
        }
    }
}

#[test]
fn test_strategies_agree_on_random_graphs() {
    use rand::{rngs::SmallRng, Rng, SeedableRng};

    let mut rng = SmallRng::seed_from_u64(3);
    for _ in 0..100 {
        let g = random_graph(&mut rng);
        let start = rng.gen_range(0, g.node_count());
        let end = rng.gen_range(0, g.node_count());

        let dijkstra = shortest_path(&g, start, end).expect("search failed");
        let astar = shortest_path_astar(&g, start, end, heuristics::zero).expect("search failed");
        let bidirectional = shortest_distance_bidirectional(&g, start, end).expect("search failed");

        let distance = dijkstra.as_ref().map(|(_, d)| *d);
        assert_eq!(astar.as_ref().map(|(_, d)| *d), distance, "A* disagrees for {} -> {}", start, end);
        assert_eq!(bidirectional, distance, "bidirectional disagrees for {} -> {}", start, end);
    }
}

#[test]
fn test_reconstructed_paths_are_edge_valid() {
    use rand::{rngs::SmallRng, Rng, SeedableRng};

    let mut rng = SmallRng::seed_from_u64(4);
    for _ in 0..100 {
        let g = random_graph(&mut rng);
        let start = rng.gen_range(0, g.node_count());
        let end = rng.gen_range(0, g.node_count());

        let (path, distance) = match shortest_path(&g, start, end).expect("search failed") {
            Some(found) => found,
            None => continue,
        };

        assert_eq!(path.first(), Some(&start));
        assert_eq!(path.last(), Some(&end));

        let mut total = 0.0;
        for pair in path.windows(2) {
            let weight = g
                .neighbors(pair[0])
                .iter()
                .filter(|e| e.to == pair[1])
                .map(|e| e.weight)
                .fold(None, |best: Option<f64>, w| match best {
                    Some(b) if b <= w => Some(b),
                    _ => Some(w),
                })
                .expect("path uses a non-existent edge");
            total = total + weight;
        }
        assert_eq!(total, distance, "path weights don't sum to the reported distance");
    }
}
