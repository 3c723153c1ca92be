//! Weighted directed graph model.

use serde::{Deserialize, Serialize};

use crate::errors::{GraphError, Result};
use crate::weight::Weight;

/// Node identifier, a dense index in `[0, node_count)`.
///
/// Nodes carry no payload beyond identity; their semantics are the caller's.
pub type NodeId = usize;

/// Directed edge with a non-negative weight.
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Edge<W> {
    pub to: NodeId,
    pub weight: W,
}

impl<W> Edge<W> {
    pub fn new(to: NodeId, weight: W) -> Self {
        Edge { to, weight }
    }
}

/// Immutable weighted directed graph in adjacency list form.
///
/// Validated once at construction; every search assumes a valid graph and
/// performs no further range or weight checks. A `Graph` is read-only
/// afterwards, so any number of concurrent searches may share one instance.
#[derive(Clone, Debug)]
pub struct Graph<W> {
    adjacency: Vec<Vec<Edge<W>>>,
}

impl<W: Weight> Graph<W> {
    /// Build a graph from adjacency lists, one per node, indexed by node id.
    ///
    /// Fails if any edge points outside `[0, node_count)` or carries a
    /// negative or non-finite weight. The relaxation step of every search
    /// relies on non-negative weights, so this is checked here once and
    /// never again.
    pub fn new(adjacency: Vec<Vec<Edge<W>>>) -> Result<Self> {
        let node_count = adjacency.len();
        for (from, links) in adjacency.iter().enumerate() {
            for edge in links.iter() {
                if edge.to >= node_count {
                    return Err(GraphError::EdgeTargetOutOfRange { from, to: edge.to, node_count });
                }
                if !edge.weight.is_valid_weight() {
                    return Err(GraphError::NonFiniteWeight { from, to: edge.to });
                }
                if edge.weight < W::ZERO {
                    return Err(GraphError::NegativeWeight { from, to: edge.to });
                }
            }
        }
        Ok(Graph { adjacency })
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Whether `node` is a valid id for this graph.
    pub fn contains(&self, node: NodeId) -> bool {
        node < self.adjacency.len()
    }

    /// Outgoing edges of `node`, in declaration order.
    ///
    /// Panics if `node` is out of range.
    pub fn neighbors(&self, node: NodeId) -> &[Edge<W>] {
        &self.adjacency[node]
    }

    /// Edge-reversed copy of this graph.
    pub fn transpose(&self) -> Graph<W> {
        let mut adjacency = vec![Vec::new(); self.adjacency.len()];
        for (from, links) in self.adjacency.iter().enumerate() {
            for edge in links.iter() {
                adjacency[edge.to].push(Edge::new(from, edge.weight));
            }
        }
        // Reversal changes no targets or weights, so the result is valid by construction.
        Graph { adjacency }
    }
}
