use thiserror::Error;

use crate::graph::NodeId;

/// Result type alias.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Graph construction error.
#[derive(Error, Copy, Clone, PartialEq, Eq, Debug)]
pub enum GraphError {
    #[error("Edge {from} -> {to} points outside the graph of {node_count} nodes")]
    EdgeTargetOutOfRange { from: NodeId, to: NodeId, node_count: usize },

    #[error("Edge {from} -> {to} has negative weight")]
    NegativeWeight { from: NodeId, to: NodeId },

    #[error("Edge {from} -> {to} has non-finite weight")]
    NonFiniteWeight { from: NodeId, to: NodeId },
}
