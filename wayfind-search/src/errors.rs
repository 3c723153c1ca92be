use thiserror::Error;

use wayfind_graph::NodeId;

/// Result type alias.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Search precondition error.
///
/// Reachability failures are not errors; an unreachable target is reported
/// as an absent result, never through this type.
#[derive(Error, Copy, Clone, PartialEq, Eq, Debug)]
pub enum SearchError {
    #[error("Node {node} not found (graph has {node_count} nodes)")]
    NodeNotFound { node: NodeId, node_count: usize },
}
