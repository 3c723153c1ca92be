//! Path reconstruction from predecessor maps.

use wayfind_graph::NodeId;

/// Walk the predecessor map back from `end` and return the node sequence
/// `start ..= end`.
///
/// Only call this for an `end` the search has actually reached; the caller
/// reports an unreached target as an absent result instead. A predecessor
/// map from a single search run always leads back to its start and never
/// cycles.
pub(crate) fn reconstruct(prev: &[Option<NodeId>], start: NodeId, end: NodeId) -> Vec<NodeId> {
    let mut path = vec![end];
    let mut node = end;
    while let Some(parent) = prev[node] {
        debug_assert!(path.len() <= prev.len(), "cycle in predecessor map");
        path.push(parent);
        node = parent;
    }
    debug_assert_eq!(node, start, "predecessor walk ended away from the start");
    path.reverse();
    path
}

#[test]
fn test_reconstruct_chain() {
    // 0 -> 2 -> 1 -> 3
    let prev = vec![None, Some(2), Some(0), Some(1)];
    assert_eq!(reconstruct(&prev, 0, 3), vec![0, 2, 1, 3]);
    assert_eq!(reconstruct(&prev, 0, 2), vec![0, 2]);
}

#[test]
fn test_reconstruct_self() {
    let prev = vec![None, None];
    assert_eq!(reconstruct(&prev, 1, 1), vec![1]);
}
