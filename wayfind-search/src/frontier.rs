//! Frontier for the Dijkstra algorithm.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use wayfind_graph::{NodeId, Weight};

/// Frontier for the Dijkstra algorithm.
///
/// A minimum-priority queue without decrease-key: superseding an entry
/// means pushing a fresh one, leaving the old entry in place. Callers
/// filter superseded entries at pop time by comparing the popped
/// `distance` against their authoritative distance table. This keeps the
/// heap simple at the cost of holding up to one entry per relaxation.
///
/// Equal priorities pop in insertion order, so runs are reproducible.
pub(crate) struct Frontier<W: Weight> {
    heap: BinaryHeap<Reverse<Entry<W>>>,
    seq: u64,
}

/// One queued candidate.
///
/// `priority` orders the queue; `distance` is the distance-from-source
/// generation the entry was pushed with (for plain Dijkstra the two are
/// equal, for A* the priority also carries the heuristic estimate).
struct Entry<W> {
    priority: W,
    seq: u64,
    node: NodeId,
    distance: W,
}

impl<W: Weight> Frontier<W> {
    /// Create new empty instance.
    pub fn new() -> Frontier<W> {
        Frontier {
            heap: BinaryHeap::new(),
            seq: 0,
        }
    }

    /// Queue a node under the given priority.
    pub fn push(&mut self, priority: W, node: NodeId, distance: W) {
        let seq = self.seq;
        self.seq += 1;
        self.heap.push(Reverse(Entry { priority, seq, node, distance }));
    }

    /// Extract the entry with the least priority.
    pub fn pop(&mut self) -> Option<(W, NodeId, W)> {
        self.heap.pop().map(|Reverse(e)| (e.priority, e.node, e.distance))
    }

    /// Least priority still queued, if any.
    pub fn peek_priority(&self) -> Option<W> {
        self.heap.peek().map(|Reverse(e)| e.priority)
    }
}

// Ordering deliberately ignores the payload: entries compare by priority,
// then by insertion sequence.

impl<W: Weight> Ord for Entry<W> {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.priority.ord_key(), self.seq).cmp(&(other.priority.ord_key(), other.seq))
    }
}

impl<W: Weight> PartialOrd for Entry<W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<W: Weight> PartialEq for Entry<W> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<W: Weight> Eq for Entry<W> {}

#[test]
fn test_push_pop() {
    let mut f = Frontier::new();
    assert_eq!(f.pop(), None);

    f.push(1.0, 7, 1.0);
    assert_eq!(f.pop(), Some((1.0, 7, 1.0)));
    assert_eq!(f.pop(), None);

    f.push(1.0, 1, 1.0);
    f.push(2.0, 2, 2.0);
    assert_eq!(f.pop(), Some((1.0, 1, 1.0)));
    assert_eq!(f.pop(), Some((2.0, 2, 2.0)));
    assert_eq!(f.pop(), None);

    f.push(2.0, 1, 2.0);
    f.push(1.0, 2, 1.0);
    assert_eq!(f.pop(), Some((1.0, 2, 1.0)));
    assert_eq!(f.pop(), Some((2.0, 1, 2.0)));
    assert_eq!(f.pop(), None);
}

#[test]
fn test_ties_pop_in_insertion_order() {
    let mut f = Frontier::new();
    f.push(1.0, 5, 1.0);
    f.push(1.0, 3, 1.0);
    f.push(1.0, 9, 1.0);
    assert_eq!(f.pop(), Some((1.0, 5, 1.0)));
    assert_eq!(f.pop(), Some((1.0, 3, 1.0)));
    assert_eq!(f.pop(), Some((1.0, 9, 1.0)));
    assert_eq!(f.pop(), None);
}

#[test]
fn test_superseded_entries_coexist() {
    // No decrease-key: pushing an improvement leaves the old entry queued.
    let mut f = Frontier::new();
    f.push(5.0, 3, 5.0);
    f.push(2.0, 3, 2.0);
    assert_eq!(f.pop(), Some((2.0, 3, 2.0)));
    assert_eq!(f.pop(), Some((5.0, 3, 5.0)));
    assert_eq!(f.pop(), None);
}

#[test]
fn test_peek_priority() {
    let mut f = Frontier::new();
    assert_eq!(f.peek_priority(), None);
    f.push(4.0, 1, 4.0);
    f.push(2.5, 2, 2.5);
    assert_eq!(f.peek_priority(), Some(2.5));
    f.pop();
    assert_eq!(f.peek_priority(), Some(4.0));
}

#[test]
fn test_priority_differs_from_distance() {
    // A* pushes `g + h` as priority while carrying plain `g` as distance.
    let mut f = Frontier::new();
    f.push(10.0, 1, 4.0);
    f.push(3.0, 2, 3.0);
    assert_eq!(f.pop(), Some((3.0, 2, 3.0)));
    assert_eq!(f.pop(), Some((10.0, 1, 4.0)));
}
