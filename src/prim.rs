//! Prim's minimum spanning tree over an adjacency list
//!
//! The tree grows from a single root. A min-priority queue holds the frontier
//! of crossing edges; each pop either attaches a new vertex through the
//! cheapest crossing edge or discards an edge whose far end already joined
//! the tree.
//!
//! Equal-weight candidates are ordered by destination id, then by recency:
//! among candidates for the same vertex with the same weight, the one pushed
//! last wins. This makes every run on the same input produce the same tree.

use log::debug;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::error::{MstError, Result};
use crate::graph::AdjacencyList;

/// Value printed in place of a missing parent
pub const NO_PARENT: i64 = -1;

/// How one vertex attaches to the tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MstEntry {
    pub parent: Option<usize>,
    pub weight: i64,
}

impl MstEntry {
    pub fn attached(parent: usize, weight: i64) -> Self {
        MstEntry {
            parent: Some(parent),
            weight,
        }
    }

    /// Parent id, or `NO_PARENT` for the root and unreached vertices
    pub fn parent_or_sentinel(&self) -> i64 {
        self.parent.map_or(NO_PARENT, |p| p as i64)
    }
}

/// Result of one Prim run: one entry per vertex, indexed by vertex id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanningTree {
    root: usize,
    entries: Vec<MstEntry>,
}

impl SpanningTree {
    pub fn root(&self) -> usize {
        self.root
    }

    pub fn num_vertices(&self) -> usize {
        self.entries.len()
    }

    pub fn entries(&self) -> &[MstEntry] {
        &self.entries
    }

    pub fn entry(&self, vertex: usize) -> MstEntry {
        self.entries[vertex]
    }

    /// (vertex, parent, weight) for every vertex that attached to the tree
    pub fn tree_edges(&self) -> impl Iterator<Item = (usize, usize, i64)> + '_ {
        self.entries
            .iter()
            .enumerate()
            .filter_map(|(v, e)| e.parent.map(|p| (v, p, e.weight)))
    }

    /// Sum of the attaching weights; fails with `WeightOverflow` instead of wrapping
    pub fn total_weight(&self) -> Result<i64> {
        self.tree_edges()
            .try_fold(0i64, |total, (_, _, w)| total.checked_add(w))
            .ok_or(MstError::WeightOverflow)
    }

    /// Non-root vertices the expansion never reached
    pub fn unreached(&self) -> Vec<usize> {
        self.entries
            .iter()
            .enumerate()
            .filter(|&(v, e)| v != self.root && e.parent.is_none())
            .map(|(v, _)| v)
            .collect()
    }

    pub fn is_spanning(&self) -> bool {
        self.tree_edges().count() + 1 == self.num_vertices()
    }

    /// Reject a tree that does not reach every vertex.
    ///
    /// `adjacency` must be the structure the tree was computed from; it is
    /// only consulted to count components for the error.
    pub fn into_complete(self, adjacency: &AdjacencyList) -> Result<Self> {
        let unreached = self.unreached().len();
        if unreached == 0 {
            return Ok(self);
        }
        Err(MstError::IncompleteSpanningTree {
            unreached,
            components: adjacency.count_components(),
        })
    }
}

/// A frontier candidate. Ordered so that `BinaryHeap` pops the cheapest edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Candidate {
    weight: i64,
    destination: usize,
    source: usize,
    seq: u64,
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed on weight and destination for min-heap behaviour;
        // a higher seq (pushed later) ranks first among equals.
        other
            .weight
            .cmp(&self.weight)
            .then_with(|| other.destination.cmp(&self.destination))
            .then_with(|| self.seq.cmp(&other.seq))
            .then_with(|| other.source.cmp(&self.source))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

struct Frontier {
    heap: BinaryHeap<Candidate>,
    next_seq: u64,
    pushed: usize,
    discarded: usize,
}

impl Frontier {
    fn new() -> Self {
        Frontier {
            heap: BinaryHeap::new(),
            next_seq: 0,
            pushed: 0,
            discarded: 0,
        }
    }

    /// Push every edge leaving `vertex` that still crosses the tree boundary
    fn extend_from(&mut self, adjacency: &AdjacencyList, vertex: usize, visited: &[bool]) {
        for edge in adjacency.neighbors(vertex) {
            if visited[edge.destination] {
                continue;
            }
            self.heap.push(Candidate {
                weight: edge.weight,
                destination: edge.destination,
                source: edge.source,
                seq: self.next_seq,
            });
            self.next_seq += 1;
            self.pushed += 1;
        }
    }
}

/// Minimum spanning tree rooted at vertex 0.
///
/// Unreached vertices keep `MstEntry::default()`; call
/// [`SpanningTree::into_complete`] to turn that into an error.
/// Vertex 0 always exists: `AdjacencyList` rejects empty graphs.
pub fn minimum_spanning_tree(adjacency: &AdjacencyList) -> SpanningTree {
    run_prim(adjacency, 0)
}

/// Minimum spanning tree grown from an arbitrary root
pub fn minimum_spanning_tree_from(adjacency: &AdjacencyList, root: usize) -> Result<SpanningTree> {
    if root >= adjacency.num_vertices() {
        return Err(MstError::RootOutOfRange {
            root,
            num_vertices: adjacency.num_vertices(),
        });
    }
    Ok(run_prim(adjacency, root))
}

fn run_prim(adjacency: &AdjacencyList, root: usize) -> SpanningTree {
    let n = adjacency.num_vertices();
    let mut entries = vec![MstEntry::default(); n];
    let mut visited = vec![false; n];
    let mut frontier = Frontier::new();

    visited[root] = true;
    frontier.extend_from(adjacency, root, &visited);

    while let Some(candidate) = frontier.heap.pop() {
        let v = candidate.destination;
        if visited[v] {
            frontier.discarded += 1;
            continue;
        }

        visited[v] = true;
        entries[v] = MstEntry::attached(candidate.source, candidate.weight);
        frontier.extend_from(adjacency, v, &visited);
    }

    debug!(
        "Prim from root {}: {} candidates pushed, {} discarded",
        root, frontier.pushed, frontier.discarded
    );

    SpanningTree { root, entries }
}
