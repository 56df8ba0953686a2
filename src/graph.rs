//! Weighted undirected graphs built from flat edge lists
//!
//! The adjacency structure stores every accepted edge twice, once from each
//! endpoint, so traversal is symmetric. Edges with negative weight are never
//! admitted.

use log::debug;

use crate::error::{MstError, Result};
use crate::union_find::UnionFind;

/// A weighted edge. In an adjacency list `source` is the owning vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    pub source: usize,
    pub destination: usize,
    pub weight: i64,
}

impl Edge {
    pub fn new(source: usize, destination: usize, weight: i64) -> Self {
        Edge {
            source,
            destination,
            weight,
        }
    }

    /// The same edge seen from the other endpoint
    pub fn reversed(&self) -> Self {
        Edge::new(self.destination, self.source, self.weight)
    }

    /// The endpoint opposite to `vertex`, if `vertex` touches this edge
    pub fn opposite(&self, vertex: usize) -> Option<usize> {
        if self.source == vertex {
            Some(self.destination)
        } else if self.destination == vertex {
            Some(self.source)
        } else {
            None
        }
    }
}

/// A graph as read from input: vertex count plus the edges in input order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphInput {
    pub num_vertices: usize,
    pub edges: Vec<Edge>,
}

impl GraphInput {
    pub fn new(num_vertices: usize, edges: Vec<Edge>) -> Self {
        GraphInput {
            num_vertices,
            edges,
        }
    }

    pub fn adjacency(&self) -> Result<AdjacencyList> {
        AdjacencyList::from_edges(self.num_vertices, &self.edges)
    }
}

/// Per-vertex incident edge lists. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyList {
    lists: Vec<Vec<Edge>>,
    num_edges: usize,
}

impl AdjacencyList {
    /// Build the adjacency structure for `num_vertices` vertices.
    ///
    /// Edges with negative weight are skipped. An endpoint outside
    /// `0..num_vertices` is rejected with `VertexOutOfRange`, and a graph
    /// without vertices with `NoVertices`.
    pub fn from_edges(num_vertices: usize, edges: &[Edge]) -> Result<Self> {
        if num_vertices == 0 {
            return Err(MstError::NoVertices);
        }
        let mut lists = vec![Vec::new(); num_vertices];
        let mut num_edges = 0;

        for edge in edges {
            for vertex in [edge.source, edge.destination] {
                if vertex >= num_vertices {
                    return Err(MstError::VertexOutOfRange {
                        vertex: vertex as i64,
                        num_vertices,
                    });
                }
            }

            if edge.weight < 0 {
                debug!(
                    "Skipping edge {} - {} with negative weight {}",
                    edge.source, edge.destination, edge.weight
                );
                continue;
            }

            lists[edge.source].push(*edge);
            lists[edge.destination].push(edge.reversed());
            num_edges += 1;
        }

        Ok(AdjacencyList { lists, num_edges })
    }

    pub fn num_vertices(&self) -> usize {
        self.lists.len()
    }

    /// Number of undirected edges admitted
    pub fn num_edges(&self) -> usize {
        self.num_edges
    }

    /// Edges leaving `vertex`; every entry has `source == vertex`
    pub fn neighbors(&self, vertex: usize) -> &[Edge] {
        &self.lists[vertex]
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &[Edge])> {
        self.lists
            .iter()
            .enumerate()
            .map(|(vertex, list)| (vertex, list.as_slice()))
    }

    /// Number of connected components, isolated vertices included
    pub fn count_components(&self) -> usize {
        let mut uf = UnionFind::new(self.num_vertices());
        for (_, list) in self.iter() {
            for edge in list {
                uf.union(edge.source, edge.destination);
            }
        }
        uf.component_count()
    }
}
