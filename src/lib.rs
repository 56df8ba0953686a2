// Library exports for primst
pub mod batch;
pub mod error;
pub mod graph;
pub mod input;
pub mod prim;
pub mod report;
pub mod union_find;

pub use error::MstError;
pub use graph::{AdjacencyList, Edge, GraphInput};
pub use prim::{minimum_spanning_tree, minimum_spanning_tree_from, MstEntry, SpanningTree};
