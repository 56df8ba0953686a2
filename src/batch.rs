/// Solving many independent graphs at once.
///
/// Each Prim run is inherently sequential; parallelism only exists across
/// instances, which share nothing.
use log::info;
use rayon::prelude::*;

use crate::error::Result;
use crate::graph::{AdjacencyList, GraphInput};
use crate::prim::{minimum_spanning_tree_from, SpanningTree};

/// Build and solve one graph from `root`
pub fn solve(graph: &GraphInput, root: usize) -> Result<SpanningTree> {
    let adjacency = graph.adjacency()?;
    solve_adjacency(&adjacency, root)
}

/// Like [`solve`], but fails when some vertex is unreachable from `root`
pub fn solve_complete(graph: &GraphInput, root: usize) -> Result<SpanningTree> {
    let adjacency = graph.adjacency()?;
    solve_adjacency(&adjacency, root)?.into_complete(&adjacency)
}

fn solve_adjacency(adjacency: &AdjacencyList, root: usize) -> Result<SpanningTree> {
    let tree = minimum_spanning_tree_from(adjacency, root)?;
    let total = tree.total_weight()?;
    info!(
        "Spanning tree over {} vertices and {} edges: total weight {}",
        adjacency.num_vertices(),
        adjacency.num_edges(),
        total
    );
    Ok(tree)
}

/// Solve every graph on the rayon pool. Results keep the input order.
pub fn solve_all(
    graphs: &[GraphInput],
    root: usize,
    require_spanning: bool,
) -> Vec<Result<SpanningTree>> {
    graphs
        .par_iter()
        .map(|graph| {
            if require_spanning {
                solve_complete(graph, root)
            } else {
                solve(graph, root)
            }
        })
        .collect()
}
