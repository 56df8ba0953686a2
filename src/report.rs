/// Line-oriented text report: the full adjacency listing followed by the
/// spanning tree table.
use std::io::{self, Write};

use crate::graph::GraphInput;
use crate::prim::SpanningTree;

pub const ADJACENCY_HEADER: &str = "Full Graph - Adjacency List";
pub const TREE_HEADER: &str = "Minimum Spanning Tree";

/// Write `Adj[i] -> (dest,weight) ...` for every vertex.
///
/// Edges are listed in input order from the perspective of vertex `i`.
/// Negative-weight edges are never listed.
pub fn write_adjacency<W: Write>(out: &mut W, graph: &GraphInput) -> io::Result<()> {
    writeln!(out, "{ADJACENCY_HEADER}")?;
    for vertex in 0..graph.num_vertices {
        write!(out, "Adj[{vertex}] -> ")?;
        for edge in graph.edges.iter().filter(|e| e.weight >= 0) {
            if let Some(other) = edge.opposite(vertex) {
                write!(out, "({},{}) ", other, edge.weight)?;
            }
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Write `Edge: i - parent weight: w` for every vertex except the root.
/// Unreached vertices show the sentinel parent.
pub fn write_tree<W: Write>(out: &mut W, tree: &SpanningTree) -> io::Result<()> {
    writeln!(out, "{TREE_HEADER}")?;
    for (vertex, entry) in tree.entries().iter().enumerate() {
        if vertex == tree.root() {
            continue;
        }
        writeln!(
            out,
            "Edge: {} - {} weight: {}",
            vertex,
            entry.parent_or_sentinel(),
            entry.weight
        )?;
    }
    Ok(())
}

pub fn write_report<W: Write>(out: &mut W, graph: &GraphInput, tree: &SpanningTree) -> io::Result<()> {
    write_adjacency(out, graph)?;
    writeln!(out)?;
    write_tree(out, tree)
}

pub fn render_report(graph: &GraphInput, tree: &SpanningTree) -> String {
    let mut buf = Vec::new();
    write_report(&mut buf, graph, tree).expect("writing to a Vec cannot fail");
    String::from_utf8_lossy(&buf).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Edge;
    use crate::prim::minimum_spanning_tree;

    fn graph(n: usize, edges: &[(usize, usize, i64)]) -> GraphInput {
        GraphInput::new(
            n,
            edges.iter().map(|&(a, b, w)| Edge::new(a, b, w)).collect(),
        )
    }

    #[test]
    fn test_adjacency_lines() {
        let g = graph(3, &[(0, 1, 4), (2, 1, 6)]);
        let mut out = Vec::new();
        write_adjacency(&mut out, &g).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(
            text,
            "Full Graph - Adjacency List\n\
             Adj[0] -> (1,4) \n\
             Adj[1] -> (0,4) (2,6) \n\
             Adj[2] -> (1,6) \n"
        );
    }

    #[test]
    fn test_isolated_vertex_has_empty_line() {
        let g = graph(2, &[]);
        let mut out = Vec::new();
        write_adjacency(&mut out, &g).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Adj[1] -> \n"));
    }

    #[test]
    fn test_negative_edges_not_listed() {
        let g = graph(2, &[(0, 1, -3), (0, 1, 2)]);
        let mut out = Vec::new();
        write_adjacency(&mut out, &g).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(!text.contains("-3"));
        assert!(text.contains("Adj[0] -> (1,2) \n"));
    }

    #[test]
    fn test_tree_lines_with_unreached_vertex() {
        let g = graph(3, &[(0, 1, 2)]);
        let adj = g.adjacency().unwrap();
        let tree = minimum_spanning_tree(&adj);

        let mut out = Vec::new();
        write_tree(&mut out, &tree).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "Minimum Spanning Tree\nEdge: 1 - 0 weight: 2\nEdge: 2 - -1 weight: 0\n"
        );
    }
}
