/// Reader for the whitespace-separated edge-list format
///
/// ```text
/// numVertices numEdges
/// source destination weight
/// ...
/// ```
///
/// Validation is strict: a single bad count or negative weight aborts the
/// whole read, before any graph is built.
use anyhow::{Context, Result};
use log::warn;
use nom::branch::alt;
use nom::character::complete::{i64 as integer, multispace0, multispace1};
use nom::combinator::{eof, peek};
use nom::sequence::{preceded, terminated};
use nom::IResult;
use std::path::Path;

use crate::error::MstError;
use crate::graph::{Edge, GraphInput};

/// Default input file name used by the command-line driver
pub const DEFAULT_INPUT: &str = "CIS-LAND4.dat";

/// Largest accepted edge weight (a 32-bit signed int)
pub const MAX_WEIGHT: i64 = i32::MAX as i64;

/// Token cursor over the input text
struct Tokens<'a> {
    text: &'a str,
    rest: &'a str,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        Tokens { text, rest: text }
    }

    fn offset(&self) -> usize {
        self.text.len() - self.rest.len()
    }

    fn at_end(&self) -> bool {
        self.rest.trim_start().is_empty()
    }

    /// Next integer token; `what` names it in the error message.
    /// The token must end at whitespace or end of input.
    fn next_integer(&mut self, what: &str) -> Result<i64, MstError> {
        let parsed: IResult<&str, i64> = preceded(
            multispace0,
            terminated(integer, peek(alt((multispace1, eof)))),
        )(self.rest);
        match parsed {
            Ok((rest, value)) => {
                self.rest = rest;
                Ok(value)
            }
            Err(_) => {
                let skipped = self.rest.len() - self.rest.trim_start().len();
                let offset = self.offset() + skipped;
                let message = if self.at_end() {
                    format!("unexpected end of input, expected {what}")
                } else {
                    let token = self.rest.split_whitespace().next().unwrap_or_default();
                    format!("expected {what}, found '{token}'")
                };
                Err(MstError::Parse { offset, message })
            }
        }
    }
}

/// Check the header counts, returning the vertex count
fn validate_counts(num_vertices: i64, num_edges: i64) -> Result<usize, MstError> {
    if num_vertices < 0 {
        return Err(MstError::NegativeVertexCount(num_vertices));
    }
    if num_vertices == 0 {
        return Err(MstError::NoVertices);
    }
    if num_edges < 0 || num_edges < num_vertices - 1 {
        return Err(MstError::TooFewEdges {
            edges: num_edges,
            vertices: num_vertices,
        });
    }
    Ok(num_vertices as usize)
}

fn validate_edge(
    source: i64,
    destination: i64,
    weight: i64,
    num_vertices: usize,
) -> Result<Edge, MstError> {
    if weight < 0 {
        return Err(MstError::NegativeWeight {
            from: source,
            to: destination,
            weight,
        });
    }
    if weight > MAX_WEIGHT {
        return Err(MstError::WeightTooLarge {
            from: source,
            to: destination,
            weight,
            max: MAX_WEIGHT,
        });
    }
    let check = |vertex: i64| {
        if vertex < 0 || vertex as u64 >= num_vertices as u64 {
            Err(MstError::VertexOutOfRange {
                vertex,
                num_vertices,
            })
        } else {
            Ok(vertex as usize)
        }
    };
    Ok(Edge::new(check(source)?, check(destination)?, weight))
}

/// Parse and validate a graph from text
pub fn parse_graph(text: &str) -> Result<GraphInput, MstError> {
    let mut tokens = Tokens::new(text);

    let num_vertices = tokens.next_integer("number of vertices")?;
    let num_edges = tokens.next_integer("number of edges")?;
    let num_vertices = validate_counts(num_vertices, num_edges)?;

    let mut edges = Vec::new();
    for i in 0..num_edges {
        let source = tokens.next_integer(&format!("source of edge {}", i + 1))?;
        let destination = tokens.next_integer(&format!("destination of edge {}", i + 1))?;
        let weight = tokens.next_integer(&format!("weight of edge {}", i + 1))?;
        edges.push(validate_edge(source, destination, weight, num_vertices)?);
    }

    if !tokens.at_end() {
        warn!(
            "Ignoring trailing input after {} declared edges (byte {})",
            num_edges,
            tokens.offset()
        );
    }

    Ok(GraphInput::new(num_vertices, edges))
}

/// Read and validate a graph file
pub fn read_graph<P: AsRef<Path>>(path: P) -> Result<GraphInput> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to open input file {}", path.display()))?;
    let graph =
        parse_graph(&text).with_context(|| format!("Invalid graph in {}", path.display()))?;
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple() {
        let graph = parse_graph("3 2\n0 1 4\n1 2 7\n").unwrap();
        assert_eq!(graph.num_vertices, 3);
        assert_eq!(graph.edges, vec![Edge::new(0, 1, 4), Edge::new(1, 2, 7)]);
    }

    #[test]
    fn test_layout_is_free_form() {
        let graph = parse_graph("  2\t1 0\n\n 1   9").unwrap();
        assert_eq!(graph.edges, vec![Edge::new(0, 1, 9)]);
    }

    #[test]
    fn test_count_checks() {
        assert_eq!(
            parse_graph("-3 4").unwrap_err(),
            MstError::NegativeVertexCount(-3)
        );
        assert_eq!(parse_graph("0 4").unwrap_err(), MstError::NoVertices);
        assert_eq!(
            parse_graph("4 2\n0 1 1\n1 2 1\n").unwrap_err(),
            MstError::TooFewEdges {
                edges: 2,
                vertices: 4
            }
        );
        assert_eq!(
            parse_graph("2 -1").unwrap_err(),
            MstError::TooFewEdges {
                edges: -1,
                vertices: 2
            }
        );
    }

    #[test]
    fn test_single_vertex_without_edges() {
        let graph = parse_graph("1 0").unwrap();
        assert_eq!(graph.num_vertices, 1);
        assert!(graph.edges.is_empty());
    }

    #[test]
    fn test_negative_weight_aborts() {
        let err = parse_graph("3 3\n0 1 1\n1 2 -4\n0 2 2\n").unwrap_err();
        assert_eq!(
            err,
            MstError::NegativeWeight {
                from: 1,
                to: 2,
                weight: -4
            }
        );
    }

    #[test]
    fn test_endpoint_out_of_range() {
        assert_eq!(
            parse_graph("2 1\n0 2 1\n").unwrap_err(),
            MstError::VertexOutOfRange {
                vertex: 2,
                num_vertices: 2
            }
        );
        assert_eq!(
            parse_graph("2 1\n-1 1 1\n").unwrap_err(),
            MstError::VertexOutOfRange {
                vertex: -1,
                num_vertices: 2
            }
        );
    }

    #[test]
    fn test_missing_edges() {
        match parse_graph("3 3\n0 1 1\n1 2 1\n") {
            Err(MstError::Parse { message, .. }) => {
                assert!(message.contains("end of input"), "{message}");
                assert!(message.contains("edge 3"), "{message}");
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_bad_token_offset() {
        match parse_graph("2 1\n0 x 1\n") {
            Err(MstError::Parse { offset, message }) => {
                assert_eq!(offset, 6);
                assert!(message.contains("'x'"), "{message}");
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_last_weight_rejected() {
        match parse_graph("2 1\n0 1 5.7\n") {
            Err(MstError::Parse { offset, message }) => {
                assert_eq!(offset, 8);
                assert!(message.contains("weight of edge 1"), "{message}");
                assert!(message.contains("'5.7'"), "{message}");
            }
            other => panic!("expected parse error, got {other:?}"),
        }
        assert!(matches!(
            parse_graph("3 2\n0 1 5.7\n1 2 1\n"),
            Err(MstError::Parse { offset: 8, .. })
        ));
        assert!(matches!(
            parse_graph("2x 1\n0 1 1\n"),
            Err(MstError::Parse { offset: 0, .. })
        ));
    }

    #[test]
    fn test_weight_limit() {
        let graph = parse_graph("2 1\n0 1 2147483647\n").unwrap();
        assert_eq!(graph.edges[0].weight, MAX_WEIGHT);

        assert_eq!(
            parse_graph("3 2\n0 1 5000000000000000000\n1 2 5000000000000000000\n")
                .unwrap_err(),
            MstError::WeightTooLarge {
                from: 0,
                to: 1,
                weight: 5_000_000_000_000_000_000,
                max: MAX_WEIGHT
            }
        );
    }

    #[test]
    fn test_trailing_input_ignored() {
        let graph = parse_graph("2 1\n0 1 3\n1 0 2\n").unwrap();
        assert_eq!(graph.edges.len(), 1);
    }

    #[test]
    fn test_read_graph_missing_file() {
        let err = read_graph("/nonexistent/graph.dat").unwrap_err();
        assert!(err.to_string().contains("Failed to open input file"));
    }
}
