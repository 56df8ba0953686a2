/// Error taxonomy for graph input and spanning tree construction
///
/// Everything except `IncompleteSpanningTree` is an input-validation failure
/// raised before the MST engine runs. None of these are retried.
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MstError {
    #[error("Number of vertices ({0}) is less than zero")]
    NegativeVertexCount(i64),

    #[error("Number of vertices is zero")]
    NoVertices,

    #[error("It cannot be a connected graph with {edges} edges and {vertices} vertices")]
    TooFewEdges { edges: i64, vertices: i64 },

    // Not named `source`: thiserror would treat that field as the error cause.
    #[error("Invalid weight - cannot add edge: {from} {to} {weight}")]
    NegativeWeight { from: i64, to: i64, weight: i64 },

    #[error("Invalid weight - edge {from} {to} has weight {weight}, above the limit of {max}")]
    WeightTooLarge {
        from: i64,
        to: i64,
        weight: i64,
        max: i64,
    },

    #[error("Total spanning tree weight does not fit in 64 bits")]
    WeightOverflow,

    #[error("Vertex {vertex} is outside the graph (0..{num_vertices})")]
    VertexOutOfRange { vertex: i64, num_vertices: usize },

    #[error("Root vertex {root} is outside the graph (0..{num_vertices})")]
    RootOutOfRange { root: usize, num_vertices: usize },

    #[error("Parse error at byte {offset}: {message}")]
    Parse { offset: usize, message: String },

    #[error("Spanning tree is incomplete: {unreached} vertices unreachable from the root ({components} components)")]
    IncompleteSpanningTree { unreached: usize, components: usize },
}

pub type Result<T> = std::result::Result<T, MstError>;
