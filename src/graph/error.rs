//! Error types.
use super::VertexId;
use thiserror::Error;

/// All errors that can occur while querying a graph.
///
/// Mutation never fails.
/// Searching for an absent or unreachable destination is not an error
/// either; `bfs`/`dfs` signal that with `Ok(None)`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A traversal was started from a vertex ID that is not in the graph.
    #[error("vertex {0:?} not found")]
    VertexNotFound(VertexId),

    /// A traversal was started from a label that is not in the graph.
    #[error("no vertex labeled {0}")]
    UnknownLabel(String),
}

pub type GraphResult<T> = Result<T, GraphError>;
