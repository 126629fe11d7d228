//! Traits and implementations of label-keyed directed graphs.
//!
//! # Low-level graphs and `LabeledGraph`
//!
//! Vertices in low-level graphs are lightweight ID's.
//! They are essentially `usize`, cheap to copy and store.
//! Edges are plain ordered pairs of ID's with set semantics:
//! at most one edge per `(source, sink)` pair.
//!
//! There are two low-level implementations.
//! `AdjacencyGraph` iterates successors in ascending ID order, so every
//! traversal over it is deterministic.
//! `PetgraphBackedGraph` leaves that order unspecified.
//!
//! `LabeledGraph` wraps a low-level graph and maintains a 1-1 mapping
//! between caller-chosen labels and vertex ID's.
//! It is how most users are expected to hold a graph, and it exposes
//! the traversal and search algorithms directly on labels.

mod vertex;
pub use self::vertex::*;
mod error;
pub use self::error::*;
mod r#trait;
pub use self::r#trait::*;
mod adjacency;
pub use self::adjacency::*;
mod petgraph_backed;
pub use self::petgraph_backed::*;
mod labeled;
pub use self::labeled::*;

#[cfg(test)]
pub use self::tests::*;
