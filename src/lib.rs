//! A directed graph keyed by caller-chosen labels, together with
//! breadth-first and depth-first traversal and path search.
//!
//! Vertices in low-level graphs are lightweight ID's, essentially `usize`.
//! Most users hold a [`graph::LabeledGraph`] instead, which keeps a 1-1
//! mapping between labels and ID's and exposes every algorithm directly
//! on labels:
//!
//! ```rust
//! use labgraph::graph::*;
//!
//! let mut g = LabeledGraph::<&str>::new();
//! g.add_edge(&"a", &"b");
//! g.add_edge(&"b", &"c");
//! let order = g.bft(&"a").unwrap();
//! assert_eq!(order, vec!["a", "b", "c"]);
//! assert_eq!(g.bfs(&"a", &"c").unwrap(), Some(vec!["a", "b", "c"]));
//! ```
//!
//! The algorithms themselves live in [`algorithm`] as extension traits
//! over [`graph::QueryableGraph`], so they work on any backend.

pub mod algorithm;
pub mod graph;
