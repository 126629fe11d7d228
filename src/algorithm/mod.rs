//! Traversal and search algorithms over directed graphs.
mod frontier;
pub use self::frontier::*;
mod traversal;
pub use self::traversal::*;
mod search;
pub use self::search::*;
