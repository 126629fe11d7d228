use crate::algorithm::{Stack, Traversal};
use crate::graph::*;
use ahash::RandomState;
use std::collections::HashSet;

/// Route searches between two vertices.
///
/// Both searches distinguish two kinds of "no result": a start vertex
/// missing from the graph is an error, while an absent or unreachable
/// destination is the normal `Ok(None)` outcome.
pub trait PathSearch
where
    Self: QueryableGraph + Sized,
{
    /// Searches for a shortest route by edge count from `start` to
    /// `destination`.
    ///
    /// Runs a whole breadth-first traversal, cuts the visit order off
    /// at the destination, then scans the cut back to front and drops
    /// every vertex that has no edge to its follower. The scan works on
    /// the linear visit order rather than on breadth-first tree parent
    /// pointers; on graphs where several branches interleave in that
    /// order it can keep a detour, so the route is not guaranteed
    /// shortest on every graph shape.
    fn bfs(&self, start: &VertexId, destination: &VertexId) -> GraphResult<Option<Vec<VertexId>>> {
        let order = self.bft(start)?;
        let cut = match order.iter().position(|v| v == destination) {
            Some(idx) => idx,
            None => return Ok(None),
        };
        let mut route: Vec<VertexId> = order[..=cut].to_vec();
        drop_unlinked(self, &mut route);
        Ok(Some(route))
    }

    /// Searches for some route from `start` to `destination` in
    /// depth-first order.
    ///
    /// Returns as soon as the destination comes off the frontier. The
    /// result is the visit order up to and including the destination,
    /// which is *a* route, not necessarily a shortest one.
    fn dfs(&self, start: &VertexId, destination: &VertexId) -> GraphResult<Option<Vec<VertexId>>> {
        if !self.contains_vertex(start) {
            return Err(GraphError::VertexNotFound(*start));
        }
        let mut stack = Stack::new();
        let mut visited = HashSet::with_hasher(RandomState::new());
        let mut path = vec![];
        stack.push(*start);
        visited.insert(*start);
        while let Some(v) = stack.pop() {
            path.push(v);
            if v == *destination {
                return Ok(Some(path));
            }
            for succ in self.out_neighbors(&v) {
                if visited.insert(succ) {
                    stack.push(succ);
                }
            }
        }
        Ok(None)
    }
}

impl<G: QueryableGraph> PathSearch for G {}

/// Back-to-front pass over a truncated visit order: whenever two
/// neighboring entries are not joined by an edge, the earlier one is a
/// traversal artifact and gets removed. Each removal closes a new pair,
/// which the next step of the scan checks in turn.
fn drop_unlinked<G>(graph: &G, route: &mut Vec<VertexId>)
where
    G: QueryableGraph,
{
    if route.len() < 2 {
        return;
    }
    let mut ptr = route.len() - 1;
    while ptr > 0 {
        let sink = route[ptr];
        let source = route[ptr - 1];
        if !graph.contains_edge(&source, &sink) {
            route.remove(ptr - 1);
        }
        ptr -= 1;
    }
}
