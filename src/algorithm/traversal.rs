use crate::algorithm::{Queue, Stack};
use crate::graph::*;
use ahash::RandomState;
use std::collections::HashSet;

/// Whole-component traversals over directed graphs.
///
/// Every method visits each vertex reachable from the start exactly
/// once and returns the visit order; unreachable vertices never appear.
/// Starting from a vertex that is not in the graph is an error.
pub trait Traversal
where
    Self: QueryableGraph + Sized,
{
    /// Visits vertices in breadth-first order.
    ///
    /// A vertex is marked visited when it is discovered, not when it is
    /// dequeued, so no vertex enters the frontier twice even on cyclic
    /// graphs.
    fn bft(&self, start: &VertexId) -> GraphResult<Vec<VertexId>> {
        if !self.contains_vertex(start) {
            return Err(GraphError::VertexNotFound(*start));
        }
        let mut queue = Queue::new();
        let mut visited = HashSet::with_hasher(RandomState::new());
        let mut path = vec![];
        queue.enqueue(*start);
        visited.insert(*start);
        while let Some(v) = queue.dequeue() {
            path.push(v);
            for succ in self.out_neighbors(&v) {
                if visited.insert(succ) {
                    queue.enqueue(succ);
                }
            }
        }
        Ok(path)
    }

    /// Visits vertices in depth-first order with an explicit stack.
    ///
    /// Successors discovered together come back off the stack in
    /// reverse discovery order. That is ordinary LIFO behavior; the
    /// result is still a valid depth-first order.
    fn dft(&self, start: &VertexId) -> GraphResult<Vec<VertexId>> {
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
            for succ in self.out_neighbors(&v) {
                if visited.insert(succ) {
                    stack.push(succ);
                }
            }
        }
        Ok(path)
    }

    /// Visits vertices in depth-first order by recursive descent.
    ///
    /// Recursion goes as deep as the longest simple path from `start`,
    /// so a sufficiently deep graph can exhaust the call stack. Use
    /// [`dft`](Traversal::dft) for such graphs.
    fn dft_recursive(&self, start: &VertexId) -> GraphResult<Vec<VertexId>> {
        if !self.contains_vertex(start) {
            return Err(GraphError::VertexNotFound(*start));
        }
        let mut visited = HashSet::with_hasher(RandomState::new());
        let mut path = vec![];
        visited.insert(*start);
        descend(self, *start, &mut visited, &mut path);
        Ok(path)
    }
}

impl<G: QueryableGraph> Traversal for G {}

fn descend<G>(
    graph: &G,
    vertex: VertexId,
    visited: &mut HashSet<VertexId, RandomState>,
    path: &mut Vec<VertexId>,
) where
    G: QueryableGraph,
{
    path.push(vertex);
    for succ in graph.out_neighbors(&vertex) {
        if visited.insert(succ) {
            descend(graph, succ, visited, path);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;
    use std::collections::BTreeSet;

    // 5->3, 6->3, 7->1, 4->7, 1->2, 7->6, 2->4, 3->5, 2->3, 4->6,
    // with vertex n held at vs[n - 1].
    fn sample_graph() -> (AdjacencyGraph, Vec<VertexId>) {
        let mut g = AdjacencyGraph::new();
        let vs: Vec<_> = (0..7).map(|_| g.add_vertex()).collect();
        for (from, to) in [
            (5, 3),
            (6, 3),
            (7, 1),
            (4, 7),
            (1, 2),
            (7, 6),
            (2, 4),
            (3, 5),
            (2, 3),
            (4, 6),
        ] {
            g.add_edge(vs[from - 1], vs[to - 1]);
        }
        (g, vs)
    }

    fn by_labels(vs: &[VertexId], labels: &[usize]) -> Vec<VertexId> {
        labels.iter().map(|n| vs[n - 1]).collect()
    }

    fn reachable_from<G: QueryableGraph>(g: &G, start: VertexId) -> BTreeSet<VertexId> {
        let mut res = BTreeSet::new();
        res.insert(start);
        loop {
            let grown: BTreeSet<_> = res
                .iter()
                .flat_map(|v| g.out_neighbors(v))
                .chain(res.iter().copied())
                .collect();
            if grown == res {
                return res;
            }
            res = grown;
        }
    }

    #[test]
    fn bft_visits_layer_by_layer() {
        let (g, vs) = sample_graph();
        let trial = g.bft(&vs[0]).unwrap();
        assert_eq!(trial, by_labels(&vs, &[1, 2, 3, 4, 5, 6, 7]));
    }

    #[test]
    fn dft_pops_in_reverse_discovery_order() {
        let (g, vs) = sample_graph();
        let trial = g.dft(&vs[0]).unwrap();
        assert_eq!(trial, by_labels(&vs, &[1, 2, 4, 7, 6, 3, 5]));
    }

    #[test]
    fn dft_recursive_descends_in_discovery_order() {
        let (g, vs) = sample_graph();
        let trial = g.dft_recursive(&vs[0]).unwrap();
        assert_eq!(trial, by_labels(&vs, &[1, 2, 3, 5, 4, 6, 7]));
    }

    #[test]
    fn unreachable_vertices_never_appear() {
        let mut g = AdjacencyGraph::new();
        let v0 = g.add_vertex();
        let v1 = g.add_vertex();
        let lone = g.add_vertex();
        g.add_edge(v0, v1);
        for order in [
            g.bft(&v0).unwrap(),
            g.dft(&v0).unwrap(),
            g.dft_recursive(&v0).unwrap(),
        ] {
            assert_eq!(order, vec![v0, v1]);
            assert!(!order.contains(&lone));
        }
    }

    #[test]
    fn missing_start_is_an_error() {
        let g = AdjacencyGraph::new();
        let ghost = VertexId::new(0);
        assert_eq!(g.bft(&ghost), Err(GraphError::VertexNotFound(ghost)));
        assert_eq!(g.dft(&ghost), Err(GraphError::VertexNotFound(ghost)));
        assert_eq!(
            g.dft_recursive(&ghost),
            Err(GraphError::VertexNotFound(ghost))
        );
    }

    #[test]
    fn traversal_handles_cycles() {
        let mut g = AdjacencyGraph::new();
        let v0 = g.add_vertex();
        let v1 = g.add_vertex();
        g.add_edge(v0, v1);
        g.add_edge(v1, v0);
        g.add_edge(v0, v0);
        assert_eq!(g.bft(&v0).unwrap(), vec![v0, v1]);
        assert_eq!(g.dft(&v0).unwrap(), vec![v0, v1]);
    }

    #[quickcheck]
    fn traversals_visit_the_reachable_set_once(ops: Ops) {
        let g: AdjacencyGraph = ops.build();
        for start in g.iter_vertices().collect::<Vec<_>>() {
            let oracle = reachable_from(&g, start);
            for order in [
                g.bft(&start).unwrap(),
                g.dft(&start).unwrap(),
                g.dft_recursive(&start).unwrap(),
            ] {
                let trial: BTreeSet<_> = order.iter().copied().collect();
                assert_eq!(trial, oracle);
                assert_eq!(order.len(), trial.len());
            }
        }
    }

    #[quickcheck]
    fn backends_traverse_the_same_set(ops: Ops) {
        let oracle: AdjacencyGraph = ops.build();
        let trial: PetgraphBackedGraph = ops.build();
        for start in oracle.iter_vertices().collect::<Vec<_>>() {
            let want: BTreeSet<_> = oracle.bft(&start).unwrap().into_iter().collect();
            let got: BTreeSet<_> = trial.bft(&start).unwrap().into_iter().collect();
            assert_eq!(got, want);
        }
    }
}
