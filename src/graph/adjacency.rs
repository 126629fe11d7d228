use crate::graph::*;
use std::collections::{BTreeMap, BTreeSet};

/// A directed graph backed by an ordered adjacency mapping.
///
/// Successor sets are `BTreeSet`s, so `out_neighbors` yields successors
/// in ascending ID order and every traversal over this backend is
/// deterministic across runs. This is the default backend of
/// [`LabeledGraph`].
///
/// |                   | Complexity                                                |
/// | ----------------- | --------------------------------------------------------- |
/// | `add_vertex`      | $O(\log \|V\|)$                                           |
/// | `add_edge`        | $O(\log \|V\| + \log \|E\|)$                              |
/// | `vertex_size`     | $O(1)$                                                    |
/// | `iter_vertices`   | amortized $O(1)$ and $O(\log \|V\|)$ in the worst cases.  |
/// | `contains_vertex` | $O(\log \|V\|)$                                           |
/// | `edge_size`       | $O(1)$                                                    |
/// | `contains_edge`   | $O(\log \|V\| + \log \|E\|)$                              |
/// | `out_neighbors`   | returns in $O(\log \|V\|)$. amortized $O(1)$ on each call to `.next`. |
#[derive(Clone)]
pub struct AdjacencyGraph {
    vid_factory: VertexIdFactory,
    successors: BTreeMap<VertexId, BTreeSet<VertexId>>,
    edge_size: usize,
}

impl std::fmt::Debug for AdjacencyGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "AdjacencyGraph {{")?;
        for (v, succs) in self.successors.iter() {
            writeln!(f, "{:?}:", v)?;
            for s in succs.iter() {
                writeln!(f, "  -> {:?}", s)?;
            }
        }
        writeln!(f, "}}")?;
        Ok(())
    }
}

impl GrowableGraph for AdjacencyGraph {
    fn new() -> Self {
        Self {
            vid_factory: VertexIdFactory::new(),
            successors: BTreeMap::new(),
            edge_size: 0,
        }
    }

    fn add_vertex(&mut self) -> VertexId {
        let vid = self.vid_factory.one_more();
        self.successors.insert(vid, BTreeSet::new());
        vid
    }

    fn add_edge(&mut self, source: VertexId, sink: VertexId) -> bool {
        debug_assert!(self.successors.contains_key(&source));
        debug_assert!(self.successors.contains_key(&sink));
        let inserted = self.successors.entry(source).or_default().insert(sink);
        if inserted {
            self.edge_size += 1;
        }
        inserted
    }
}

impl QueryableGraph for AdjacencyGraph {
    fn vertex_size(&self) -> usize {
        self.successors.len()
    }

    fn iter_vertices(&self) -> Box<dyn Iterator<Item = VertexId> + '_> {
        Box::new(self.successors.keys().copied())
    }

    fn contains_vertex(&self, v: &VertexId) -> bool {
        self.successors.contains_key(v)
    }

    fn edge_size(&self) -> usize {
        self.edge_size
    }

    fn iter_edges(&self) -> Box<dyn Iterator<Item = (VertexId, VertexId)> + '_> {
        let it = self
            .successors
            .iter()
            .flat_map(|(src, succs)| succs.iter().map(move |snk| (*src, *snk)));
        Box::new(it)
    }

    fn contains_edge(&self, source: &VertexId, sink: &VertexId) -> bool {
        match self.successors.get(source) {
            Some(succs) => succs.contains(sink),
            None => false,
        }
    }

    fn out_neighbors(&self, v: &VertexId) -> Box<dyn Iterator<Item = VertexId> + '_> {
        match self.successors.get(v) {
            Some(succs) => Box::new(succs.iter().copied()),
            None => Box::new(std::iter::empty()),
        }
    }
}
