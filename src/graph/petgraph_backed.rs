use crate::graph::*;
use petgraph::{graph::NodeIndex, stable_graph::StableDiGraph, visit::{EdgeRef, IntoEdgeReferences}};

/// A directed graph backed by `petgraph`'s stable adjacency list.
///
/// Successor iteration order is unspecified. Traversals over this
/// backend are still correct, but their exact visit order may differ
/// from [`AdjacencyGraph`].
#[derive(Clone)]
pub struct PetgraphBackedGraph(StableDiGraph<(), (), usize>);

impl GrowableGraph for PetgraphBackedGraph {
    fn new() -> Self {
        Self(StableDiGraph::<(), (), usize>::with_capacity(0, 0))
    }

    fn add_vertex(&mut self) -> VertexId {
        let vid = self.0.add_node(());
        VertexId::new(vid.index())
    }

    fn add_edge(&mut self, source: VertexId, sink: VertexId) -> bool {
        let a = NodeIndex::new(source.to_raw());
        let b = NodeIndex::new(sink.to_raw());
        if self.0.find_edge(a, b).is_some() {
            return false;
        }
        self.0.add_edge(a, b, ());
        true
    }
}

impl QueryableGraph for PetgraphBackedGraph {
    fn vertex_size(&self) -> usize {
        self.0.node_count()
    }

    fn iter_vertices(&self) -> Box<dyn Iterator<Item = VertexId> + '_> {
        let it = self.0.node_indices().map(|x| VertexId::new(x.index()));
        Box::new(it)
    }

    fn contains_vertex(&self, v: &VertexId) -> bool {
        let nidx = NodeIndex::new(v.to_raw());
        self.0.contains_node(nidx)
    }

    fn edge_size(&self) -> usize {
        self.0.edge_count()
    }

    fn iter_edges(&self) -> Box<dyn Iterator<Item = (VertexId, VertexId)> + '_> {
        let it = self.0.edge_references().map(|e| {
            (
                VertexId::new(e.source().index()),
                VertexId::new(e.target().index()),
            )
        });
        Box::new(it)
    }

    fn contains_edge(&self, source: &VertexId, sink: &VertexId) -> bool {
        let a = NodeIndex::new(source.to_raw());
        let b = NodeIndex::new(sink.to_raw());
        self.0.find_edge(a, b).is_some()
    }

    fn out_neighbors(&self, v: &VertexId) -> Box<dyn Iterator<Item = VertexId> + '_> {
        let nidx = NodeIndex::new(v.to_raw());
        let it = self.0.neighbors(nidx).map(|x| VertexId::new(x.index()));
        Box::new(it)
    }
}
