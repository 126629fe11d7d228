//! `LabeledGraph`, a directed graph keyed by caller-chosen labels.
use crate::algorithm::{PathSearch, Traversal};
use crate::graph::*;
use ahash::RandomState;
use bimap::BiHashMap;
use std::hash::Hash;

/// A directed graph whose vertices are identified by caller-chosen labels.
///
/// * `K`: vertex labels, i.e., there is a 1-1 mapping between labels and
///   vertex ID's in the underlying graph. Anything hashable works:
///   integers, strings, ...
/// * `G`: the underlying low-level graph.
///
/// The graph only ever grows. Vertices come from [`add_vertex`] or are
/// created implicitly by [`add_edge`]; neither vertices nor edges can be
/// removed.
///
/// Not thread-safe. Callers sharing a graph across threads must
/// serialize access themselves.
///
/// [`add_vertex`]: LabeledGraph::add_vertex
/// [`add_edge`]: LabeledGraph::add_edge
pub struct LabeledGraph<K, G = AdjacencyGraph>
where
    K: Hash + Eq,
{
    lower_graph: G,
    labels: BiHashMap<VertexId, K, RandomState, RandomState>,
}

impl<K, G> Default for LabeledGraph<K, G>
where
    K: Hash + Eq + Clone,
    G: GrowableGraph,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, G> LabeledGraph<K, G>
where
    K: Hash + Eq + Clone,
    G: GrowableGraph,
{
    /// Creates a new, empty labeled graph.
    pub fn new() -> Self {
        Self {
            lower_graph: G::new(),
            labels: BiHashMap::with_hashers(RandomState::new(), RandomState::new()),
        }
    }

    /// Adds a vertex under `label` if absent and returns its ID.
    ///
    /// Adding an already present label is a no-op that returns the
    /// existing ID.
    pub fn add_vertex(&mut self, label: &K) -> VertexId {
        if let Some(vid) = self.labels.get_by_right(label) {
            *vid
        } else {
            let vid = self.lower_graph.add_vertex();
            self.labels.insert(vid, label.clone());
            vid
        }
    }

    /// Adds a directed edge from `from` to `to`.
    ///
    /// Endpoints missing from the graph are created as vertices first.
    /// Returns whether the edge was newly inserted; re-adding an
    /// existing edge has no effect.
    pub fn add_edge(&mut self, from: &K, to: &K) -> bool {
        let src = self.add_vertex(from);
        let snk = self.add_vertex(to);
        self.lower_graph.add_edge(src, snk)
    }
}

impl<K, G> LabeledGraph<K, G>
where
    K: Hash + Eq,
{
    /// Gets the label of a vertex by its ID.
    pub fn label_by_id(&self, vid: &VertexId) -> Option<&K> {
        self.labels.get_by_left(vid)
    }

    /// Gets the vertex ID under a label.
    pub fn vertex_id_by_label(&self, label: &K) -> Option<VertexId> {
        self.labels.get_by_right(label).copied()
    }

    /// Tests whether a label names a vertex of the graph.
    pub fn contains_vertex(&self, label: &K) -> bool {
        self.labels.contains_right(label)
    }
}

impl<K, G> LabeledGraph<K, G>
where
    K: Hash + Eq,
    G: QueryableGraph,
{
    /// Size counted in vertices.
    pub fn vertex_size(&self) -> usize {
        self.lower_graph.vertex_size()
    }

    /// Size counted in edges.
    pub fn edge_size(&self) -> usize {
        self.lower_graph.edge_size()
    }

    /// Iteration over the labels of all vertices.
    pub fn iter_vertices(&self) -> Box<dyn Iterator<Item = &K> + '_> {
        let it = self
            .lower_graph
            .iter_vertices()
            .map(|vid| self.label_by_id(&vid).unwrap());
        Box::new(it)
    }

    /// Tests whether the graph has an edge from `from` to `to`.
    pub fn contains_edge(&self, from: &K, to: &K) -> bool {
        match (self.vertex_id_by_label(from), self.vertex_id_by_label(to)) {
            (Some(src), Some(snk)) => self.lower_graph.contains_edge(&src, &snk),
            _ => false,
        }
    }

    /// Iteration over the direct successors of a label.
    ///
    /// Unknown labels yield an empty iteration.
    pub fn successors(&self, label: &K) -> Box<dyn Iterator<Item = &K> + '_> {
        if let Some(vid) = self.labels.get_by_right(label) {
            let it = self
                .lower_graph
                .out_neighbors(vid)
                .map(|s| self.label_by_id(&s).unwrap());
            Box::new(it)
        } else {
            Box::new(std::iter::empty())
        }
    }
}

impl<K, G> LabeledGraph<K, G>
where
    K: Hash + Eq + Clone + std::fmt::Debug,
    G: QueryableGraph,
{
    fn resolve(&self, label: &K) -> GraphResult<VertexId> {
        self.vertex_id_by_label(label)
            .ok_or_else(|| GraphError::UnknownLabel(format!("{:?}", label)))
    }

    fn relabel(&self, ids: Vec<VertexId>) -> Vec<K> {
        ids.iter()
            .map(|vid| self.label_by_id(vid).unwrap().clone())
            .collect()
    }

    /// Visits every vertex reachable from `start` in breadth-first
    /// order. See [`Traversal::bft`].
    pub fn bft(&self, start: &K) -> GraphResult<Vec<K>> {
        let start = self.resolve(start)?;
        Ok(self.relabel(self.lower_graph.bft(&start)?))
    }

    /// Visits every vertex reachable from `start` in depth-first order
    /// with an explicit stack. See [`Traversal::dft`].
    pub fn dft(&self, start: &K) -> GraphResult<Vec<K>> {
        let start = self.resolve(start)?;
        Ok(self.relabel(self.lower_graph.dft(&start)?))
    }

    /// Recursive variant of [`dft`](LabeledGraph::dft). See
    /// [`Traversal::dft_recursive`] for the call-stack constraint.
    pub fn dft_recursive(&self, start: &K) -> GraphResult<Vec<K>> {
        let start = self.resolve(start)?;
        Ok(self.relabel(self.lower_graph.dft_recursive(&start)?))
    }

    /// Searches for a shortest route by edge count from `start` to
    /// `destination`. `Ok(None)` when the destination is absent or
    /// unreachable. See [`PathSearch::bfs`].
    pub fn bfs(&self, start: &K, destination: &K) -> GraphResult<Option<Vec<K>>> {
        let start = self.resolve(start)?;
        let dest = match self.vertex_id_by_label(destination) {
            Some(vid) => vid,
            None => return Ok(None),
        };
        Ok(self
            .lower_graph
            .bfs(&start, &dest)?
            .map(|route| self.relabel(route)))
    }

    /// Searches for some route from `start` to `destination` in
    /// depth-first order. `Ok(None)` when the destination is absent or
    /// unreachable. See [`PathSearch::dfs`].
    pub fn dfs(&self, start: &K, destination: &K) -> GraphResult<Option<Vec<K>>> {
        let start = self.resolve(start)?;
        let dest = match self.vertex_id_by_label(destination) {
            Some(vid) => vid,
            None => return Ok(None),
        };
        Ok(self
            .lower_graph
            .dfs(&start, &dest)?
            .map(|route| self.relabel(route)))
    }
}

impl<K, G> LabeledGraph<K, G>
where
    K: Hash + Eq + std::fmt::Debug,
    G: QueryableGraph,
{
    pub fn debug(&self) -> LabeledGraphDebug<'_, K, G> {
        LabeledGraphDebug {
            graph: self,
            init_indent: 0,
            indent_step: 2,
        }
    }
}

/// A default implementation of inspecting into a labeled graph with
/// customized indentation.
pub struct LabeledGraphDebug<'a, K, G>
where
    K: Hash + Eq + std::fmt::Debug,
    G: QueryableGraph,
{
    graph: &'a LabeledGraph<K, G>,
    init_indent: usize,
    indent_step: usize,
}

impl<'a, K, G> LabeledGraphDebug<'a, K, G>
where
    K: Hash + Eq + std::fmt::Debug,
    G: QueryableGraph,
{
    pub fn indent(mut self, init: usize, step: usize) -> Self {
        self.init_indent = init;
        self.indent_step = step;
        self
    }

    fn display_indent(&self, f: &mut std::fmt::Formatter<'_>, level: usize) -> std::fmt::Result {
        let indention = self.init_indent + self.indent_step * level;
        for _ in 0..indention {
            write!(f, " ")?;
        }
        Ok(())
    }
}

impl<'a, K, G> std::fmt::Debug for LabeledGraphDebug<'a, K, G>
where
    K: Hash + Eq + std::fmt::Debug,
    G: QueryableGraph,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for vid in self.graph.lower_graph.iter_vertices() {
            self.display_indent(f, 0)?;
            writeln!(f, "{:?}", self.graph.label_by_id(&vid).unwrap())?;
            for s in self.graph.lower_graph.out_neighbors(&vid) {
                self.display_indent(f, 1)?;
                writeln!(f, "-> {:?}", self.graph.label_by_id(&s).unwrap())?;
            }
        }
        Ok(())
    }
}
