use crate::graph::*;

/// Mutation interface of low-level graphs.
pub trait GrowableGraph {
    fn new() -> Self;

    /// Mints a fresh vertex and returns its ID.
    fn add_vertex(&mut self) -> VertexId;

    /// Adds a directed edge from `source` to `sink`.
    ///
    /// Edges have set semantics: at most one edge per `(source, sink)`
    /// pair. Returns whether the edge was newly inserted, so re-adding
    /// an existing edge is a no-op that returns `false`.
    fn add_edge(&mut self, source: VertexId, sink: VertexId) -> bool;
}

/// Query interface of low-level graphs.
pub trait QueryableGraph {
    fn vertex_size(&self) -> usize;
    fn iter_vertices(&self) -> Box<dyn Iterator<Item = VertexId> + '_>;
    fn contains_vertex(&self, v: &VertexId) -> bool;

    fn edge_size(&self) -> usize;
    fn iter_edges(&self) -> Box<dyn Iterator<Item = (VertexId, VertexId)> + '_>;
    fn contains_edge(&self, source: &VertexId, sink: &VertexId) -> bool;

    /// Iteration over direct successors of a vertex, i.e., sinks of its
    /// out-edges. Whether the order is meaningful depends on the backend.
    fn out_neighbors(&self, v: &VertexId) -> Box<dyn Iterator<Item = VertexId> + '_>;

    fn debug(&self) -> GraphDebug<'_, Self>
    where
        Self: Sized,
    {
        GraphDebug::new(self)
    }
}

/// A default implementation of inspecting into a graph with customized
/// indentation.
pub struct GraphDebug<'a, G>
where
    G: QueryableGraph,
{
    graph: &'a G,
    init_indent: usize,
    indent_step: usize,
}

impl<'a, G> GraphDebug<'a, G>
where
    G: QueryableGraph,
{
    fn new(graph: &'a G) -> Self {
        Self {
            graph,
            init_indent: 0,
            indent_step: 2,
        }
    }

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

impl<'a, G> std::fmt::Debug for GraphDebug<'a, G>
where
    G: QueryableGraph,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for v in self.graph.iter_vertices() {
            self.display_indent(f, 0)?;
            writeln!(f, "{:?}", v)?;
            for s in self.graph.out_neighbors(&v) {
                self.display_indent(f, 1)?;
                writeln!(f, "-> {:?}", s)?;
            }
        }
        Ok(())
    }
}
