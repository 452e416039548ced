use crate::graph::*;

pub trait GrowableGraph {
    fn new() -> Self;

    /// Creates an empty graph with room for the given numbers of vertices and edges.
    ///
    /// Implementations without preallocation just fall back to [GrowableGraph::new].
    fn with_capacity(_vertex_size: usize, _edge_size: usize) -> Self
    where
        Self: Sized,
    {
        Self::new()
    }

    fn add_vertex(&mut self) -> VertexId;
    fn add_edge(&mut self, source: VertexId, sink: VertexId) -> EdgeId;
}

pub trait QueryableGraph {
    fn vertex_size(&self) -> usize;
    fn iter_vertices(&self) -> Box<dyn Iterator<Item = VertexId> + '_>;
    fn contains_vertex(&self, v: &VertexId) -> bool;

    fn edge_size(&self) -> usize;
    fn iter_edges(&self) -> Box<dyn Iterator<Item = Edge> + '_>;
    fn contains_edge(&self, e: &EdgeId) -> bool;
    fn find_edge(&self, e: &EdgeId) -> Option<Edge>;
    fn edges_connecting(
        &self,
        source: &VertexId,
        sink: &VertexId,
    ) -> Box<dyn Iterator<Item = Edge> + '_>;
    fn in_edges(&self, v: &VertexId) -> Box<dyn Iterator<Item = Edge> + '_>;
    fn out_edges(&self, v: &VertexId) -> Box<dyn Iterator<Item = Edge> + '_>;
}

pub trait DirectedOrNot {
    const DIRECTED_OR_NOT: bool;
}
