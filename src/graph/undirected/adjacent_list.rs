use crate::generator::EdgeList;
use crate::graph::*;
use petgraph::{
    graph::{EdgeIndex, NodeIndex},
    stable_graph::StableUnGraph,
    visit::EdgeRef,
};

/// An undirected graph backed by `petgraph::stable_graph::StableUnGraph`.
///
/// Every edge keeps the `(source, sink)` order it was added with.
#[derive(Clone)]
pub struct AdjacentListGraph(StableUnGraph<(), (VertexId, VertexId), usize>);

impl DirectedOrNot for AdjacentListGraph {
    const DIRECTED_OR_NOT: bool = false;
}

impl GrowableGraph for AdjacentListGraph {
    fn new() -> Self {
        Self::with_capacity(0, 0)
    }

    fn with_capacity(vertex_size: usize, edge_size: usize) -> Self {
        Self(StableUnGraph::<(), (VertexId, VertexId), usize>::with_capacity(
            vertex_size,
            edge_size,
        ))
    }

    fn add_vertex(&mut self) -> VertexId {
        let vid = self.0.add_node(());
        VertexId::new(vid.index())
    }

    fn add_edge(&mut self, source: VertexId, sink: VertexId) -> EdgeId {
        let a = NodeIndex::new(source.to_raw());
        let b = NodeIndex::new(sink.to_raw());
        let eid = self.0.add_edge(a, b, (source, sink));
        EdgeId::new(eid.index())
    }
}

impl FromEdgeList for AdjacentListGraph {
    fn from_edge_list(
        edges: EdgeList,
        vertex_count: usize,
        directed: bool,
    ) -> Result<Self, ConstructionError> {
        grow_from_edge_list(edges, vertex_count, directed)
    }
}

impl QueryableGraph for AdjacentListGraph {
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

    fn iter_edges(&self) -> Box<dyn Iterator<Item = Edge> + '_> {
        let it = self.0.edge_indices().filter_map(|x| {
            self.0.edge_weight(x).map(|(source, sink)| Edge {
                id: EdgeId::new(x.index()),
                source: *source,
                sink: *sink,
            })
        });
        Box::new(it)
    }

    fn contains_edge(&self, e: &EdgeId) -> bool {
        let eidx = EdgeIndex::new(e.to_raw());
        self.0.edge_weight(eidx).is_some()
    }

    fn find_edge(&self, e: &EdgeId) -> Option<Edge> {
        let eidx = EdgeIndex::new(e.to_raw());
        self.0.edge_weight(eidx).map(|(src, sink)| Edge {
            id: *e,
            source: *src,
            sink: *sink,
        })
    }

    fn in_edges(&self, v: &VertexId) -> Box<dyn Iterator<Item = Edge> + '_> {
        let nidx = NodeIndex::new(v.to_raw());
        let it = self.0.edges(nidx).map(|x| {
            let id = EdgeId::new(x.id().index());
            let source = VertexId::new(x.source().index());
            let sink = VertexId::new(x.target().index());
            Edge { id, source, sink }
        });
        Box::new(it)
    }

    fn out_edges(&self, v: &VertexId) -> Box<dyn Iterator<Item = Edge> + '_> {
        let it = self.in_edges(v).map(|e| Edge {
            id: e.id,
            source: e.sink,
            sink: e.source,
        });
        Box::new(it)
    }

    fn edges_connecting(
        &self,
        source: &VertexId,
        sink: &VertexId,
    ) -> Box<dyn Iterator<Item = Edge> + '_> {
        let src = NodeIndex::new(source.to_raw());
        let snk = NodeIndex::new(sink.to_raw());
        let it = self.0.edges_connecting(src, snk).map(|x| {
            let id = EdgeId::new(x.id().index());
            let source = VertexId::new(x.source().index());
            let sink = VertexId::new(x.target().index());
            Edge { id, source, sink }
        });
        Box::new(it)
    }
}
