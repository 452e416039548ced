use crate::generator::EdgeList;
use crate::graph::*;
use petgraph::{
    graph::{EdgeIndex, NodeIndex},
    stable_graph::StableDiGraph,
    visit::EdgeRef,
    Direction,
};

/// A directed graph backed by `petgraph::stable_graph::StableDiGraph`.
#[derive(Clone)]
pub struct AdjacentListGraph(StableDiGraph<(), (), usize>);

impl DirectedOrNot for AdjacentListGraph {
    const DIRECTED_OR_NOT: bool = true;
}

impl GrowableGraph for AdjacentListGraph {
    fn new() -> Self {
        Self::with_capacity(0, 0)
    }

    fn with_capacity(vertex_size: usize, edge_size: usize) -> Self {
        Self(StableDiGraph::<(), (), usize>::with_capacity(
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
        let eid = self.0.add_edge(a, b, ());
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

fn to_edge(e: petgraph::stable_graph::EdgeReference<'_, (), usize>) -> Edge {
    Edge {
        id: EdgeId::new(e.id().index()),
        source: VertexId::new(e.source().index()),
        sink: VertexId::new(e.target().index()),
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
        let it = self.0.edge_indices().filter_map(|x| self.find_edge(&EdgeId::new(x.index())));
        Box::new(it)
    }

    fn contains_edge(&self, e: &EdgeId) -> bool {
        let eidx = EdgeIndex::new(e.to_raw());
        self.0.edge_weight(eidx).is_some()
    }

    fn find_edge(&self, e: &EdgeId) -> Option<Edge> {
        let eidx = EdgeIndex::new(e.to_raw());
        self.0.edge_endpoints(eidx).map(|(src, sink)| Edge {
            id: *e,
            source: VertexId::new(src.index()),
            sink: VertexId::new(sink.index()),
        })
    }

    fn in_edges(&self, v: &VertexId) -> Box<dyn Iterator<Item = Edge> + '_> {
        let nidx = NodeIndex::new(v.to_raw());
        let it = self.0.edges_directed(nidx, Direction::Incoming).map(to_edge);
        Box::new(it)
    }

    fn out_edges(&self, v: &VertexId) -> Box<dyn Iterator<Item = Edge> + '_> {
        let nidx = NodeIndex::new(v.to_raw());
        let it = self.0.edges_directed(nidx, Direction::Outgoing).map(to_edge);
        Box::new(it)
    }

    fn edges_connecting(
        &self,
        source: &VertexId,
        sink: &VertexId,
    ) -> Box<dyn Iterator<Item = Edge> + '_> {
        let src = NodeIndex::new(source.to_raw());
        let snk = NodeIndex::new(sink.to_raw());
        let it = self.0.edges_connecting(src, snk).map(to_edge);
        Box::new(it)
    }
}
