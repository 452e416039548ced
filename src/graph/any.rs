use crate::generator::EdgeList;
use crate::graph::*;

/// A tree-backed graph whose directedness is chosen at run time.
///
/// It is what generators build when the caller passes `directed` as a value rather than picking a type.
#[derive(Clone, Debug)]
pub enum Graph {
    Directed(directed::TreeBackedGraph),
    Undirected(undirected::TreeBackedGraph),
}

impl Graph {
    pub fn is_directed(&self) -> bool {
        matches!(self, Self::Directed(_))
    }

    fn inner(&self) -> &dyn QueryableGraph {
        match self {
            Self::Directed(g) => g,
            Self::Undirected(g) => g,
        }
    }
}

impl FromEdgeList for Graph {
    fn from_edge_list(
        edges: EdgeList,
        vertex_count: usize,
        directed: bool,
    ) -> Result<Self, ConstructionError> {
        if directed {
            grow_from_edge_list(edges, vertex_count, true).map(Self::Directed)
        } else {
            grow_from_edge_list(edges, vertex_count, false).map(Self::Undirected)
        }
    }
}

impl QueryableGraph for Graph {
    fn vertex_size(&self) -> usize {
        self.inner().vertex_size()
    }

    fn iter_vertices(&self) -> Box<dyn Iterator<Item = VertexId> + '_> {
        self.inner().iter_vertices()
    }

    fn contains_vertex(&self, v: &VertexId) -> bool {
        self.inner().contains_vertex(v)
    }

    fn edge_size(&self) -> usize {
        self.inner().edge_size()
    }

    fn iter_edges(&self) -> Box<dyn Iterator<Item = Edge> + '_> {
        self.inner().iter_edges()
    }

    fn contains_edge(&self, e: &EdgeId) -> bool {
        self.inner().contains_edge(e)
    }

    fn find_edge(&self, e: &EdgeId) -> Option<Edge> {
        self.inner().find_edge(e)
    }

    fn edges_connecting(
        &self,
        source: &VertexId,
        sink: &VertexId,
    ) -> Box<dyn Iterator<Item = Edge> + '_> {
        self.inner().edges_connecting(source, sink)
    }

    fn in_edges(&self, v: &VertexId) -> Box<dyn Iterator<Item = Edge> + '_> {
        self.inner().in_edges(v)
    }

    fn out_edges(&self, v: &VertexId) -> Box<dyn Iterator<Item = Edge> + '_> {
        self.inner().out_edges(v)
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::*;
    use crate::{full, full_citation};

    #[test]
    fn directedness_follows_flag() {
        let g: Graph = full(3, true, true).unwrap();
        assert!(g.is_directed());
        assert_eq!(g.edge_size(), 9);

        let g: Graph = full(3, false, true).unwrap();
        assert!(!g.is_directed());
        assert_eq!(g.edge_size(), 6);

        let g: Graph = full_citation(3, false).unwrap();
        assert!(!g.is_directed());
        let v0 = VertexId::new(0);
        let v2 = VertexId::new(2);
        assert_eq!(g.edges_connecting(&v0, &v2).count(), 1);
    }

    #[test]
    fn directed_edges_are_oriented() {
        let g: Graph = full_citation(3, true).unwrap();
        let v0 = VertexId::new(0);
        let v2 = VertexId::new(2);
        assert_eq!(g.edges_connecting(&v2, &v0).count(), 1);
        assert_eq!(g.edges_connecting(&v0, &v2).count(), 0);
        assert_eq!(g.out_edges(&v0).count(), 0);
        assert_eq!(g.in_edges(&v0).count(), 2);
    }
}
