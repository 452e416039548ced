use crate::generator::EdgeList;
use crate::graph::*;
use thiserror::Error;

/// Failures of building a graph out of an edge list.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConstructionError {
    #[error("graph is {}, edge list is {}", kind(.graph_directed), kind(.requested_directed))]
    DirectednessMismatch {
        graph_directed: bool,
        requested_directed: bool,
    },

    #[error("vertex {vertex:?} out of range 0..{vertex_count}")]
    VertexOutOfRange {
        vertex: VertexId,
        vertex_count: usize,
    },
}

fn kind(directed: &bool) -> &'static str {
    if *directed {
        "directed"
    } else {
        "undirected"
    }
}

/// Graphs which can be built out of a finished edge list.
pub trait FromEdgeList: Sized {
    /// Builds a graph with `vertex_count` vertices and the edges in `edges`.
    ///
    /// Edges are added in list order.
    /// On failure, nothing is built.
    fn from_edge_list(
        edges: EdgeList,
        vertex_count: usize,
        directed: bool,
    ) -> Result<Self, ConstructionError>;
}

/// Checks that every endpoint in `edges` lies in `0..vertex_count`.
pub fn check_vertex_range(edges: &EdgeList, vertex_count: usize) -> Result<(), ConstructionError> {
    match edges.slots().iter().find(|v| v.to_raw() >= vertex_count) {
        Some(v) => Err(ConstructionError::VertexOutOfRange {
            vertex: *v,
            vertex_count,
        }),
        None => Ok(()),
    }
}

/// Builds a growable graph of a fixed directedness out of an edge list.
///
/// Vertices are added first, so their ID's are `0..vertex_count` as long as `G` hands out ID's in order.
pub fn grow_from_edge_list<G>(
    edges: EdgeList,
    vertex_count: usize,
    directed: bool,
) -> Result<G, ConstructionError>
where
    G: GrowableGraph + DirectedOrNot,
{
    if directed != G::DIRECTED_OR_NOT {
        return Err(ConstructionError::DirectednessMismatch {
            graph_directed: G::DIRECTED_OR_NOT,
            requested_directed: directed,
        });
    }
    check_vertex_range(&edges, vertex_count)?;
    let mut res = G::with_capacity(vertex_count, edges.len());
    for _ in 0..vertex_count {
        let _ = res.add_vertex();
    }
    for (source, sink) in edges.iter() {
        let _ = res.add_edge(source, sink);
    }
    Ok(res)
}

#[cfg(test)]
mod tests {
    use crate::generator::EdgeListBuilder;
    use crate::graph::*;

    fn list(pairs: &[(usize, usize)]) -> crate::generator::EdgeList {
        let mut builder = EdgeListBuilder::with_capacity(pairs.len() * 2).unwrap();
        for (u, v) in pairs {
            builder.append(VertexId::new(*u), VertexId::new(*v));
        }
        builder.finalize()
    }

    #[test]
    fn directedness_mismatch() {
        let res = directed::TreeBackedGraph::from_edge_list(list(&[(0, 1)]), 2, false);
        assert_eq!(
            res.err(),
            Some(ConstructionError::DirectednessMismatch {
                graph_directed: true,
                requested_directed: false,
            })
        );
        let res = undirected::AdjacentListGraph::from_edge_list(list(&[(0, 1)]), 2, true);
        assert_eq!(
            res.err().map(|e| e.to_string()),
            Some("graph is undirected, edge list is directed".to_string())
        );
    }

    #[test]
    fn vertex_out_of_range() {
        let res = directed::AdjacentListGraph::from_edge_list(list(&[(0, 1), (2, 0)]), 2, true);
        assert_eq!(
            res.err(),
            Some(ConstructionError::VertexOutOfRange {
                vertex: VertexId::new(2),
                vertex_count: 2,
            })
        );
    }

    #[test]
    fn edges_in_list_order() {
        let g = directed::TreeBackedGraph::from_edge_list(list(&[(1, 0), (0, 1), (1, 1)]), 2, true)
            .unwrap();
        let edges: Vec<_> = g.iter_edges().map(|e| (e.id, e.endpoints())).collect();
        assert_eq!(
            edges,
            vec![
                (EdgeId::new(0), (VertexId::new(1), VertexId::new(0))),
                (EdgeId::new(1), (VertexId::new(0), VertexId::new(1))),
                (EdgeId::new(2), (VertexId::new(1), VertexId::new(1))),
            ]
        );
    }

    #[test]
    fn isolated_vertices() {
        let g = undirected::TreeBackedGraph::from_edge_list(list(&[]), 3, false).unwrap();
        assert_eq!(g.vertex_size(), 3);
        assert_eq!(g.edge_size(), 0);
        assert_eq!(
            g.iter_vertices().collect::<Vec<_>>(),
            vec![VertexId::new(0), VertexId::new(1), VertexId::new(2)]
        );
    }
}
