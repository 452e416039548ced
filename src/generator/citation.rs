use super::{vertex_count, EdgeList, EdgeListBuilder};
use crate::graph::{FromEdgeList, VertexId};
use crate::{Error, Result};
use tracing::{debug, instrument};

/// Generates the edges of a full citation graph on `n` vertices.
///
/// Edge $i \to j$ is present iff $j < i$, so there are $n(n-1)/2$ edges and never a loop.
/// Edges come in increasing $i$, then increasing $j$.
///
/// # Errors
///
/// * [Error::InvalidArgument] if `n` is negative.
/// * [Error::CapacityOverflow] if the number of edges does not fit in `usize`.
/// * [Error::Allocation] if the edge list cannot be reserved.
#[instrument(name = "generator.full_citation_edges", err, level = "debug")]
pub fn full_citation_edges(n: i64) -> Result<EdgeList> {
    let vertex_count = vertex_count(n)?;
    // two slots for each of the n(n-1)/2 edges
    let slots = vertex_count
        .checked_mul(vertex_count.saturating_sub(1))
        .ok_or(Error::CapacityOverflow { vertex_count: n })?;
    let mut builder = EdgeListBuilder::with_capacity(slots)?;
    for i in 1..vertex_count {
        for j in 0..i {
            builder.append(VertexId::new(i), VertexId::new(j));
        }
    }
    debug_assert_eq!(builder.len() * 2, slots);
    let edges = builder.finalize();
    debug!(edges = edges.len(), "full citation edges generated");
    Ok(edges)
}

/// Creates a full citation graph.
///
/// If `directed` is false, the very same edge list is built into an undirected graph,
/// which is then just a full graph without loops.
///
/// Time complexity: $O(\|V\|^2)$.
///
/// # Errors
///
/// Those of [full_citation_edges], and [Error::Construction] if `G` refuses the edge list.
pub fn full_citation<G: FromEdgeList>(n: i64, directed: bool) -> Result<G> {
    let edges = full_citation_edges(n)?;
    let graph = G::from_edge_list(edges, vertex_count(n)?, directed)?;
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::tests::{init_tracing, pairs};
    use crate::graph::{directed, undirected, Graph, QueryableGraph};
    use crate::ErrorKind;
    use quickcheck_macros::*;

    #[test]
    fn four_vertices() {
        init_tracing();
        let edges = full_citation_edges(4).unwrap();
        assert_eq!(
            pairs(&edges),
            vec![(1, 0), (2, 0), (2, 1), (3, 0), (3, 1), (3, 2)]
        );
        let g: directed::TreeBackedGraph = full_citation(4, true).unwrap();
        assert_eq!(g.vertex_size(), 4);
        assert_eq!(
            g.iter_edges()
                .map(|e| (e.source.to_raw(), e.sink.to_raw()))
                .collect::<Vec<_>>(),
            pairs(&edges)
        );
    }

    #[test]
    fn no_edges_below_two_vertices() {
        assert!(full_citation_edges(0).unwrap().is_empty());
        assert!(full_citation_edges(1).unwrap().is_empty());
        let g: Graph = full_citation(1, true).unwrap();
        assert_eq!(g.vertex_size(), 1);
        assert_eq!(g.edge_size(), 0);
    }

    // rejected the same way as for full graphs
    #[test]
    fn negative_vertex_count() {
        let err = full_citation_edges(-3).unwrap_err();
        assert_eq!(err, Error::InvalidArgument { vertex_count: -3 });
        let err = full_citation::<Graph>(-1, false).err().unwrap();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn overflowing_edge_count() {
        let err = full_citation_edges(i64::MAX).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Allocation);
    }

    #[test]
    fn undirected_needs_undirected_graph() {
        let g: undirected::TreeBackedGraph = full_citation(4, false).unwrap();
        assert_eq!(g.edge_size(), 6);
        let err = full_citation::<directed::TreeBackedGraph>(4, false)
            .err()
            .unwrap();
        assert_eq!(err.kind(), ErrorKind::Construction);
    }

    #[quickcheck]
    fn half_of_full_digraph(n: u8) -> bool {
        let n = i64::from(n % 48);
        let citation = full_citation_edges(n).unwrap();
        let digraph = crate::full_edges(n, true, false).unwrap();
        citation.len() * 2 == digraph.len()
            && citation.iter().all(|(u, v)| v < u)
            && citation.iter().zip(citation.iter().skip(1)).all(|(a, b)| a < b)
    }
}
