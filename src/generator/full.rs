use super::{vertex_count, EdgeList, EdgeListBuilder};
use crate::graph::{FromEdgeList, VertexId};
use crate::{Error, Result};
use tracing::{debug, instrument};

/// How a full graph enumerates its edges.
///
/// | policy                | edges                | order                                              |
/// | --------------------- | -------------------- | -------------------------------------------------- |
/// | `DirectedWithLoops`   | $n^2$                | $(i, j)$ for all $i$, then all $j$                 |
/// | `Directed`            | $n(n-1)$             | $(i, j)$ for all $i$, then $j < i$, then $j > i$   |
/// | `UndirectedWithLoops` | $n(n+1)/2$           | $(i, j)$ for all $i$, then $j \ge i$               |
/// | `Undirected`          | $n(n-1)/2$           | $(i, j)$ for all $i$, then $j > i$                 |
///
/// Every policy emits its pairs in strictly increasing lexicographic order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FullPolicy {
    DirectedWithLoops,
    Directed,
    UndirectedWithLoops,
    Undirected,
}

impl FullPolicy {
    pub fn from_flags(directed: bool, loops: bool) -> Self {
        match (directed, loops) {
            (true, true) => Self::DirectedWithLoops,
            (true, false) => Self::Directed,
            (false, true) => Self::UndirectedWithLoops,
            (false, false) => Self::Undirected,
        }
    }

    pub fn is_directed(self) -> bool {
        matches!(self, Self::DirectedWithLoops | Self::Directed)
    }

    pub fn has_loops(self) -> bool {
        matches!(self, Self::DirectedWithLoops | Self::UndirectedWithLoops)
    }

    /// Number of edges of a full graph on `n` vertices, or `None` on overflow.
    pub fn edge_count(self, n: usize) -> Option<usize> {
        match self {
            Self::DirectedWithLoops => n.checked_mul(n),
            Self::Directed => n.checked_mul(n.saturating_sub(1)),
            Self::UndirectedWithLoops => half_product(n, n.checked_add(1)?),
            Self::Undirected => half_product(n, n.saturating_sub(1)),
        }
    }

    fn emit(self, n: usize, builder: &mut EdgeListBuilder) {
        let vid = VertexId::new;
        match self {
            Self::DirectedWithLoops => {
                for i in 0..n {
                    for j in 0..n {
                        builder.append(vid(i), vid(j));
                    }
                }
            }
            Self::Directed => {
                for i in 0..n {
                    for j in 0..i {
                        builder.append(vid(i), vid(j));
                    }
                    for j in i + 1..n {
                        builder.append(vid(i), vid(j));
                    }
                }
            }
            Self::UndirectedWithLoops => {
                for i in 0..n {
                    for j in i..n {
                        builder.append(vid(i), vid(j));
                    }
                }
            }
            Self::Undirected => {
                for i in 0..n {
                    for j in i + 1..n {
                        builder.append(vid(i), vid(j));
                    }
                }
            }
        }
    }
}

/// $ab/2$ for consecutive `a` and `b`, one of which is even.
fn half_product(a: usize, b: usize) -> Option<usize> {
    if a % 2 == 0 {
        (a / 2).checked_mul(b)
    } else {
        a.checked_mul(b / 2)
    }
}

/// Generates the edges of a full graph on `n` vertices.
///
/// The edge list is reserved exactly once, from the closed-form edge count of [FullPolicy].
///
/// # Errors
///
/// * [Error::InvalidArgument] if `n` is negative.
/// * [Error::CapacityOverflow] if the number of edges does not fit in `usize`.
/// * [Error::Allocation] if the edge list cannot be reserved.
#[instrument(name = "generator.full_edges", err, level = "debug")]
pub fn full_edges(n: i64, directed: bool, loops: bool) -> Result<EdgeList> {
    let vertex_count = vertex_count(n)?;
    let policy = FullPolicy::from_flags(directed, loops);
    let slots = policy
        .edge_count(vertex_count)
        .and_then(|x| x.checked_mul(2))
        .ok_or(Error::CapacityOverflow { vertex_count: n })?;
    let mut builder = EdgeListBuilder::with_capacity(slots)?;
    policy.emit(vertex_count, &mut builder);
    debug_assert_eq!(builder.len() * 2, slots);
    let edges = builder.finalize();
    debug!(edges = edges.len(), ?policy, "full graph edges generated");
    Ok(edges)
}

/// Creates a full graph, directed or undirected, with or without loops.
///
/// In a full graph every possible edge is present.
/// This differs from the complete graph $K_n$ of graph theory, which is undirected and loopless;
/// yet $K_n$ is always a subgraph of the undirected version of the full graph on $n$ vertices.
///
/// Time complexity: $O(\|V\| + \|E\|)$, which is $O(\|V\|^2)$ here.
///
/// # Errors
///
/// Those of [full_edges], and [Error::Construction] if `G` refuses the edge list.
pub fn full<G: FromEdgeList>(n: i64, directed: bool, loops: bool) -> Result<G> {
    let edges = full_edges(n, directed, loops)?;
    let graph = G::from_edge_list(edges, vertex_count(n)?, directed)?;
    Ok(graph)
}
