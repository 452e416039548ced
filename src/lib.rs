//! Generators of full graphs and full citation graphs.
//!
//! # Full graphs
//!
//! In a full graph every structurally possible edge is present.
//! Unlike the complete graph $K_n$ of graph theory, a full graph may be directed and may carry loops.
//! Whatever the flags, $K_n$ is a subgraph of the undirected version of a full graph on $n$ vertices.
//!
//! Generators compute the closed-form edge count first and reserve the edge list exactly once,
//! then emit edges in a fixed order.
//! So two calls with the same arguments always yield the same list.
//!
//! # Low-level graphs
//!
//! Edge lists are built into graphs through [graph::FromEdgeList].
//! This crate ships tree-backed and petgraph-backed graphs, both directed and undirected.
//! Their vertices and edges are lightweight ID's, essentially `usize`.
//!
//! ```
//! use fullgraph::{full, graph::{directed::TreeBackedGraph, QueryableGraph}};
//!
//! let g: TreeBackedGraph = full(3, true, false).unwrap();
//! assert_eq!(g.vertex_size(), 3);
//! assert_eq!(g.edge_size(), 6);
//! ```

mod error;
pub use self::error::*;
pub mod generator;
pub use self::generator::{full, full_citation, full_citation_edges, full_edges};
pub mod graph;
