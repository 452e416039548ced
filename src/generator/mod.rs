//! Generators of full graphs and full citation graphs.
//!
//! Each generator comes in two flavours:
//! one returns the bare [EdgeList],
//! the other builds the list into any graph implementing [FromEdgeList](crate::graph::FromEdgeList).

mod edge_list;
pub use self::edge_list::*;
mod full;
pub use self::full::*;
mod citation;
pub use self::citation::*;

use crate::{Error, Result};

/// Validates a requested number of vertices.
fn vertex_count(n: i64) -> Result<usize> {
    if n < 0 {
        return Err(Error::InvalidArgument { vertex_count: n });
    }
    usize::try_from(n).map_err(|_| Error::CapacityOverflow { vertex_count: n })
}
