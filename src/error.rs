//! Errors raised by generators.

use crate::graph::ConstructionError;
use std::collections::TryReserveError;
use std::fmt;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures of a generator call.
///
/// Every failure is total: no edge list and no graph is handed out.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid number of vertices: {vertex_count}")]
    InvalidArgument { vertex_count: i64 },

    #[error("number of edges of a graph on {vertex_count} vertices overflows")]
    CapacityOverflow { vertex_count: i64 },

    #[error("failed to reserve {slots} vertex slots")]
    Allocation {
        slots: usize,
        #[source]
        source: TryReserveError,
    },

    #[error(transparent)]
    Construction(#[from] ConstructionError),
}

/// Coarse classification of [Error].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidArgument,
    Allocation,
    Construction,
}

impl ErrorKind {
    /// Stable machine-readable code.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidArgument => "INVALID_ARGUMENT",
            Self::Allocation => "ALLOCATION",
            Self::Construction => "CONSTRUCTION",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Error {
    /// Both an overflowing size and a refused reservation are allocation failures.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            Self::CapacityOverflow { .. } | Self::Allocation { .. } => ErrorKind::Allocation,
            Self::Construction(_) => ErrorKind::Construction,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::VertexId;

    #[test]
    fn kinds() {
        let e = Error::InvalidArgument { vertex_count: -1 };
        assert_eq!(e.kind(), ErrorKind::InvalidArgument);
        assert_eq!(e.to_string(), "invalid number of vertices: -1");

        let e = Error::CapacityOverflow {
            vertex_count: i64::MAX,
        };
        assert_eq!(e.kind(), ErrorKind::Allocation);
        assert_eq!(e.kind().to_string(), "ALLOCATION");

        let e: Error = ConstructionError::VertexOutOfRange {
            vertex: VertexId::new(3),
            vertex_count: 3,
        }
        .into();
        assert_eq!(e.kind(), ErrorKind::Construction);
        assert_eq!(e.to_string(), "vertex VertexId(3) out of range 0..3");
    }

    #[test]
    fn allocation_keeps_source() {
        use std::error::Error as _;

        let mut v: Vec<u64> = Vec::new();
        let source = v.try_reserve_exact(usize::MAX).unwrap_err();
        let e = Error::Allocation {
            slots: usize::MAX,
            source,
        };
        assert_eq!(e.kind(), ErrorKind::Allocation);
        assert!(e.source().is_some());
    }
}
