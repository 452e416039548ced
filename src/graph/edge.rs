use super::VertexId;

/// ID for edges, which are essentially `usize`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct EdgeId(pub usize);

/// A factory to generate `EdgeId` in increasing order.
///
/// Edges built from an edge list get their ID's in list order.
#[derive(Clone)]
pub struct EdgeIdFactory(usize);

/// Information about a low-level edge.
///
/// For undirected graphs, `source` and `sink` are just the order in which the endpoints were stored.
#[derive(Debug, Clone, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct Edge {
    pub id: EdgeId,
    pub source: VertexId,
    pub sink: VertexId,
}

impl Default for EdgeIdFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl EdgeIdFactory {
    pub fn new() -> Self {
        Self(0)
    }

    pub fn one_more(&mut self) -> EdgeId {
        let cur = self.0;
        self.0 += 1;
        EdgeId(cur)
    }
}

impl EdgeId {
    pub const MIN: EdgeId = EdgeId(0);
    pub const MAX: EdgeId = EdgeId(usize::MAX);

    pub fn new(x: usize) -> Self {
        Self(x)
    }

    pub fn to_raw(&self) -> usize {
        self.0
    }
}

impl Edge {
    /// Endpoints as a `(source, sink)` pair.
    pub fn endpoints(&self) -> (VertexId, VertexId) {
        (self.source, self.sink)
    }

    pub fn is_loop(&self) -> bool {
        self.source == self.sink
    }
}
