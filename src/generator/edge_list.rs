use crate::graph::VertexId;
use crate::{Error, Result};

/// A finished, immutable list of edges.
///
/// Edges are stored flat: edge `i` occupies slots `2i` and `2i + 1`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EdgeList {
    slots: Vec<VertexId>,
}

impl EdgeList {
    /// Number of edges.
    pub fn len(&self) -> usize {
        self.slots.len() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The flat sequence of endpoints.
    pub fn slots(&self) -> &[VertexId] {
        &self.slots
    }

    pub fn into_slots(self) -> Vec<VertexId> {
        self.slots
    }

    pub fn get(&self, i: usize) -> Option<(VertexId, VertexId)> {
        let start = i.checked_mul(2)?;
        match self.slots.get(start..start.checked_add(2)?) {
            Some([source, sink]) => Some((*source, *sink)),
            _ => None,
        }
    }

    /// Iterates over `(source, sink)` pairs in generation order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (VertexId, VertexId)> + '_ {
        self.slots.chunks_exact(2).map(|x| (x[0], x[1]))
    }
}

/// Accumulates vertex pairs into an [EdgeList].
///
/// After an exact [reserve](EdgeListBuilder::reserve),
/// appending up to the reserved number of slots never reallocates.
#[derive(Debug, Default)]
pub struct EdgeListBuilder {
    slots: Vec<VertexId>,
}

impl EdgeListBuilder {
    pub fn new() -> Self {
        Self { slots: Vec::new() }
    }

    /// Creates a builder with room for exactly `slots` vertex slots.
    pub fn with_capacity(slots: usize) -> Result<Self> {
        let mut res = Self::new();
        res.reserve(slots)?;
        Ok(res)
    }

    /// Reserves room for `slots` more vertex slots, two per edge.
    ///
    /// Either the whole room is reserved or nothing is.
    pub fn reserve(&mut self, slots: usize) -> Result<()> {
        tracing::trace!(slots, "reserving edge list");
        self.slots
            .try_reserve_exact(slots)
            .map_err(|source| Error::Allocation { slots, source })
    }

    /// Appending beyond the reserved room is a defect and trips a debug assertion.
    pub fn append(&mut self, source: VertexId, sink: VertexId) {
        debug_assert!(
            self.slots.len() + 2 <= self.slots.capacity(),
            "edge list grows beyond its reservation"
        );
        self.slots.push(source);
        self.slots.push(sink);
    }

    /// Number of edges appended so far.
    pub fn len(&self) -> usize {
        self.slots.len() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn finalize(self) -> EdgeList {
        EdgeList { slots: self.slots }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    fn vid(x: usize) -> VertexId {
        VertexId::new(x)
    }

    #[test]
    fn append_within_reservation() {
        let mut builder = EdgeListBuilder::with_capacity(6).unwrap();
        let ptr = builder.slots.as_ptr();
        builder.append(vid(0), vid(1));
        builder.append(vid(1), vid(2));
        builder.append(vid(2), vid(0));
        assert_eq!(builder.slots.as_ptr(), ptr);
        assert_eq!(builder.len(), 3);

        let list = builder.finalize();
        assert_eq!(list.len(), 3);
        assert!(!list.is_empty());
        assert_eq!(
            list.iter().collect::<Vec<_>>(),
            vec![(vid(0), vid(1)), (vid(1), vid(2)), (vid(2), vid(0))]
        );
        assert_eq!(list.get(1), Some((vid(1), vid(2))));
        assert_eq!(list.get(3), None);
        assert_eq!(
            list.into_slots(),
            vec![vid(0), vid(1), vid(1), vid(2), vid(2), vid(0)]
        );
    }

    #[test]
    fn empty() {
        let list = EdgeListBuilder::with_capacity(0).unwrap().finalize();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_eq!(list.iter().count(), 0);
        assert_eq!(list, EdgeList::default());
    }

    #[test]
    fn refused_reservation() {
        let mut builder = EdgeListBuilder::new();
        let err = builder.reserve(usize::MAX).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Allocation);
        assert!(builder.is_empty());
        assert_eq!(builder.slots.capacity(), 0);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "edge list grows beyond its reservation")]
    fn append_beyond_reservation() {
        let mut builder = EdgeListBuilder::with_capacity(2).unwrap();
        builder.append(vid(0), vid(0));
        builder.append(vid(0), vid(0));
    }
}
