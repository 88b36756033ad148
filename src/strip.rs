use crate::VertexIndex;

/// An ordered vertex sequence covering a mesh fragment.
///
/// Every consecutive window of 3 vertices denotes one of the fragment's
/// triangles; the first window is the seed triangle, and each later vertex
/// extends the strip by one triangle. A triangle may be denoted by more than
/// one window when it had to be revisited to bridge between regions.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Strip<V> {
    vertices: Vec<V>,
}

impl<V> Strip<V> {
    /// Resolve interned slots back to user vertex keys.
    pub(crate) fn from_slots(slots: Vec<VertexIndex>, table: &[V]) -> Self
    where
        V: Clone,
    {
        Self {
            vertices: slots
                .into_iter()
                .map(|slot| table[slot as usize].clone())
                .collect(),
        }
    }

    /// The strip's vertices, in order.
    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    /// Number of vertices in the strip. Always at least 3.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Whether the strip holds no vertices. Never true for a found strip.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Number of triangle windows the strip encodes.
    pub fn triangle_count(&self) -> usize {
        self.vertices.len().saturating_sub(2)
    }

    /// Iterate the consecutive 3-vertex windows, one per encoded triangle.
    ///
    /// This is the decoding a strip consumer performs; scanning the windows
    /// of a found strip visits every input triangle's vertex set at least
    /// once.
    pub fn windows(&self) -> impl Iterator<Item = &[V]> {
        self.vertices.windows(3)
    }

    /// Consume the strip, returning its vertices.
    pub fn into_vec(self) -> Vec<V> {
        self.vertices
    }
}

impl<V> IntoIterator for Strip<V> {
    type Item = V;
    type IntoIter = std::vec::IntoIter<V>;

    fn into_iter(self) -> Self::IntoIter {
        self.vertices.into_iter()
    }
}

impl<'strip, V> IntoIterator for &'strip Strip<V> {
    type Item = &'strip V;
    type IntoIter = std::slice::Iter<'strip, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.vertices.iter()
    }
}
