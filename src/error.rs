use crate::TriangleIndex;

/// Errors related to [StripBuilders](crate::StripBuilder).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No seed triangle can exist, so no strip can.
    #[error("Attempted to build a strip from an empty triangle list")]
    Empty,
    /// The extension rule needs exactly one corner outside the strip's
    /// trailing pair, which a triangle with repeated corners cannot provide.
    #[error("Triangle {0} has fewer than 3 distinct vertices")]
    Degenerate(TriangleIndex),
    /// No usage cap admits a strip across vertex-disjoint regions, so the
    /// search would deepen forever.
    #[error("Mesh fragment is not connected by shared vertices: reached {reached} of {total} triangles")]
    Disconnected {
        /// Triangles reachable from triangle 0 through shared vertices.
        reached: usize,
        /// Triangles in the fragment.
        total: usize,
    },
}
