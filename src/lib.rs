//! Triangle-strip construction for unordered triangle soups, for pipelines
//! that consume strip-encoded geometry (geometry shader inputs, GPU index
//! buffers).
//!
//! A [Strip] is an ordered vertex sequence in which every consecutive window
//! of 3 vertices denotes one triangle. [StripBuilder] searches an unordered
//! triangle collection for a single strip covering every input triangle at
//! least once, by depth-first backtracking with iterative deepening over the
//! number of times any one triangle may be revisited. The first covering
//! found wins; the strip is not guaranteed to be minimal.
//!
//! ```
//! let strip = tristrip::find_strip([[0u32, 1, 2], [1, 2, 3]]).unwrap();
//! assert_eq!(strip.len(), 4);
//! ```
#![cfg_attr(not(debug_assertions), warn(missing_docs))]

pub mod error;

mod builder;
mod search;
mod strip;
mod triangle;

pub use builder::*;
pub use strip::*;

use error::Error;

/// Index type of interned vertices within a [StripBuilder].
pub type VertexIndex = u32;

/// Index type of triangles within a [StripBuilder]. The index, not the
/// triangle's content, is the unit of usage tracking during the search.
pub type TriangleIndex = u32;

// TODO :: convert to trait alias once https://github.com/rust-lang/rfcs/pull/1733 is stabilized
/// Trait alias for types which can act as vertex identifiers.
///
/// Vertices are opaque to the search: only equality and hashing are ever
/// used. Integers, strings, and handle types are all valid.
pub trait VertexKey: Eq + std::hash::Hash + Clone + std::fmt::Debug {}
impl<V> VertexKey for V where V: Eq + std::hash::Hash + Clone + std::fmt::Debug {}

/// Find a triangle strip covering every triangle of a mesh fragment.
///
/// Convenience wrapper around [StripBuilder::new] + [StripBuilder::find_strip].
///
/// # Errors
/// * [Error::Empty] when `triangles` yields nothing
/// * [Error::Degenerate] when a triangle has fewer than 3 distinct vertices
/// * [Error::Disconnected] when the fragment is not connected by shared vertices
pub fn find_strip<V: VertexKey>(
    triangles: impl IntoIterator<Item = [V; 3]>,
) -> Result<Strip<V>, Error> {
    StripBuilder::new(triangles)?.find_strip()
}
