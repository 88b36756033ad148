use std::collections::HashMap;

use crate::error::Error;
use crate::search::Search;
use crate::triangle::Triangle;
use crate::{Strip, TriangleIndex, VertexIndex, VertexKey};

/// A mesh fragment held in interned form, ready to be searched for a
/// covering [Strip].
///
/// Construction interns each distinct vertex key into a dense [VertexIndex]
/// slot, so the search itself never touches user values; triangles keep
/// their input order, which is the order the search explores them in and
/// therefore decides which of many valid strips is found first.
#[derive(Debug, Clone)]
pub struct StripBuilder<V> {
    /// Intern table, indexed by [VertexIndex].
    vertices: Vec<V>,
    /// Triangles over interned indices, in input order.
    triangles: Vec<Triangle>,
    /// Triangles touching each vertex, indexed by [VertexIndex].
    incidence: Vec<Vec<TriangleIndex>>,
}

impl<V: VertexKey> StripBuilder<V> {
    /// Intern a mesh fragment.
    ///
    /// Each triangle is an unordered trio of vertex keys; keys may repeat
    /// freely across triangles.
    ///
    /// # Errors
    /// * [Error::Empty] when `triangles` yields nothing
    /// * [Error::Degenerate] when a triangle repeats one of its own corners
    pub fn new(triangles: impl IntoIterator<Item = [V; 3]>) -> Result<Self, Error> {
        let mut vertices: Vec<V> = Vec::new();
        let mut interned: HashMap<V, VertexIndex> = HashMap::new();
        let mut dense_triangles: Vec<Triangle> = Vec::new();
        let mut incidence: Vec<Vec<TriangleIndex>> = Vec::new();

        for (i, corners) in triangles.into_iter().enumerate() {
            let i = i as TriangleIndex;
            let mut slots = [0 as VertexIndex; 3];
            for (slot, key) in slots.iter_mut().zip(corners) {
                *slot = match interned.get(&key) {
                    Some(&idx) => idx,
                    None => {
                        let idx = vertices.len() as VertexIndex;
                        vertices.push(key.clone());
                        interned.insert(key, idx);
                        incidence.push(Vec::new());
                        idx
                    }
                };
            }
            let triangle = Triangle(slots);
            if triangle.is_degenerate() {
                return Err(Error::Degenerate(i));
            }
            for slot in triangle.0 {
                incidence[slot as usize].push(i);
            }
            dense_triangles.push(triangle);
        }

        if dense_triangles.is_empty() {
            return Err(Error::Empty);
        }
        Ok(Self {
            vertices,
            triangles: dense_triangles,
            incidence,
        })
    }

    /// Number of triangles in the fragment.
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Number of distinct vertex keys in the fragment.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Find an ordered vertex sequence whose consecutive 3-vertex windows
    /// cover every triangle of the fragment at least once.
    ///
    /// Deterministic: the same input sequence always yields the same strip.
    /// The search is exhaustive and exponential in the worst case; it
    /// returns the first covering found, not a shortest one.
    ///
    /// # Errors
    /// * [Error::Disconnected] when the fragment is not connected by shared
    ///   vertices, so no usage cap would ever admit a covering
    pub fn find_strip(&self) -> Result<Strip<V>, Error> {
        self.check_connected()?;
        let slots = Search::run(&self.triangles);
        Ok(Strip::from_slots(slots, &self.vertices))
    }

    /// Verify every triangle is reachable from triangle 0 through shared
    /// vertices.
    ///
    /// Consecutive strip windows always share two vertices, so a covering
    /// strip can never cross between vertex-disjoint regions; without this
    /// check the deepening loop would escalate forever on such input.
    fn check_connected(&self) -> Result<(), Error> {
        let total = self.triangles.len();
        let mut seen_triangle = vec![false; total];
        let mut seen_vertex = vec![false; self.vertices.len()];
        let mut queue: Vec<TriangleIndex> = vec![0];
        seen_triangle[0] = true;
        let mut reached = 0;

        while let Some(i) = queue.pop() {
            reached += 1;
            for slot in self.triangles[i as usize].0 {
                if seen_vertex[slot as usize] {
                    continue;
                }
                seen_vertex[slot as usize] = true;
                for &neighbor in &self.incidence[slot as usize] {
                    if !seen_triangle[neighbor as usize] {
                        seen_triangle[neighbor as usize] = true;
                        queue.push(neighbor);
                    }
                }
            }
        }

        if reached == total {
            Ok(())
        } else {
            #[cfg(feature = "tracing")]
            tracing::debug!(reached, total, "rejecting vertex-disjoint fragment");
            Err(Error::Disconnected { reached, total })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interning_is_dense_and_stable() {
        let builder = StripBuilder::new([[10u32, 20, 30], [20, 30, 40]]).unwrap();
        assert_eq!(builder.triangle_count(), 2);
        assert_eq!(builder.vertex_count(), 4);
        // shared keys intern to the same slot
        assert_eq!(builder.triangles[0].0[1], builder.triangles[1].0[0]);
        assert_eq!(builder.triangles[0].0[2], builder.triangles[1].0[1]);
    }

    #[test]
    fn incidence_lists_every_touching_triangle() {
        let builder = StripBuilder::new([[0u32, 1, 2], [1, 2, 3], [2, 3, 4]]).unwrap();
        // vertex 2 is interned third
        assert_eq!(builder.incidence[2], vec![0, 1, 2]);
        assert_eq!(builder.incidence[0], vec![0]);
    }

    #[test]
    fn rejects_empty_input() {
        let empty: [[u32; 3]; 0] = [];
        assert!(matches!(StripBuilder::new(empty), Err(Error::Empty)));
    }

    #[test]
    fn rejects_degenerate_triangle() {
        let result = StripBuilder::new([[0u32, 1, 2], [3, 3, 4]]);
        assert!(matches!(result, Err(Error::Degenerate(1))));
    }

    #[test]
    fn detects_vertex_disjoint_regions() {
        let builder = StripBuilder::new([[0u32, 1, 2], [3, 4, 5]]).unwrap();
        assert!(matches!(
            builder.find_strip(),
            Err(Error::Disconnected {
                reached: 1,
                total: 2
            })
        ));
    }

    #[test]
    fn accepts_vertex_connected_regions() {
        let builder = StripBuilder::new([[0u32, 1, 2], [1, 2, 3]]).unwrap();
        assert!(builder.check_connected().is_ok());
    }
}
