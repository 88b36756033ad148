//! Backtracking strip search with iterative deepening over the usage cap.

use crate::triangle::{Triangle, SEED_WINDINGS};
use crate::VertexIndex;

/// Mutable state of one deepening round.
///
/// Every mutation made before a recursive call is exactly undone before that
/// call reports failure; a successful call leaves the state in place for its
/// caller. Triangles and windings are always tried in input order, so the
/// first covering found under that order is the one returned, not a
/// shortest one.
pub(crate) struct Search<'t> {
    triangles: &'t [Triangle],
    /// The in-progress strip, over interned vertex indices.
    strip: Vec<VertexIndex>,
    /// How many vertices each triangle has contributed to the strip so far
    /// this round. A triangle is covered once its count is nonzero.
    usage: Vec<u32>,
    /// Bound on any one triangle's contribution count this round.
    cap: u32,
}

impl<'t> Search<'t> {
    /// Find a strip covering every triangle, escalating the usage cap until
    /// one exists.
    ///
    /// Some fragments have no covering that uses each triangle exactly once:
    /// a triangle may have to be crossed again to bridge between regions the
    /// one-pass adjacency rule cannot otherwise connect. The minimal
    /// sufficient cap is not known in advance, so each round starts from a
    /// fresh state with a cap one higher than the last. The caller is
    /// responsible for only handing over fragments connected by shared
    /// vertices; the loop itself has no upper bound.
    pub fn run(triangles: &'t [Triangle]) -> Vec<VertexIndex> {
        let mut cap = 1;
        loop {
            #[cfg(feature = "tracing")]
            tracing::debug!(cap, triangles = triangles.len(), "starting search round");
            let mut search = Search {
                triangles,
                strip: Vec::new(),
                usage: vec![0; triangles.len()],
                cap,
            };
            if search.dfs() {
                return search.strip;
            }
            cap += 1;
        }
    }

    /// One node of the depth-first search. True leaves a complete strip in
    /// `self.strip`; false restores the state the call began with.
    fn dfs(&mut self) -> bool {
        if self.usage.iter().all(|&used| used > 0) {
            return true;
        }
        if self.strip.is_empty() {
            self.seed()
        } else {
            self.extend()
        }
    }

    /// Place the first triangle, which contributes all 3 of its vertices.
    fn seed(&mut self) -> bool {
        for i in 0..self.triangles.len() {
            self.usage[i] = 1;
            for order in SEED_WINDINGS {
                self.strip.extend(self.triangles[i].winding(order));
                if self.dfs() {
                    return true;
                }
                self.strip.clear();
            }
            self.usage[i] = 0;
        }
        false
    }

    /// Append one vertex by consuming a triangle that contains the strip's
    /// trailing pair.
    fn extend(&mut self) -> bool {
        let b = self.strip[self.strip.len() - 1];
        let a = self.strip[self.strip.len() - 2];
        for i in 0..self.triangles.len() {
            if self.usage[i] >= self.cap {
                continue;
            }
            let Some(apex) = self.triangles[i].apex(a, b) else {
                continue;
            };
            self.usage[i] += 1;
            self.strip.push(apex);
            if self.dfs() {
                return true;
            }
            self.strip.pop();
            self.usage[i] -= 1;
        }
        false
    }
}
