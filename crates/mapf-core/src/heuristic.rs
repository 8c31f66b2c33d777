//! Distance heuristics over the two spatial axes.
//!
//! All three ignore time.  They are admissible for a static grid with unit
//! orthogonal steps; the planner adds them into accumulated cost at every
//! step, see `mapf-planner::engine`.

use crate::GridPos;

/// Closed set of heuristic choices, selected by configuration.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Heuristic {
    /// L1: `|dx| + |dy|`.
    #[default]
    Manhattan,
    /// L2: `sqrt(dx² + dy²)`.
    Euclidean,
    /// L∞ (Chebyshev): `max(|dx|, |dy|)`.
    Diagonal,
}

impl Heuristic {
    /// Estimated distance from `from` to `to`, in cells.
    #[inline]
    pub fn estimate(self, from: GridPos, to: GridPos) -> f32 {
        match self {
            Heuristic::Manhattan => manhattan(from, to),
            Heuristic::Euclidean => euclidean(from, to),
            Heuristic::Diagonal => diagonal(from, to),
        }
    }
}

#[inline]
pub fn manhattan(from: GridPos, to: GridPos) -> f32 {
    from.manhattan(to) as f32
}

#[inline]
pub fn euclidean(from: GridPos, to: GridPos) -> f32 {
    let dx = (from.x - to.x) as f32;
    let dy = (from.y - to.y) as f32;
    (dx * dx + dy * dy).sqrt()
}

#[inline]
pub fn diagonal(from: GridPos, to: GridPos) -> f32 {
    from.chebyshev(to) as f32
}
