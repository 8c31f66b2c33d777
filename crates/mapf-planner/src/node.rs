//! Search state record shared by the frontier and the visited table.

use mapf_core::{GridPos, SpaceTime};

/// A frontier / visited record.
///
/// Identity is the full (x, y, t) [`key`][Self::key]; the parent is stored
/// as a cell only, because it always sits one time step earlier.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SearchNode {
    pub pos:    GridPos,
    pub t:      u32,
    /// `None` for the root.
    pub parent: Option<GridPos>,
    /// Accumulated cost, heuristic terms included.
    pub cost:   f32,
}

impl SearchNode {
    /// The search root: `pos` at `t = 0` with zero cost.
    pub fn root(pos: GridPos) -> Self {
        Self { pos, t: 0, parent: None, cost: 0.0 }
    }

    #[inline]
    pub fn key(&self) -> SpaceTime {
        self.pos.at(self.t)
    }

    /// Visited-table key of the parent, `(parent.x, parent.y, t - 1)`.
    #[inline]
    pub fn parent_key(&self) -> Option<SpaceTime> {
        let parent = self.parent?;
        Some(parent.at(self.t.checked_sub(1)?))
    }
}
