//! Lattice index types.
//!
//! Spatial indices are `i32` so neighbour arithmetic (`x - 1` at the left
//! edge) stays representable; bounds checks happen in `mapf-lattice`.
//! Time indices are `u32` because time never runs backwards.

use std::fmt;

/// A spatial cell index on the lattice's two ground axes.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridPos {
    pub x: i32,
    pub y: i32,
}

impl GridPos {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The cell displaced by `(dx, dy)`.
    #[inline]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self { x: self.x + dx, y: self.y + dy }
    }

    /// Pair this cell with a time step.
    #[inline]
    pub const fn at(self, t: u32) -> SpaceTime {
        SpaceTime { x: self.x, y: self.y, t }
    }

    /// L1 distance in cells.
    #[inline]
    pub fn manhattan(self, other: GridPos) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    /// L∞ distance in cells.
    #[inline]
    pub fn chebyshev(self, other: GridPos) -> i32 {
        (self.x - other.x).abs().max((self.y - other.y).abs())
    }

    /// `true` for the 8-neighbourhood including `self`.
    #[inline]
    pub fn is_adjacent(self, other: GridPos) -> bool {
        self.chebyshev(other) < 2
    }
}

impl fmt::Display for GridPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Full lattice identity of a search state: cell plus time step.
///
/// This is the key of the visited table and of the frontier's decrease-key
/// index.  Two states at the same cell but different times are distinct.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpaceTime {
    pub x: i32,
    pub y: i32,
    pub t: u32,
}

impl SpaceTime {
    #[inline]
    pub const fn new(x: i32, y: i32, t: u32) -> Self {
        Self { x, y, t }
    }

    #[inline]
    pub const fn pos(self) -> GridPos {
        GridPos { x: self.x, y: self.y }
    }
}

impl fmt::Display for SpaceTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})@t{}", self.x, self.y, self.t)
    }
}
