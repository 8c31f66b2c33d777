//! World-space geometry.
//!
//! The ground plane is spanned by `x` and `y`; `z` is the vertical axis and
//! only carries the height at which waypoints are emitted.  Single-precision
//! floats are plenty for terrain-scale coordinates.

use std::fmt;

use crate::{CoreError, CoreResult};

/// A point in world space.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldPos {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl WorldPos {
    #[inline]
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// A point on the ground plane (`z = 0`).
    #[inline]
    pub fn ground(x: f32, y: f32) -> Self {
        Self { x, y, z: 0.0 }
    }
}

impl fmt::Display for WorldPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3}, {:.3})", self.x, self.y, self.z)
    }
}

/// Axis-aligned ground-plane extent of a terrain.  Inclusive on both ends.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub x_min: f32,
    pub x_max: f32,
    pub y_min: f32,
    pub y_max: f32,
}

impl Bounds {
    /// Create bounds, rejecting empty, inverted, or non-finite extents.
    pub fn new(x_min: f32, x_max: f32, y_min: f32, y_max: f32) -> CoreResult<Self> {
        let finite = [x_min, x_max, y_min, y_max].iter().all(|v| v.is_finite());
        if !finite || x_max <= x_min || y_max <= y_min {
            return Err(CoreError::Bounds(format!(
                "x [{x_min}, {x_max}], y [{y_min}, {y_max}] must be finite with max > min"
            )));
        }
        Ok(Self { x_min, x_max, y_min, y_max })
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.x_max - self.x_min
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.y_max - self.y_min
    }

    /// `false` for NaN coordinates.
    #[inline]
    pub fn contains(&self, pos: WorldPos) -> bool {
        pos.x >= self.x_min && pos.x <= self.x_max && pos.y >= self.y_min && pos.y <= self.y_max
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}] x [{}, {}]",
            self.x_min, self.x_max, self.y_min, self.y_max
        )
    }
}
