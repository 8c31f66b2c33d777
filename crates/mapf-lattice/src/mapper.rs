//! World-space ↔ lattice index conversion.
//!
//! Each axis of `bounds` is split into `resolution` equal steps.  A world
//! position maps to the step it falls in; a cell maps back to its centre.
//! Positions outside `bounds` are an error, never clamped.  The single
//! exception is a coordinate lying exactly on the upper bound, which
//! belongs to the last cell (bounds are inclusive).

use mapf_core::{Bounds, GridPos, WorldPos};

use crate::{LatticeError, LatticeResult};

/// Index of `v` along one axis split into `n` steps of `step` starting at
/// `min`.  The caller guarantees `v` is within the axis extent.
#[inline]
pub(crate) fn axis_index(v: f32, min: f32, step: f32, n: usize) -> usize {
    let i = ((v - min) / step).floor() as usize;
    i.min(n - 1)
}

/// Linear mapping between world positions and lattice cells.
///
/// Cheap to copy; holds no heap data.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CoordinateMapper {
    bounds:     Bounds,
    resolution: usize,
    x_step:     f32,
    y_step:     f32,
    /// Default `z` of world positions produced by [`to_world`][Self::to_world].
    height:     f32,
}

impl CoordinateMapper {
    /// `resolution` must be non-zero (guaranteed by `PlannerConfig::validate`).
    pub fn new(bounds: Bounds, resolution: usize, height: f32) -> Self {
        Self {
            bounds,
            resolution,
            x_step: bounds.width() / resolution as f32,
            y_step: bounds.height() / resolution as f32,
            height,
        }
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn resolution(&self) -> usize {
        self.resolution
    }

    /// Cell size along `(x, y)` in world units.
    pub fn step_size(&self) -> (f32, f32) {
        (self.x_step, self.y_step)
    }

    /// Lattice cell containing `pos`.
    pub fn to_cell(&self, pos: WorldPos) -> LatticeResult<GridPos> {
        if !self.bounds.contains(pos) {
            return Err(LatticeError::OutOfBounds { pos, bounds: self.bounds });
        }
        let x = axis_index(pos.x, self.bounds.x_min, self.x_step, self.resolution);
        let y = axis_index(pos.y, self.bounds.y_min, self.y_step, self.resolution);
        Ok(GridPos::new(x as i32, y as i32))
    }

    /// Centre of `cell` at the configured waypoint height.
    pub fn to_world(&self, cell: GridPos) -> WorldPos {
        self.to_world_at(cell, self.height)
    }

    /// Centre of `cell` at height `z`.
    pub fn to_world_at(&self, cell: GridPos, z: f32) -> WorldPos {
        WorldPos::new(
            self.bounds.x_min + (cell.x as f32 + 0.5) * self.x_step,
            self.bounds.y_min + (cell.y as f32 + 0.5) * self.y_step,
            z,
        )
    }

    /// Convert a waypoint sequence back into lattice cells.
    pub fn path_to_cells(&self, path: &[WorldPos]) -> LatticeResult<Vec<GridPos>> {
        path.iter().map(|&p| self.to_cell(p)).collect()
    }
}
