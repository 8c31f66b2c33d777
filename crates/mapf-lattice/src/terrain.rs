//! Terrain collaborator interface.
//!
//! The planner only needs two things from a terrain: its ground-plane
//! extent and a traversability sample at a world position.  A sample of
//! exactly `1.0` means traversable; anything else is a wall.  Terrains are
//! read once, when the lattice is built.

use mapf_core::{Bounds, WorldPos};

use crate::mapper::axis_index;
use crate::{LatticeError, LatticeResult};

/// Read-only traversability source.
pub trait Terrain {
    /// Ground-plane extent of the terrain.
    fn bounds(&self) -> Bounds;

    /// Traversability at `pos`, or `None` if `pos` is not covered.
    fn sample(&self, pos: WorldPos) -> Option<f32>;
}

/// A dense 2-D traversability raster spanning `bounds`.
///
/// The raster resolution (`nx × ny`) is independent of the lattice
/// resolution; the lattice samples it at cell centres.
#[derive(Clone, Debug, PartialEq)]
pub struct TraversabilityGrid {
    bounds: Bounds,
    nx:     usize,
    ny:     usize,
    /// Row-major: `values[y * nx + x]`.
    values: Vec<f32>,
}

impl TraversabilityGrid {
    /// Wrap a row-major raster.  `values.len()` must equal `nx * ny`.
    pub fn new(bounds: Bounds, nx: usize, ny: usize, values: Vec<f32>) -> LatticeResult<Self> {
        if nx == 0 || ny == 0 {
            return Err(LatticeError::Parse(format!("terrain raster {nx}x{ny} is empty")));
        }
        let expected = nx * ny;
        if values.len() != expected {
            return Err(LatticeError::DimensionMismatch {
                expected,
                got: values.len(),
                what: "traversability samples",
            });
        }
        Ok(Self { bounds, nx, ny, values })
    }

    /// A fully traversable raster.
    pub fn open(bounds: Bounds, nx: usize, ny: usize) -> LatticeResult<Self> {
        Self::new(bounds, nx, ny, vec![1.0; nx * ny])
    }

    /// Mark raster cell `(x, y)` as a wall.  Out-of-range indices are ignored.
    pub fn set_wall(&mut self, x: usize, y: usize) {
        if x < self.nx && y < self.ny {
            self.values[y * self.nx + x] = 0.0;
        }
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.nx, self.ny)
    }

    /// Raw sample at raster cell `(x, y)`.
    pub fn value(&self, x: usize, y: usize) -> Option<f32> {
        (x < self.nx && y < self.ny).then(|| self.values[y * self.nx + x])
    }
}

impl Terrain for TraversabilityGrid {
    fn bounds(&self) -> Bounds {
        self.bounds
    }

    fn sample(&self, pos: WorldPos) -> Option<f32> {
        if !self.bounds.contains(pos) {
            return None;
        }
        let x_step = self.bounds.width() / self.nx as f32;
        let y_step = self.bounds.height() / self.ny as f32;
        let x = axis_index(pos.x, self.bounds.x_min, x_step, self.nx);
        let y = axis_index(pos.y, self.bounds.y_min, y_step, self.ny);
        self.value(x, y)
    }
}
