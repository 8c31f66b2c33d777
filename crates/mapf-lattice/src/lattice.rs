//! The space-time lattice.
//!
//! # Data layout
//!
//! Cells are stored in one flat `Vec<Cell>` ordered time-major:
//!
//! ```text
//! index(x, y, t) = (t * resolution + y) * resolution + x
//! ```
//!
//! so one time slice is a contiguous `resolution²` block.  Walls are
//! replicated into every slice at build time; occupancy is per slice.

use tracing::{debug, warn};

use mapf_core::{GridPos, PlannerConfig, SpaceTime};

use crate::{CoordinateMapper, LatticeError, LatticeResult, Terrain};

// ── Cell ──────────────────────────────────────────────────────────────────────

/// One (x, y, t) lattice entry.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    /// Impassable terrain.  Fixed after construction.
    pub wall: bool,
    /// Reserved by a finalized path.  Only ever goes `false → true` until
    /// [`Lattice::reset_occupancy`].
    pub occupied: bool,
    /// Initialised to `wall`; not read by the planner.  Kept for
    /// visualization tools.
    pub seen: bool,
}

impl Cell {
    fn new(wall: bool) -> Self {
        Self { wall, occupied: false, seen: wall }
    }
}

// ── Lattice ───────────────────────────────────────────────────────────────────

/// Fixed-size `[resolution, resolution, max_time_steps]` array of [`Cell`]s.
#[derive(Clone, Debug)]
pub struct Lattice {
    resolution:     usize,
    max_time_steps: usize,
    cells:          Vec<Cell>,
}

impl Lattice {
    /// Build from a terrain by sampling each cell centre.
    ///
    /// A centre the terrain does not cover becomes a wall, with a warning.
    pub fn build<T: Terrain + ?Sized>(terrain: &T, config: &PlannerConfig) -> LatticeResult<Self> {
        config.validate()?;
        let res = config.resolution;
        let mapper = CoordinateMapper::new(terrain.bounds(), res, 0.0);

        let mut walls = Vec::with_capacity(res * res);
        for y in 0..res {
            for x in 0..res {
                let centre = mapper.to_world(GridPos::new(x as i32, y as i32));
                let wall = match terrain.sample(centre) {
                    Some(v) => v != 1.0,
                    None => {
                        warn!(x, y, %centre, "terrain has no sample at cell centre; treating as wall");
                        true
                    }
                };
                walls.push(wall);
            }
        }

        let lattice = Self::from_walls(res, config.max_time_steps, &walls)?;
        debug!(
            resolution = res,
            max_time_steps = config.max_time_steps,
            walls = walls.iter().filter(|&&w| w).count(),
            "lattice built"
        );
        Ok(lattice)
    }

    /// Build from one row-major slice of wall flags (`walls[y * resolution + x]`),
    /// replicated across all time steps.
    pub fn from_walls(
        resolution:     usize,
        max_time_steps: usize,
        walls:          &[bool],
    ) -> LatticeResult<Self> {
        let slice = resolution * resolution;
        if walls.len() != slice {
            return Err(LatticeError::DimensionMismatch {
                expected: slice,
                got:      walls.len(),
                what:     "wall flags",
            });
        }
        let mut cells = Vec::with_capacity(slice * max_time_steps);
        for _ in 0..max_time_steps {
            cells.extend(walls.iter().map(|&w| Cell::new(w)));
        }
        Ok(Self { resolution, max_time_steps, cells })
    }

    /// A wall-free lattice.
    pub fn open(resolution: usize, max_time_steps: usize) -> Self {
        Self {
            resolution,
            max_time_steps,
            cells: vec![Cell::default(); resolution * resolution * max_time_steps],
        }
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn resolution(&self) -> usize {
        self.resolution
    }

    pub fn max_time_steps(&self) -> usize {
        self.max_time_steps
    }

    /// Total cell count, `resolution² × max_time_steps`.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// `true` if `pos` lies on the spatial grid.
    #[inline]
    pub fn in_bounds(&self, pos: GridPos) -> bool {
        let r = self.resolution as i32;
        pos.x >= 0 && pos.x < r && pos.y >= 0 && pos.y < r
    }

    #[inline]
    fn index(&self, key: SpaceTime) -> Option<usize> {
        if !self.in_bounds(key.pos()) || key.t as usize >= self.max_time_steps {
            return None;
        }
        let r = self.resolution;
        Some((key.t as usize * r + key.y as usize) * r + key.x as usize)
    }

    // ── Cell access ───────────────────────────────────────────────────────

    pub fn cell(&self, key: SpaceTime) -> Option<&Cell> {
        self.index(key).map(|i| &self.cells[i])
    }

    /// Wall test.  Off-lattice keys report `false`; callers that need
    /// "off-lattice is blocked" check [`in_bounds`][Self::in_bounds] first.
    #[inline]
    pub fn is_wall(&self, pos: GridPos, t: u32) -> bool {
        self.cell(pos.at(t)).is_some_and(|c| c.wall)
    }

    /// Reservation test.  Off-lattice keys report `false`.
    #[inline]
    pub fn is_occupied(&self, pos: GridPos, t: u32) -> bool {
        self.cell(pos.at(t)).is_some_and(|c| c.occupied)
    }

    // ── Reservation table ─────────────────────────────────────────────────

    /// Reserve one (x, y, t) cell.
    pub fn reserve(&mut self, key: SpaceTime) -> LatticeResult<()> {
        let i = self.index(key).ok_or(LatticeError::CellOutOfRange(key))?;
        self.cells[i].occupied = true;
        Ok(())
    }

    /// Reserve `pos` for every time step from `from_t` to the end of the
    /// horizon.  A `from_t` at or past the horizon reserves nothing.
    pub fn reserve_from(&mut self, pos: GridPos, from_t: u32) -> LatticeResult<()> {
        if !self.in_bounds(pos) {
            return Err(LatticeError::CellOutOfRange(pos.at(from_t)));
        }
        for t in from_t as usize..self.max_time_steps {
            self.reserve(pos.at(t as u32))?;
        }
        Ok(())
    }

    /// Clear every reservation.  Walls are untouched.
    pub fn reset_occupancy(&mut self) {
        for c in &mut self.cells {
            c.occupied = false;
        }
    }

    /// Number of reserved (x, y, t) cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.occupied).count()
    }
}
