//! Planner configuration.
//!
//! All options are fixed before the lattice is built; changing any of them
//! means building a new `Planner`.

use crate::{CoreError, CoreResult, Heuristic};

/// Which successor set the search generates at each step.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Movement {
    /// Four orthogonal moves plus wait.
    #[default]
    Cardinal,
    /// Cardinal plus the four diagonals, with corner-cutting and diagonal
    /// swap checks.
    Octile,
}

/// Top-level planner configuration.
///
/// Typically built in code or loaded from JSON by the application crate
/// (enable the `serde` feature).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlannerConfig {
    /// Lattice cells per spatial axis.
    pub resolution: usize,

    /// Planning horizon: valid time indices are `0 .. max_time_steps`.
    pub max_time_steps: usize,

    /// Heuristic added into accumulated cost at every step.
    pub heuristic: Heuristic,

    /// Successor set.  `Cardinal` is the supported contract.
    pub movement: Movement,

    /// Vertical offset (`z`) of emitted waypoints.
    pub waypoint_height: f32,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            resolution:      10,
            max_time_steps:  100,
            heuristic:       Heuristic::Manhattan,
            movement:        Movement::Cardinal,
            waypoint_height: 0.5,
        }
    }
}

impl PlannerConfig {
    /// Convenience constructor for the three options every caller sets.
    pub fn new(resolution: usize, max_time_steps: usize, heuristic: Heuristic) -> Self {
        Self { resolution, max_time_steps, heuristic, ..Self::default() }
    }

    pub fn with_movement(mut self, movement: Movement) -> Self {
        self.movement = movement;
        self
    }

    pub fn with_waypoint_height(mut self, height: f32) -> Self {
        self.waypoint_height = height;
        self
    }

    /// Number of lattice cells (`resolution² × max_time_steps`), which is
    /// also the frontier capacity.  `None` on overflow.
    pub fn cell_count(&self) -> Option<usize> {
        self.resolution
            .checked_mul(self.resolution)?
            .checked_mul(self.max_time_steps)
    }

    /// Reject configurations a lattice cannot be built from.
    pub fn validate(&self) -> CoreResult<()> {
        if self.resolution == 0 {
            return Err(CoreError::Config("resolution must be at least 1".into()));
        }
        if self.max_time_steps == 0 {
            return Err(CoreError::Config("max_time_steps must be at least 1".into()));
        }
        if i32::try_from(self.resolution).is_err() {
            return Err(CoreError::Config(format!(
                "resolution {} exceeds the i32 index range",
                self.resolution
            )));
        }
        if u32::try_from(self.max_time_steps).is_err() {
            return Err(CoreError::Config(format!(
                "max_time_steps {} exceeds the u32 index range",
                self.max_time_steps
            )));
        }
        if self.cell_count().is_none() {
            return Err(CoreError::Config(format!(
                "lattice {r}x{r}x{t} overflows usize",
                r = self.resolution,
                t = self.max_time_steps
            )));
        }
        if !self.waypoint_height.is_finite() {
            return Err(CoreError::Config("waypoint_height must be finite".into()));
        }
        Ok(())
    }
}
