//! `Planner` — the facade agents talk to.

use std::fmt;
use std::time::Instant;

use tracing::{debug, info};

use mapf_core::{Bounds, GridPos, PlannerConfig, SpaceTime, WorldPos};
use mapf_lattice::{CoordinateMapper, Lattice, Terrain};

use crate::{PlanError, PlanResult, SearchStats, SpaceTimeAStar};

// ── Agent-facing types ────────────────────────────────────────────────────────

/// Identifier of an agent in a fleet request.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentId(pub u32);

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AgentId({})", self.0)
    }
}

/// One agent's planning request.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentRequest {
    pub agent:  AgentId,
    pub start:  WorldPos,
    pub target: WorldPos,
}

/// A finalized, reserved path.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlannedPath {
    /// Cell centres, one per time step, start → target.
    pub waypoints: Vec<WorldPos>,
    /// The same path as lattice states; `states[i].t == i`.
    pub states:    Vec<SpaceTime>,
    /// Accumulated search cost of the goal state.
    pub cost:      f32,
}

impl PlannedPath {
    /// Number of transitions (moves and waits).
    pub fn moves(&self) -> usize {
        self.states.len().saturating_sub(1)
    }

    /// Time step at which the target is reached.
    pub fn arrival_step(&self) -> u32 {
        self.states.last().map_or(0, |s| s.t)
    }

    /// Cells visited, in order.
    pub fn cells(&self) -> impl Iterator<Item = GridPos> + '_ {
        self.states.iter().map(|s| s.pos())
    }

    /// Cell occupied at time `t`, counting the parked tail after arrival.
    pub fn cell_at(&self, t: u32) -> Option<GridPos> {
        let last = self.states.last()?;
        Some(self.states.get(t as usize).unwrap_or(last).pos())
    }

    /// `true` if start and target are the same cell.
    pub fn is_trivial(&self) -> bool {
        self.states.len() <= 1
    }
}

// ── Planner ───────────────────────────────────────────────────────────────────

/// Owns the lattice (walls + reservation table), the coordinate mapper, and
/// a reusable search engine.
///
/// Call [`find_path`][Self::find_path] once per agent, highest priority
/// first.  Each call reserves its result, so later agents route around it.
pub struct Planner {
    config:  PlannerConfig,
    mapper:  CoordinateMapper,
    lattice: Lattice,
    engine:  SpaceTimeAStar,
}

impl Planner {
    /// Validate `config` and build the lattice from `terrain`.
    pub fn new<T: Terrain + ?Sized>(config: PlannerConfig, terrain: &T) -> PlanResult<Self> {
        let lattice = Lattice::build(terrain, &config)?;
        let mapper = CoordinateMapper::new(terrain.bounds(), config.resolution, config.waypoint_height);
        Ok(Self::assemble(config, mapper, lattice))
    }

    /// Use a pre-built lattice spanning `bounds`.  Its dimensions must match
    /// `config`.
    pub fn with_lattice(config: PlannerConfig, bounds: Bounds, lattice: Lattice) -> PlanResult<Self> {
        config.validate()?;
        let expected = (config.resolution, config.max_time_steps);
        let got = (lattice.resolution(), lattice.max_time_steps());
        if expected != got {
            return Err(PlanError::LatticeMismatch { expected, got });
        }
        let mapper = CoordinateMapper::new(bounds, config.resolution, config.waypoint_height);
        Ok(Self::assemble(config, mapper, lattice))
    }

    fn assemble(config: PlannerConfig, mapper: CoordinateMapper, lattice: Lattice) -> Self {
        let engine = SpaceTimeAStar::for_lattice(&lattice);
        Self { config, mapper, lattice, engine }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    pub fn mapper(&self) -> &CoordinateMapper {
        &self.mapper
    }

    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    /// Counters from the most recent search.
    pub fn last_stats(&self) -> SearchStats {
        self.engine.stats()
    }

    // ── Planning ──────────────────────────────────────────────────────────

    /// Plan and reserve a path between two world positions.
    ///
    /// Positions outside the terrain bounds fail with an out-of-bounds
    /// error before any search runs.
    pub fn find_path(&mut self, start: WorldPos, target: WorldPos) -> PlanResult<PlannedPath> {
        let from = self.mapper.to_cell(start)?;
        let to = self.mapper.to_cell(target)?;
        self.find_path_cells(from, to)
    }

    /// Plan and reserve a path between two lattice cells.
    pub fn find_path_cells(&mut self, start: GridPos, target: GridPos) -> PlanResult<PlannedPath> {
        let started = Instant::now();
        let result = self.engine.find_path(&mut self.lattice, start, target, &self.config);
        let stats = self.engine.stats();
        debug!(
            %start,
            %target,
            ok = result.is_ok(),
            expanded = stats.expanded,
            generated = stats.generated,
            peak_frontier = stats.peak_frontier,
            elapsed_us = started.elapsed().as_micros() as u64,
            "space-time search finished"
        );

        let (states, cost) = result?;
        let waypoints = states.iter().map(|s| self.mapper.to_world(s.pos())).collect();
        Ok(PlannedPath { waypoints, states, cost })
    }

    /// Plan every request in slice order (first = highest priority).
    ///
    /// Failures do not stop the batch: a failed agent reserves nothing and
    /// later agents are planned as if it were absent.
    pub fn plan_fleet(&mut self, requests: &[AgentRequest]) -> Vec<(AgentId, PlanResult<PlannedPath>)> {
        let results: Vec<_> = requests
            .iter()
            .map(|r| (r.agent, self.find_path(r.start, r.target)))
            .collect();

        let planned = results.iter().filter(|(_, r)| r.is_ok()).count();
        info!(agents = requests.len(), planned, "fleet planned");
        results
    }

    /// Clear every reservation, starting a fresh planning session.
    pub fn reset_occupancy(&mut self) {
        self.lattice.reset_occupancy();
    }

    /// Map world waypoints back to lattice cells.
    pub fn path_to_cells(&self, path: &[WorldPos]) -> PlanResult<Vec<GridPos>> {
        Ok(self.mapper.path_to_cells(path)?)
    }
}
