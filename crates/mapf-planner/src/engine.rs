//! Space-time A* search.
//!
//! # Cost accounting
//!
//! A successor's stored cost is
//!
//! ```text
//! cost(child) = cost(parent) + step_cost + h(child, target)
//! ```
//!
//! i.e. the heuristic is folded into the accumulated cost at every step
//! and the frontier is ordered by that accumulated value alone.  This is
//! not textbook `f = g + h`: every state on a path pays the heuristic of
//! every state before it, which strongly favours states that close in on
//! the target early.  On an open lattice with the Manhattan heuristic this
//! still yields shortest (Manhattan-length) paths.
//!
//! # Bookkeeping
//!
//! The frontier and the visited table are both keyed by the full (x, y, t)
//! identity.  A state is queued the first time it is generated; a cheaper
//! re-generation updates the visited record in place and lowers the queued
//! priority, or only the visited record if the state was already expanded.
//! Both structures are owned by the engine and cleared, not reallocated, at
//! the start of every search.

use std::collections::hash_map::Entry;

use rustc_hash::FxHashMap;
use tracing::trace;

use mapf_core::{GridPos, PlannerConfig, SpaceTime};
use mapf_lattice::{Lattice, LatticeError};
use mapf_queue::PriorityQueue;

use crate::moves::{is_valid_move, steps};
use crate::reservation::reserve_path;
use crate::{PlanError, PlanResult, SearchNode};

/// Counters for the most recent search.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// States extracted and expanded (the goal extraction is not counted).
    pub expanded:      usize,
    /// Valid successors generated.
    pub generated:     usize,
    /// Successors that improved an already-known state.
    pub relaxed:       usize,
    /// Largest frontier size observed.
    pub peak_frontier: usize,
}

/// Reusable search engine.  One engine per lattice; not shareable across
/// concurrent searches (every method takes `&mut self`).
pub struct SpaceTimeAStar {
    frontier: PriorityQueue<SpaceTime, SearchNode>,
    visited:  FxHashMap<SpaceTime, SearchNode>,
    stats:    SearchStats,
}

impl SpaceTimeAStar {
    /// Engine whose frontier can hold every state of `lattice`.
    pub fn for_lattice(lattice: &Lattice) -> Self {
        Self::with_capacity(lattice.len())
    }

    pub fn with_capacity(frontier_capacity: usize) -> Self {
        Self {
            frontier: PriorityQueue::new(frontier_capacity),
            visited:  FxHashMap::default(),
            stats:    SearchStats::default(),
        }
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Best-known record for `key` from the most recent search.
    pub fn visited(&self, key: SpaceTime) -> Option<&SearchNode> {
        self.visited.get(&key)
    }

    /// Search, then reserve the found path on `lattice`.
    ///
    /// Returns the path as (x, y, t) states running start → target.
    pub fn find_path(
        &mut self,
        lattice: &mut Lattice,
        start:   GridPos,
        target:  GridPos,
        config:  &PlannerConfig,
    ) -> PlanResult<(Vec<SpaceTime>, f32)> {
        let goal = self.search(lattice, start, target, config)?;
        let states = reserve_path(lattice, &self.visited, goal)?;
        Ok((states, goal.cost))
    }

    /// Run the search without touching the lattice.  Returns the goal node;
    /// its parent chain lives in the visited table until the next search.
    pub fn search(
        &mut self,
        lattice: &Lattice,
        start:   GridPos,
        target:  GridPos,
        config:  &PlannerConfig,
    ) -> PlanResult<SearchNode> {
        self.frontier.clear();
        self.visited.clear();
        self.stats = SearchStats::default();

        for pos in [start, target] {
            if !lattice.in_bounds(pos) {
                return Err(LatticeError::CellOutOfRange(pos.at(0)).into());
            }
        }

        let root = SearchNode::root(start);
        self.frontier.insert(root.cost, root.key(), root)?;

        let horizon = lattice.max_time_steps();
        while !self.frontier.is_empty() {
            debug_assert!(self.frontier.verify(), "frontier heap invariant broken");
            self.stats.peak_frontier = self.stats.peak_frontier.max(self.frontier.len());

            let node = self.frontier.extract_min()?.item;
            if node.pos == target {
                trace!(%target, t = node.t, cost = node.cost, "goal extracted");
                return Ok(node);
            }
            self.stats.expanded += 1;

            let next = node.t + 1;
            if (next as usize) < horizon {
                for step in steps(config.movement) {
                    let to = node.pos.offset(step.dx, step.dy);
                    if !is_valid_move(lattice, node.pos, to, node.t) {
                        continue;
                    }
                    self.relax(SearchNode {
                        pos:    to,
                        t:      next,
                        parent: Some(node.pos),
                        cost:   node.cost + step.cost + config.heuristic.estimate(to, target),
                    })?;
                }
            }

            // Records the root, which is queued without a visited entry.
            self.visited.entry(node.key()).or_insert(node);
        }

        Err(PlanError::NoPathFound { start, target, horizon })
    }

    fn relax(&mut self, node: SearchNode) -> PlanResult<()> {
        self.stats.generated += 1;
        match self.visited.entry(node.key()) {
            Entry::Occupied(mut known) => {
                let best = known.get_mut();
                if best.cost > node.cost {
                    best.parent = node.parent;
                    best.cost = node.cost;
                    self.stats.relaxed += 1;
                    self.frontier.update_cost(node.cost, node.key(), *best)?;
                }
            }
            Entry::Vacant(slot) => {
                slot.insert(node);
                self.frontier.insert(node.cost, node.key(), node)?;
            }
        }
        Ok(())
    }
}
