//! Path reconstruction and the reservation writer.
//!
//! Every finalized path is written into the lattice's reservation table:
//! each (x, y, t) state on the path, then the target cell for every later
//! time step, since the agent is modelled as parking there for the rest of
//! the horizon.  There is no per-path release; see
//! [`Lattice::reset_occupancy`].

use rustc_hash::FxHashMap;

use mapf_core::SpaceTime;
use mapf_lattice::Lattice;

use crate::{PlanError, PlanResult, SearchNode};

/// Walk `goal`'s parent chain through `visited`, reserve it, and return the
/// states in start → goal order.
///
/// The whole chain is resolved before anything is written, so a broken
/// chain leaves the lattice untouched.
pub fn reserve_path(
    lattice: &mut Lattice,
    visited: &FxHashMap<SpaceTime, SearchNode>,
    goal:    SearchNode,
) -> PlanResult<Vec<SpaceTime>> {
    let mut states = vec![goal.key()];
    let mut node = goal;
    while let Some(parent) = node.parent_key() {
        node = *visited
            .get(&parent)
            .ok_or(PlanError::BrokenParentChain { missing: parent })?;
        states.push(node.key());
    }

    for &state in &states {
        lattice.reserve(state)?;
    }
    lattice.reserve_from(goal.pos, goal.t + 1)?;

    states.reverse();
    Ok(states)
}
