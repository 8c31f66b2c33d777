//! `mapf-planner` — sequential multi-agent planning by space-time A*.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                    |
//! |-----------------|-------------------------------------------------------------|
//! | [`node`]        | `SearchNode` — frontier / visited record                    |
//! | [`moves`]       | Successor set and the five-part move validity check         |
//! | [`engine`]      | `SpaceTimeAStar`, `SearchStats`                             |
//! | [`reservation`] | Path reconstruction + reservation writer                    |
//! | [`planner`]     | `Planner` facade, `PlannedPath`, fleet planning             |
//! | [`error`]       | `PlanError`, `PlanResult<T>`                                |
//!
//! # Planning model
//!
//! Agents are planned one at a time in priority order against one shared
//! [`Lattice`][mapf_lattice::Lattice]:
//!
//! 1. `find_path` searches (x, y, t) states from the start at `t = 0`.
//!    Each step advances time by one: four orthogonal moves or a wait.
//! 2. Moves into walls, reserved cells, or through another agent's reserved
//!    swap are rejected.
//! 3. The first state extracted at the target cell ends the search.  Its
//!    path is reserved on the lattice, and the target cell stays reserved
//!    for the rest of the horizon (the agent parks there).
//! 4. The next agent's search sees those reservations as obstacles.
//!
//! Reservations accumulate until [`Planner::reset_occupancy`].

pub mod engine;
pub mod error;
pub mod moves;
pub mod node;
pub mod planner;
pub mod reservation;


pub use engine::{SearchStats, SpaceTimeAStar};
pub use error::{PlanError, PlanResult};
pub use node::SearchNode;
pub use planner::{AgentId, AgentRequest, PlannedPath, Planner};
