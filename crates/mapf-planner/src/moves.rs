//! Successor set and move validity.
//!
//! A move goes from cell `from` at time `t` to cell `to` at `t + 1`.  It is
//! valid only if all of the following hold:
//!
//! 1. `to` is on the lattice;
//! 2. `to` is not a wall at `t + 1`;
//! 3. no corner-cutting: neither side cell `(from.x, to.y)` nor
//!    `(to.x, from.y)` is a wall at `t + 1`;
//! 4. `to` is not reserved at `t + 1`, nor at `t` (someone there now, or
//!    someone leaving it just as we arrive);
//! 5. no swap: the two side cells are not reserved at `(t, t + 1)` or at
//!    `(t + 1, t)`.
//!
//! For an orthogonal move the side cells are `from` and `to` themselves, so
//! (3) is vacuous and (5) reads "another path enters `from` as we enter `to`,
//! having left `to` as we leave `from`".  That other path holds `to` at `t`,
//! which (4) already rejects, so for orthogonal moves (5) never decides the
//! outcome on its own.  For diagonal moves both checks look at the two cells
//! flanking the diagonal, and (5) is the only thing stopping two paths that
//! cross the same diagonal.
//!
//! `from` and `to` must be 8-neighbours (or equal); anything further apart
//! is rejected outright.

use mapf_core::{GridPos, Movement};
use mapf_lattice::Lattice;

/// Cost of an orthogonal move or a wait.
pub const STEP_COST: f32 = 1.0;

/// Cost of a diagonal move.
pub const DIAGONAL_STEP_COST: f32 = 1.414;

/// One candidate transition.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Step {
    pub dx:   i32,
    pub dy:   i32,
    pub cost: f32,
}

const fn step(dx: i32, dy: i32, cost: f32) -> Step {
    Step { dx, dy, cost }
}

const CARDINAL: [Step; 5] = [
    step(1, 0, STEP_COST),
    step(0, 1, STEP_COST),
    step(-1, 0, STEP_COST),
    step(0, -1, STEP_COST),
    step(0, 0, STEP_COST),
];

const OCTILE: [Step; 9] = [
    step(1, 1, DIAGONAL_STEP_COST),
    step(1, 0, STEP_COST),
    step(0, 1, STEP_COST),
    step(-1, -1, DIAGONAL_STEP_COST),
    step(-1, 0, STEP_COST),
    step(0, -1, STEP_COST),
    step(1, -1, DIAGONAL_STEP_COST),
    step(-1, 1, DIAGONAL_STEP_COST),
    step(0, 0, STEP_COST),
];

/// Transitions generated from every expanded state.  The wait step is last.
pub fn steps(movement: Movement) -> &'static [Step] {
    match movement {
        Movement::Cardinal => &CARDINAL,
        Movement::Octile => &OCTILE,
    }
}

/// `true` if moving `from` (at `t`) to `to` (at `t + 1`) is a single step
/// that passes all five checks.
pub fn is_valid_move(lattice: &Lattice, from: GridPos, to: GridPos, t: u32) -> bool {
    let next = t + 1;
    let side_a = GridPos::new(from.x, to.y);
    let side_b = GridPos::new(to.x, from.y);

    if !from.is_adjacent(to) || !lattice.in_bounds(to) || lattice.is_wall(to, next) {
        return false;
    }
    if lattice.is_wall(side_a, next) || lattice.is_wall(side_b, next) {
        return false;
    }
    if lattice.is_occupied(to, next) || lattice.is_occupied(to, t) {
        return false;
    }
    from == to || !crosses_reservation(lattice, side_a, side_b, t)
}

/// Swap test on the pair of side cells across the interval `[t, t + 1]`.
fn crosses_reservation(lattice: &Lattice, a: GridPos, b: GridPos, t: u32) -> bool {
    let next = t + 1;
    (lattice.is_occupied(a, t) && lattice.is_occupied(b, next))
        || (lattice.is_occupied(a, next) && lattice.is_occupied(b, t))
}
