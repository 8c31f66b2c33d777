//! Planning error type.

use mapf_core::{CoreError, GridPos, SpaceTime};
use mapf_lattice::LatticeError;
use mapf_queue::QueueError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlanError {
    /// The frontier ran dry before reaching the target.  An expected outcome:
    /// the caller decides whether to retry with a longer horizon, another
    /// start, or report failure to the agent.
    #[error("no path from {start} to {target} within {horizon} time steps")]
    NoPathFound {
        start:   GridPos,
        target:  GridPos,
        horizon: usize,
    },

    #[error("path reconstruction found no visited node at {missing}")]
    BrokenParentChain { missing: SpaceTime },

    #[error("lattice is {got:?} (resolution, steps) but configuration expects {expected:?}")]
    LatticeMismatch {
        expected: (usize, usize),
        got:      (usize, usize),
    },

    #[error(transparent)]
    Lattice(#[from] LatticeError),

    #[error("frontier error: {0}")]
    Queue(#[from] QueueError),

    #[error(transparent)]
    Core(#[from] CoreError),
}

impl PlanError {
    /// `true` for the recoverable "no path" outcome, `false` for bugs and
    /// bad input.
    pub fn is_no_path(&self) -> bool {
        matches!(self, PlanError::NoPathFound { .. })
    }

    /// `true` if a requested position fell outside the terrain or lattice.
    pub fn is_out_of_bounds(&self) -> bool {
        matches!(
            self,
            PlanError::Lattice(LatticeError::OutOfBounds { .. } | LatticeError::CellOutOfRange(_))
        )
    }
}

pub type PlanResult<T> = Result<T, PlanError>;
