//! Lattice-subsystem error type.

use thiserror::Error;

use mapf_core::{Bounds, CoreError, SpaceTime, WorldPos};

/// Errors produced by `mapf-lattice`.
#[derive(Debug, Error)]
pub enum LatticeError {
    #[error("world position {pos} lies outside terrain bounds {bounds}")]
    OutOfBounds { pos: WorldPos, bounds: Bounds },

    #[error("cell {0} is outside the lattice")]
    CellOutOfRange(SpaceTime),

    #[error("expected {expected} {what}, got {got}")]
    DimensionMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error("terrain parse error: {0}")]
    Parse(String),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type LatticeResult<T> = Result<T, LatticeError>;
