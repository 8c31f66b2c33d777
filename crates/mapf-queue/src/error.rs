//! Frontier error type.

use thiserror::Error;

/// Errors produced by [`PriorityQueue`][crate::PriorityQueue].
///
/// All of these indicate a caller bug rather than a recoverable condition.
#[derive(Debug, Error, PartialEq)]
pub enum QueueError {
    #[error("extract from an empty queue")]
    Empty,

    #[error("queue is full (capacity {capacity})")]
    Full { capacity: usize },

    #[error("key is already queued")]
    DuplicateKey,

    #[error("priority {0} is not a number")]
    InvalidPriority(f32),

    #[error("decrease-key asked to raise priority from {current} to {requested}")]
    PriorityIncrease { current: f32, requested: f32 },
}

pub type QueueResult<T> = Result<T, QueueError>;
