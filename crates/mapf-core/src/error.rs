//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]`, so configuration problems propagate unchanged.

use thiserror::Error;

/// Errors produced while validating shared configuration and geometry.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("invalid bounds: {0}")]
    Bounds(String),
}

/// Shorthand result type for `mapf-core`.
pub type CoreResult<T> = Result<T, CoreError>;
