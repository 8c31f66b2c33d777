//! `mapf-core` — foundational types for the `rust_mapf` space-time planner.
//!
//! This crate is a dependency of every other `mapf-*` crate.  It has no
//! `mapf-*` dependencies and only `thiserror` as a required external one
//! (plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`grid`]        | `GridPos` (x, y), `SpaceTime` (x, y, t)               |
//! | [`geo`]         | `WorldPos`, `Bounds`                                  |
//! | [`heuristic`]   | `Heuristic` (Manhattan / Euclidean / Diagonal)        |
//! | [`config`]      | `PlannerConfig`, `Movement`                           |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public value types.  |

pub mod config;
pub mod error;
pub mod geo;
pub mod grid;
pub mod heuristic;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{Movement, PlannerConfig};
pub use error::{CoreError, CoreResult};
pub use geo::{Bounds, WorldPos};
pub use grid::{GridPos, SpaceTime};
pub use heuristic::Heuristic;
