//! `mapf-lattice` — the (x, y, t) lattice and everything that feeds it.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`terrain`] | `Terrain` trait, `TraversabilityGrid`                       |
//! | [`loader`]  | `load_terrain_csv`, `load_terrain_reader`                   |
//! | [`mapper`]  | `CoordinateMapper` (world ↔ lattice indices)                |
//! | [`lattice`] | `Cell`, `Lattice` (walls + reservation table)               |
//! | [`error`]   | `LatticeError`, `LatticeResult<T>`                          |
//!
//! # Ownership
//!
//! A `Lattice` is built once from a `Terrain` and a `PlannerConfig`.  Walls
//! never change afterwards.  Occupancy is the reservation table: it only
//! grows as paths are finalized, until `Lattice::reset_occupancy` clears it.

pub mod error;
pub mod lattice;
pub mod loader;
pub mod mapper;
pub mod terrain;

#[cfg(test)]
mod tests;

pub use error::{LatticeError, LatticeResult};
pub use lattice::{Cell, Lattice};
pub use loader::{load_terrain_csv, load_terrain_reader};
pub use mapper::CoordinateMapper;
pub use terrain::{Terrain, TraversabilityGrid};
