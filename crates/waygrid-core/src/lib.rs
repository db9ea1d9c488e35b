//! **waygrid-core** — value types for grid pathfinding.
//!
//! This crate provides the foundational types shared across the *waygrid*
//! crates: the [`Location`] coordinate pair used to key search state, the
//! [`Bounds`] rectangle describing a map's extent, and a dense terrain map
//! ([`Grid`] of [`Tile`]s) supplying per-cell movement costs.

pub mod geom;
pub mod grid;

pub use geom::{Bounds, Location};
pub use grid::{Grid, Tile};
