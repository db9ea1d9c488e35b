//! Frontier-managed A* pathfinding for 2D grids.
//!
//! The heart of this crate is [`Frontier`], the bookkeeping of a single
//! search run: the *open* set of candidate waypoints awaiting expansion,
//! the *closed* set of finalized nodes, and the arena of [`Waypoint`]
//! records linked backwards by predecessor ids. Selection of the cheapest
//! open candidate is deterministic: ties on total cost go to the earliest
//! accepted entry.
//!
//! [`Pathfinder`] drives a complete A* search over a frontier, reaching the
//! map through two collaborator traits:
//!
//! | Trait | Supplies |
//! |---|---|
//! | [`MoveMap`] | traversable neighbors and step costs |
//! | [`Heuristic`] | the estimated remaining cost to the goal |
//!
//! [`GridStep`] adapts a [`waygrid_core::Grid`] terrain map to [`MoveMap`]
//! with cardinal or diagonal movement, and [`manhattan`] / [`chebyshev`]
//! are the matching distance heuristics.

mod astar;
mod distance;
mod frontier;
mod gridmap;
mod traits;
mod waypoint;

pub use astar::{PathError, Pathfinder};
pub use distance::{chebyshev, manhattan};
pub use frontier::Frontier;
pub use gridmap::{GridStep, Moves};
pub use traits::{Heuristic, MoveMap};
pub use waypoint::{Waypoint, WaypointId};
