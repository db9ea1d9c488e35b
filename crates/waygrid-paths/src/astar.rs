//! The A* search driver.

use std::fmt;

use waygrid_core::{Bounds, Location};

use crate::frontier::Frontier;
use crate::traits::{Heuristic, MoveMap};
use crate::waypoint::{Waypoint, WaypointId};

/// Errors from [`Pathfinder`] construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// The map rectangle contains no cells.
    EmptyBounds(Bounds),
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyBounds(b) => write!(
                f,
                "map bounds are empty: [{}, {})",
                b.min, b.max
            ),
        }
    }
}

impl std::error::Error for PathError {}

/// A* driver over a [`MoveMap`] and a [`Heuristic`].
///
/// Owns the map rectangle it searches within and a reusable neighbor
/// buffer; one `Pathfinder` serves any number of queries. Each query runs
/// its own [`Frontier`], which is discarded when the query returns.
#[derive(Debug)]
pub struct Pathfinder {
    bounds: Bounds,
    nbuf: Vec<Location>,
}

impl Pathfinder {
    /// Create a pathfinder for the given map rectangle.
    ///
    /// Fails with [`PathError::EmptyBounds`] when the rectangle has no
    /// cells. The check happens at construction, not on first query.
    pub fn new(bounds: Bounds) -> Result<Self, PathError> {
        if bounds.is_empty() {
            return Err(PathError::EmptyBounds(bounds));
        }
        Ok(Self {
            bounds,
            nbuf: Vec::with_capacity(8),
        })
    }

    /// The map rectangle being searched.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Compute the cheapest path from `from` to `to`.
    ///
    /// Returns the full path (including both endpoints) or `None` if no
    /// path exists within the bounds. With an admissible heuristic the
    /// returned path has minimal cost. Endpoints outside the bounds yield
    /// `None`.
    pub fn astar_path<M: MoveMap, H: Heuristic>(
        &mut self,
        map: &M,
        heuristic: &H,
        from: Location,
        to: Location,
    ) -> Option<Vec<Location>> {
        if !self.bounds.contains(from) || !self.bounds.contains(to) {
            return None;
        }
        if from == to {
            return Some(vec![from]);
        }

        let mut frontier = Frontier::new();
        frontier.insert_or_improve(Waypoint::new(from, 0, heuristic.estimate(from, to), None));

        while let Some(id) = frontier.best_open() {
            let current = *frontier.waypoint(id);
            if current.loc == to {
                log::trace!("path found to {to}: cost {}", current.previous_cost);
                return Some(assemble(&frontier, id));
            }
            frontier.close(current.loc);

            self.nbuf.clear();
            map.neighbors(current.loc, &mut self.nbuf);
            for &next in &self.nbuf {
                if !self.bounds.contains(next) || frontier.is_closed(next) {
                    continue;
                }
                let reached = current.previous_cost + map.cost(current.loc, next);
                frontier.insert_or_improve(Waypoint::new(
                    next,
                    reached,
                    heuristic.estimate(next, to),
                    Some(id),
                ));
            }
        }

        log::trace!("open set exhausted, no path from {from} to {to}");
        None
    }
}

/// Walk the predecessor chain back to the start and reverse it.
fn assemble(frontier: &Frontier, goal: WaypointId) -> Vec<Location> {
    let mut path = Vec::new();
    let mut next = Some(goal);
    while let Some(id) = next {
        let wp = frontier.waypoint(id);
        path.push(wp.loc);
        next = wp.parent;
    }
    path.reverse();
    path
}
