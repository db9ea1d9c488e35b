//! Waypoint records and their arena ids.

use waygrid_core::Location;

/// Identifier of a waypoint in a [`Frontier`](crate::Frontier) arena.
///
/// Ids are issued in acceptance order and stay valid for the lifetime of
/// the frontier, so predecessor chains can be walked at any time. A parent
/// id always refers to an earlier waypoint, which keeps the chains
/// cycle-free.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct WaypointId(pub(crate) u32);

impl WaypointId {
    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

/// A candidate path node: where it is, what the cheapest known route to it
/// cost, and the estimated cost remaining to the goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Waypoint {
    /// Grid location of this node.
    pub loc: Location,
    /// Cumulative cost of the cheapest path found so far from the start.
    pub previous_cost: i32,
    /// Heuristic estimate of the cost from here to the goal.
    pub heuristic_cost: i32,
    /// The waypoint this one was reached from; `None` for the start.
    pub parent: Option<WaypointId>,
}

impl Waypoint {
    /// Create a new waypoint record.
    pub const fn new(
        loc: Location,
        previous_cost: i32,
        heuristic_cost: i32,
        parent: Option<WaypointId>,
    ) -> Self {
        Self {
            loc,
            previous_cost,
            heuristic_cost,
            parent,
        }
    }

    /// The ranking key for open-set selection.
    ///
    /// Always `previous_cost + heuristic_cost`; derived on demand so it
    /// can never disagree with its parts.
    #[inline]
    pub const fn total_cost(&self) -> i32 {
        self.previous_cost + self.heuristic_cost
    }
}
