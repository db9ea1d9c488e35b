//! Open/closed bookkeeping for a single search run.

use std::collections::{BinaryHeap, HashMap};

use waygrid_core::Location;

use crate::waypoint::{Waypoint, WaypointId};

/// Heap record for an open waypoint, ordered by total cost and then by
/// acceptance order (arena ids are issued monotonically).
#[derive(Clone, Copy, Eq, PartialEq)]
struct OpenEntry {
    total: i32,
    id: WaypointId,
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (a max-heap) pops the smallest total first;
        // among equal totals, the earliest accepted entry.
        other
            .total
            .cmp(&self.total)
            .then(other.id.0.cmp(&self.id.0))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// The frontier of one search run.
///
/// Holds the *open* set of candidate waypoints awaiting expansion, the
/// *closed* set of finalized nodes, and the arena of every accepted
/// [`Waypoint`]. Both sets key at most one waypoint per [`Location`] and
/// are disjoint at all times; a location moves `unseen → open → closed`,
/// except that [`insert_or_improve`](Self::insert_or_improve) can reopen a
/// closed location (see its docs).
///
/// Candidate selection runs on a binary min-heap with lazy invalidation:
/// superseded or closed entries stay in the heap until they surface and
/// are discarded. The heap key includes the acceptance order, so among
/// equal-total-cost candidates the earliest accepted one always wins and
/// selection is deterministic for any insertion history.
///
/// A frontier serves exactly one search run and is discarded afterwards.
#[derive(Default)]
pub struct Frontier {
    arena: Vec<Waypoint>,
    open: HashMap<Location, WaypointId>,
    closed: HashMap<Location, WaypointId>,
    queue: BinaryHeap<OpenEntry>,
}

impl Frontier {
    /// Create an empty frontier for a fresh search run.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of open candidates awaiting expansion.
    ///
    /// Zero before the goal is reached means the search is exhausted and
    /// no path exists.
    #[inline]
    pub fn open_count(&self) -> usize {
        self.open.len()
    }

    /// Whether `loc` currently has an open candidate.
    #[inline]
    pub fn is_open(&self, loc: Location) -> bool {
        self.open.contains_key(&loc)
    }

    /// Whether `loc` has been finalized.
    #[inline]
    pub fn is_closed(&self, loc: Location) -> bool {
        self.closed.contains_key(&loc)
    }

    /// The open waypoint at `loc`, if any.
    pub fn open_at(&self, loc: Location) -> Option<&Waypoint> {
        self.open.get(&loc).map(|&id| &self.arena[id.index()])
    }

    /// Read a waypoint from the arena.
    ///
    /// Ids stay valid for the lifetime of the frontier, so predecessor
    /// chains can be walked even after a waypoint has left the open set.
    pub fn waypoint(&self, id: WaypointId) -> &Waypoint {
        &self.arena[id.index()]
    }

    /// Offer a candidate for `candidate.loc` to the open set.
    ///
    /// With no open entry at that location the candidate is accepted
    /// unconditionally. Against an incumbent it is accepted only when its
    /// `previous_cost` is strictly smaller, in which case it replaces the
    /// incumbent entirely (costs, heuristic, and parent link). Returns
    /// whether the open set changed.
    ///
    /// Only the open set is consulted: offering a location that is already
    /// closed reopens it, dropping its closed entry so the two sets stay
    /// disjoint. Drivers that must not revisit finalized nodes check
    /// [`is_closed`](Self::is_closed) before offering.
    pub fn insert_or_improve(&mut self, candidate: Waypoint) -> bool {
        if let Some(&incumbent) = self.open.get(&candidate.loc) {
            if candidate.previous_cost >= self.arena[incumbent.index()].previous_cost {
                return false;
            }
        }
        let id = self.accept(candidate);
        self.open.insert(candidate.loc, id);
        self.closed.remove(&candidate.loc);
        true
    }

    /// Move the open waypoint at `loc` into the closed set.
    ///
    /// A location without an open entry is left untouched: callers only
    /// close locations they just confirmed are open.
    pub fn close(&mut self, loc: Location) {
        if let Some(id) = self.open.remove(&loc) {
            self.closed.insert(loc, id);
        }
    }

    /// Id of the open waypoint with the smallest total cost, or `None`
    /// when the open set is empty.
    ///
    /// Takes `&mut self` only to discard heap records invalidated by later
    /// improvements or closes; observable state does not change.
    pub fn best_open(&mut self) -> Option<WaypointId> {
        while let Some(entry) = self.queue.peek() {
            let id = entry.id;
            if self.open.get(&self.arena[id.index()].loc) == Some(&id) {
                return Some(id);
            }
            // Stale: superseded by an improvement or already closed.
            self.queue.pop();
        }
        None
    }

    fn accept(&mut self, wp: Waypoint) -> WaypointId {
        let id = WaypointId(self.arena.len() as u32);
        self.queue.push(OpenEntry {
            total: wp.total_cost(),
            id,
        });
        self.arena.push(wp);
        id
    }
}
