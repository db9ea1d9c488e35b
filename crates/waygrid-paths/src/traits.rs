use waygrid_core::Location;

/// The map collaborator: supplies traversable neighbors and step costs.
pub trait MoveMap {
    /// Append the traversable neighbors of `loc` into `buf`. The caller
    /// clears `buf` before calling.
    fn neighbors(&self, loc: Location, buf: &mut Vec<Location>);

    /// Incremental cost of moving from `from` to the adjacent `to`.
    /// Must be > 0. Only called for locations yielded by
    /// [`neighbors`](Self::neighbors).
    fn cost(&self, from: Location, to: Location) -> i32;
}

/// The heuristic collaborator: estimates the remaining cost to a goal.
pub trait Heuristic {
    /// Estimate of the cost from `from` to `to`. Must never overestimate
    /// the true cost (admissible) for the search to return cheapest paths.
    fn estimate(&self, from: Location, to: Location) -> i32;
}

/// Plain functions and closures over two locations act as heuristics.
impl<F: Fn(Location, Location) -> i32> Heuristic for F {
    fn estimate(&self, from: Location, to: Location) -> i32 {
        self(from, to)
    }
}
