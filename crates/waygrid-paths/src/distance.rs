use waygrid_core::Location;

/// Manhattan (L1) distance between two locations.
///
/// Admissible heuristic for cardinal (4-way) movement on unit-cost floors.
#[inline]
pub fn manhattan(a: Location, b: Location) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// Chebyshev (L∞) distance between two locations.
///
/// Admissible heuristic for diagonal (8-way) movement.
#[inline]
pub fn chebyshev(a: Location, b: Location) -> i32 {
    (a.x - b.x).abs().max((a.y - b.y).abs())
}
