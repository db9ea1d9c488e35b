//! A dense terrain-cost map.
//!
//! [`Tile`] is a newtype over `i32` holding a cell's movement cost, and
//! [`Grid`] is a row-major rectangle of tiles. This is the concrete map a
//! search navigates: the pathfinding crate reads it through its map trait.

use crate::geom::{Bounds, Location};

/// Terrain cost of a single map cell.
///
/// A value greater than zero is the cost of stepping onto the cell; zero
/// or negative marks the cell impassable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tile(pub i32);

impl Tile {
    /// Ordinary floor: cost 1.
    pub const FLOOR: Self = Self(1);

    /// Impassable cell.
    pub const WALL: Self = Self(0);

    /// Create a tile with the given movement cost.
    pub const fn new(cost: i32) -> Self {
        Self(cost)
    }

    /// Whether the cell can be stepped onto.
    pub const fn is_passable(self) -> bool {
        self.0 > 0
    }

    /// The movement cost of stepping onto the cell.
    pub const fn cost(self) -> i32 {
        self.0
    }
}

impl Default for Tile {
    fn default() -> Self {
        Self::FLOOR
    }
}

impl From<i32> for Tile {
    fn from(cost: i32) -> Self {
        Self(cost)
    }
}

/// A rectangular terrain map of [`Tile`] values.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    tiles: Vec<Tile>,
    bounds: Bounds,
}

impl Grid {
    /// Create a new grid of the given size, filled with [`Tile::FLOOR`].
    ///
    /// Negative dimensions are clamped to zero, yielding an empty grid.
    pub fn new(width: i32, height: i32) -> Self {
        let bounds = Bounds::new(0, 0, width.max(0), height.max(0));
        Self {
            tiles: vec![Tile::FLOOR; bounds.len()],
            bounds,
        }
    }

    /// The rectangle covered by this grid.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Width of the grid.
    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    /// Height of the grid.
    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Whether the grid contains the given location.
    #[inline]
    pub fn contains(&self, loc: Location) -> bool {
        self.bounds.contains(loc)
    }

    /// The tile at a location, or `None` if out of bounds.
    pub fn get(&self, loc: Location) -> Option<Tile> {
        self.index(loc).map(|i| self.tiles[i])
    }

    /// Set the tile at a location. Out-of-bounds writes are ignored.
    pub fn set(&mut self, loc: Location, tile: Tile) {
        if let Some(i) = self.index(loc) {
            self.tiles[i] = tile;
        }
    }

    /// Fill the whole grid with the given tile.
    pub fn fill(&mut self, tile: Tile) {
        self.tiles.fill(tile);
    }

    #[inline]
    fn index(&self, loc: Location) -> Option<usize> {
        if !self.bounds.contains(loc) {
            return None;
        }
        let x = (loc.x - self.bounds.min.x) as usize;
        let y = (loc.y - self.bounds.min.y) as usize;
        Some(y * self.bounds.width() as usize + x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_floor() {
        let g = Grid::new(4, 3);
        assert_eq!(g.width(), 4);
        assert_eq!(g.height(), 3);
        assert_eq!(g.get(Location::new(3, 2)), Some(Tile::FLOOR));
        assert!(g.contains(Location::new(0, 0)));
        assert!(!g.contains(Location::new(4, 0)));
    }

    #[test]
    fn set_and_get() {
        let mut g = Grid::new(3, 3);
        g.set(Location::new(1, 1), Tile::WALL);
        g.set(Location::new(2, 0), Tile::new(7));
        assert_eq!(g.get(Location::new(1, 1)), Some(Tile::WALL));
        assert_eq!(g.get(Location::new(2, 0)), Some(Tile::new(7)));
        assert!(!g.get(Location::new(1, 1)).unwrap().is_passable());
        assert_eq!(g.get(Location::new(2, 0)).unwrap().cost(), 7);
    }

    #[test]
    fn out_of_bounds_access() {
        let mut g = Grid::new(2, 2);
        assert_eq!(g.get(Location::new(-1, 0)), None);
        assert_eq!(g.get(Location::new(0, 2)), None);
        // Writes outside the grid are dropped.
        g.set(Location::new(5, 5), Tile::WALL);
        assert_eq!(g.get(Location::new(5, 5)), None);
    }

    #[test]
    fn fill_replaces_every_tile() {
        let mut g = Grid::new(2, 2);
        g.fill(Tile::WALL);
        for y in 0..2 {
            for x in 0..2 {
                assert_eq!(g.get(Location::new(x, y)), Some(Tile::WALL));
            }
        }
    }

    #[test]
    fn degenerate_sizes() {
        let g = Grid::new(0, 5);
        assert!(g.bounds().is_empty());
        assert_eq!(g.get(Location::ZERO), None);

        let g = Grid::new(-3, 4);
        assert!(g.bounds().is_empty());
    }
}
