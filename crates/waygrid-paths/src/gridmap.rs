//! [`MoveMap`] implementation over a terrain [`Grid`].

use waygrid_core::{Grid, Location, Tile};

use crate::traits::MoveMap;

/// Movement rule for a [`GridStep`] map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Moves {
    /// Orthogonal (4-way) movement.
    Cardinal,
    /// 8-way movement including diagonals.
    Diagonal,
}

/// Adapts a terrain [`Grid`] to the [`MoveMap`] collaborator.
///
/// Neighbors are the adjacent passable tiles; a step costs the value of
/// the tile stepped onto.
#[derive(Clone, Copy)]
pub struct GridStep<'a> {
    grid: &'a Grid,
    moves: Moves,
}

impl<'a> GridStep<'a> {
    /// Wrap a grid with the given movement rule.
    pub fn new(grid: &'a Grid, moves: Moves) -> Self {
        Self { grid, moves }
    }
}

impl MoveMap for GridStep<'_> {
    fn neighbors(&self, loc: Location, buf: &mut Vec<Location>) {
        let passable = |n: &Location| self.grid.get(*n).is_some_and(Tile::is_passable);
        match self.moves {
            Moves::Cardinal => buf.extend(loc.neighbors_4().into_iter().filter(passable)),
            Moves::Diagonal => buf.extend(loc.neighbors_8().into_iter().filter(passable)),
        }
    }

    fn cost(&self, _from: Location, to: Location) -> i32 {
        // `to` came out of `neighbors`, so it is in-grid and passable.
        self.grid.get(to).map_or(1, Tile::cost)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(x: i32, y: i32) -> Location {
        Location::new(x, y)
    }

    #[test]
    fn cardinal_neighbors_skip_walls_and_edges() {
        let mut g = Grid::new(3, 3);
        g.set(loc(1, 0), Tile::WALL);
        let step = GridStep::new(&g, Moves::Cardinal);

        let mut buf = Vec::new();
        step.neighbors(loc(1, 1), &mut buf);
        assert_eq!(buf, vec![loc(2, 1), loc(1, 2), loc(0, 1)]);

        buf.clear();
        step.neighbors(loc(0, 0), &mut buf);
        assert_eq!(buf, vec![loc(0, 1)]);
    }

    #[test]
    fn diagonal_neighbors_include_corners() {
        let g = Grid::new(3, 3);
        let step = GridStep::new(&g, Moves::Diagonal);
        let mut buf = Vec::new();
        step.neighbors(loc(1, 1), &mut buf);
        assert_eq!(buf.len(), 8);

        buf.clear();
        step.neighbors(loc(0, 0), &mut buf);
        assert_eq!(buf, vec![loc(1, 0), loc(1, 1), loc(0, 1)]);
    }

    #[test]
    fn step_cost_is_the_target_tile() {
        let mut g = Grid::new(2, 1);
        g.set(loc(1, 0), Tile::new(5));
        let step = GridStep::new(&g, Moves::Cardinal);
        assert_eq!(step.cost(loc(0, 0), loc(1, 0)), 5);
        assert_eq!(step.cost(loc(1, 0), loc(0, 0)), 1);
    }
}
