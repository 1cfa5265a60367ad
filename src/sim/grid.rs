//! Toroidal grid geometry
//!
//! Cells are integer coordinates. Leaving one edge re-enters at the opposite
//! edge, so every cell produced by [`Grid::wrap`] lies inside the board.

use glam::IVec2;
use rand::Rng;

/// One grid square, `x` to the right and `y` downward
pub type Cell = IVec2;

/// Heading of the snake
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit step for this heading
    pub fn delta(self) -> IVec2 {
        match self {
            Direction::Up => IVec2::new(0, -1),
            Direction::Down => IVec2::new(0, 1),
            Direction::Left => IVec2::new(-1, 0),
            Direction::Right => IVec2::new(1, 0),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// True if turning from `self` to `other` would be a 180-degree turn
    pub fn is_opposite(self, other: Direction) -> bool {
        self.opposite() == other
    }

    /// Uniformly random heading
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Direction {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}

/// Board dimensions in cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    pub width: i32,
    pub height: i32,
}

impl Grid {
    pub fn new(width: u32, height: u32) -> Self {
        debug_assert!(width > 0 && height > 0, "grid must have at least one cell");
        Self {
            width: width as i32,
            height: height as i32,
        }
    }

    /// Map any integer cell onto the board using modulo arithmetic on both axes
    #[inline]
    pub fn wrap(&self, cell: Cell) -> Cell {
        cell.rem_euclid(IVec2::new(self.width, self.height))
    }

    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.x < self.width && cell.y >= 0 && cell.y < self.height
    }

    /// Total number of cells on the board
    pub fn cell_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    pub fn center(&self) -> Cell {
        IVec2::new(self.width / 2, self.height / 2)
    }

    /// Uniformly random cell within bounds
    pub fn random_cell<R: Rng + ?Sized>(&self, rng: &mut R) -> Cell {
        IVec2::new(
            rng.random_range(0..self.width),
            rng.random_range(0..self.height),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_wrap_re_enters_opposite_edge() {
        let grid = Grid::new(32, 24);
        assert_eq!(grid.wrap(IVec2::new(32, 5)), IVec2::new(0, 5));
        assert_eq!(grid.wrap(IVec2::new(-1, 5)), IVec2::new(31, 5));
        assert_eq!(grid.wrap(IVec2::new(4, 24)), IVec2::new(4, 0));
        assert_eq!(grid.wrap(IVec2::new(4, -1)), IVec2::new(4, 23));
        assert_eq!(grid.wrap(IVec2::new(-33, 50)), IVec2::new(31, 2));
    }

    #[test]
    fn test_wrap_keeps_inner_cells() {
        let grid = Grid::new(32, 24);
        assert_eq!(grid.wrap(IVec2::new(16, 12)), IVec2::new(16, 12));
    }

    #[test]
    fn test_center_and_count() {
        let grid = Grid::new(32, 24);
        assert_eq!(grid.center(), IVec2::new(16, 12));
        assert_eq!(grid.cell_count(), 768);
    }

    #[test]
    fn test_opposites() {
        assert!(Direction::Up.is_opposite(Direction::Down));
        assert!(Direction::Left.is_opposite(Direction::Right));
        assert!(!Direction::Up.is_opposite(Direction::Left));
        assert!(!Direction::Right.is_opposite(Direction::Right));
    }

    #[test]
    fn test_random_cell_in_bounds() {
        let grid = Grid::new(5, 3);
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..200 {
            assert!(grid.contains(grid.random_cell(&mut rng)));
        }
    }
}
