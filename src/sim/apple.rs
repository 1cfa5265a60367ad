//! The apple entity

use std::collections::HashSet;

use rand::Rng;

use super::grid::{Cell, Grid};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Apple {
    cell: Cell,
}

impl Apple {
    pub fn at(cell: Cell) -> Self {
        Self { cell }
    }

    /// Apple on a random cell not in `occupied`
    ///
    /// Falls back to a random cell if the board has no free cell.
    pub fn spawn<R: Rng + ?Sized>(grid: &Grid, occupied: &HashSet<Cell>, rng: &mut R) -> Self {
        let mut apple = Self::at(grid.random_cell(rng));
        apple.relocate(grid, occupied, rng);
        apple
    }

    pub fn cell(&self) -> Cell {
        self.cell
    }

    /// Resample uniformly until a cell outside `occupied` comes up
    ///
    /// Returns false, leaving the apple in place, when every grid cell is
    /// occupied.
    pub fn relocate<R: Rng + ?Sized>(
        &mut self,
        grid: &Grid,
        occupied: &HashSet<Cell>,
        rng: &mut R,
    ) -> bool {
        let free = grid.cell_count() - occupied.iter().filter(|&&c| grid.contains(c)).count();
        if free == 0 {
            log::warn!("No free cell for the apple, leaving it at {}", self.cell);
            return false;
        }

        loop {
            let cell = grid.random_cell(rng);
            if !occupied.contains(&cell) {
                log::debug!("Apple relocated {} -> {}", self.cell, cell);
                self.cell = cell;
                return true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::IVec2;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_relocate_avoids_occupied() {
        let grid = Grid::new(3, 3);
        let mut rng = Pcg32::seed_from_u64(11);
        // Everything but (2,2) is taken
        let occupied: HashSet<Cell> = (0..3)
            .flat_map(|x| (0..3).map(move |y| IVec2::new(x, y)))
            .filter(|&c| c != IVec2::new(2, 2))
            .collect();

        let mut apple = Apple::at(IVec2::ZERO);
        for _ in 0..20 {
            assert!(apple.relocate(&grid, &occupied, &mut rng));
            assert_eq!(apple.cell(), IVec2::new(2, 2));
        }
    }

    #[test]
    fn test_relocate_full_board_keeps_position() {
        let grid = Grid::new(2, 1);
        let mut rng = Pcg32::seed_from_u64(5);
        let occupied: HashSet<Cell> = [IVec2::new(0, 0), IVec2::new(1, 0)].into();

        let mut apple = Apple::at(IVec2::new(1, 0));
        assert!(!apple.relocate(&grid, &occupied, &mut rng));
        assert_eq!(apple.cell(), IVec2::new(1, 0));
    }

    #[test]
    fn test_spawn_in_bounds_and_free() {
        let grid = Grid::new(32, 24);
        let mut rng = Pcg32::seed_from_u64(42);
        let occupied: HashSet<Cell> = [grid.center()].into();
        for _ in 0..100 {
            let apple = Apple::spawn(&grid, &occupied, &mut rng);
            assert!(grid.contains(apple.cell()));
            assert_ne!(apple.cell(), grid.center());
        }
    }
}
