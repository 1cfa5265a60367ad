//! The snake entity
//!
//! Body cells are stored head first. Turns are buffered as a pending
//! direction and applied on the next advance, so input timing never
//! changes the heading mid-tick.

use std::collections::VecDeque;

use rand::Rng;

use super::grid::{Cell, Direction, Grid};

/// Cells touched by one advance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Advance {
    /// New head cell
    pub head: Cell,
    /// Tail cell dropped this advance (None while growing)
    pub vacated: Option<Cell>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    body: VecDeque<Cell>,
    direction: Direction,
    pending: Option<Direction>,
    just_ate: bool,
}

impl Snake {
    /// Single-cell snake at the grid center with a random heading
    pub fn new<R: Rng + ?Sized>(grid: &Grid, rng: &mut R) -> Self {
        Self::with_direction(grid.center(), Direction::random(rng))
    }

    pub fn with_direction(head: Cell, direction: Direction) -> Self {
        Self {
            body: VecDeque::from([head]),
            direction,
            pending: None,
            just_ate: false,
        }
    }

    /// Build a snake from explicit cells, head first
    ///
    /// Returns `None` for an empty body.
    pub fn from_cells(cells: impl IntoIterator<Item = Cell>, direction: Direction) -> Option<Self> {
        let body: VecDeque<Cell> = cells.into_iter().collect();
        if body.is_empty() {
            return None;
        }
        Some(Self {
            body,
            direction,
            pending: None,
            just_ate: false,
        })
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn tail(&self) -> Cell {
        self.body[self.body.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Always false; a snake keeps at least its head
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_direction(&self) -> Option<Direction> {
        self.pending
    }

    pub fn just_ate(&self) -> bool {
        self.just_ate
    }

    /// Body cells, head first
    pub fn cells(&self) -> impl ExactSizeIterator<Item = Cell> + '_ {
        self.body.iter().copied()
    }

    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Queue a turn for the next advance
    ///
    /// A reversal into the neck is ignored unless the snake is a single cell.
    pub fn set_pending_direction(&mut self, direction: Direction) {
        if self.body.len() > 1 && self.direction.is_opposite(direction) {
            return;
        }
        self.pending = Some(direction);
    }

    /// Keep the tail on the next advance
    pub fn grow(&mut self) {
        self.just_ate = true;
    }

    /// Move one cell along the (possibly updated) heading
    pub fn advance(&mut self, grid: &Grid) -> Advance {
        if let Some(direction) = self.pending.take() {
            self.direction = direction;
        }

        let head = grid.wrap(self.head() + self.direction.delta());
        self.body.push_front(head);

        let vacated = if self.just_ate {
            self.just_ate = false;
            None
        } else {
            self.body.pop_back()
        };

        Advance { head, vacated }
    }

    /// True if the head shares a cell with any other segment
    pub fn check_self_collision(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|&cell| cell == head)
    }

    /// Collapse to a single centered cell with a fresh random heading
    pub fn reset<R: Rng + ?Sized>(&mut self, grid: &Grid, rng: &mut R) {
        *self = Self::new(grid, rng);
    }
}
