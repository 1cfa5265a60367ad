//! Drawing boundary
//!
//! The simulation never draws. The game loop hands changed cells to a
//! [`Renderer`], which owns the actual surface (a terminal, a window, a test
//! recorder).

pub mod board;

use std::io;

use crate::sim::Cell;

pub use board::{Drawable, paint_board, paint_tick};

/// 24-bit color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Board palette
pub mod palette {
    use super::Color;

    pub const BOARD_BACKGROUND: Color = Color::rgb(0, 0, 0);
    pub const APPLE: Color = Color::rgb(255, 0, 0);
    pub const SNAKE: Color = Color::rgb(0, 255, 0);
    /// Outline drawn around occupied cells
    pub const FRAME: Color = Color::rgb(93, 216, 228);
}

/// A surface the game can paint grid cells onto
pub trait Renderer {
    /// Paint one cell; occupied colors get a frame outline
    fn draw_cell(&mut self, cell: Cell, color: Color) -> io::Result<()>;

    /// Fill the whole board with one color
    fn clear(&mut self, color: Color) -> io::Result<()>;

    /// Show everything drawn since the last present
    fn present(&mut self) -> io::Result<()>;

    /// Update the window title or status line
    fn set_caption(&mut self, _caption: &str) -> io::Result<()> {
        Ok(())
    }
}
