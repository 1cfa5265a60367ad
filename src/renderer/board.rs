//! Painting the board through a [`Renderer`]

use std::io;

use super::{Color, Renderer, palette};
use crate::sim::{Apple, Cell, GameState, Snake, TickOutcome};

/// Something that occupies cells and has a single color
pub trait Drawable {
    fn cells(&self) -> Vec<Cell>;
    fn color(&self) -> Color;
}

impl Drawable for Snake {
    fn cells(&self) -> Vec<Cell> {
        Snake::cells(self).collect()
    }

    fn color(&self) -> Color {
        palette::SNAKE
    }
}

impl Drawable for Apple {
    fn cells(&self) -> Vec<Cell> {
        vec![self.cell()]
    }

    fn color(&self) -> Color {
        palette::APPLE
    }
}

fn draw_entity<R: Renderer + ?Sized>(renderer: &mut R, entity: &dyn Drawable) -> io::Result<()> {
    let color = entity.color();
    for cell in entity.cells() {
        renderer.draw_cell(cell, color)?;
    }
    Ok(())
}

/// Repaint the whole board from scratch
pub fn paint_board<R: Renderer + ?Sized>(renderer: &mut R, state: &GameState) -> io::Result<()> {
    renderer.clear(palette::BOARD_BACKGROUND)?;
    draw_entity(renderer, &state.apple)?;
    draw_entity(renderer, &state.snake)?;
    Ok(())
}

/// Repaint only what a tick changed
///
/// The vacated tail is erased before the apple is drawn, since a relocated
/// apple may land on it.
pub fn paint_tick<R: Renderer + ?Sized>(
    renderer: &mut R,
    state: &GameState,
    outcome: &TickOutcome,
) -> io::Result<()> {
    if outcome.redraw_all {
        return paint_board(renderer, state);
    }

    if let Some(vacated) = outcome.vacated {
        renderer.draw_cell(vacated, palette::BOARD_BACKGROUND)?;
    }
    if let Some(eaten) = outcome.eaten_under_head {
        renderer.draw_cell(eaten, palette::SNAKE)?;
    }
    renderer.draw_cell(outcome.head, palette::SNAKE)?;
    draw_entity(renderer, &state.apple)
}
