//! Fixed-rate game loop
//!
//! Each tick drains the input batch, advances the simulation, repaints the
//! changed cells and then blocks until the tick interval has elapsed.

use std::ops::ControlFlow;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};

use crate::caption;
use crate::platform::{Command, InputSource};
use crate::renderer::{Renderer, paint_board, paint_tick};
use crate::sim::{GameState, TickInput, TickOutcome, tick};

/// Sleeps out whatever is left of the current tick
#[derive(Debug)]
pub struct FrameClock {
    last: Instant,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
        }
    }

    /// Block until `interval` has passed since the previous call
    pub fn wait(&mut self, interval: Duration) {
        let elapsed = self.last.elapsed();
        if elapsed < interval {
            thread::sleep(interval - elapsed);
        }
        self.last = Instant::now();
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

pub struct GameLoop<R: Renderer, I: InputSource> {
    state: GameState,
    renderer: R,
    input: I,
    clock: FrameClock,
}

impl<R: Renderer, I: InputSource> GameLoop<R, I> {
    pub fn new(state: GameState, renderer: R, input: I) -> Self {
        Self {
            state,
            renderer,
            input,
            clock: FrameClock::new(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Paint the full board and caption
    pub fn draw_initial(&mut self) -> Result<()> {
        paint_board(&mut self.renderer, &self.state).context("Failed to draw board")?;
        self.finish_frame()
    }

    /// Run until an exit command arrives
    pub fn run(&mut self) -> Result<()> {
        log::info!(
            "Starting on a {}x{} board at speed {} (seed {})",
            self.state.grid.width,
            self.state.grid.height,
            self.state.speed(),
            self.state.seed
        );
        self.draw_initial()?;

        while self.step()?.is_continue() {
            self.clock.wait(self.state.tick_interval());
        }

        log::info!(
            "Exiting after {} ticks, best score {}",
            self.state.time_ticks,
            self.state.best_score
        );
        Ok(())
    }

    /// One tick without the trailing wait
    pub fn step(&mut self) -> Result<ControlFlow<()>> {
        let events = self.input.poll().context("Failed to read input")?;

        let mut input = TickInput::default();
        for event in events {
            match Command::from_event(event) {
                Some(Command::Turn(direction)) => input.turns.push(direction),
                Some(Command::Faster) => input.speed_changes.push(1),
                Some(Command::Slower) => input.speed_changes.push(-1),
                Some(Command::Exit) => return Ok(ControlFlow::Break(())),
                None => {}
            }
        }

        let outcome = tick(&mut self.state, &input);
        self.draw(&outcome)?;
        Ok(ControlFlow::Continue(()))
    }

    fn draw(&mut self, outcome: &TickOutcome) -> Result<()> {
        paint_tick(&mut self.renderer, &self.state, outcome).context("Failed to draw tick")?;
        self.finish_frame()
    }

    fn finish_frame(&mut self) -> Result<()> {
        let text = caption(
            self.state.speed(),
            self.state.score(),
            self.state.best_score,
        );
        self.renderer
            .set_caption(&text)
            .context("Failed to update caption")?;
        self.renderer.present().context("Failed to present frame")
    }
}
