//! Torus Snake entry point
//!
//! Loads settings, sets up the terminal and runs the game loop. Logs go to
//! stderr, so redirect them (`2>snake.log`) when raising `RUST_LOG`.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use torus_snake::platform::terminal::{TerminalInput, TerminalRenderer, TerminalSession};
use torus_snake::settings::Overrides;
use torus_snake::sim::GameState;
use torus_snake::{GameLoop, Settings};

#[derive(Parser)]
#[command(name = "torus-snake")]
#[command(version, about = "Snake on a wrap-around grid")]
struct Cli {
    /// JSON settings file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Grid width in cells
    #[arg(long)]
    width: Option<u32>,

    /// Grid height in cells
    #[arg(long)]
    height: Option<u32>,

    /// Starting speed in ticks per second
    #[arg(long)]
    speed: Option<u32>,

    /// RNG seed for a reproducible game
    #[arg(long)]
    seed: Option<u64>,
}

impl Cli {
    fn settings(&self) -> Result<Settings> {
        let overrides = Overrides {
            grid_width: self.width,
            grid_height: self.height,
            speed: self.speed,
            seed: self.seed,
        };
        Settings::resolve(self.config.as_deref(), &overrides)
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let settings = cli.settings()?;
    let seed = settings.seed_or_random();
    log::info!("Torus Snake starting with seed {}", seed);

    let state = GameState::from_settings(&settings, seed);
    TerminalSession::check_fits(&state.grid).context("Terminal too small")?;

    let _session = TerminalSession::enter().context("Failed to set up terminal")?;
    let renderer = TerminalRenderer::new(io::stdout(), state.grid);
    let mut game = GameLoop::new(state, renderer, TerminalInput::new());
    game.run()
}
