//! Torus Snake - classic Snake on a wrap-around grid
//!
//! Core modules:
//! - `sim`: Deterministic simulation (grid, snake, apple, tick)
//! - `renderer`: Drawing boundary and board painting
//! - `platform`: Input boundary, key mapping and the terminal backend
//! - `game`: Fixed-rate loop tying input, simulation and drawing together
//! - `settings`: Configuration

pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::GameLoop;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Default board size in cells
    pub const GRID_WIDTH: u32 = 32;
    pub const GRID_HEIGHT: u32 = 24;

    /// Default speed, in ticks per second
    pub const DEFAULT_SPEED: u32 = 10;
    /// Speed bounds for the speed keys
    pub const MIN_SPEED: u32 = 1;
    pub const MAX_SPEED: u32 = 30;
    pub const SPEED_STEP: u32 = 1;

    /// Window/terminal caption prefix
    pub const TITLE: &str = "Snake";
}

/// Caption shown every tick
pub fn caption(speed: u32, score: usize, best: usize) -> String {
    format!(
        "{} | Speed: {} | Score: {} | Best: {}",
        consts::TITLE,
        speed,
        score,
        best
    )
}
