//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick is one snake step
//! - Seeded RNG only
//! - No rendering, input or clock dependencies

pub mod apple;
pub mod grid;
pub mod snake;
pub mod state;
pub mod tick;

pub use apple::Apple;
pub use grid::{Cell, Direction, Grid};
pub use snake::{Advance, Snake};
pub use state::{GameState, SpeedLimits};
pub use tick::{TickEvent, TickInput, TickOutcome, tick};
