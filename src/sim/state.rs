//! Game state and bookkeeping
//!
//! Owns the entities, the score tally, the speed setting and the RNG, so the
//! whole simulation is reproducible from a seed.

use std::collections::HashSet;
use std::time::Duration;

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::apple::Apple;
use super::grid::{Cell, Grid};
use super::snake::Snake;
use crate::settings::Settings;

/// Allowed tick rates, in ticks per second
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpeedLimits {
    pub min: u32,
    pub max: u32,
    pub step: u32,
}

impl SpeedLimits {
    pub fn clamp(&self, speed: u32) -> u32 {
        speed.clamp(self.min, self.max)
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub grid: Grid,
    pub snake: Snake,
    pub apple: Apple,
    /// Best score seen since process start
    pub best_score: usize,
    /// Current speed in ticks per second
    speed: u32,
    limits: SpeedLimits,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Completed rounds (collisions and full boards)
    pub rounds: u32,
    rng: Pcg32,
}

impl GameState {
    /// Fresh round with the given seed
    pub fn new(grid: Grid, limits: SpeedLimits, speed: u32, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let snake = Snake::new(&grid, &mut rng);
        let occupied: HashSet<Cell> = snake.cells().collect();
        let apple = Apple::spawn(&grid, &occupied, &mut rng);

        Self {
            seed,
            grid,
            snake,
            apple,
            best_score: 0,
            speed: limits.clamp(speed),
            limits,
            time_ticks: 0,
            rounds: 0,
            rng,
        }
    }

    pub fn from_settings(settings: &Settings, seed: u64) -> Self {
        Self::new(
            Grid::new(settings.grid_width, settings.grid_height),
            SpeedLimits {
                min: settings.min_speed,
                max: settings.max_speed,
                step: settings.speed_step,
            },
            settings.speed,
            seed,
        )
    }

    /// Snake length minus the starting cell
    pub fn score(&self) -> usize {
        self.snake.len() - 1
    }

    pub fn speed(&self) -> u32 {
        self.speed
    }

    /// Wall-clock length of one tick at the current speed
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.speed))
    }

    /// Step the speed by `steps` increments (negative slows down), clamped to the limits
    pub fn adjust_speed(&mut self, steps: i32) {
        if steps == 0 {
            return;
        }
        let delta = i64::from(steps) * i64::from(self.limits.step);
        let target = (i64::from(self.speed) + delta).clamp(0, i64::from(u32::MAX)) as u32;
        let speed = self.limits.clamp(target);
        if speed != self.speed {
            log::debug!("Speed {} -> {}", self.speed, speed);
            self.speed = speed;
        }
    }

    pub fn board_full(&self) -> bool {
        self.snake.len() >= self.grid.cell_count()
    }

    pub fn occupied_cells(&self) -> HashSet<Cell> {
        self.snake.cells().collect()
    }

    /// Record the finished round, restart the snake and move the apple
    pub fn reset_round(&mut self) {
        let score = self.score();
        if score > self.best_score {
            self.best_score = score;
        }
        self.rounds += 1;
        log::info!(
            "Round {} over with score {} (best {})",
            self.rounds,
            score,
            self.best_score
        );

        self.snake.reset(&self.grid, &mut self.rng);
        self.relocate_apple();
    }

    /// Move the apple off every snake cell; false if the board has no room
    pub fn relocate_apple(&mut self) -> bool {
        let occupied = self.occupied_cells();
        self.apple.relocate(&self.grid, &occupied, &mut self.rng)
    }
}
