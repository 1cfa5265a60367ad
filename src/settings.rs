//! Game settings
//!
//! Loaded from an optional JSON file and overridden by command-line flags.
//! Validation runs once, after overrides, so a flag can correct a bad file
//! value. Settings are read-only; nothing is written back.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, ensure};
use serde::{Deserialize, Serialize};

use crate::consts::*;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Board width in cells
    pub grid_width: u32,
    /// Board height in cells
    pub grid_height: u32,

    // === Speed (ticks per second) ===
    /// Starting speed
    pub speed: u32,
    pub min_speed: u32,
    pub max_speed: u32,
    /// Change applied by one press of a speed key
    pub speed_step: u32,

    /// RNG seed; a random one is drawn when absent
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            grid_width: GRID_WIDTH,
            grid_height: GRID_HEIGHT,
            speed: DEFAULT_SPEED,
            min_speed: MIN_SPEED,
            max_speed: MAX_SPEED,
            speed_step: SPEED_STEP,
            seed: None,
        }
    }
}

/// Command-line values that take precedence over the settings file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub grid_width: Option<u32>,
    pub grid_height: Option<u32>,
    pub speed: Option<u32>,
    pub seed: Option<u64>,
}

impl Settings {
    /// Parse settings without validating them
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse settings JSON")
    }

    /// Read a JSON settings file without validating it
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {}", path.display()))?;
        let settings = Self::from_json(&json)
            .with_context(|| format!("Invalid settings in {}", path.display()))?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// File (or defaults), then overrides, then validation
    pub fn resolve(path: Option<&Path>, overrides: &Overrides) -> Result<Self> {
        let mut settings = match path {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        settings.apply(overrides);
        settings.validate().context("Invalid settings")?;
        Ok(settings)
    }

    pub fn apply(&mut self, overrides: &Overrides) {
        if let Some(width) = overrides.grid_width {
            self.grid_width = width;
        }
        if let Some(height) = overrides.grid_height {
            self.grid_height = height;
        }
        if let Some(speed) = overrides.speed {
            self.speed = speed;
        }
        if overrides.seed.is_some() {
            self.seed = overrides.seed;
        }
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.grid_width > 0 && self.grid_height > 0,
            "grid must be at least 1x1, got {}x{}",
            self.grid_width,
            self.grid_height
        );
        ensure!(
            i32::try_from(self.grid_width).is_ok() && i32::try_from(self.grid_height).is_ok(),
            "grid dimensions too large"
        );
        ensure!(self.min_speed > 0, "min_speed must be positive");
        ensure!(
            self.min_speed <= self.max_speed,
            "min_speed ({}) exceeds max_speed ({})",
            self.min_speed,
            self.max_speed
        );
        ensure!(
            (self.min_speed..=self.max_speed).contains(&self.speed),
            "speed {} outside {}..={}",
            self.speed,
            self.min_speed,
            self.max_speed
        );
        ensure!(self.speed_step > 0, "speed_step must be positive");
        Ok(())
    }

    /// Configured seed, or a fresh one from the thread RNG
    pub fn seed_or_random(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }
}
