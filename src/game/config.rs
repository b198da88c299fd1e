use anyhow::{Context, Result, ensure};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Side length of the playing field
pub const GRID_SIZE: usize = 24;

/// Configuration for the game
///
/// Every field has a default, so a config file only needs the values it
/// wants to change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Side length of the square grid
    pub grid_size: usize,
    /// Length of the snake after a reset
    pub initial_snake_length: usize,
    /// Tick interval at the start of a session, in milliseconds
    pub base_delay_ms: u64,
    /// Fastest tick interval, in milliseconds
    pub min_delay_ms: u64,
    /// Amount the interval shrinks per food eaten, in milliseconds
    pub speed_step_ms: u64,
    /// Points awarded per food eaten
    pub food_score: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: GRID_SIZE,
            initial_snake_length: 3,
            base_delay_ms: 170,
            min_delay_ms: 70,
            speed_step_ms: 7,
            food_score: 10,
        }
    }
}

impl GameConfig {
    /// Load a configuration from a JSON file, filling gaps with defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    pub fn base_delay(&self) -> Duration {
        Duration::from_millis(self.base_delay_ms)
    }

    pub fn min_delay(&self) -> Duration {
        Duration::from_millis(self.min_delay_ms)
    }

    pub fn speed_step(&self) -> Duration {
        Duration::from_millis(self.speed_step_ms)
    }

    /// Check the values are consistent enough to run a session
    pub fn validate(&self) -> Result<()> {
        ensure!(self.min_delay_ms > 0, "min delay must be positive");
        ensure!(
            self.min_delay_ms <= self.base_delay_ms,
            "min delay ({} ms) exceeds base delay ({} ms)",
            self.min_delay_ms,
            self.base_delay_ms
        );
        ensure!(self.speed_step_ms > 0, "speed step must be positive");
        ensure!(self.food_score > 0, "food score must be positive");
        ensure!(
            self.initial_snake_length >= 1,
            "snake needs at least one segment"
        );
        // The snake starts one cell left of center and extends leftwards.
        ensure!(
            self.initial_snake_length <= self.grid_size / 2,
            "grid of size {} cannot fit a snake of length {}",
            self.grid_size,
            self.initial_snake_length
        );
        Ok(())
    }
}
