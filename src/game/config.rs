use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::grid::GridBounds;

/// Configuration errors, surfaced at construction and never recovered
/// internally
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("initial snake length must be at least 1")]
    ZeroInitialLength,

    #[error("initial snake length {length} does not fit a {width}x{height} grid")]
    InitialLengthTooLarge {
        length: usize,
        width: usize,
        height: usize,
    },
}

/// Configuration for the game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Width of the game grid
    pub grid_width: usize,
    /// Height of the game grid
    pub grid_height: usize,
    /// Initial length of the snake
    pub initial_snake_length: usize,

    // Rewards
    /// Reward for eating food
    pub food_reward: f32,
    /// Penalty for each step (encourages efficiency)
    pub step_penalty: f32,
    /// Penalty for dying
    pub death_penalty: f32,

    /// Whether hitting the own body ends the episode like hitting a wall.
    /// When false, a self-hit restarts body and score in place and the
    /// episode keeps running.
    pub self_collision_terminates: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 20,
            grid_height: 20,
            initial_snake_length: 1,
            food_reward: 10.0,
            step_penalty: -0.1,
            death_penalty: -10.0,
            self_collision_terminates: false,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom grid size
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
            ..Default::default()
        }
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self::new(10, 10)
    }

    /// Create a large grid
    pub fn large() -> Self {
        Self::new(30, 30)
    }

    /// Validate the configuration and produce the grid bounds.
    ///
    /// The initial body extends from the center cell away from the starting
    /// heading, so it must fit between the center and the wall.
    pub fn validate(&self) -> Result<GridBounds, ConfigError> {
        let bounds = GridBounds::new(self.grid_width, self.grid_height)?;

        if self.initial_snake_length == 0 {
            return Err(ConfigError::ZeroInitialLength);
        }
        if self.initial_snake_length > self.grid_width / 2 + 1 {
            return Err(ConfigError::InitialLengthTooLarge {
                length: self.initial_snake_length,
                width: self.grid_width,
                height: self.grid_height,
            });
        }

        Ok(bounds)
    }
}
