//! Agent-facing environment for the Snake game
//!
//! Provides:
//! - Flat 8-element observations (head, food, one-hot heading)
//! - Discrete action decoding (0=Up, 1=Down, 2=Left, 3=Right)
//! - The reset/step episode contract consumed by external agents

pub mod environment;
pub mod observation;

pub use environment::SnakeEnvironment;
pub use observation::{encode_observation, Observation, OBSERVATION_DIM};
