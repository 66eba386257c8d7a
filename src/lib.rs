//! Grid Snake simulation with an agent-facing environment interface
//!
//! This library provides:
//! - Core game logic with no I/O, timing, or rendering dependencies (game module)
//! - A flat-observation environment for external decision-making agents (env module)
//! - Rollout statistics (metrics module)
//! - A headless scripted-agent driver (modes module)

pub mod env;
pub mod game;
pub mod metrics;
pub mod modes;
