//! Session statistics for scripted rollouts

pub mod rollout_stats;

pub use rollout_stats::RolloutStats;
