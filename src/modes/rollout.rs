//! Headless rollout mode
//!
//! Drives the environment with a scripted, non-learning policy at full
//! speed, logging one line per episode and a plain summary at the end. This
//! is the in-crate stand-in for an external decision-making agent; nothing
//! here renders, reads the keyboard, or sleeps.

use anyhow::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use crate::env::{Observation, SnakeEnvironment};
use crate::game::GameConfig;
use crate::metrics::RolloutStats;

/// Scripted decision policies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    /// Uniform over the four directions
    Random,
    /// Step toward the food along the larger axis gap
    Greedy,
}

/// Configuration for rollout mode
#[derive(Debug, Clone)]
pub struct RolloutConfig {
    /// Number of episodes to run
    pub episodes: u32,

    /// Step cap per episode; the environment itself never truncates
    pub max_steps: u32,

    /// Seed for food placement and the random policy
    pub seed: Option<u64>,

    /// Decision policy driving the environment
    pub policy: Policy,

    /// Game configuration (grid size, rewards)
    pub game_config: GameConfig,
}

impl RolloutConfig {
    /// Create a new rollout configuration with defaults
    pub fn new(episodes: u32) -> Self {
        Self {
            episodes,
            max_steps: 1000,
            seed: None,
            policy: Policy::Random,
            game_config: GameConfig::default(),
        }
    }
}

/// Rollout mode driver
pub struct RolloutMode {
    env: SnakeEnvironment,
    config: RolloutConfig,
    rng: StdRng,
    stats: RolloutStats,
}

impl RolloutMode {
    pub fn new(config: RolloutConfig) -> Result<Self> {
        let env = match config.seed {
            Some(seed) => SnakeEnvironment::with_seed(config.game_config.clone(), seed)?,
            None => SnakeEnvironment::new(config.game_config.clone())?,
        };
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(Self {
            env,
            config,
            rng,
            stats: RolloutStats::new(),
        })
    }

    /// Run all configured episodes and print a final summary
    pub fn run(&mut self) -> Result<()> {
        for episode in 1..=self.config.episodes {
            let (score, steps, reward) = self.run_episode();
            self.stats.on_episode_end(score, steps, reward);
            info!(episode, score, steps, reward, "episode finished");
        }

        println!("{}", self.stats.format_summary());
        Ok(())
    }

    /// Statistics gathered so far
    pub fn stats(&self) -> &RolloutStats {
        &self.stats
    }

    fn run_episode(&mut self) -> (u32, u32, f32) {
        let mut observation = self.env.reset();
        let mut episode_reward = 0.0;
        let mut steps = 0;

        while steps < self.config.max_steps {
            let action = self.choose_action(&observation);
            let (next, reward, done) = self.env.step(action);

            observation = next;
            episode_reward += reward;
            steps += 1;

            if done {
                break;
            }
        }

        (self.env.score(), steps, episode_reward)
    }

    fn choose_action(&mut self, observation: &Observation) -> usize {
        match self.config.policy {
            Policy::Random => self.rng.gen_range(0..4),
            Policy::Greedy => greedy_action(observation),
        }
    }
}

/// Head toward the food along the axis with the larger gap, never asking
/// for the reversal of the current heading (a reversal request would be
/// refused and waste the step).
fn greedy_action(observation: &Observation) -> usize {
    let dx = observation[2] - observation[0];
    let dy = observation[3] - observation[1];
    let heading = heading_index(observation);

    let horizontal = if dx < 0.0 { 2 } else { 3 }; // Left / Right
    let vertical = if dy < 0.0 { 0 } else { 1 }; // Up / Down

    let (primary, secondary) = if dx.abs() >= dy.abs() {
        (horizontal, vertical)
    } else {
        (vertical, horizontal)
    };

    if reverses(heading, primary) {
        secondary
    } else {
        primary
    }
}

/// Index of the active heading in the one-hot tail of the observation,
/// matching the action encoding (0=Up, 1=Down, 2=Left, 3=Right)
fn heading_index(observation: &Observation) -> usize {
    observation[4..]
        .iter()
        .position(|&v| v == 1.0)
        .unwrap_or(3)
}

fn reverses(a: usize, b: usize) -> bool {
    matches!((a, b), (0, 1) | (1, 0) | (2, 3) | (3, 2))
}
