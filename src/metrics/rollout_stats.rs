use std::time::Instant;

/// Aggregate statistics over a batch of scripted episodes
pub struct RolloutStats {
    started: Instant,
    pub episodes: u32,
    pub high_score: u32,
    pub total_steps: u64,
    pub total_reward: f64,
}

impl RolloutStats {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
            episodes: 0,
            high_score: 0,
            total_steps: 0,
            total_reward: 0.0,
        }
    }

    /// Record a finished episode
    pub fn on_episode_end(&mut self, score: u32, steps: u32, reward: f32) {
        self.episodes += 1;
        self.total_steps += u64::from(steps);
        self.total_reward += f64::from(reward);
        if score > self.high_score {
            self.high_score = score;
        }
    }

    /// Mean episode reward so far
    pub fn mean_reward(&self) -> f64 {
        if self.episodes == 0 {
            0.0
        } else {
            self.total_reward / f64::from(self.episodes)
        }
    }

    /// Simulation throughput since construction
    pub fn steps_per_second(&self) -> f64 {
        let secs = self.started.elapsed().as_secs_f64();
        if secs > 0.0 {
            self.total_steps as f64 / secs
        } else {
            0.0
        }
    }

    pub fn format_summary(&self) -> String {
        format!(
            "Episodes:    {}\nHigh score:  {}\nTotal steps: {}\nMean reward: {:.2}\nThroughput:  {:.0} steps/s",
            self.episodes,
            self.high_score,
            self.total_steps,
            self.mean_reward(),
            self.steps_per_second()
        )
    }
}

impl Default for RolloutStats {
    fn default() -> Self {
        Self::new()
    }
}
