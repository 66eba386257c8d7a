use super::observation::{encode_observation, Observation};
use crate::game::{
    Action, ConfigError, Direction, GameConfig, GameEngine, GameState, GridBounds, Position,
};

/// Snake environment for external decision-making agents
///
/// Owns the engine and the episode state and provides the agent-facing
/// interface:
/// - flat 8-element observations (head, food, one-hot heading)
/// - discrete action space (0=Up, 1=Down, 2=Left, 3=Right)
/// - the standard reset/step episode contract
///
/// `step` is synchronous, runs to completion, and is safe to call at any
/// rate; pacing belongs to the caller.
pub struct SnakeEnvironment {
    engine: GameEngine,
    state: GameState,
}

impl SnakeEnvironment {
    /// Create a new Snake environment; invalid configuration is rejected
    /// up front
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        let mut engine = GameEngine::new(config)?;
        let state = engine.reset();
        Ok(Self { engine, state })
    }

    /// Environment with a fixed seed: identical seeds and action sequences
    /// reproduce the full trajectory
    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        let mut engine = GameEngine::with_seed(config, seed)?;
        let state = engine.reset();
        Ok(Self { engine, state })
    }

    /// Reset the environment and return the initial observation
    pub fn reset(&mut self) -> Observation {
        self.state = self.engine.reset();
        encode_observation(&self.state)
    }

    /// Step the environment with a discrete action
    ///
    /// Actions:
    /// - 0: Move Up
    /// - 1: Move Down
    /// - 2: Move Left
    /// - 3: Move Right
    /// - other: keep the current heading
    ///
    /// Returns `(observation, reward, done)`. After `done` is reported the
    /// caller must `reset()` before stepping again; further steps are
    /// zero-reward no-ops.
    pub fn step(&mut self, action_idx: usize) -> (Observation, f32, bool) {
        let action = action_from_index(action_idx);
        let result = self.engine.step(&mut self.state, action);

        (
            encode_observation(&self.state),
            result.reward,
            result.terminated,
        )
    }

    /// Get current observation without stepping
    pub fn observation(&self) -> Observation {
        encode_observation(&self.state)
    }

    // Read-only accessors for rendering collaborators

    /// Ordered body segments, head first
    pub fn body(&self) -> impl Iterator<Item = Position> + '_ {
        self.state.snake.segments()
    }

    /// Current food position
    pub fn food(&self) -> Position {
        self.state.food
    }

    /// Grid dimensions
    pub fn bounds(&self) -> GridBounds {
        self.engine.bounds()
    }

    /// Current score
    pub fn score(&self) -> u32 {
        self.state.score
    }

    /// Full game state
    pub fn state(&self) -> &GameState {
        &self.state
    }
}

/// Convert discrete action index to game Action
///
/// 0=Up, 1=Down, 2=Left, 3=Right; anything else is a no-turn no-op, never
/// an error
fn action_from_index(idx: usize) -> Action {
    match idx {
        0 => Action::Move(Direction::Up),
        1 => Action::Move(Direction::Down),
        2 => Action::Move(Direction::Left),
        3 => Action::Move(Direction::Right),
        _ => Action::Continue,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_environment_creation() {
        let env = SnakeEnvironment::new(GameConfig::default()).unwrap();

        assert!(env.state().is_alive);
        assert_eq!(env.score(), 0);
        assert_eq!(env.state().steps, 0);
        assert_eq!(env.bounds().width(), 20);
    }

    #[test]
    fn test_rejects_invalid_dimensions() {
        assert!(matches!(
            SnakeEnvironment::new(GameConfig::new(0, 0)),
            Err(ConfigError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_reset_returns_fresh_observation() {
        let mut env = SnakeEnvironment::with_seed(GameConfig::default(), 3).unwrap();

        let obs = env.reset();

        // head at the grid center, heading Right
        assert_eq!(obs[0], 10.0);
        assert_eq!(obs[1], 10.0);
        assert_eq!(obs[4..], [0.0, 0.0, 0.0, 1.0]);
        assert_eq!(obs[2], env.food().x as f32);
        assert_eq!(obs[3], env.food().y as f32);
    }

    #[test]
    fn test_action_mapping() {
        assert_eq!(action_from_index(0), Action::Move(Direction::Up));
        assert_eq!(action_from_index(1), Action::Move(Direction::Down));
        assert_eq!(action_from_index(2), Action::Move(Direction::Left));
        assert_eq!(action_from_index(3), Action::Move(Direction::Right));
        assert_eq!(action_from_index(4), Action::Continue);
        assert_eq!(action_from_index(999), Action::Continue);
    }

    #[test]
    fn test_step_moves_head() {
        let mut env = SnakeEnvironment::with_seed(GameConfig::small(), 3).unwrap();

        let (obs, reward, done) = env.step(1); // Down from (5,5)

        assert_eq!(obs[0], 5.0);
        assert_eq!(obs[1], 6.0);
        assert!(!done);
        assert!(reward <= 0.0 || reward == 10.0);
    }

    #[test]
    fn test_invalid_action_keeps_heading() {
        let mut env = SnakeEnvironment::with_seed(GameConfig::small(), 3).unwrap();

        let (obs, _, _) = env.step(42);

        // still heading Right, head moved one cell rightward
        assert_eq!(obs[0], 6.0);
        assert_eq!(obs[1], 5.0);
        assert_eq!(obs[4..], [0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_wall_death_reports_done() {
        let mut env = SnakeEnvironment::with_seed(GameConfig::small(), 3).unwrap();

        // head starts at (5,5) on a 10x10 grid heading Right; the fifth
        // step rightward would land at x=10, off the grid
        for _ in 0..4 {
            let (_, _, done) = env.step(3);
            assert!(!done);
        }
        let (_, reward, done) = env.step(3);

        assert!(done);
        assert_eq!(reward, -10.0);
        assert!(!env.state().is_alive);

        // stepping a terminated episode is a zero-reward no-op
        let steps = env.state().steps;
        let (_, reward, done) = env.step(3);
        assert!(done);
        assert_eq!(reward, 0.0);
        assert_eq!(env.state().steps, steps);
    }

    #[test]
    fn test_head_stays_in_bounds_until_done() {
        let mut env = SnakeEnvironment::with_seed(GameConfig::small(), 11).unwrap();
        let mut rng = StdRng::seed_from_u64(11);
        let bounds = env.bounds();

        env.reset();
        for _ in 0..500 {
            let (_, _, done) = env.step(rng.gen_range(0..4));
            if done {
                env.reset();
            } else {
                assert!(bounds.contains(env.state().snake.head()));
            }
        }
    }

    #[test]
    fn test_seeded_trajectories_match() {
        let mut a = SnakeEnvironment::with_seed(GameConfig::default(), 42).unwrap();
        let mut b = SnakeEnvironment::with_seed(GameConfig::default(), 42).unwrap();

        assert_eq!(a.reset(), b.reset());

        let mut rng = StdRng::seed_from_u64(0);
        for _ in 0..200 {
            let action = rng.gen_range(0..4);
            let (obs_a, reward_a, done_a) = a.step(action);
            let (obs_b, reward_b, done_b) = b.step(action);

            assert_eq!(obs_a, obs_b);
            assert_eq!(reward_a, reward_b);
            assert_eq!(done_a, done_b);

            if done_a {
                assert_eq!(a.reset(), b.reset());
            }
        }
    }

    #[test]
    fn test_render_accessors() {
        let env = SnakeEnvironment::with_seed(GameConfig::default(), 5).unwrap();

        let body: Vec<Position> = env.body().collect();
        assert_eq!(body.len(), 1);
        assert_eq!(body[0], env.state().snake.head());
        assert!(env.bounds().contains(env.food()));
        assert_eq!(env.score(), 0);

        // peeking does not step
        let steps = env.state().steps;
        let obs = env.observation();
        assert_eq!(obs[0], body[0].x as f32);
        assert_eq!(env.state().steps, steps);
    }
}
