use super::action::{Action, Direction};
use super::config::{ConfigError, GameConfig};
use super::food::FoodSpawner;
use super::grid::GridBounds;
use super::state::{CollisionKind, GameState, MoveOutcome, Snake};

/// Information about a step
#[derive(Debug, Clone, PartialEq)]
pub struct StepInfo {
    /// Whether the snake ate food this step
    pub ate_food: bool,
    /// Collision resolved this step, if any
    pub collision: Option<CollisionKind>,
}

/// Result of a game step
#[derive(Debug, Clone, PartialEq)]
pub struct StepResult {
    /// Scalar reward for this step
    pub reward: f32,
    /// Whether the episode has terminated
    pub terminated: bool,
    /// Additional information about the step
    pub info: StepInfo,
}

/// The game engine that handles all game logic
pub struct GameEngine {
    config: GameConfig,
    bounds: GridBounds,
    spawner: FoodSpawner,
}

impl GameEngine {
    /// Create a new game engine; invalid configuration is rejected here,
    /// not at first use
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        let bounds = config.validate()?;
        Ok(Self {
            config,
            bounds,
            spawner: FoodSpawner::new(),
        })
    }

    /// Engine with a fixed food seed; full trajectories are reproducible
    /// given the same action sequence
    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        let bounds = config.validate()?;
        Ok(Self {
            config,
            bounds,
            spawner: FoodSpawner::with_seed(seed),
        })
    }

    pub fn bounds(&self) -> GridBounds {
        self.bounds
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Reset the game to initial state
    pub fn reset(&mut self) -> GameState {
        let snake = self.starting_snake();
        let food = self.spawner.spawn(self.bounds);
        GameState::new(snake, food, self.bounds)
    }

    /// Execute one step of the game
    pub fn step(&mut self, state: &mut GameState, action: Action) -> StepResult {
        if !state.is_alive {
            return StepResult {
                reward: 0.0,
                terminated: true,
                info: StepInfo {
                    ate_food: false,
                    collision: None,
                },
            };
        }

        // Update direction based on action; reversals are rejected inside turn()
        if let Action::Move(direction) = action {
            state.snake.turn(direction);
        }

        match state.snake.advance(self.bounds) {
            MoveOutcome::WallCollision => {
                state.is_alive = false;
                state.steps += 1;

                StepResult {
                    reward: self.config.death_penalty,
                    terminated: true,
                    info: StepInfo {
                        ate_food: false,
                        collision: Some(CollisionKind::Wall),
                    },
                }
            }
            MoveOutcome::SelfCollision => {
                state.steps += 1;

                if self.config.self_collision_terminates {
                    state.is_alive = false;

                    StepResult {
                        reward: self.config.death_penalty,
                        terminated: true,
                        info: StepInfo {
                            ate_food: false,
                            collision: Some(CollisionKind::SelfCollision),
                        },
                    }
                } else {
                    // A self-hit restarts body and score in place; the
                    // episode keeps running, the food stays where it was,
                    // and the step earns the ordinary movement reward.
                    state.snake = self.starting_snake();
                    state.score = 0;

                    StepResult {
                        reward: self.config.step_penalty,
                        terminated: false,
                        info: StepInfo {
                            ate_food: false,
                            collision: Some(CollisionKind::SelfCollision),
                        },
                    }
                }
            }
            MoveOutcome::Advanced => {
                let ate_food = state.snake.head() == state.food;

                let reward = if ate_food {
                    state.snake.grow();
                    state.score += 1;
                    state.food = self.spawner.spawn(self.bounds);
                    self.config.food_reward
                } else {
                    self.config.step_penalty
                };

                state.steps += 1;

                StepResult {
                    reward,
                    terminated: false,
                    info: StepInfo {
                        ate_food,
                        collision: None,
                    },
                }
            }
        }
    }

    /// A fresh snake at the canonical start: grid center, heading Right
    fn starting_snake(&self) -> Snake {
        Snake::new(
            self.bounds.center(),
            Direction::Right,
            self.config.initial_snake_length,
        )
    }
}
