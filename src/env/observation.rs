use crate::game::{Direction, GameState};

/// Number of elements in an observation vector
pub const OBSERVATION_DIM: usize = 8;

/// Flat numeric encoding of the game state:
/// `[head_x, head_y, food_x, food_y, is_up, is_down, is_left, is_right]`
///
/// Coordinates are raw grid cells, not normalized; consumers needing bounded
/// ranges scale by the grid dimensions. The last four elements are a one-hot
/// of the heading in the fixed order Up, Down, Left, Right.
pub type Observation = [f32; OBSERVATION_DIM];

/// Encode head, food, and heading into the fixed 8-element vector
pub fn encode_observation(state: &GameState) -> Observation {
    let head = state.snake.head();

    let mut obs = [0.0; OBSERVATION_DIM];
    obs[0] = head.x as f32;
    obs[1] = head.y as f32;
    obs[2] = state.food.x as f32;
    obs[3] = state.food.y as f32;

    let hot = match state.snake.direction() {
        Direction::Up => 4,
        Direction::Down => 5,
        Direction::Left => 6,
        Direction::Right => 7,
    };
    obs[hot] = 1.0;

    obs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameState, GridBounds, Position, Snake};

    fn state_with_direction(direction: Direction) -> GameState {
        GameState::new(
            Snake::new(Position::new(5, 7), direction, 1),
            Position::new(12, 3),
            GridBounds::new(20, 20).unwrap(),
        )
    }

    #[test]
    fn test_encodes_positions_and_heading() {
        let obs = encode_observation(&state_with_direction(Direction::Right));

        assert_eq!(
            obs,
            [5.0, 7.0, 12.0, 3.0, 0.0, 0.0, 0.0, 1.0]
        );
    }

    #[test]
    fn test_heading_one_hot_is_exclusive() {
        let directions = [
            (Direction::Up, 4),
            (Direction::Down, 5),
            (Direction::Left, 6),
            (Direction::Right, 7),
        ];

        for (direction, hot) in directions {
            let obs = encode_observation(&state_with_direction(direction));

            let sum: f32 = obs[4..].iter().sum();
            assert_eq!(sum, 1.0);
            assert_eq!(obs[hot], 1.0);
        }
    }

    #[test]
    fn test_observation_length() {
        let obs = encode_observation(&state_with_direction(Direction::Up));
        assert_eq!(obs.len(), OBSERVATION_DIM);
    }
}
