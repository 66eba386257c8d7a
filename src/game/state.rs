use std::collections::{HashSet, VecDeque};

use super::action::Direction;
use super::grid::GridBounds;

/// A position on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move position in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }
}

/// Outcome of advancing the snake by one cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The head moved onto a free cell
    Advanced,
    /// The head would have left the grid; the body was not moved
    WallCollision,
    /// The head re-entered a body segment at index >= 2
    SelfCollision,
}

/// Kind of collision resolved during a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionKind {
    /// Snake hit a wall
    Wall,
    /// Snake hit itself
    SelfCollision,
}

/// The snake in the game
///
/// Body segments are kept head-first alongside an occupancy set mirroring
/// them, so collision lookups don't rescan the body.
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    body: VecDeque<Position>,
    occupied: HashSet<Position>,
    direction: Direction,
    /// Length the body settles at once pending growth is realized
    target_len: usize,
}

impl Snake {
    /// Create a new snake with given starting position and direction.
    /// Segments beyond the head extend away from the heading.
    pub fn new(head: Position, direction: Direction, length: usize) -> Self {
        let mut body = VecDeque::with_capacity(length);
        body.push_back(head);

        let (dx, dy) = direction.delta();
        for i in 1..length {
            let prev = body[i - 1];
            body.push_back(prev.moved_by(-dx, -dy));
        }

        let occupied = body.iter().copied().collect();

        Self {
            body,
            occupied,
            direction,
            target_len: length,
        }
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Get the tail position (last segment)
    pub fn tail(&self) -> Position {
        *self.body.back().unwrap()
    }

    /// Current heading
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Ordered body segments, head first
    pub fn segments(&self) -> impl Iterator<Item = Position> + '_ {
        self.body.iter().copied()
    }

    /// Check if a cell is covered by any body segment
    pub fn occupies(&self, pos: Position) -> bool {
        self.occupied.contains(&pos)
    }

    /// Adopt a requested heading unless it reverses the current one
    pub fn turn(&mut self, requested: Direction) {
        if !self.direction.is_opposite(requested) {
            self.direction = requested;
        }
    }

    /// Grow by one cell: the tail is retained on the next advance
    pub fn grow(&mut self) {
        self.target_len += 1;
    }

    /// Length the body is growing toward
    pub fn target_len(&self) -> usize {
        self.target_len
    }

    /// Move the head one cell along the current heading.
    ///
    /// The body is only mutated on `Advanced`; both collision outcomes leave
    /// it exactly as it was before the attempt.
    pub fn advance(&mut self, bounds: GridBounds) -> MoveOutcome {
        let new_head = self.head().moved_in_direction(self.direction);

        if !bounds.contains(new_head) {
            return MoveOutcome::WallCollision;
        }
        if self.hits_body(new_head) {
            return MoveOutcome::SelfCollision;
        }

        self.body.push_front(new_head);
        self.occupied.insert(new_head);

        if self.body.len() > self.target_len {
            if let Some(tail) = self.body.pop_back() {
                self.occupied.remove(&tail);
            }
        }

        MoveOutcome::Advanced
    }

    /// Collision test against segments at index >= 2 of the pre-move body.
    /// The head cell itself and the segment directly behind it are excluded:
    /// a single move can never legitimately land on either while reversals
    /// are rejected.
    fn hits_body(&self, pos: Position) -> bool {
        self.occupied.contains(&pos) && !self.body.iter().take(2).any(|&p| p == pos)
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check if the snake is empty (should never happen in practice)
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub food: Position,
    pub bounds: GridBounds,
    pub score: u32,
    pub steps: u32,
    pub is_alive: bool,
}

impl GameState {
    /// Create a new game state
    pub fn new(snake: Snake, food: Position, bounds: GridBounds) -> Self {
        Self {
            snake,
            food,
            bounds,
            score: 0,
            steps: 0,
            is_alive: true,
        }
    }

    /// Check if a position is within the grid bounds
    pub fn is_in_bounds(&self, pos: Position) -> bool {
        self.bounds.contains(pos)
    }

    /// Check if a position is occupied by the snake
    pub fn is_occupied_by_snake(&self, pos: Position) -> bool {
        self.snake.occupies(pos)
    }
}
