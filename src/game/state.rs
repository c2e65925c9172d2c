use serde::{Deserialize, Serialize};

use super::direction::Velocity;

/// Body index from which a new head can hit the snake.
///
/// Counted on the body after the new head has been prepended. Under orthogonal
/// unit steps the segments before it cannot coincide with the new head.
pub const SELF_COLLISION_OFFSET: usize = 4;

/// A position on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Position one step along `velocity`
    pub fn stepped(&self, velocity: Velocity) -> Self {
        Self {
            x: self.x + velocity.dx(),
            y: self.y + velocity.dy(),
        }
    }
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0. Never empty.
    body: Vec<Position>,
}

impl Snake {
    /// Create a one-segment snake
    pub fn new(head: Position) -> Self {
        Self { body: vec![head] }
    }

    /// Build a snake from explicit segments, head first. `None` when empty.
    pub fn from_segments(body: Vec<Position>) -> Option<Self> {
        if body.is_empty() {
            None
        } else {
            Some(Self { body })
        }
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.body[0]
    }

    pub fn segments(&self) -> &[Position] {
        &self.body
    }

    /// Whether the head sits on a segment it can reach.
    ///
    /// Only segments from `SELF_COLLISION_OFFSET` on count. The tail still
    /// counts while it has not been dropped.
    pub fn bites_itself(&self) -> bool {
        let head = self.head();
        self.body
            .iter()
            .skip(SELF_COLLISION_OFFSET)
            .any(|segment| *segment == head)
    }

    /// Prepend a new head; the tail stays until [`Snake::drop_tail`]
    pub fn push_head(&mut self, new_head: Position) {
        self.body.insert(0, new_head);
    }

    /// Release the last segment, never the head
    pub fn drop_tail(&mut self) {
        if self.body.len() > 1 {
            self.body.pop();
        }
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Always false; a snake keeps at least its head
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Whether the current episode is still being played
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameStatus {
    #[default]
    Running,
    GameOver,
}

/// Type of collision that occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Snake hit a wall
    Wall,
    /// Snake hit itself
    SelfCollision,
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub food: Position,
    pub velocity: Velocity,
    pub score: u32,
    pub status: GameStatus,
    /// Tiles per axis; the grid is square
    pub tile_count: i32,
}

impl GameState {
    /// Create a running state heading right with a zero score
    pub fn new(snake: Snake, food: Position, tile_count: i32) -> Self {
        Self {
            snake,
            food,
            velocity: Velocity::RIGHT,
            score: 0,
            status: GameStatus::Running,
            tile_count,
        }
    }

    pub fn with_velocity(mut self, velocity: Velocity) -> Self {
        self.velocity = velocity;
        self
    }

    /// Check if a position is within the grid bounds
    pub fn is_in_bounds(&self, pos: Position) -> bool {
        (0..self.tile_count).contains(&pos.x) && (0..self.tile_count).contains(&pos.y)
    }

    pub fn is_running(&self) -> bool {
        self.status == GameStatus::Running
    }
}
