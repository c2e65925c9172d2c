/// Direction the snake can move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the delta (dx, dy) for moving in this direction
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// Per-tick displacement of the snake head.
///
/// Exactly one axis is non-zero and that axis is +1 or -1, so the only way to
/// build one is from a [`Direction`] or through [`Velocity::new`], which
/// rejects anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Velocity {
    dx: i32,
    dy: i32,
}

impl Velocity {
    pub const UP: Velocity = Velocity { dx: 0, dy: -1 };
    pub const DOWN: Velocity = Velocity { dx: 0, dy: 1 };
    pub const LEFT: Velocity = Velocity { dx: -1, dy: 0 };
    pub const RIGHT: Velocity = Velocity { dx: 1, dy: 0 };

    /// Build a velocity from a raw pair, `None` unless it is a unit step on one axis
    pub fn new(dx: i32, dy: i32) -> Option<Self> {
        match (dx, dy) {
            (0, 1) | (0, -1) | (1, 0) | (-1, 0) => Some(Self { dx, dy }),
            _ => None,
        }
    }

    pub fn dx(&self) -> i32 {
        self.dx
    }

    pub fn dy(&self) -> i32 {
        self.dy
    }

    pub fn inverse(&self) -> Self {
        Self {
            dx: -self.dx,
            dy: -self.dy,
        }
    }

    /// True when `other` points the exact opposite way
    pub fn is_inverse_of(&self, other: Velocity) -> bool {
        self.inverse() == other
    }

    pub fn direction(&self) -> Direction {
        match (self.dx, self.dy) {
            (0, -1) => Direction::Up,
            (0, 1) => Direction::Down,
            (-1, 0) => Direction::Left,
            _ => Direction::Right,
        }
    }
}

impl Default for Velocity {
    fn default() -> Self {
        Velocity::RIGHT
    }
}

impl From<Direction> for Velocity {
    fn from(direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self { dx, dy }
    }
}
