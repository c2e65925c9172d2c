use crossterm::event::KeyCode;
use tracing::trace;

use crate::game::{Direction, GameConfig, GameState, Velocity};

/// Map the four arrow keys to a direction
pub fn arrow_direction(code: KeyCode) -> Option<Direction> {
    match code {
        KeyCode::Up => Some(Direction::Up),
        KeyCode::Down => Some(Direction::Down),
        KeyCode::Left => Some(Direction::Left),
        KeyCode::Right => Some(Direction::Right),
        _ => None,
    }
}

/// Direction of a drag, or `None` when it is shorter than `min_distance` on both axes.
///
/// The longer axis wins; equal lengths count as horizontal.
pub fn swipe_direction(dx: i32, dy: i32, min_distance: i32) -> Option<Direction> {
    let (along_x, along_y) = (dx.unsigned_abs(), dy.unsigned_abs());
    if along_x.max(along_y) < min_distance.max(0).unsigned_abs() {
        return None;
    }

    let direction = if along_x >= along_y {
        if dx > 0 {
            Direction::Right
        } else {
            Direction::Left
        }
    } else if dy > 0 {
        Direction::Down
    } else {
        Direction::Up
    };
    Some(direction)
}

/// Turns directional intents into the live velocity of a running game.
///
/// There is no queue: the latest accepted request overwrites the velocity and
/// is what the next tick uses.
#[derive(Debug, Clone)]
pub struct InputController {
    min_swipe_distance: i32,
}

impl InputController {
    pub fn new(min_swipe_distance: i32) -> Self {
        Self { min_swipe_distance }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.min_swipe_distance)
    }

    /// Apply `requested` unless the game is over or it would reverse the snake.
    ///
    /// Returns whether the velocity was written.
    pub fn set_direction(&self, state: &mut GameState, requested: Velocity) -> bool {
        if !state.is_running() {
            return false;
        }

        if state.velocity.is_inverse_of(requested) {
            trace!(?requested, "reversal rejected");
            return false;
        }

        state.velocity = requested;
        true
    }

    /// Steer from a key press; keys other than the arrows are ignored
    pub fn from_key(&self, state: &mut GameState, code: KeyCode) -> bool {
        match arrow_direction(code) {
            Some(direction) => self.set_direction(state, direction.into()),
            None => false,
        }
    }

    /// Steer from a drag delta in surface pixels
    pub fn from_swipe(&self, state: &mut GameState, dx: i32, dy: i32) -> bool {
        match swipe_direction(dx, dy, self.min_swipe_distance) {
            Some(direction) => self.set_direction(state, direction.into()),
            None => false,
        }
    }
}

impl Default for InputController {
    fn default() -> Self {
        Self::from_config(&GameConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameStatus, Position, Snake};

    fn running_state(velocity: Velocity) -> GameState {
        GameState::new(Snake::new(Position::new(10, 10)), Position::new(3, 3), 20)
            .with_velocity(velocity)
    }

    #[test]
    fn test_reversal_is_ignored() {
        let controller = InputController::default();
        let mut state = running_state(Velocity::RIGHT);

        assert!(!controller.set_direction(&mut state, Velocity::LEFT));
        assert_eq!(state.velocity, Velocity::RIGHT);
    }

    #[test]
    fn test_turns_apply_immediately() {
        let controller = InputController::default();
        let mut state = running_state(Velocity::RIGHT);

        assert!(controller.set_direction(&mut state, Velocity::UP));
        assert_eq!(state.velocity, Velocity::UP);

        assert!(controller.set_direction(&mut state, Velocity::LEFT));
        assert_eq!(state.velocity, Velocity::LEFT);

        // Same heading is accepted as a no-change write.
        assert!(controller.set_direction(&mut state, Velocity::LEFT));
        assert_eq!(state.velocity, Velocity::LEFT);
    }

    #[test]
    fn test_input_ignored_after_game_over() {
        let controller = InputController::default();
        let mut state = running_state(Velocity::RIGHT);
        state.status = GameStatus::GameOver;

        assert!(!controller.set_direction(&mut state, Velocity::UP));
        assert!(!controller.from_key(&mut state, KeyCode::Down));
        assert!(!controller.from_swipe(&mut state, 0, 40));
        assert_eq!(state.velocity, Velocity::RIGHT);
    }

    #[test]
    fn test_arrow_keys() {
        let controller = InputController::default();
        let mut state = running_state(Velocity::RIGHT);

        assert!(controller.from_key(&mut state, KeyCode::Up));
        assert_eq!(state.velocity, Velocity::UP);
        assert!(controller.from_key(&mut state, KeyCode::Left));
        assert_eq!(state.velocity, Velocity::LEFT);
        assert!(!controller.from_key(&mut state, KeyCode::Right));
        assert_eq!(state.velocity, Velocity::LEFT);
        assert!(controller.from_key(&mut state, KeyCode::Down));
        assert_eq!(state.velocity, Velocity::DOWN);
    }

    #[test]
    fn test_unknown_key_is_noop() {
        let controller = InputController::default();
        let mut state = running_state(Velocity::RIGHT);

        assert!(!controller.from_key(&mut state, KeyCode::Char('w')));
        assert!(!controller.from_key(&mut state, KeyCode::Enter));
        assert_eq!(state.velocity, Velocity::RIGHT);
    }

    #[test]
    fn test_horizontal_swipe() {
        let controller = InputController::default();
        let mut state = running_state(Velocity::UP);

        assert!(controller.from_swipe(&mut state, 20, 5));
        assert_eq!(state.velocity, Velocity::RIGHT);

        // Reversal through a swipe is refused as well.
        assert!(!controller.from_swipe(&mut state, -20, 5));
        assert_eq!(state.velocity, Velocity::RIGHT);
    }

    #[test]
    fn test_vertical_swipe() {
        let controller = InputController::default();
        let mut state = running_state(Velocity::RIGHT);

        assert!(controller.from_swipe(&mut state, 3, -30));
        assert_eq!(state.velocity, Velocity::UP);
    }

    #[test]
    fn test_short_swipe_ignored() {
        let controller = InputController::default();
        let mut state = running_state(Velocity::RIGHT);

        assert!(!controller.from_swipe(&mut state, 0, 0));
        assert!(!controller.from_swipe(&mut state, 2, 14));
        assert!(!controller.from_swipe(&mut state, -14, -14));
        assert_eq!(state.velocity, Velocity::RIGHT);
    }

    #[test]
    fn test_swipe_threshold_and_ties() {
        assert_eq!(swipe_direction(0, 15, 15), Some(Direction::Down));
        assert_eq!(swipe_direction(14, 0, 15), None);
        assert_eq!(swipe_direction(20, 20, 15), Some(Direction::Right));
        assert_eq!(swipe_direction(-20, 20, 15), Some(Direction::Left));
        assert_eq!(swipe_direction(-20, -21, 15), Some(Direction::Up));
        assert_eq!(swipe_direction(i32::MIN, 0, 15), Some(Direction::Left));
        assert_eq!(swipe_direction(0, i32::MIN, 15), Some(Direction::Up));
    }

    #[test]
    fn test_custom_swipe_distance() {
        let controller = InputController::new(40);
        let mut state = running_state(Velocity::RIGHT);

        assert!(!controller.from_swipe(&mut state, 0, 39));
        assert!(controller.from_swipe(&mut state, 0, 40));
        assert_eq!(state.velocity, Velocity::DOWN);
    }
}
