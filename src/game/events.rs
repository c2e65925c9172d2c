//! Outbound events raised by the engine.
//!
//! Rendering, audio and the scoreboard hang off these hooks, so the engine
//! itself never touches a terminal or a sound device.

use super::state::{Position, Snake};

/// Receiver for engine events. Every hook defaults to doing nothing.
pub trait GameObserver {
    /// The snake moved; redraw the board
    fn on_state_changed(&mut self, _snake: &Snake, _food: Position) {}

    /// Food was eaten; `score` is the new total
    fn on_food_eaten(&mut self, _score: u32) {}

    /// The snake collided; `score` is final
    fn on_game_over(&mut self, _score: u32) {}
}

impl GameObserver for () {}

impl<T: GameObserver + ?Sized> GameObserver for &mut T {
    fn on_state_changed(&mut self, snake: &Snake, food: Position) {
        (**self).on_state_changed(snake, food)
    }

    fn on_food_eaten(&mut self, score: u32) {
        (**self).on_food_eaten(score)
    }

    fn on_game_over(&mut self, score: u32) {
        (**self).on_game_over(score)
    }
}

/// One recorded engine event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    StateChanged { snake: Vec<Position>, food: Position },
    FoodEaten { score: u32 },
    GameOver { score: u32 },
}

/// Observer that keeps every event in order
#[derive(Debug, Default)]
pub struct EventLog {
    pub events: Vec<GameEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl GameObserver for EventLog {
    fn on_state_changed(&mut self, snake: &Snake, food: Position) {
        self.events.push(GameEvent::StateChanged {
            snake: snake.segments().to_vec(),
            food,
        });
    }

    fn on_food_eaten(&mut self, score: u32) {
        self.events.push(GameEvent::FoodEaten { score });
    }

    fn on_game_over(&mut self, score: u32) {
        self.events.push(GameEvent::GameOver { score });
    }
}
