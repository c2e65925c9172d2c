//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! Everything the outside world needs to know is reported through [`GameObserver`].

pub mod config;
pub mod direction;
pub mod engine;
pub mod events;
pub mod state;

// Re-export commonly used types
pub use config::{GameConfig, GameOverBehavior};
pub use direction::{Direction, Velocity};
pub use engine::{GameEngine, TickOutcome};
pub use events::{EventLog, GameEvent, GameObserver};
pub use state::{CollisionType, GameState, GameStatus, Position, Snake};
