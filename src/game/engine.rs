use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use super::{
    config::GameConfig,
    direction::Velocity,
    events::GameObserver,
    state::{CollisionType, GameState, GameStatus, Position, Snake},
};

/// What a single tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The game was already over; nothing changed
    Ignored,
    /// The snake moved one cell
    Moved,
    /// The snake moved onto the food and grew
    AteFood,
    /// The snake collided and the game is over
    GameOver(CollisionType),
}

impl TickOutcome {
    pub fn is_terminal(&self) -> bool {
        matches!(self, TickOutcome::GameOver(_))
    }
}

/// The game engine that handles all game logic
pub struct GameEngine<R = StdRng> {
    config: GameConfig,
    rng: R,
}

impl GameEngine<StdRng> {
    /// Create a new game engine, seeded from the config when a seed is set.
    ///
    /// The config must pass [`GameConfig::validate`]; an empty grid leaves
    /// no cell to place food on.
    pub fn new(config: GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> GameEngine<R> {
    pub fn with_rng(config: GameConfig, rng: R) -> Self {
        Self { config, rng }
    }

    /// Build a fresh running game
    pub fn reset(&mut self) -> GameState {
        let snake = Snake::new(self.config.start_cell());
        let food = self.spawn_food();

        info!(
            tile_count = self.config.tile_count(),
            food_x = food.x,
            food_y = food.y,
            "game reset"
        );

        GameState::new(snake, food, self.config.tile_count()).with_velocity(Velocity::RIGHT)
    }

    /// Advance the game by one cell.
    ///
    /// Ticking a finished game is a no-op reported as [`TickOutcome::Ignored`].
    pub fn tick<O>(&mut self, state: &mut GameState, observer: &mut O) -> TickOutcome
    where
        O: GameObserver + ?Sized,
    {
        if state.status == GameStatus::GameOver {
            debug!("tick ignored after game over");
            return TickOutcome::Ignored;
        }

        let new_head = state.snake.head().stepped(state.velocity);
        state.snake.push_head(new_head);

        // A colliding head stays in the body; nothing else changes this tick.
        if let Some(collision_type) = self.check_collision(state) {
            state.status = GameStatus::GameOver;
            info!(score = state.score, collision = ?collision_type, "game over");
            observer.on_game_over(state.score);
            return TickOutcome::GameOver(collision_type);
        }

        let ate_food = new_head == state.food;
        if ate_food {
            state.score += 1;
            debug!(score = state.score, "food eaten");
            observer.on_food_eaten(state.score);
            state.food = self.spawn_food();
        } else {
            state.snake.drop_tail();
        }

        observer.on_state_changed(&state.snake, state.food);

        if ate_food {
            TickOutcome::AteFood
        } else {
            TickOutcome::Moved
        }
    }

    /// Check whether the freshly prepended head collides
    fn check_collision(&self, state: &GameState) -> Option<CollisionType> {
        if !state.is_in_bounds(state.snake.head()) {
            return Some(CollisionType::Wall);
        }

        if state.snake.bites_itself() {
            return Some(CollisionType::SelfCollision);
        }

        None
    }

    /// Pick a food cell with an independent uniform draw per axis.
    ///
    /// Cells under the snake are not excluded.
    pub fn spawn_food(&mut self) -> Position {
        let tiles = self.config.tile_count();
        let x = self.rng.gen_range(0..tiles);
        let y = self.rng.gen_range(0..tiles);
        Position::new(x, y)
    }
}
