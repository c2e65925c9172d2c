use tracing::warn;

use crate::audio::{AudioSink, Cue};
use crate::game::{GameConfig, GameObserver, GameOverBehavior, GameState, Position, Snake};
use crate::metrics::GameMetrics;

use super::board::BoardView;

/// Every collaborator the engine reports to, behind one observer.
///
/// Holds what the renderer needs (board, scoreboard, overlay) and drives the
/// audio sink.
pub struct Presenter {
    pub board: BoardView,
    pub metrics: GameMetrics,
    audio: Box<dyn AudioSink>,
    game_over: GameOverBehavior,
    overlay_visible: bool,
    restart_pending: bool,
    needs_redraw: bool,
}

impl Presenter {
    pub fn new(state: &GameState, audio: Box<dyn AudioSink>, config: &GameConfig) -> Self {
        let mut presenter = Self {
            board: BoardView::from_state(state).with_rows(config.background_rows()),
            metrics: GameMetrics::new(),
            audio,
            game_over: config.game_over,
            overlay_visible: false,
            restart_pending: false,
            needs_redraw: true,
        };
        presenter.on_reset(state);
        presenter
    }

    /// A new game began: hide the overlay, zero the scoreboard, restart music
    pub fn on_reset(&mut self, state: &GameState) {
        self.board.reset(state);
        self.metrics.on_game_start();
        self.overlay_visible = false;
        self.restart_pending = false;
        self.cue_stop(Cue::Background);
        self.cue_play(Cue::Background);
        self.needs_redraw = true;
    }

    pub fn overlay_visible(&self) -> bool {
        self.overlay_visible
    }

    pub fn music_playing(&self) -> bool {
        self.audio.is_playing(Cue::Background)
    }

    /// True once after a game over when the restart behaviour is selected
    pub fn take_restart_request(&mut self) -> bool {
        std::mem::take(&mut self.restart_pending)
    }

    /// True once after anything visible changed
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    pub fn request_redraw(&mut self) {
        self.needs_redraw = true;
    }

    fn cue_play(&mut self, cue: Cue) {
        if let Err(err) = self.audio.play(cue) {
            warn!(?cue, "audio cue failed: {err:#}");
        }
    }

    fn cue_stop(&mut self, cue: Cue) {
        if let Err(err) = self.audio.stop(cue) {
            warn!(?cue, "audio stop failed: {err:#}");
        }
    }
}

impl GameObserver for Presenter {
    fn on_state_changed(&mut self, snake: &Snake, food: Position) {
        self.board.update(snake, food);
        self.needs_redraw = true;
    }

    fn on_food_eaten(&mut self, score: u32) {
        self.metrics.on_food_eaten(score);
        self.cue_play(Cue::Eat);
        self.needs_redraw = true;
    }

    fn on_game_over(&mut self, score: u32) {
        self.cue_stop(Cue::Background);
        self.cue_play(Cue::GameOver);
        self.metrics.on_game_over(score);

        match self.game_over {
            GameOverBehavior::Overlay => self.overlay_visible = true,
            GameOverBehavior::Restart => self.restart_pending = true,
        }
        self.needs_redraw = true;
    }
}
