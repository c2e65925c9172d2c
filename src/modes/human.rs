use anyhow::{Context, Result};
use crossterm::{
    event::{
        DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyEventKind, MouseButton,
        MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::time::interval;
use tracing::info;

use crate::audio::AudioSink;
use crate::game::{GameConfig, GameEngine, GameState};
use crate::input::swipe::cells_to_pixels;
use crate::input::{InputController, InputHandler, KeyAction, SwipeTracker};
use crate::render::{Presenter, Renderer};
use crate::scheduler::TickScheduler;

/// Plays the game in the terminal with keyboard and mouse-drag input
pub struct HumanMode {
    engine: GameEngine,
    state: GameState,
    presenter: Presenter,
    renderer: Renderer,
    input_handler: InputHandler,
    controller: InputController,
    swipe: SwipeTracker,
    scheduler: TickScheduler,
    grid_size: u32,
    should_quit: bool,
}

impl HumanMode {
    /// Set up a game from `config`, rejecting it when it does not validate
    pub fn new(config: GameConfig, audio: Box<dyn AudioSink>) -> Result<Self> {
        config.validate().context("Invalid game configuration")?;

        let mut engine = GameEngine::new(config.clone());
        let state = engine.reset();
        let presenter = Presenter::new(&state, audio, &config);

        Ok(Self {
            engine,
            state,
            presenter,
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            controller: InputController::from_config(&config),
            swipe: SwipeTracker::new(),
            scheduler: TickScheduler::new(config.tick_period()),
            grid_size: config.grid_size,
            should_quit: false,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen, EnableMouseCapture)
            .context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        // Keeps the elapsed-time display moving between ticks
        let mut clock = interval(Duration::from_secs(1));

        self.scheduler.start();

        loop {
            tokio::select! {
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_event(event),
                        Some(Err(err)) => {
                            return Err(anyhow::Error::new(err).context("Failed to read terminal event"));
                        }
                        None => self.should_quit = true,
                    }
                }

                _ = self.scheduler.tick() => {
                    self.update_game();
                }

                _ = clock.tick() => {
                    self.presenter.metrics.update();
                    self.presenter.request_redraw();
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.presenter.take_restart_request() {
                self.request_reset();
            }

            if self.presenter.take_redraw() {
                terminal
                    .draw(|frame| self.renderer.render(frame, &self.presenter))
                    .context("Failed to draw frame")?;
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => {
                // Only process key press events, not release
                if key.kind != KeyEventKind::Press {
                    return;
                }

                match self.input_handler.handle_key_event(key) {
                    KeyAction::Steer(_) => {
                        self.controller.from_key(&mut self.state, key.code);
                    }
                    KeyAction::Restart => {
                        // The restart affordance only exists on the game over screen
                        if !self.state.is_running() {
                            self.request_reset();
                        }
                    }
                    KeyAction::Quit => {
                        self.should_quit = true;
                    }
                    KeyAction::None => {}
                }
            }
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::Resize(_, _) => self.presenter.request_redraw(),
            Event::FocusLost => self.swipe.cancel(),
            _ => {}
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        let (column, row) = (i32::from(mouse.column), i32::from(mouse.row));

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => self.swipe.begin(column, row),
            MouseEventKind::Up(MouseButton::Left) => {
                if let Some((columns, rows)) = self.swipe.end(column, row) {
                    let (dx, dy) = cells_to_pixels(columns, rows, self.grid_size);
                    self.controller.from_swipe(&mut self.state, dx, dy);
                }
            }
            _ => {}
        }
    }

    fn update_game(&mut self) {
        let outcome = self.engine.tick(&mut self.state, &mut self.presenter);

        if outcome.is_terminal() {
            self.scheduler.stop();
        }
    }

    fn request_reset(&mut self) {
        info!("restart requested");
        self.state = self.engine.reset();
        self.presenter.on_reset(&self.state);
        self.scheduler.start();
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::Silent;
    use crate::game::{GameOverBehavior, GameStatus, Position, Snake, Velocity};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn mode(config: GameConfig) -> HumanMode {
        HumanMode::new(config, Box::new(Silent)).unwrap()
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    /// Put the snake one step from the right wall
    fn doomed(mode: &mut HumanMode) {
        mode.state = GameState::new(Snake::new(Position::new(19, 3)), Position::new(0, 0), 20);
    }

    #[test]
    fn test_game_initialization() {
        let mode = mode(GameConfig::default());
        assert!(mode.state.is_running());
        assert_eq!(mode.state.score, 0);
        assert_eq!(mode.state.snake.head(), Position::new(10, 10));
        assert!(!mode.scheduler.is_running());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let err = HumanMode::new(GameConfig::new(10, 10), Box::new(Silent))
            .err()
            .unwrap();
        assert!(err.to_string().contains("Invalid game configuration"));
    }

    #[test]
    fn test_arrow_key_steers() {
        let mut mode = mode(GameConfig::default());

        mode.handle_event(key(KeyCode::Up));
        assert_eq!(mode.state.velocity, Velocity::UP);

        mode.handle_event(key(KeyCode::Down));
        assert_eq!(mode.state.velocity, Velocity::UP);
    }

    #[test]
    fn test_mouse_drag_steers() {
        let mut mode = mode(GameConfig::default());

        // Two rows down is 40px on a 20px grid.
        mode.handle_event(mouse(MouseEventKind::Down(MouseButton::Left), 10, 5));
        mode.handle_event(mouse(MouseEventKind::Drag(MouseButton::Left), 10, 6));
        mode.handle_event(mouse(MouseEventKind::Up(MouseButton::Left), 11, 7));
        assert_eq!(mode.state.velocity, Velocity::DOWN);

        // One column is only 10px: below the swipe threshold.
        mode.handle_event(mouse(MouseEventKind::Down(MouseButton::Left), 10, 5));
        mode.handle_event(mouse(MouseEventKind::Up(MouseButton::Left), 11, 5));
        assert_eq!(mode.state.velocity, Velocity::DOWN);
    }

    #[test]
    fn test_quit_key() {
        let mut mode = mode(GameConfig::default());
        mode.handle_event(key(KeyCode::Char('q')));
        assert!(mode.should_quit);
    }

    #[tokio::test]
    async fn test_game_over_stops_scheduler() {
        let mut mode = mode(GameConfig::default());
        mode.scheduler.start();
        doomed(&mut mode);

        mode.update_game();

        assert_eq!(mode.state.status, GameStatus::GameOver);
        assert!(!mode.scheduler.is_running());
        assert!(mode.presenter.overlay_visible());

        // Steering is ignored until the game restarts.
        mode.handle_event(key(KeyCode::Up));
        assert_eq!(mode.state.velocity, Velocity::RIGHT);
    }

    #[tokio::test]
    async fn test_restart_only_after_game_over() {
        let mut mode = mode(GameConfig::default());
        mode.scheduler.start();
        mode.state.score = 3;

        mode.handle_event(key(KeyCode::Char('r')));
        assert_eq!(mode.state.score, 3);

        doomed(&mut mode);
        mode.update_game();
        mode.handle_event(key(KeyCode::Char('r')));

        assert!(mode.state.is_running());
        assert_eq!(mode.state.score, 0);
        assert!(mode.scheduler.is_running());
        assert!(!mode.presenter.overlay_visible());
    }

    #[tokio::test]
    async fn test_restart_behavior_requests_new_game() {
        let mut config = GameConfig::default();
        config.game_over = GameOverBehavior::Restart;
        let mut mode = mode(config);
        mode.scheduler.start();
        doomed(&mut mode);

        mode.update_game();

        assert!(!mode.presenter.overlay_visible());
        assert!(mode.presenter.take_restart_request());
    }
}
