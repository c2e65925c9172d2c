use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use super::board::Board;
use super::presenter::Presenter;

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, presenter: &Presenter) {
        let chunks = Layout::vertical([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Game area
            Constraint::Length(3), // Footer
        ])
        .split(frame.area());

        let stats = self.render_stats(presenter);
        frame.render_widget(stats, chunks[0]);

        // Board plus its border, centred
        let (board_width, board_height) = presenter.board.size();
        let [outer] = Layout::horizontal([Constraint::Length(board_width.saturating_add(2))])
            .flex(Flex::Center)
            .areas(chunks[1]);
        let [outer] = Layout::vertical([Constraint::Length(board_height.saturating_add(2))])
            .flex(Flex::Center)
            .areas(outer);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(Style::default().fg(Color::White))
            .title(" Snake ");
        let inner = block.inner(outer);
        frame.render_widget(block, outer);
        frame.render_widget(Board::new(&presenter.board), inner);

        if presenter.overlay_visible() {
            let popup = centered(chunks[1], 40, 9);
            frame.render_widget(Clear, popup);
            frame.render_widget(self.render_game_over(presenter), popup);
        }

        let controls = self.render_controls();
        frame.render_widget(controls, chunks[2]);
    }

    fn render_stats(&self, presenter: &Presenter) -> Paragraph<'_> {
        let metrics = &presenter.metrics;
        let mut spans = vec![
            Span::styled("Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                metrics.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Best: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.high_score.to_string(), Style::default().fg(Color::White)),
            Span::raw("    "),
            Span::styled("Time: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.format_time(), Style::default().fg(Color::White)),
        ];
        if presenter.music_playing() {
            spans.push(Span::raw("    "));
            spans.push(Span::styled("♪", Style::default().fg(Color::Magenta)));
        }

        Paragraph::new(Line::from(spans)).alignment(Alignment::Center)
    }

    fn render_game_over(&self, presenter: &Presenter) -> Paragraph<'_> {
        let final_score = presenter
            .metrics
            .final_score
            .unwrap_or(presenter.metrics.score);

        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "GAME OVER",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Final Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    final_score.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "R",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to play again or ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Q",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to quit", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn render_controls(&self) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("drag", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [area] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    area
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::Silent;
    use crate::game::{GameConfig, GameObserver, GameState, Position, Snake};
    use ratatui::{Terminal, backend::TestBackend};

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn presenter() -> Presenter {
        let state = GameState::new(Snake::new(Position::new(5, 5)), Position::new(2, 2), 10);
        Presenter::new(&state, Box::new(Silent), &GameConfig::new(200, 200))
    }

    #[test]
    fn test_running_frame_shows_score_and_board() {
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        let mut presenter = presenter();
        presenter.on_food_eaten(4);

        terminal
            .draw(|frame| Renderer::new().render(frame, &presenter))
            .unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("Score: 4"));
        assert!(text.contains("Snake"));
        assert!(text.contains("█"));
        assert!(!text.contains("GAME OVER"));
    }

    #[test]
    fn test_game_over_overlay() {
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        let mut presenter = presenter();
        presenter.on_game_over(7);

        terminal
            .draw(|frame| Renderer::new().render(frame, &presenter))
            .unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("GAME OVER"));
        assert!(text.contains("Final Score: 7"));
        assert!(text.contains("Best: 7"));
    }

    #[test]
    fn test_oversized_board_does_not_panic() {
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        let mut presenter = presenter();
        presenter.board.tile_count = i32::MAX;
        presenter.board.rows = i32::MAX;

        terminal
            .draw(|frame| Renderer::new().render(frame, &presenter))
            .unwrap();

        assert!(screen_text(&terminal).contains("Score: 0"));
    }

    #[test]
    fn test_centered_rect() {
        let area = centered(Rect::new(0, 0, 20, 10), 10, 4);
        assert_eq!(area, Rect::new(5, 3, 10, 4));
    }
}
