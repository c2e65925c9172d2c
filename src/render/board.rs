use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

use crate::game::{GameState, Position, Snake};

/// Terminal columns per tile; the second column is the inset gap
pub const TILE_COLUMNS: u16 = 2;

const BACKGROUND: Color = Color::Rgb(0xee, 0xee, 0xee);
const FOOD: Color = Color::Red;
const SNAKE: Color = Color::Green;

/// Last board the engine reported
#[derive(Debug, Clone, PartialEq)]
pub struct BoardView {
    pub snake: Vec<Position>,
    pub food: Position,
    pub tile_count: i32,
    /// Rows the background covers; the surface may be taller or shorter than the grid
    pub rows: i32,
}

impl BoardView {
    /// Snapshot of `state` on a square surface
    pub fn from_state(state: &GameState) -> Self {
        Self {
            snake: state.snake.segments().to_vec(),
            food: state.food,
            tile_count: state.tile_count,
            rows: state.tile_count,
        }
    }

    pub fn with_rows(mut self, rows: i32) -> Self {
        self.rows = rows;
        self
    }

    /// Take a new game's board, keeping the surface height
    pub fn reset(&mut self, state: &GameState) {
        self.update(&state.snake, state.food);
        self.tile_count = state.tile_count;
    }

    pub fn update(&mut self, snake: &Snake, food: Position) {
        self.snake.clear();
        self.snake.extend_from_slice(snake.segments());
        self.food = food;
    }

    /// Size of the board in terminal cells
    pub fn size(&self) -> (u16, u16) {
        let columns = u16::try_from(self.tile_count.max(0)).unwrap_or(u16::MAX);
        let rows = u16::try_from(self.rows.max(0)).unwrap_or(u16::MAX);
        (columns.saturating_mul(TILE_COLUMNS), rows)
    }
}

/// Draws the background over the whole surface, then food, then each snake segment
pub struct Board<'a> {
    view: &'a BoardView,
}

impl<'a> Board<'a> {
    pub fn new(view: &'a BoardView) -> Self {
        Self { view }
    }
}

fn fill_tile(area: Rect, buf: &mut Buffer, pos: Position, color: Color) {
    if pos.x < 0 || pos.y < 0 {
        return;
    }
    let x = area.x.saturating_add((pos.x as u16).saturating_mul(TILE_COLUMNS));
    let y = area.y.saturating_add(pos.y as u16);
    if x >= area.right() || y >= area.bottom() {
        return;
    }
    if let Some(cell) = buf.cell_mut((x, y)) {
        cell.set_symbol("█").set_style(Style::default().fg(color).bg(BACKGROUND));
    }
}

impl Widget for Board<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (width, height) = self.view.size();
        let area = Rect {
            width: width.min(area.width),
            height: height.min(area.height),
            ..area
        };

        buf.set_style(area, Style::default().bg(BACKGROUND));
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_symbol(" ");
                }
            }
        }

        fill_tile(area, buf, self.view.food, FOOD);
        for segment in &self.view.snake {
            fill_tile(area, buf, *segment, SNAKE);
        }
    }
}
