use std::path::Path;
use std::time::Duration;

use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};

use super::state::Position;

/// Most tiles the terminal board can lay out on either axis.
///
/// A tile is two columns wide and the board carries a one-cell border.
pub const MAX_TILE_COUNT: i32 = (u16::MAX as i32 - 2) / 2;

/// What the front end does once the snake dies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameOverBehavior {
    /// Show the final score and wait for the restart key
    #[default]
    Overlay,
    /// Start a fresh game straight away
    Restart,
}

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Width of the drawing surface in pixels
    pub canvas_width: u32,
    /// Height of the drawing surface in pixels; only the background spans it
    pub canvas_height: u32,
    /// Edge of one tile in pixels
    pub grid_size: u32,
    /// Milliseconds between two ticks
    pub tick_period_ms: u64,
    /// Shortest drag, in pixels, that counts as a swipe
    pub min_swipe_distance: i32,
    /// Starting cell; the grid centre when unset
    pub start: Option<Position>,
    pub game_over: GameOverBehavior,
    /// Fixed seed for food placement
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            canvas_width: 400,
            canvas_height: 400,
            grid_size: 20,
            tick_period_ms: 200,
            min_swipe_distance: 15,
            start: None,
            game_over: GameOverBehavior::Overlay,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom canvas size
    pub fn new(canvas_width: u32, canvas_height: u32) -> Self {
        Self {
            canvas_width,
            canvas_height,
            ..Default::default()
        }
    }

    /// Read a JSON config file; missing fields keep their defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: GameConfig = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    /// Tiles per axis, fixed for the lifetime of the process
    pub fn tile_count(&self) -> i32 {
        tiles_across(self.canvas_width, self.grid_size)
    }

    /// Rows of tiles the background covers
    pub fn background_rows(&self) -> i32 {
        tiles_across(self.canvas_height, self.grid_size)
    }

    /// Cell the snake starts from after every reset
    pub fn start_cell(&self) -> Position {
        self.start.unwrap_or_else(|| {
            let centre = self.tile_count() / 2;
            Position::new(centre, centre)
        })
    }

    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_period_ms)
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(self.grid_size > 0, "grid_size must be positive");
        ensure!(
            self.canvas_width >= self.grid_size,
            "canvas_width ({}) must fit at least one {}px tile",
            self.canvas_width,
            self.grid_size
        );
        ensure!(
            self.canvas_height >= self.grid_size,
            "canvas_height ({}) must fit at least one {}px tile",
            self.canvas_height,
            self.grid_size
        );
        ensure!(
            self.tile_count() <= MAX_TILE_COUNT && self.background_rows() <= MAX_TILE_COUNT,
            "a {}x{} canvas with {}px tiles exceeds {} tiles per axis",
            self.canvas_width,
            self.canvas_height,
            self.grid_size,
            MAX_TILE_COUNT
        );
        ensure!(self.tick_period_ms > 0, "tick_period_ms must be positive");
        ensure!(
            self.min_swipe_distance >= 0,
            "min_swipe_distance must not be negative"
        );

        let start = self.start_cell();
        let tiles = 0..self.tile_count();
        ensure!(
            tiles.contains(&start.x) && tiles.contains(&start.y),
            "start cell ({}, {}) lies outside the {}x{} grid",
            start.x,
            start.y,
            self.tile_count(),
            self.tile_count()
        );
        Ok(())
    }
}

fn tiles_across(pixels: u32, grid_size: u32) -> i32 {
    i32::try_from(pixels / grid_size.max(1)).unwrap_or(i32::MAX)
}
