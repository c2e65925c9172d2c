use std::time::{Duration, Instant};

use crate::game::GameObserver;

/// Scoreboard figures for the current process; nothing is persisted
pub struct GameMetrics {
    pub start_time: Instant,
    pub elapsed_time: Duration,
    /// Score shown while playing
    pub score: u32,
    pub high_score: u32,
    pub games_played: u32,
    /// Set once the current game has ended
    pub final_score: Option<u32>,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            elapsed_time: Duration::ZERO,
            score: 0,
            high_score: 0,
            games_played: 0,
            final_score: None,
        }
    }

    /// Refresh the clock, frozen once the game is over
    pub fn update(&mut self) {
        if self.final_score.is_none() {
            self.elapsed_time = self.start_time.elapsed();
        }
    }

    pub fn on_game_start(&mut self) {
        self.start_time = Instant::now();
        self.elapsed_time = Duration::ZERO;
        self.score = 0;
        self.final_score = None;
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl GameObserver for GameMetrics {
    fn on_food_eaten(&mut self, score: u32) {
        self.score = score;
    }

    fn on_game_over(&mut self, score: u32) {
        self.update();
        self.score = score;
        self.final_score = Some(score);
        self.games_played += 1;
        if score > self.high_score {
            self.high_score = score;
        }
    }
}
