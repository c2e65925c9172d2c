//! Tile Snake - a grid snake game with a tick-driven core
//!
//! This library provides:
//! - Core game logic with no I/O (game module)
//! - Keyboard and swipe steering (input module)
//! - The fixed-period tick source (scheduler module)
//! - Terminal rendering, scoreboard and sound cues (render, metrics, audio modules)
//! - The interactive terminal front end (modes module)

pub mod audio;
pub mod game;
pub mod input;
pub mod logging;
pub mod metrics;
pub mod modes;
pub mod render;
pub mod scheduler;
