//! Sound cues.
//!
//! A terminal has one sound: the bell. One-shot cues ring it, and the looping
//! background cue is tracked as state so the front end can show it.

use std::io::{self, Stderr, Write};

use anyhow::{Context, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cue {
    /// Looping music while a game runs
    Background,
    /// Food eaten
    Eat,
    GameOver,
}

impl Cue {
    pub fn is_looping(&self) -> bool {
        matches!(self, Cue::Background)
    }
}

/// Something that can play cues. `play` always starts from the beginning.
pub trait AudioSink {
    fn play(&mut self, cue: Cue) -> Result<()>;

    fn stop(&mut self, cue: Cue) -> Result<()>;

    /// Only looping cues report as playing
    fn is_playing(&self, _cue: Cue) -> bool {
        false
    }
}

/// Rings the terminal bell for one-shot cues
pub struct TerminalBell<W: Write = Stderr> {
    out: W,
    background: bool,
}

impl TerminalBell<Stderr> {
    pub fn new() -> Self {
        Self::with_writer(io::stderr())
    }
}

impl Default for TerminalBell<Stderr> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalBell<W> {
    pub fn with_writer(out: W) -> Self {
        Self {
            out,
            background: false,
        }
    }
}

impl<W: Write> AudioSink for TerminalBell<W> {
    fn play(&mut self, cue: Cue) -> Result<()> {
        if cue.is_looping() {
            self.background = true;
            return Ok(());
        }

        self.out
            .write_all(b"\x07")
            .and_then(|_| self.out.flush())
            .with_context(|| format!("Failed to ring bell for {cue:?}"))
    }

    fn stop(&mut self, cue: Cue) -> Result<()> {
        if cue.is_looping() {
            self.background = false;
        }
        Ok(())
    }

    fn is_playing(&self, cue: Cue) -> bool {
        cue.is_looping() && self.background
    }
}

/// Plays nothing
#[derive(Debug, Default)]
pub struct Silent;

impl AudioSink for Silent {
    fn play(&mut self, _cue: Cue) -> Result<()> {
        Ok(())
    }

    fn stop(&mut self, _cue: Cue) -> Result<()> {
        Ok(())
    }
}
