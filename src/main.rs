use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use tile_snake::audio::{AudioSink, Silent, TerminalBell};
use tile_snake::game::{GameConfig, GameOverBehavior, Position};
use tile_snake::logging;
use tile_snake::modes::HumanMode;

#[derive(Parser)]
#[command(name = "tile_snake")]
#[command(version, about = "Grid snake game for the terminal")]
struct Cli {
    /// JSON config file; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Surface width in pixels
    #[arg(long)]
    canvas_width: Option<u32>,

    /// Surface height in pixels; defaults to the width when only that is given
    #[arg(long)]
    canvas_height: Option<u32>,

    /// Tile edge in pixels
    #[arg(long)]
    grid_size: Option<u32>,

    /// Milliseconds between ticks
    #[arg(long)]
    tick_ms: Option<u64>,

    /// What happens when the snake dies
    #[arg(long)]
    game_over: Option<GameOverArg>,

    /// Starting cell as X,Y
    #[arg(long, value_parser = parse_cell)]
    start: Option<Position>,

    /// Fixed seed for food placement
    #[arg(long)]
    seed: Option<u64>,

    /// Disable the terminal bell
    #[arg(long)]
    mute: bool,

    /// Write tracing output to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[derive(Clone, ValueEnum)]
enum GameOverArg {
    /// Show the final score and wait for R
    Overlay,
    /// Start the next game straight away
    Restart,
}

impl From<GameOverArg> for GameOverBehavior {
    fn from(arg: GameOverArg) -> Self {
        match arg {
            GameOverArg::Overlay => GameOverBehavior::Overlay,
            GameOverArg::Restart => GameOverBehavior::Restart,
        }
    }
}

fn parse_cell(raw: &str) -> Result<Position, String> {
    let (x, y) = raw
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got {raw:?}"))?;
    let x = x.trim().parse().map_err(|err| format!("bad X in {raw:?}: {err}"))?;
    let y = y.trim().parse().map_err(|err| format!("bad Y in {raw:?}: {err}"))?;
    Ok(Position::new(x, y))
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::from_file(path)?,
            None => GameConfig::default(),
        };

        if let Some(width) = self.canvas_width {
            config.canvas_width = width;
            config.canvas_height = self.canvas_height.unwrap_or(width);
        } else if let Some(height) = self.canvas_height {
            config.canvas_height = height;
        }
        if let Some(grid_size) = self.grid_size {
            config.grid_size = grid_size;
        }
        if let Some(tick_ms) = self.tick_ms {
            config.tick_period_ms = tick_ms;
        }
        if let Some(game_over) = self.game_over.clone() {
            config.game_over = game_over.into();
        }
        if self.start.is_some() {
            config.start = self.start;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }

        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.log_file.as_deref())?;

    // Create game configuration from file and CLI arguments
    let config = cli.game_config()?;


    let audio: Box<dyn AudioSink> = if cli.mute {
        Box::new(Silent)
    } else {
        Box::new(TerminalBell::new())
    };

    let mut human_mode = HumanMode::new(config, audio)?;
    human_mode.run().await?;

    Ok(())
}
