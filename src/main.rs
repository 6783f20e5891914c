//! Reversi GUI
//!
//! Play Reversi against a random-move opponent.

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, ValueEnum};
use reversi::ui::ReversiApp;
use reversi::{AppConfig, Stone};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Side {
    Black,
    White,
}

impl From<Side> for Stone {
    fn from(side: Side) -> Self {
        match side {
            Side::Black => Stone::Black,
            Side::White => Stone::White,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "reversi", about = "Play Reversi against a random-move AI")]
struct Cli {
    /// Path to config TOML file
    #[arg(long, default_value = "reversi.toml")]
    config: PathBuf,

    /// Color you play
    #[arg(long, value_enum)]
    human: Option<Side>,

    /// Minimum AI think time in milliseconds
    #[arg(long)]
    think_ms: Option<u64>,

    /// Seed for the AI's random choices
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    if let Some(side) = cli.human {
        config.human_color = side.into();
    }
    if let Some(ms) = cli.think_ms {
        config.think_time_ms = ms;
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    config.validate()?;

    log::info!(
        "human plays {}, AI think time {} ms",
        config.human_color,
        config.think_time_ms
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 680.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title("Reversi"),
        ..Default::default()
    };

    eframe::run_native(
        "Reversi",
        options,
        Box::new(move |cc| Ok(Box::new(ReversiApp::new(cc, config)))),
    )
    .map_err(|e| anyhow!("GUI error: {e}"))
}
