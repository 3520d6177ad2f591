use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use grid_snake::Error;
use grid_snake::audio::TerminalBell;
use grid_snake::canvas::Canvas;
use grid_snake::config::{self, FRAME_POLL_INTERVAL, GameConfig, THEME_CLASSIC};
use grid_snake::game::Scheduler;
use grid_snake::input::{Command, poll_command};
use grid_snake::logging;
use grid_snake::renderer;
use grid_snake::terminal_runtime::{TerminalSession, install_panic_hook};
use log::{LevelFilter, info};

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Config file (JSON). Defaults to the platform config directory.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Board width in board units.
    #[arg(long)]
    width: Option<u16>,

    /// Board height in board units.
    #[arg(long)]
    height: Option<u16>,

    /// Edge length of one cell in board units.
    #[arg(long)]
    unit: Option<u16>,

    /// Milliseconds between ticks.
    #[arg(long = "tick-ms")]
    tick_ms: Option<u64>,

    /// Seed for food placement.
    #[arg(long)]
    seed: Option<u64>,

    /// Never ring the terminal bell.
    #[arg(long)]
    mute: bool,

    /// Log file. Defaults to the platform cache directory.
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,

    /// Log debug output, including every tick.
    #[arg(long)]
    verbose: bool,
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig, Error> {
        let mut game_config = match &self.config {
            Some(path) => GameConfig::load_from_path(path)?,
            None => GameConfig::load()?,
        };

        if let Some(width) = self.width {
            game_config.width = width;
        }
        if let Some(height) = self.height {
            game_config.height = height;
        }
        if let Some(unit) = self.unit {
            game_config.unit = unit;
        }
        if let Some(tick_ms) = self.tick_ms {
            game_config.tick_interval_ms = tick_ms;
        }

        Ok(game_config)
    }
}

fn main() -> Result<(), Error> {
    let cli = Cli::parse();

    let log_path = cli.log_file.clone().unwrap_or_else(config::log_path);
    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    logging::init(&log_path, level)?;

    let game_config = cli.game_config()?;
    let scheduler = Scheduler::from_config(&game_config, cli.seed)?;
    info!("loaded {game_config:?}");

    install_panic_hook();
    run(scheduler, cli.mute)
}

fn run(mut scheduler: Scheduler, mute: bool) -> Result<(), Error> {
    let mut session = TerminalSession::enter()?;
    let mut canvas = Canvas::new(scheduler.board());
    let mut bell = TerminalBell::new(mute);
    let mut last_frame = Instant::now();

    loop {
        session.draw(|frame| {
            renderer::render(frame, &canvas, scheduler.run_state(), &THEME_CLASSIC);
        })?;

        match poll_command(FRAME_POLL_INTERVAL)? {
            Some(Command::Quit) => break,
            Some(Command::Start) => {
                scheduler.start(&mut canvas, &mut bell)?;
            }
            Some(Command::Reset) => scheduler.reset(&mut canvas, &mut bell)?,
            Some(Command::Direction(direction)) => scheduler.on_direction(direction),
            None => {}
        }

        let now = Instant::now();
        scheduler.advance(now.duration_since(last_frame), &mut canvas, &mut bell);
        last_frame = now;
    }

    info!("quit with score {}", scheduler.state().score);
    Ok(())
}
