//! Gesture Platformer entry point
//!
//! Runs a headless session with a synthetic hand tracker standing in for the
//! camera. Snapshots are logged, or printed as JSON lines with `--json`.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use gesture_platformer::gesture::SyntheticTracker;
use gesture_platformer::runner::{Frontend, GameLoop, StopReason};
use gesture_platformer::settings::Settings;
use gesture_platformer::sim::{GameOutcome, Snapshot, default_grid, load_grid};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "gesture-platformer")]
#[command(about = "Headless gesture-driven platformer simulation")]
struct Args {
    /// Settings file (JSON). Missing file means defaults.
    #[arg(short, long, default_value = "settings.json")]
    config: PathBuf,

    /// Level grid file (JSON array of rows). Defaults to the built-in level.
    #[arg(short, long)]
    level: Option<PathBuf>,

    /// Seed for the synthetic hand tracker
    #[arg(short, long, default_value_t = 1)]
    seed: u64,

    /// Stop after this many ticks
    #[arg(long, default_value_t = 3600)]
    max_ticks: u64,

    /// Print every snapshot as a JSON line
    #[arg(long)]
    json: bool,

    /// Ignore the tick rate and run as fast as possible
    #[arg(long)]
    unlimited: bool,
}

/// Frontend that logs frames instead of drawing them
struct LogFrontend {
    json: bool,
    max_ticks: u64,
    last_tick: u64,
}

impl Frontend for LogFrontend {
    fn present(&mut self, snapshot: &Snapshot) {
        self.last_tick = snapshot.tick;
        if self.json {
            match serde_json::to_string(snapshot) {
                Ok(line) => println!("{line}"),
                Err(e) => log::error!("Failed to encode snapshot: {e}"),
            }
        } else if let Some(player) = snapshot.player() {
            log::debug!("tick {} player at {}", snapshot.tick, player.bounds.pos);
        }
    }

    fn quit_requested(&mut self) -> bool {
        self.last_tick >= self.max_ticks
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();
    log::info!("Gesture Platformer (headless) starting...");

    let mut settings = match Settings::load(&args.config) {
        Ok(settings) => settings,
        Err(e) => {
            log::error!("{e}");
            return ExitCode::FAILURE;
        }
    };
    if args.unlimited {
        settings.tick_rate = 0;
    }

    let grid = match &args.level {
        Some(path) => match load_grid(path) {
            Ok(grid) => grid,
            Err(e) => {
                log::error!("{e}");
                return ExitCode::FAILURE;
            }
        },
        None => default_grid(),
    };

    let mut game = match GameLoop::start(settings, grid, SyntheticTracker::new(args.seed)) {
        Ok(game) => game,
        Err(e) => {
            log::error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let mut frontend = LogFrontend {
        json: args.json,
        max_ticks: args.max_ticks,
        last_tick: 0,
    };

    match game.run(&mut frontend) {
        StopReason::Finished(GameOutcome::Won) => log::info!("You won!"),
        StopReason::Finished(GameOutcome::Lost) => log::info!("Game over"),
        StopReason::Finished(GameOutcome::Playing) | StopReason::Quit => {
            log::info!("Stopped at tick {}", game.session().time_ticks)
        }
    }

    ExitCode::SUCCESS
}
