//! Flappy Chess headless driver
//!
//! Plays seeded runs under the demo pilot and prints a JSON summary of each.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use flappy_chess::Settings;
use flappy_chess::runner::Runner;

/// Headless Flappy Chess runner.
#[derive(Debug, Parser)]
#[command(
    name = "flappy-chess",
    version,
    about = "Plays Flappy Chess without a window and reports how each run ended.",
    long_about = "Plays Flappy Chess without a window.\n\n\
        A jetpack pilot flies through chess pieces that drift in from the right, each moving \
        the way its piece moves on a board. Runs are fully determined by the seed.\n\n\
        Set RUST_LOG=debug to follow spawns and scoring, or RUST_LOG=trace with \
        --snapshot-every to dump world snapshots."
)]
struct Args {
    /// Settings file (JSON). Flags given on the command line override it.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// RNG seed. Random when neither this nor the settings file sets one.
    #[arg(short, long)]
    seed: Option<u64>,

    /// Number of runs to play back to back.
    #[arg(short = 'n', long, value_name = "N")]
    sessions: Option<u32>,

    /// Tick limit per run (60 ticks per second).
    #[arg(long, value_name = "TICKS")]
    max_ticks: Option<u64>,

    /// Log a snapshot every N ticks (0 disables).
    #[arg(long, value_name = "N")]
    snapshot_every: Option<u64>,

    /// Pace the simulation at 60 Hz against the wall clock.
    #[arg(long)]
    realtime: bool,

    /// Never fire the jetpack.
    #[arg(long)]
    no_autopilot: bool,

    /// Save the effective settings to FILE and exit.
    #[arg(long, value_name = "FILE")]
    write_config: Option<PathBuf>,
}

impl Args {
    fn settings(&self) -> Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => Settings::load(path)
                .with_context(|| format!("could not load settings from {}", path.display()))?,
            None => Settings::default(),
        };
        if self.seed.is_some() {
            settings.seed = self.seed;
        }
        if let Some(sessions) = self.sessions {
            settings.sessions = sessions;
        }
        if let Some(max_ticks) = self.max_ticks {
            settings.max_ticks = max_ticks;
        }
        if let Some(every) = self.snapshot_every {
            settings.snapshot_every = every;
        }
        settings.realtime |= self.realtime;
        settings.autopilot &= !self.no_autopilot;
        Ok(settings)
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let settings = args.settings()?;

    if let Some(path) = &args.write_config {
        settings
            .save(path)
            .with_context(|| format!("could not write settings to {}", path.display()))?;
        return Ok(());
    }

    log::info!("Flappy Chess starting ({} session(s))", settings.sessions);
    let mut runner = Runner::new(settings);
    let summaries = runner.run(|_| {});

    let json = serde_json::to_string_pretty(&summaries).context("could not encode summaries")?;
    println!("{json}");
    Ok(())
}
