//! Golf Sim entry point
//!
//! Headless native host: plays holes with autoplay at a fixed frame rate and
//! prints each finished hole as JSON.

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result, bail};
use clap::Parser;
use golf_sim::{
    SimulationSession, Tuning,
    sim::{GamePhase, plan_shot},
};

/// Host frame delta (60 fps)
const FRAME_DT: f32 = 1.0 / 60.0;
/// Give up on a hole after this many swings
const MAX_SHOTS_PER_HOLE: u32 = 30;

#[derive(Debug, Parser)]
#[command(name = "golf-sim")]
#[command(about = "Play generated golf holes headlessly", long_about = None)]
struct Args {
    /// RNG seed (defaults to the system clock)
    seed: Option<u64>,

    /// Number of holes to play
    #[arg(default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    holes: u32,

    /// Tuning JSON file
    tuning: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let seed = args.seed.unwrap_or_else(clock_seed);
    let tuning = match &args.tuning {
        Some(path) => load_tuning(path)?,
        None => Tuning::default(),
    };

    log::info!("Golf Sim starting with seed {}", seed);
    let mut session = SimulationSession::with_tuning(seed, tuning).context("Invalid tuning")?;

    let mut total_strokes = 0;
    let mut total_par = 0;
    for hole in 1..=args.holes {
        if hole > 1 {
            session.next_hole()?;
        }
        session.start()?;
        play_hole(&mut session).with_context(|| format!("Hole {} abandoned", hole))?;

        let snapshot = session.snapshot();
        if let Some(summary) = &snapshot.summary {
            total_strokes += summary.strokes;
            total_par += u32::from(summary.par);
        }
        println!(
            "{}",
            serde_json::to_string(&snapshot).context("Snapshot serialization failed")?
        );
    }

    log::info!(
        "Round complete: {} strokes over {} holes (par {})",
        total_strokes,
        args.holes,
        total_par
    );
    Ok(())
}

/// Autoplay one hole to the cup
fn play_hole(session: &mut SimulationSession) -> Result<()> {
    let mut swings = 0;
    while session.phase() != GamePhase::HoleOut {
        if swings >= MAX_SHOTS_PER_HOLE {
            bail!("no hole out after {} swings", MAX_SHOTS_PER_HOLE);
        }
        let snapshot = session.snapshot();
        let Some((club, power)) = plan_shot(&snapshot, session.catalog(), session.tuning()) else {
            bail!("no shot available during {:?}", snapshot.phase);
        };
        session.request_shot(&club, power)?;
        swings += 1;
        while session.is_simulating() {
            session.advance(FRAME_DT);
        }
        log::info!("{}", session.snapshot().last_message);
    }
    Ok(())
}

fn load_tuning(path: &Path) -> Result<Tuning> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read tuning file: {}", path.display()))?;
    Tuning::from_json(&json)
        .with_context(|| format!("Failed to parse tuning file: {}", path.display()))
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
