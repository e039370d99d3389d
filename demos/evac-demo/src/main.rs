//! evac-demo — crowd evacuation of a small office floor.
//!
//! Loads a floor plan (the built-in office, or a grayscale CSV given on the
//! command line), scatters the occupants at random, lets them look for the
//! door for a fixed number of ticks and writes both metrics series as CSV.
//!
//! ```text
//! evac-demo [FLOOR_PLAN.csv] [CONFIG.json]
//! ```
//!
//! Log verbosity follows `RUST_LOG` (default `info`).

mod floor_plan;
mod output;


use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use evac_behavior::EvacuationBehavior;
use evac_core::SimConfig;
use evac_sim::{render_layout, SimBuilder};

use output::{ProgressObserver, SeriesWriter, AGENT_FILE, MODEL_FILE};

// ── Constants ─────────────────────────────────────────────────────────────────

const TICKS:          u64  = 100;
const PROGRESS_EVERY: u64  = 10;
const OUTPUT_DIR:     &str = "output/evac-demo";

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    init_tracing();

    let mut args = std::env::args_os().skip(1).map(PathBuf::from);
    let plan_path = args.next();
    let config_path = args.next();

    let config = load_config(config_path.as_deref())?;
    let grid = floor_plan::load(plan_path.as_deref())?;

    println!("=== evac-demo — crowd evacuation ===");
    println!(
        "Agents: {}  |  Vision: {}  |  Ticks: {TICKS}  |  Seed: {}",
        config.num_agents, config.agent_vision, config.seed
    );
    println!();

    let mut sim = SimBuilder::new(config, grid, EvacuationBehavior)
        .build()
        .context("building the simulation")?;
    println!("Exit at {} ({} candidates on the border)", sim.exit(), sim.exit_candidates().len());
    println!();
    println!("Before:");
    print!("{}", render_layout(&sim.layout()));
    println!();

    let mut progress = ProgressObserver::new(PROGRESS_EVERY);
    let t0 = Instant::now();
    sim.run_with(TICKS, &mut progress)?;
    let elapsed = t0.elapsed();

    println!("After {} ticks:", progress.ticks());
    print!("{}", render_layout(&sim.layout()));
    println!();

    std::fs::create_dir_all(OUTPUT_DIR)?;
    let mut writer = SeriesWriter::new(Path::new(OUTPUT_DIR))?;
    let (model_rows, agent_rows) = writer.write_series(sim.metrics())?;
    writer.finish()?;

    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!("  {MODEL_FILE} : {model_rows} rows");
    println!("  {AGENT_FILE} : {agent_rows} rows");
    println!(
        "  evacuated {} of {}, {} still inside",
        sim.cumulative_exited(),
        sim.config().num_agents,
        sim.population().len()
    );
    match progress.cleared_at() {
        Some(tick) => println!("  building clear after {tick}"),
        None => warn!(inside = sim.population().len(), "building not cleared within the run"),
    }

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Defaults, or a (possibly partial) JSON `SimConfig`.
fn load_config(path: Option<&Path>) -> Result<SimConfig> {
    let Some(path) = path else {
        return Ok(SimConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config: SimConfig = serde_json::from_str(&text)
        .with_context(|| format!("parsing config {}", path.display()))?;
    info!(path = %path.display(), "config loaded");
    Ok(config)
}
