//! simulate: generate entity schedules up to a horizon and write them to a
//! schedule file.
//!
//! ```text
//! simulate --csv-file=simulation.csv --simulation-time=24h --spread-percent=0.02 --object-count=1000
//! ```

use std::io::BufWriter;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use jitter::{
    check_output_path, duration_flag_ms, init_tracing, load_run_config, resolve_seed,
    write_output_file,
};
use jt_core::SimConfig;
use jt_core::time::format_hms;
use jt_schedule::{ScheduleGenerator, generate_population, write_entities};

/// Runs the simulation and stores the results in a CSV file.
#[derive(Parser, Debug)]
#[command(name = "simulate", about = "Runs the simulation and stores the results in a CSV file")]
struct Args {
    /// Schedule file to write.
    #[arg(long)]
    csv_file: PathBuf,

    /// Simulated time span, e.g. `24h`, `90m`, `3600s`.  Default: 24h.
    #[arg(long)]
    simulation_time: Option<String>,

    /// Spread fraction in [0, 1].  Default: 0.02.
    #[arg(long)]
    spread_percent: Option<f64>,

    /// Number of entities (100..=100000).  Default: 1000.
    #[arg(long)]
    object_count: Option<usize>,

    /// RNG seed.  Overrides the config file's `seed`; with neither, a fresh
    /// seed is drawn and logged.
    #[arg(long)]
    seed: Option<u64>,

    /// TOML file with `SimConfig` fields; flags override it.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Replace an existing schedule file.
    #[arg(long)]
    overwrite_csv_file: bool,
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let (mut config, file_seed) = match &args.config {
        Some(path) => {
            let run = load_run_config(path)?;
            (run.sim, run.seed)
        }
        None => (SimConfig::default(), None),
    };
    if let Some(time) = &args.simulation_time {
        config.horizon_ms = duration_flag_ms("simulation-time", time)?;
    }
    if let Some(spread) = args.spread_percent {
        config.spread = spread;
    }
    if let Some(count) = args.object_count {
        config.entity_count = count;
    }
    config.seed = resolve_seed(args.seed, file_seed);
    config.validate()?;

    check_output_path(&args.csv_file, args.overwrite_csv_file)?;

    info!(
        simulation_time = %format_hms(config.horizon_ms / 1_000),
        entities = config.entity_count,
        spread = config.spread,
        seed = config.seed,
        "generating entity schedules"
    );
    let started = Instant::now();
    let generator = ScheduleGenerator::from_config(&config)?;
    let entities = generate_population(&config, &generator)?;
    info!(
        events = entities.event_count(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "simulation finished"
    );

    write_output_file(&args.csv_file, args.overwrite_csv_file, |file| {
        write_entities(&entities, BufWriter::new(file))
            .with_context(|| format!("failed to write {}", args.csv_file.display()))
    })?;
    info!(path = %args.csv_file.display(), "schedules written");

    Ok(())
}
