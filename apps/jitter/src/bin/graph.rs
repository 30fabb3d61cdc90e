//! graph: read a schedule file and histogram one time window.
//!
//! ```text
//! graph --csv-file=simulation.csv --graph-start-time=4m --graph-length=4h --report-dir=report
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing::info;

use jitter::{duration_flag_ms, init_tracing, window_banner};
use jt_core::config::{DEFAULT_AVERAGE_INTERVAL_MS, expected_event_count};
use jt_histogram::{DEFAULT_BUCKET_COUNT, Histogram, Window};
use jt_output::csv::{BUCKETS_FILE, SUMMARY_FILE};
use jt_output::{AsciiChart, CsvReportWriter, write_report};
use jt_schedule::read_entities;

/// Reads the simulation data file and plots results as a histogram with a
/// configurable time window.
#[derive(Parser, Debug)]
#[command(name = "graph", about = "Histogram a time window of a schedule file")]
struct Args {
    /// Schedule file produced by `simulate`.
    #[arg(long)]
    csv_file: PathBuf,

    /// Window start, e.g. `24h`.
    #[arg(long, default_value = "24h")]
    graph_start_time: String,

    /// Window length, e.g. `60m`.  Must split evenly into `--buckets`.
    #[arg(long, default_value = "60m")]
    graph_length: String,

    #[arg(long, default_value_t = DEFAULT_BUCKET_COUNT)]
    buckets: usize,

    /// Average interval the schedules were generated with (for the expected
    /// count estimate).
    #[arg(long, default_value_t = DEFAULT_AVERAGE_INTERVAL_MS)]
    average_interval_ms: f64,

    /// Lines in the terminal chart.
    #[arg(long, default_value_t = 20)]
    chart_rows: usize,

    /// Directory for `buckets.csv` and `summary.csv`.
    #[arg(long)]
    report_dir: Option<PathBuf>,

    /// Replace existing report files.
    #[arg(long)]
    overwrite_report: bool,
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let start_ms = duration_flag_ms("graph-start-time", &args.graph_start_time)?;
    let length_ms = duration_flag_ms("graph-length", &args.graph_length)?;

    info!(path = %args.csv_file.display(), "reading schedules");
    let file = File::open(&args.csv_file)
        .with_context(|| format!("failed to open {}", args.csv_file.display()))?;
    let entities = read_entities(BufReader::new(file))
        .with_context(|| format!("failed to read {}", args.csv_file.display()))?;
    info!(entities = entities.len(), "schedules loaded");

    let window = Window::new(
        i64::try_from(start_ms).context("graph start time too large")?,
        i64::try_from(length_ms).context("graph length too large")?,
        args.buckets,
    );
    let mut histogram = Histogram::for_window(&window)?;
    histogram.aggregate(entities.timestamps());

    let expected = expected_event_count(entities.len(), args.average_interval_ms, length_ms);
    info!(
        expected = expected as u64,
        total = histogram.total_count(),
        max_per_bucket = histogram.max_count(),
        bucket_width_ms = histogram.bucket_width_ms(),
        "histogram computed"
    );

    let chart = AsciiChart { rows: args.chart_rows, ..AsciiChart::default() };
    println!("{}", window_banner(&histogram));
    print!("{}", chart.render(&histogram));

    if let Some(dir) = &args.report_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create {}", dir.display()))?;
        if !args.overwrite_report {
            for name in [BUCKETS_FILE, SUMMARY_FILE] {
                let path = dir.join(name);
                if path.exists() {
                    bail!("report file {} already exists; pass --overwrite-report", path.display());
                }
            }
        }
        let mut writer = CsvReportWriter::new(dir)?;
        write_report(&mut writer, &histogram, Some(expected))?;
        info!(dir = %dir.display(), "report written");
    }

    Ok(())
}
