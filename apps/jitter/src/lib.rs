//! Shared plumbing for the `simulate` and `graph` binaries: logging setup,
//! run-config loading and seed choice, duration flags, and output files that
//! only appear once fully written.

use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;

use anyhow::{Context, Result, bail};
use tempfile::NamedTempFile;

use jt_core::{SimConfig, SimRng};
use jt_core::time::{format_hms, parse_duration_secs, seconds_to_millis};
use jt_histogram::Histogram;

#[cfg(test)]
mod tests;

/// Install the `fmt` subscriber.  `RUST_LOG` overrides the default `info`.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();
}

/// A TOML run configuration as read from disk.
#[derive(Clone, Debug, PartialEq)]
pub struct RunConfig {
    /// Every field the file sets; missing keys take their defaults.
    pub sim:  SimConfig,
    /// The file's `seed`, or `None` when the key is absent.
    pub seed: Option<u64>,
}

/// Read a TOML run configuration.  Unknown keys are rejected.
pub fn load_run_config(path: &Path) -> Result<RunConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    let table: toml::Table = text
        .parse()
        .with_context(|| format!("invalid config file {}", path.display()))?;
    let has_seed = table.contains_key("seed");
    let sim: SimConfig = toml::Value::Table(table)
        .try_into()
        .with_context(|| format!("invalid config file {}", path.display()))?;
    let seed = has_seed.then_some(sim.seed);
    Ok(RunConfig { sim, seed })
}

/// Pick the run seed: the `--seed` flag, then the config file, then a fresh
/// seed from OS entropy.
pub fn resolve_seed(flag: Option<u64>, file: Option<u64>) -> u64 {
    flag.or(file).unwrap_or_else(|| SimRng::from_entropy().next_seed())
}

/// Parse a `--flag` duration like `24h` into milliseconds.
pub fn duration_flag_ms(flag: &str, value: &str) -> Result<u64> {
    let secs = parse_duration_secs(value)
        .with_context(|| format!("invalid argument value for --{flag}: {value}"))?;
    Ok(seconds_to_millis(secs))
}

/// Chart heading: the window as `start .. end` elapsed simulation time.
pub fn window_banner(histogram: &Histogram) -> String {
    let secs = |ms: i64| ms.max(0) as u64 / 1_000;
    format!(
        "{} .. {} ({} buckets of {} ms)",
        format_hms(secs(histogram.start_ms())),
        format_hms(secs(histogram.end_ms())),
        histogram.bucket_count(),
        histogram.bucket_width_ms()
    )
}

/// Fail early if `path` exists and may not be replaced.
pub fn check_output_path(path: &Path, overwrite: bool) -> Result<()> {
    if !overwrite && path.exists() {
        bail!(
            "file {} already exists; remove it, choose another name, or pass the overwrite flag",
            path.display()
        );
    }
    Ok(())
}

/// Run `write` against a temporary file next to `path`, then move it into
/// place.  Nothing appears at `path` unless `write` succeeds.  Unless
/// `overwrite` is set, an existing file at `path` is an error rather than
/// being replaced.
pub fn write_output_file<F>(path: &Path, overwrite: bool, write: F) -> Result<()>
where
    F: FnOnce(&mut File) -> Result<()>,
{
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)
        .with_context(|| format!("failed to create a temporary file in {}", dir.display()))?;
    write(tmp.as_file_mut())?;

    let persisted = if overwrite { tmp.persist(path) } else { tmp.persist_noclobber(path) };
    match persisted {
        Ok(_) => Ok(()),
        Err(e) if e.error.kind() == ErrorKind::AlreadyExists => bail!(
            "file {} already exists; remove it, choose another name, or pass the overwrite flag",
            path.display()
        ),
        Err(e) => Err(e.error).with_context(|| format!("failed to create {}", path.display())),
    }
}
