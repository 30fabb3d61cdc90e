//! Simulation time helpers.
//!
//! # Design
//!
//! All simulated time is elapsed milliseconds since a simulation epoch.
//! Schedules store it as `f64` (perturbations produce fractional values);
//! histogram windows use `i64` so bucket arithmetic is exact integer
//! division.  User-facing durations are whole seconds written as
//! `<int>[s|m|h]`.

use crate::{JtError, JtResult};

pub const MILLIS_PER_SECOND: u64 = 1_000;
pub const MILLIS_PER_MINUTE: u64 = 60 * MILLIS_PER_SECOND;
pub const SECONDS_PER_HOUR: u64 = 3_600;

#[inline]
pub fn seconds_to_millis(secs: u64) -> u64 {
    secs.saturating_mul(MILLIS_PER_SECOND)
}

#[inline]
pub fn minutes_to_millis(minutes: u64) -> u64 {
    minutes.saturating_mul(MILLIS_PER_MINUTE)
}

/// Parse a human-readable duration into whole seconds.
///
/// Accepted forms are a non-negative integer with an optional unit suffix:
/// `90` or `90s` (seconds), `15m` (minutes), `24h` (hours).  Surrounding
/// whitespace is ignored.
pub fn parse_duration_secs(input: &str) -> JtResult<u64> {
    let trimmed = input.trim();
    let (digits, multiplier) = match trimmed.char_indices().last() {
        Some((i, 's')) => (&trimmed[..i], 1),
        Some((i, 'm')) => (&trimmed[..i], 60),
        Some((i, 'h')) => (&trimmed[..i], SECONDS_PER_HOUR),
        Some(_) => (trimmed, 1),
        None => return Err(JtError::Parse("empty duration".into())),
    };

    let value: u64 = digits.parse().map_err(|_| {
        JtError::Parse(format!(
            "invalid duration {input:?}: expected an integer with an optional s, m, or h suffix"
        ))
    })?;

    value
        .checked_mul(multiplier)
        .ok_or_else(|| JtError::Parse(format!("duration {input:?} is too large")))
}

/// Break `secs` into an `h:mm:ss` string for log banners.
pub fn format_hms(secs: u64) -> String {
    let h = secs / SECONDS_PER_HOUR;
    let m = (secs % SECONDS_PER_HOUR) / 60;
    let s = secs % 60;
    format!("{h}:{m:02}:{s:02}")
}
