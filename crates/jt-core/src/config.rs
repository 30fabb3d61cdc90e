//! Run configuration for schedule generation.

use std::ops::RangeInclusive;

use crate::time::{SECONDS_PER_HOUR, minutes_to_millis, seconds_to_millis};
use crate::{JtError, JtResult};

/// Population sizes accepted by [`SimConfig::validate`].
pub const ENTITY_COUNT_RANGE: RangeInclusive<usize> = 100..=100_000;

/// Nominal gap between consecutive events of one entity: 5 minutes.
pub const DEFAULT_AVERAGE_INTERVAL_MS: f64 = 300_000.0;

/// Top-level simulation configuration.
///
/// Typically assembled by the `simulate` binary from CLI flags and an
/// optional TOML file, then passed to the population driver.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct SimConfig {
    /// Generation stops for an entity once its last event is at or past this
    /// time.  Default: 24 hours.
    pub horizon_ms: u64,

    /// Probability of perturbing a step, and the maximum relative size of
    /// the perturbation.  Must be in `[0, 1]`.  Default: 0.02.
    pub spread: f64,

    /// Number of entities; ids are `0..entity_count`.  Default: 1000.
    pub entity_count: usize,

    /// First event time of every entity.  Default: 5 minutes.
    pub initial_offset_ms: u64,

    /// Nominal gap between events.  Default: 5 minutes.
    pub average_interval_ms: f64,

    /// Master RNG seed.  The same seed always produces identical schedules.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            horizon_ms:          seconds_to_millis(24 * SECONDS_PER_HOUR),
            spread:              0.02,
            entity_count:        1_000,
            initial_offset_ms:   minutes_to_millis(5),
            average_interval_ms: DEFAULT_AVERAGE_INTERVAL_MS,
            seed:                0,
        }
    }
}

impl SimConfig {
    /// Check every field; returns the first problem found.
    pub fn validate(&self) -> JtResult<()> {
        if !ENTITY_COUNT_RANGE.contains(&self.entity_count) {
            return Err(JtError::Config(format!(
                "entity count must be between {} and {}, got {}",
                ENTITY_COUNT_RANGE.start(),
                ENTITY_COUNT_RANGE.end(),
                self.entity_count
            )));
        }
        if !(0.0..=1.0).contains(&self.spread) {
            return Err(JtError::Config(format!(
                "spread must be in the range 0.0 to 1.0, got {}",
                self.spread
            )));
        }
        if !(self.average_interval_ms.is_finite() && self.average_interval_ms > 0.0) {
            return Err(JtError::Config(format!(
                "average interval must be a positive number of milliseconds, got {}",
                self.average_interval_ms
            )));
        }
        Ok(())
    }
}

/// Events `entity_count` entities produce inside a window of `length_ms` if
/// every step were exactly `average_interval_ms`.  Used to sanity-check
/// histogram totals.
pub fn expected_event_count(entity_count: usize, average_interval_ms: f64, length_ms: u64) -> f64 {
    entity_count as f64 / average_interval_ms * length_ms as f64
}
