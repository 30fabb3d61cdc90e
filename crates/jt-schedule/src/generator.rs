//! The stochastic step that grows an entity's schedule.

use std::cmp::Ordering;

use jt_core::config::DEFAULT_AVERAGE_INTERVAL_MS;
use jt_core::{JtError, JtResult, RandomSource, SimConfig};

use crate::{Entity, ScheduleError, ScheduleResult};

/// Appends events to entity schedules one step at a time.
///
/// Holds no per-entity state, so one generator can drive any number of
/// entities (and several generators with different intervals can coexist).
#[derive(Clone, Debug)]
pub struct ScheduleGenerator {
    average_interval_ms: f64,
    step_limit:          Option<usize>,
}

impl Default for ScheduleGenerator {
    fn default() -> Self {
        Self { average_interval_ms: DEFAULT_AVERAGE_INTERVAL_MS, step_limit: None }
    }
}

impl ScheduleGenerator {
    /// Fails unless `average_interval_ms` is finite and positive.
    pub fn new(average_interval_ms: f64) -> JtResult<Self> {
        if !(average_interval_ms.is_finite() && average_interval_ms > 0.0) {
            return Err(JtError::Config(format!(
                "average interval must be a positive number of milliseconds, got {average_interval_ms}"
            )));
        }
        Ok(Self { average_interval_ms, step_limit: None })
    }

    /// Generator using the interval from a run configuration.
    pub fn from_config(config: &SimConfig) -> JtResult<Self> {
        Self::new(config.average_interval_ms)
    }

    /// Cap the number of steps [`extend_until`](Self::extend_until) may take
    /// for a single entity.
    pub fn with_step_limit(mut self, limit: usize) -> Self {
        self.step_limit = Some(limit);
        self
    }

    #[inline]
    pub fn average_interval_ms(&self) -> f64 {
        self.average_interval_ms
    }

    /// Append one event to `entity` and return its time.
    ///
    /// The nominal next event is `last + average_interval`.  With probability
    /// `entity.spread()` it is replaced by `rng.perturb(candidate, spread)`.
    /// Draws once or twice from `rng`.  On error the schedule is unchanged.
    pub fn advance<R: RandomSource>(&self, entity: &mut Entity, rng: &mut R) -> ScheduleResult<f64> {
        let last = entity.last().ok_or(ScheduleError::EmptySchedule(entity.id()))?;

        let mut next = last + self.average_interval_ms;
        if rng.decide(entity.spread())? {
            next = rng.perturb(next, entity.spread())?;
        }

        entity.push(next);
        Ok(next)
    }

    /// Advance `entity` until its last event is at or past `horizon_ms`.
    ///
    /// Returns the number of steps taken (zero if the entity already reached
    /// the horizon).  Schedule length varies with the random draws.
    pub fn extend_until<R: RandomSource>(
        &self,
        entity: &mut Entity,
        horizon_ms: f64,
        rng: &mut R,
    ) -> ScheduleResult<usize> {
        let mut steps = 0;
        loop {
            let last = entity.last().ok_or(ScheduleError::EmptySchedule(entity.id()))?;
            // NaN on either side counts as reached.
            if last.partial_cmp(&horizon_ms) != Some(Ordering::Less) {
                return Ok(steps);
            }
            if self.step_limit.is_some_and(|limit| steps >= limit) {
                return Err(ScheduleError::HorizonNotReached { id: entity.id(), horizon_ms, steps });
            }
            self.advance(entity, rng)?;
            steps += 1;
        }
    }
}
