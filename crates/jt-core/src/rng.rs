//! Uniform random sources and the two derived operations the generator uses.
//!
//! # Determinism strategy
//!
//! Each entity gets its own independent `SmallRng` seeded by:
//!
//!   seed = global_seed XOR (entity_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive entity IDs uniformly across the seed space.
//! This means:
//!
//! - Entities never share RNG state (no contention, no ordering dependency).
//! - Growing the population does not disturb the draws of existing entities.
//! - Generation can be sharded across threads and still produce the same
//!   schedules as a sequential run.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{EntityId, JtError, JtResult};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── RandomSource ──────────────────────────────────────────────────────────────

/// A generator of uniformly distributed `f64` values in `[0.0, 1.0)`.
///
/// Implementors only provide [`next_f64`](Self::next_f64); the derived
/// operations validate their arguments *before* drawing, so a rejected call
/// consumes no randomness.
pub trait RandomSource {
    /// Next uniform draw in `[0.0, 1.0)`.
    fn next_f64(&mut self) -> f64;

    /// `true` with probability `probability`.
    ///
    /// Implemented as `next_f64() < probability`, so `decide(0.0)` is always
    /// `false` and `decide(1.0)` is always `true`.
    fn decide(&mut self, probability: f64) -> JtResult<bool> {
        check_fraction("probability", probability)?;
        Ok(self.next_f64() < probability)
    }

    /// Scale `value` by a random factor in `[1 - spread, 1 + spread]`.
    ///
    /// The draw `u` maps to `factor = 1 - 2u ∈ (-1, 1]` and the result is
    /// `value * (1 + factor * spread)`.  With `spread == 0.0` the result is
    /// `value` exactly.
    fn perturb(&mut self, value: f64, spread: f64) -> JtResult<f64> {
        check_fraction("spread", spread)?;
        let factor = 1.0 - 2.0 * self.next_f64();
        Ok(value * (1.0 + factor * spread))
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    #[inline]
    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }
}

/// Reject anything outside `[0, 1]`, including NaN.
fn check_fraction(name: &'static str, value: f64) -> JtResult<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(JtError::InvalidArgument { name, value })
    }
}

// ── EntityRng ─────────────────────────────────────────────────────────────────

/// Per-entity deterministic RNG.
///
/// The type is `Send` but not meant to be shared: each entity (and therefore
/// each Rayon task) owns its own instance.
pub struct EntityRng(SmallRng);

impl EntityRng {
    /// Seed deterministically from the run's global seed and an entity ID.
    pub fn new(global_seed: u64, entity: EntityId) -> Self {
        let seed = global_seed ^ (entity.0 as u64).wrapping_mul(MIXING_CONSTANT);
        EntityRng(SmallRng::seed_from_u64(seed))
    }
}

impl RandomSource for EntityRng {
    #[inline]
    fn next_f64(&mut self) -> f64 {
        self.0.r#gen()
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Run-level RNG.
///
/// Used to pick a run seed when none is configured and for single-stream
/// experiments.  For per-entity randomness use [`EntityRng`].
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Seed from operating-system entropy.  Not reproducible.
    pub fn from_entropy() -> Self {
        SimRng(SmallRng::from_entropy())
    }

    /// Draw a fresh 64-bit run seed.
    #[inline]
    pub fn next_seed(&mut self) -> u64 {
        self.0.r#gen()
    }
}

impl RandomSource for SimRng {
    #[inline]
    fn next_f64(&mut self) -> f64 {
        self.0.r#gen()
    }
}

// ── SequenceRng ───────────────────────────────────────────────────────────────

/// Replays a fixed, non-empty list of draws, wrapping around at the end.
///
/// Makes the generator fully predictable in tests: a draw of `0.5` yields a
/// perturbation factor of `0.0`, `0.0` yields `+1`, and values just below
/// `1.0` approach `-1`.
#[derive(Clone, Debug)]
pub struct SequenceRng {
    draws: Vec<f64>,
    pos:   usize,
}

impl SequenceRng {
    /// Fails if `draws` is empty or any value lies outside `[0.0, 1.0)`.
    pub fn new(draws: Vec<f64>) -> JtResult<Self> {
        if draws.is_empty() {
            return Err(JtError::Config("SequenceRng needs at least one draw".into()));
        }
        if let Some(bad) = draws.iter().copied().find(|d| !(0.0..1.0).contains(d)) {
            return Err(JtError::Config(format!(
                "SequenceRng draw {bad} outside the range [0.0, 1.0)"
            )));
        }
        Ok(Self { draws, pos: 0 })
    }

    /// A source that returns `draw` forever.
    pub fn constant(draw: f64) -> JtResult<Self> {
        Self::new(vec![draw])
    }

    /// Number of draws consumed so far.
    pub fn consumed(&self) -> usize {
        self.pos
    }
}

impl RandomSource for SequenceRng {
    fn next_f64(&mut self) -> f64 {
        let v = self.draws[self.pos % self.draws.len()];
        self.pos += 1;
        v
    }
}
