//! `jt-core`: foundational types for the `jitter` schedule simulator.
//!
//! This crate is a dependency of every other `jt-*` crate.  It has no `jt-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`ids`]      | `EntityId`                                                 |
//! | [`rng`]      | `RandomSource` trait, `EntityRng`, `SimRng`, `SequenceRng` |
//! | [`time`]     | millisecond helpers, `parse_duration_secs`, `format_hms`   |
//! | [`config`]   | `SimConfig`                                                |
//! | [`error`]    | `JtError`, `JtResult`                                      |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to `EntityId` and `SimConfig`. |

pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::SimConfig;
pub use error::{JtError, JtResult};
pub use ids::EntityId;
pub use rng::{EntityRng, RandomSource, SequenceRng, SimRng};
