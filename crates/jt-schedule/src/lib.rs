//! `jt-schedule`: entity schedules, the stochastic generator, and the text
//! codec that bridges simulation and analysis runs.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                 |
//! |----------------|----------------------------------------------------------|
//! | [`entity`]     | `Entity`, `EntitySet`                                    |
//! | [`generator`]  | `ScheduleGenerator` (`advance`, `extend_until`)          |
//! | [`population`] | `generate_population`                                    |
//! | [`codec`]      | `encode`, `encode_all`, `decode`, `decode_all`, reader/writer helpers |
//! | [`error`]      | `ScheduleError`, `ScheduleResult<T>`                     |
//!
//! # Step model (summary)
//!
//! ```text
//! candidate = last(schedule) + average_interval
//! if rng.decide(spread):
//!     candidate = rng.perturb(candidate, spread)
//! schedule.push(candidate)
//! ```
//!
//! The perturbation scales the *absolute* candidate time, so with a large
//! spread a step can land on or before the previous event.  Schedules are
//! therefore non-decreasing only in practice, never guaranteed strictly
//! increasing.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                  |
//! |------------|---------------------------------------------------------|
//! | `parallel` | Generates entities on Rayon's thread pool.              |

pub mod codec;
pub mod entity;
pub mod error;
pub mod generator;
pub mod population;


pub use codec::{decode, decode_all, encode, encode_all, read_entities, write_entities};
pub use entity::{Entity, EntitySet};
pub use error::{ScheduleError, ScheduleResult};
pub use generator::ScheduleGenerator;
pub use population::generate_population;
