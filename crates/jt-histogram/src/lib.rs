//! `jt-histogram`: fixed-width time-bucket histogram.
//!
//! # Bucket model
//!
//! A histogram covers the half-open window
//!
//! ```text
//! [start_ms, start_ms + bucket_width_ms * bucket_count)
//! ```
//!
//! split into `bucket_count` half-open buckets of equal width.  A time `t`
//! lands in bucket `(t - start_ms) / bucket_width_ms` computed with exact
//! `i64` division, so the same millisecond always maps to the same bucket.
//!
//! Histograms of identical geometry can be filled independently (one per
//! worker) and combined with [`Histogram::merge`]; merging is commutative and
//! associative.

pub mod error;
pub mod histogram;
pub mod window;

#[cfg(test)]
mod tests;

pub use error::{HistogramError, HistogramResult};
pub use histogram::Histogram;
pub use window::{DEFAULT_BUCKET_COUNT, Window};
