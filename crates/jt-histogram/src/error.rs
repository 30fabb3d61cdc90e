//! Error types for jt-histogram.

use thiserror::Error;

/// Errors raised while building or filling a histogram.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HistogramError {
    #[error("time {time_ms} ms is outside the histogram window [{start_ms}, {end_ms})")]
    OutOfRange { time_ms: i64, start_ms: i64, end_ms: i64 },

    #[error("invalid histogram geometry: {0}")]
    InvalidGeometry(String),

    #[error("window length {length_ms} ms is not divisible into {bucket_count} buckets")]
    UnevenWindow { length_ms: i64, bucket_count: usize },

    #[error("cannot merge histograms with different geometry")]
    GeometryMismatch,
}

/// Alias for `Result<T, HistogramError>`.
pub type HistogramResult<T> = Result<T, HistogramError>;
