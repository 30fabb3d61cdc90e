//! Report window: where a histogram starts, how long it is, and how finely
//! it is split.

use crate::{HistogramError, HistogramResult};

/// Bucket resolution used by the `graph` tool unless overridden.
pub const DEFAULT_BUCKET_COUNT: usize = 1_000;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Window {
    pub start_ms:     i64,
    pub length_ms:    i64,
    pub bucket_count: usize,
}

impl Window {
    pub fn new(start_ms: i64, length_ms: i64, bucket_count: usize) -> Self {
        Self { start_ms, length_ms, bucket_count }
    }

    /// Exclusive end of the window.
    #[inline]
    pub fn end_ms(&self) -> i64 {
        self.start_ms.saturating_add(self.length_ms)
    }

    /// `length_ms / bucket_count`.
    ///
    /// Fails unless the length is positive and splits evenly, so every
    /// bucket is exactly the same width and the window end is exact.
    pub fn bucket_width_ms(&self) -> HistogramResult<i64> {
        let uneven = HistogramError::UnevenWindow {
            length_ms:    self.length_ms,
            bucket_count: self.bucket_count,
        };
        let Ok(count) = i64::try_from(self.bucket_count) else {
            return Err(uneven);
        };
        if self.length_ms <= 0 || count == 0 || self.length_ms % count != 0 {
            return Err(uneven);
        }
        Ok(self.length_ms / count)
    }
}
