//! The `Histogram` struct: geometry, counters, and the running maximum.

use crate::{HistogramError, HistogramResult, Window};

/// Event counts per fixed-width time bucket.
///
/// `max_count` is maintained on every insertion rather than recomputed, and
/// always equals the largest counter.  `total_count` is summed on demand.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Histogram {
    start_ms:        i64,
    bucket_width_ms: i64,
    end_ms:          i64,
    counts:          Vec<u64>,
    max_count:       u64,
}

impl Histogram {
    /// Allocate `bucket_count` zeroed buckets of `bucket_width_ms` each,
    /// starting at `start_ms`.
    ///
    /// Fails if the width is not positive, there are no buckets, or the
    /// window end does not fit in an `i64`.
    pub fn new(start_ms: i64, bucket_width_ms: i64, bucket_count: usize) -> HistogramResult<Self> {
        if bucket_width_ms <= 0 {
            return Err(HistogramError::InvalidGeometry(format!(
                "bucket width must be positive, got {bucket_width_ms} ms"
            )));
        }
        if bucket_count == 0 {
            return Err(HistogramError::InvalidGeometry("bucket count must be at least 1".into()));
        }
        let end_ms = i64::try_from(bucket_count)
            .ok()
            .and_then(|n| bucket_width_ms.checked_mul(n))
            .and_then(|span| start_ms.checked_add(span))
            .ok_or_else(|| {
                HistogramError::InvalidGeometry(format!(
                    "window of {bucket_count} x {bucket_width_ms} ms from {start_ms} overflows"
                ))
            })?;

        Ok(Self {
            start_ms,
            bucket_width_ms,
            end_ms,
            counts: vec![0; bucket_count],
            max_count: 0,
        })
    }

    /// Build a histogram for `window`, deriving the bucket width from its
    /// length.  See [`Window::bucket_width_ms`].
    pub fn for_window(window: &Window) -> HistogramResult<Self> {
        Self::new(window.start_ms, window.bucket_width_ms()?, window.bucket_count)
    }

    // ── Insertion ─────────────────────────────────────────────────────────

    /// Count one event at `time_ms` and return its bucket index.
    ///
    /// Times outside `[start_ms, end_ms)` are rejected and leave the
    /// histogram unchanged.
    pub fn add_data_point(&mut self, time_ms: i64) -> HistogramResult<usize> {
        if time_ms < self.start_ms || time_ms >= self.end_ms {
            return Err(HistogramError::OutOfRange {
                time_ms,
                start_ms: self.start_ms,
                end_ms: self.end_ms,
            });
        }

        let idx = self.bucket_index(time_ms);
        let count = &mut self.counts[idx];
        *count += 1;
        if *count > self.max_count {
            self.max_count = *count;
        }
        Ok(idx)
    }

    /// Count every timestamp that falls inside the window and return how many
    /// were accepted.
    ///
    /// Fractional times are truncated toward zero to whole milliseconds
    /// after the window check.  Times outside the window and NaN are skipped.
    pub fn aggregate<I: IntoIterator<Item = f64>>(&mut self, timestamps: I) -> usize {
        let (lo, hi) = (self.start_ms as f64, self.end_ms as f64);
        let mut accepted = 0;
        for t in timestamps {
            if t >= lo && t < hi && self.add_data_point(t.trunc() as i64).is_ok() {
                accepted += 1;
            }
        }
        tracing::trace!(accepted, start_ms = self.start_ms, end_ms = self.end_ms, "aggregated timestamps");
        accepted
    }

    /// Add `other`'s counters into `self`.
    ///
    /// Both histograms must have identical geometry.  The running maximum
    /// becomes the maximum of the merged counters.
    pub fn merge(&mut self, other: &Histogram) -> HistogramResult<()> {
        if !self.same_geometry(other) {
            return Err(HistogramError::GeometryMismatch);
        }
        for (mine, theirs) in self.counts.iter_mut().zip(&other.counts) {
            *mine += theirs;
            self.max_count = self.max_count.max(*mine);
        }
        Ok(())
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn bucket_count(&self) -> usize {
        self.counts.len()
    }

    /// Counter per bucket, in time order.
    #[inline]
    pub fn bucket_counts(&self) -> &[u64] {
        &self.counts
    }

    #[inline]
    pub fn max_count(&self) -> u64 {
        self.max_count
    }

    /// Sum of all counters, i.e. the number of successful insertions.
    pub fn total_count(&self) -> u64 {
        self.counts.iter().sum()
    }

    #[inline]
    pub fn start_ms(&self) -> i64 {
        self.start_ms
    }

    /// Exclusive end of the window.
    #[inline]
    pub fn end_ms(&self) -> i64 {
        self.end_ms
    }

    #[inline]
    pub fn bucket_width_ms(&self) -> i64 {
        self.bucket_width_ms
    }

    /// `[start, end)` of bucket `idx`, or `None` past the last bucket.
    pub fn bucket_bounds(&self, idx: usize) -> Option<(i64, i64)> {
        if idx >= self.counts.len() {
            return None;
        }
        let start = self.start_ms + self.bucket_width_ms * idx as i64;
        Some((start, start + self.bucket_width_ms))
    }

    pub fn same_geometry(&self, other: &Histogram) -> bool {
        self.start_ms == other.start_ms
            && self.bucket_width_ms == other.bucket_width_ms
            && self.counts.len() == other.counts.len()
    }

    // ── Helpers ───────────────────────────────────────────────────────────

    /// Bucket for an in-window time.  The clamp only matters if the caller
    /// broke the window invariant.
    #[inline]
    fn bucket_index(&self, time_ms: i64) -> usize {
        let idx = ((time_ms - self.start_ms) / self.bucket_width_ms) as usize;
        idx.min(self.counts.len() - 1)
    }
}
