//! Plain data row types written by report backends.

/// One histogram bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BucketRow {
    pub bucket_index: u32,
    pub start_ms:     i64,
    /// Exclusive.
    pub end_ms:       i64,
    pub count:        u64,
}

/// Whole-window totals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SummaryRow {
    pub start_ms:       i64,
    pub end_ms:         i64,
    pub bucket_count:   u32,
    pub total_count:    u64,
    pub max_count:      u64,
    /// Count predicted for perfectly regular schedules, when known.
    pub expected_count: Option<f64>,
}
