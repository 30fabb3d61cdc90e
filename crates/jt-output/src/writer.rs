//! The `ReportWriter` trait implemented by all backend writers.

use crate::{BucketRow, OutputResult, SummaryRow};

/// Sink for histogram reports.
pub trait ReportWriter {
    /// Write a batch of bucket rows, in time order.
    fn write_buckets(&mut self, rows: &[BucketRow]) -> OutputResult<()>;

    /// Write the summary row.
    fn write_summary(&mut self, row: &SummaryRow) -> OutputResult<()>;

    /// Flush all underlying file handles.
    ///
    /// Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}
