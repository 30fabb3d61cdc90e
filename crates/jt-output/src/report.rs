//! Histogram → report rows → `ReportWriter`.

use jt_histogram::Histogram;

use crate::{BucketRow, OutputResult, ReportWriter, SummaryRow};

/// One row per bucket, in time order.
pub fn bucket_rows(histogram: &Histogram) -> Vec<BucketRow> {
    histogram
        .bucket_counts()
        .iter()
        .enumerate()
        .map(|(i, &count)| {
            let start_ms = histogram.start_ms() + histogram.bucket_width_ms() * i as i64;
            BucketRow {
                bucket_index: i as u32,
                start_ms,
                end_ms: start_ms + histogram.bucket_width_ms(),
                count,
            }
        })
        .collect()
}

pub fn summary_row(histogram: &Histogram, expected_count: Option<f64>) -> SummaryRow {
    SummaryRow {
        start_ms: histogram.start_ms(),
        end_ms: histogram.end_ms(),
        bucket_count: histogram.bucket_count() as u32,
        total_count: histogram.total_count(),
        max_count: histogram.max_count(),
        expected_count,
    }
}

/// Write every bucket and the summary, then finish the writer.
pub fn write_report<W: ReportWriter>(
    writer: &mut W,
    histogram: &Histogram,
    expected_count: Option<f64>,
) -> OutputResult<()> {
    writer.write_buckets(&bucket_rows(histogram))?;
    writer.write_summary(&summary_row(histogram, expected_count))?;
    writer.finish()
}
