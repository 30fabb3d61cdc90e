//! CSV report backend.
//!
//! Creates two files in the configured output directory:
//! - `buckets.csv`
//! - `summary.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::ReportWriter;
use crate::{BucketRow, OutputResult, SummaryRow};

pub const BUCKETS_FILE: &str = "buckets.csv";
pub const SUMMARY_FILE: &str = "summary.csv";

/// Writes a histogram report to two CSV files.
pub struct CsvReportWriter {
    buckets:  Writer<File>,
    summary:  Writer<File>,
    finished: bool,
}

impl CsvReportWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut buckets = Writer::from_path(dir.join(BUCKETS_FILE))?;
        buckets.write_record(["bucket_index", "start_ms", "end_ms", "count"])?;

        let mut summary = Writer::from_path(dir.join(SUMMARY_FILE))?;
        summary.write_record([
            "start_ms",
            "end_ms",
            "bucket_count",
            "total_count",
            "max_count",
            "expected_count",
        ])?;

        Ok(Self { buckets, summary, finished: false })
    }
}

impl ReportWriter for CsvReportWriter {
    fn write_buckets(&mut self, rows: &[BucketRow]) -> OutputResult<()> {
        for row in rows {
            self.buckets.write_record(&[
                row.bucket_index.to_string(),
                row.start_ms.to_string(),
                row.end_ms.to_string(),
                row.count.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_summary(&mut self, row: &SummaryRow) -> OutputResult<()> {
        self.summary.write_record(&[
            row.start_ms.to_string(),
            row.end_ms.to_string(),
            row.bucket_count.to_string(),
            row.total_count.to_string(),
            row.max_count.to_string(),
            row.expected_count.map(|e| format!("{e:.0}")).unwrap_or_default(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.buckets.flush()?;
        self.summary.flush()?;
        Ok(())
    }
}
