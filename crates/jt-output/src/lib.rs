//! `jt-output`: histogram report writers for the jitter tools.
//!
//! | Module       | Contents                                               |
//! |--------------|--------------------------------------------------------|
//! | [`row`]      | `BucketRow`, `SummaryRow`                              |
//! | [`writer`]   | `ReportWriter` trait                                   |
//! | [`csv`]      | `CsvReportWriter` (`buckets.csv`, `summary.csv`)       |
//! | [`report`]   | `write_report`: histogram → rows → any `ReportWriter`  |
//! | [`ascii`]    | `AsciiChart` text renderer                             |
//!
//! # Usage
//!
//! ```rust,ignore
//! use jt_output::{CsvReportWriter, write_report};
//!
//! let mut writer = CsvReportWriter::new(Path::new("./report"))?;
//! write_report(&mut writer, &histogram, Some(expected))?;
//! ```

pub mod ascii;
pub mod csv;
pub mod error;
pub mod report;
pub mod row;
pub mod writer;


pub use ascii::AsciiChart;
pub use csv::CsvReportWriter;
pub use error::{OutputError, OutputResult};
pub use report::{bucket_rows, summary_row, write_report};
pub use row::{BucketRow, SummaryRow};
pub use writer::ReportWriter;
