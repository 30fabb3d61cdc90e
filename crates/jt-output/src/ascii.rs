//! Plain-text bar chart for terminals and logs.

use std::fmt::Write as _;

use jt_histogram::Histogram;

/// Renders a histogram as horizontal bars, one line per group of adjacent
/// buckets.
#[derive(Clone, Copy, Debug)]
pub struct AsciiChart {
    /// Maximum number of lines; buckets are summed into this many groups.
    pub rows:      usize,
    /// Width in characters of the tallest bar.
    pub bar_width: usize,
}

impl Default for AsciiChart {
    fn default() -> Self {
        Self { rows: 20, bar_width: 50 }
    }
}

impl AsciiChart {
    pub fn render(&self, histogram: &Histogram) -> String {
        let counts = histogram.bucket_counts();
        let per_row = counts.len().div_ceil(self.rows.max(1));
        let groups: Vec<u64> = counts.chunks(per_row).map(|c| c.iter().sum()).collect();
        let tallest = groups.iter().copied().max().unwrap_or(0).max(1);

        let mut out = String::new();
        for (i, &total) in groups.iter().enumerate() {
            let start_ms = histogram.start_ms() + histogram.bucket_width_ms() * (i * per_row) as i64;
            let bar = (total as u128 * self.bar_width as u128 / tallest as u128) as usize;
            let _ = writeln!(
                out,
                "{:>10.1}s | {:<width$} {}",
                start_ms as f64 / 1_000.0,
                "#".repeat(bar),
                total,
                width = self.bar_width,
            );
        }
        out
    }
}
