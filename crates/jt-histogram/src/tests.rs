//! Unit tests for jt-histogram.

#[cfg(test)]
mod geometry {
    use crate::{DEFAULT_BUCKET_COUNT, Histogram, HistogramError, Window};

    #[test]
    fn new_rejects_bad_geometry() {
        assert!(matches!(Histogram::new(0, 0, 10), Err(HistogramError::InvalidGeometry(_))));
        assert!(matches!(Histogram::new(0, -5, 10), Err(HistogramError::InvalidGeometry(_))));
        assert!(matches!(Histogram::new(0, 100, 0), Err(HistogramError::InvalidGeometry(_))));
        assert!(matches!(Histogram::new(i64::MAX - 10, 100, 10), Err(HistogramError::InvalidGeometry(_))));
    }

    #[test]
    fn window_bounds() {
        let h = Histogram::new(333, 100, 10).unwrap();
        assert_eq!(h.start_ms(), 333);
        assert_eq!(h.end_ms(), 1_333);
        assert_eq!(h.bucket_bounds(0), Some((333, 433)));
        assert_eq!(h.bucket_bounds(9), Some((1_233, 1_333)));
        assert_eq!(h.bucket_bounds(10), None);
    }

    #[test]
    fn window_resolves_bucket_width() {
        // 24h start, 60m long, default resolution → 3.6 s buckets.
        let w = Window::new(86_400_000, 3_600_000, DEFAULT_BUCKET_COUNT);
        assert_eq!(w.bucket_width_ms().unwrap(), 3_600);
        assert_eq!(w.end_ms(), 90_000_000);

        let h = Histogram::for_window(&w).unwrap();
        assert_eq!(h.bucket_count(), 1_000);
        assert_eq!(h.end_ms(), w.end_ms());
    }

    #[test]
    fn window_must_divide_evenly() {
        let w = Window::new(0, 1_001, 1_000);
        assert_eq!(
            w.bucket_width_ms(),
            Err(HistogramError::UnevenWindow { length_ms: 1_001, bucket_count: 1_000 })
        );
        assert!(Window::new(0, 0, 10).bucket_width_ms().is_err());
        assert!(Window::new(0, 100, 0).bucket_width_ms().is_err());
        assert!(Histogram::for_window(&Window::new(0, 999, 1_000)).is_err());
    }
}

#[cfg(test)]
mod insertion {
    use proptest::prelude::*;

    use crate::{Histogram, HistogramError};

    fn index_of(h: &Histogram, t: i64) -> usize {
        h.clone().add_data_point(t).unwrap()
    }

    #[test]
    fn bucket_index_zero_start() {
        let h = Histogram::new(0, 100, 10).unwrap();
        for (t, idx) in [
            (0, 0), (1, 0), (99, 0),
            (100, 1), (101, 1), (199, 1),
            (200, 2), (201, 2), (299, 2),
            (900, 9), (901, 9), (999, 9),
        ] {
            assert_eq!(index_of(&h, t), idx, "t = {t}");
        }
    }

    #[test]
    fn bucket_index_offset_start() {
        let off = 333;
        let h = Histogram::new(off, 100, 10).unwrap();
        for (t, idx) in [(0, 0), (99, 0), (100, 1), (299, 2), (900, 9), (999, 9)] {
            assert_eq!(index_of(&h, off + t), idx, "t = {off} + {t}");
        }
    }

    #[test]
    fn negative_start() {
        let h = Histogram::new(-1_000, 100, 10).unwrap();
        assert_eq!(index_of(&h, -1_000), 0);
        assert_eq!(index_of(&h, -901), 0);
        assert_eq!(index_of(&h, -900), 1);
        assert_eq!(index_of(&h, -1), 9);
    }

    #[test]
    fn two_points_scenario() {
        let mut h = Histogram::new(0, 100, 10).unwrap();
        assert_eq!(h.add_data_point(0).unwrap(), 0);
        assert_eq!(h.add_data_point(999).unwrap(), 9);
        assert_eq!(h.bucket_counts()[0], 1);
        assert_eq!(h.bucket_counts()[9], 1);
        assert_eq!(h.total_count(), 2);
        assert_eq!(h.max_count(), 1);
    }

    #[test]
    fn out_of_range_rejected_without_side_effects() {
        let mut h = Histogram::new(0, 100, 10).unwrap();
        h.add_data_point(5).unwrap();
        let before = h.clone();

        assert_eq!(
            h.add_data_point(1_000),
            Err(HistogramError::OutOfRange { time_ms: 1_000, start_ms: 0, end_ms: 1_000 })
        );
        assert!(h.add_data_point(-1).is_err());
        assert_eq!(h, before);
    }

    #[test]
    fn max_tracks_tallest_bucket() {
        let mut h = Histogram::new(0, 10, 5).unwrap();
        for t in [1, 2, 3, 15, 15, 41] {
            h.add_data_point(t).unwrap();
        }
        assert_eq!(h.bucket_counts(), &[3, 2, 0, 0, 1]);
        assert_eq!(h.max_count(), 3);
        assert_eq!(h.total_count(), 6);
    }

    proptest! {
        #[test]
        fn points_land_in_their_bucket(
            start in -1_000_000i64..1_000_000,
            width in 1i64..10_000,
            count in 1usize..500,
            k_frac in 0.0f64..1.0,
            within_frac in 0.0f64..1.0,
        ) {
            let mut h = Histogram::new(start, width, count).unwrap();
            let k = ((count as f64 * k_frac) as usize).min(count - 1);
            let offset = ((width as f64 * within_frac) as i64).min(width - 1);
            let t = start + width * k as i64 + offset;
            prop_assert_eq!(h.add_data_point(t).unwrap(), k);
        }

        #[test]
        fn total_equals_successful_inserts(times in prop::collection::vec(-500i64..1_500, 0..200)) {
            let mut h = Histogram::new(0, 100, 10).unwrap();
            let ok = times.iter().filter(|&&t| h.add_data_point(t).is_ok()).count();
            prop_assert_eq!(h.total_count(), ok as u64);
            prop_assert_eq!(h.max_count(), *h.bucket_counts().iter().max().unwrap());
        }
    }
}

#[cfg(test)]
mod aggregate {
    use crate::Histogram;

    #[test]
    fn filters_to_window_and_truncates() {
        let mut h = Histogram::new(1_000, 100, 10).unwrap();
        let accepted = h.aggregate([999.9, 1_000.0, 1_099.99, 1_100.0, 1_999.5, 2_000.0, f64::NAN]);
        assert_eq!(accepted, 4);
        assert_eq!(h.bucket_counts()[0], 2);
        assert_eq!(h.bucket_counts()[1], 1);
        assert_eq!(h.bucket_counts()[9], 1);
        assert_eq!(h.total_count(), 4);
    }
}

#[cfg(test)]
mod merge {
    use crate::{Histogram, HistogramError};

    #[test]
    fn merge_equals_sequential_fill() {
        let times: Vec<i64> = (0..1_000).map(|i| (i * 37) % 1_000).collect();

        let mut whole = Histogram::new(0, 100, 10).unwrap();
        for &t in &times {
            whole.add_data_point(t).unwrap();
        }

        let mut left = Histogram::new(0, 100, 10).unwrap();
        let mut right = left.clone();
        for &t in &times[..400] {
            left.add_data_point(t).unwrap();
        }
        for &t in &times[400..] {
            right.add_data_point(t).unwrap();
        }

        let mut ab = left.clone();
        ab.merge(&right).unwrap();
        let mut ba = right.clone();
        ba.merge(&left).unwrap();

        assert_eq!(ab, whole);
        assert_eq!(ba, whole);
    }

    #[test]
    fn merge_rejects_other_geometry() {
        let mut a = Histogram::new(0, 100, 10).unwrap();
        let b = Histogram::new(0, 50, 20).unwrap();
        assert_eq!(a.merge(&b), Err(HistogramError::GeometryMismatch));
    }
}
