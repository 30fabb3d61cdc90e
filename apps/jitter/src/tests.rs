//! Tests for the CLI plumbing shared by the binaries.

#[cfg(test)]
mod output_file {
    use std::io::Write;

    use anyhow::bail;

    use crate::{check_output_path, write_output_file};

    #[test]
    fn refuses_to_clobber() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("simulation.csv");
        std::fs::write(&path, "keep me\n").unwrap();

        assert!(check_output_path(&path, false).is_err());
        let err = write_output_file(&path, false, |f| Ok(f.write_all(b"1,0\n")?)).unwrap_err();
        assert!(err.to_string().contains("already exists"), "{err}");
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "keep me\n");
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1, "temporary file left behind");
    }

    #[test]
    fn overwrite_replaces() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("simulation.csv");
        std::fs::write(&path, "old contents\n").unwrap();

        assert!(check_output_path(&path, true).is_ok());
        write_output_file(&path, true, |f| Ok(f.write_all(b"1,0\n")?)).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "1,0\n");
    }

    #[test]
    fn creates_new_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fresh.csv");
        assert!(check_output_path(&path, false).is_ok());
        write_output_file(&path, false, |f| Ok(f.write_all(b"2,3,4\n")?)).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "2,3,4\n");
    }

    #[test]
    fn failed_write_leaves_nothing_behind() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("simulation.csv");

        let err = write_output_file(&path, false, |f| {
            f.write_all(b"1,0\n2,")?;
            bail!("generation aborted")
        })
        .unwrap_err();
        assert!(err.to_string().contains("generation aborted"), "{err}");
        assert!(!path.exists());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);

        // A rerun without the overwrite flag is not blocked by the failed one.
        assert!(check_output_path(&path, false).is_ok());
    }
}

#[cfg(test)]
mod config_file {
    use jt_core::SimConfig;

    use crate::{load_run_config, resolve_seed};

    fn write_config(text: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("run.toml");
        std::fs::write(&path, text).unwrap();
        (dir, path)
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let (_dir, path) = write_config("entity_count = 500\nseed = 7\n");

        let run = load_run_config(&path).unwrap();
        assert_eq!(run.sim.entity_count, 500);
        assert_eq!(run.seed, Some(7));
        assert_eq!(run.sim.horizon_ms, SimConfig::default().horizon_ms);
        assert_eq!(run.sim.spread, SimConfig::default().spread);
    }

    #[test]
    fn missing_seed_stays_unset() {
        let (_dir, path) = write_config("entity_count = 500\n");
        assert_eq!(load_run_config(&path).unwrap().seed, None);

        let (_dir, path) = write_config("seed = 0\n");
        assert_eq!(load_run_config(&path).unwrap().seed, Some(0));
    }

    #[test]
    fn seed_resolution_order() {
        assert_eq!(resolve_seed(Some(1), Some(2)), 1);
        assert_eq!(resolve_seed(None, Some(2)), 2);
        assert_eq!(resolve_seed(None, Some(0)), 0);

        // Without either source every run gets its own seed.
        let drawn: Vec<u64> = (0..4).map(|_| resolve_seed(None, None)).collect();
        assert!(drawn.windows(2).any(|w| w[0] != w[1]), "entropy seeds repeated: {drawn:?}");
    }

    #[test]
    fn unknown_key_rejected() {
        let (_dir, path) = write_config("entity_cnt = 500\n");
        assert!(load_run_config(&path).is_err());
    }

    #[test]
    fn wrong_type_rejected() {
        let (_dir, path) = write_config("seed = \"seven\"\n");
        assert!(load_run_config(&path).is_err());
    }

    #[test]
    fn missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.toml");
        let err = load_run_config(&path).unwrap_err();
        assert!(err.to_string().contains("nope.toml"), "{err}");
    }
}

#[cfg(test)]
mod duration_flags {
    use crate::duration_flag_ms;

    #[test]
    fn converts_to_millis() {
        assert_eq!(duration_flag_ms("graph-length", "60m").unwrap(), 3_600_000);
        assert_eq!(duration_flag_ms("graph-start-time", "24h").unwrap(), 86_400_000);
        assert_eq!(duration_flag_ms("simulation-time", "45s").unwrap(), 45_000);
    }

    #[test]
    fn error_names_the_flag() {
        let err = duration_flag_ms("graph-length", "soon").unwrap_err();
        assert!(err.to_string().contains("--graph-length"), "{err}");
    }
}

#[cfg(test)]
mod banner {
    use jt_histogram::{Histogram, Window};

    use crate::window_banner;

    #[test]
    fn shows_start_and_end() {
        // 24h start, 60m long: the second value is the end, not the length.
        let window = Window::new(86_400_000, 3_600_000, 1_000);
        let histogram = Histogram::for_window(&window).unwrap();
        assert_eq!(
            window_banner(&histogram),
            "24:00:00 .. 25:00:00 (1000 buckets of 3600 ms)"
        );
    }
}
