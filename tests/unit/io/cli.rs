//! Tests for command-line parsing and sweep processing

#[cfg(test)]
mod tests {
    use clap::Parser;
    use lbmsweep::io::cli::{Cli, ProgressMode, SweepProcessor, SweepReport};
    use lbmsweep::io::configuration::{DEFAULT_EXECUTABLE, DEFAULT_MAX_ITER};
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    // Tests parsing with no arguments uses every default
    // Verified by changing the default executable
    #[test]
    fn test_cli_parse_defaults() {
        let cli = Cli::parse_from(["lbmsweep"]);

        assert_eq!(cli.executable, PathBuf::from(DEFAULT_EXECUTABLE));
        assert_eq!(cli.log, None);
        assert_eq!(cli.settings, None);
        assert_eq!(cli.progress, ProgressMode::Bar);
        assert!(!cli.dry_run);
        assert!(!cli.count);
        assert!(!cli.quiet);
        assert_eq!(cli.verbose, 0);
        assert_eq!(cli.log_path(), PathBuf::from("./lbm.log"));
    }

    // Tests parsing with every option
    #[test]
    fn test_cli_parse_all_args() {
        let cli = Cli::parse_from([
            "lbmsweep",
            "--executable",
            "/opt/lbm",
            "--log",
            "runs.log",
            "--settings",
            "sweep.json",
            "--max-iter",
            "100",
            "--warmup-iter",
            "2",
            "--repetitions",
            "3",
            "--dry-run",
            "--progress",
            "plain",
            "-vv",
        ]);

        assert_eq!(cli.executable, PathBuf::from("/opt/lbm"));
        assert_eq!(cli.log_path(), PathBuf::from("runs.log"));
        assert_eq!(cli.settings, Some(PathBuf::from("sweep.json")));
        assert_eq!(cli.max_iter, Some(100));
        assert_eq!(cli.warmup_iter, Some(2));
        assert_eq!(cli.repetitions, Some(3));
        assert!(cli.dry_run);
        assert_eq!(cli.progress, ProgressMode::Plain);
        assert_eq!(cli.log_level(), "trace");
    }

    // Tests short flags
    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::parse_from(["lbmsweep", "-e", "./bench", "-n", "-c", "-p", "log", "-v"]);
        assert_eq!(cli.executable, PathBuf::from("./bench"));
        assert_eq!(cli.log_path(), PathBuf::from("./bench.log"));
        assert!(cli.dry_run);
        assert!(cli.count);
        assert_eq!(cli.progress, ProgressMode::Log);
        assert_eq!(cli.log_level(), "debug");
    }

    // Tests quiet silences progress and lowers verbosity
    // Verified by ignoring the quiet flag
    #[test]
    fn test_quiet() {
        let cli = Cli::parse_from(["lbmsweep", "--quiet", "-vv"]);
        assert_eq!(cli.effective_progress(), ProgressMode::None);
        assert_eq!(cli.log_level(), "warn");

        let loud = Cli::parse_from(["lbmsweep", "--progress", "none"]);
        assert_eq!(loud.effective_progress(), ProgressMode::None);
        assert_eq!(loud.log_level(), "info");
    }

    // Tests command-line overrides win over settings
    #[test]
    fn test_settings_overrides() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("sweep.json");
        fs::write(&path, r#"{"max_iter": 7, "warmup_iter": 3}"#).expect("write settings");

        let cli = Cli::parse_from([
            "lbmsweep",
            "--settings",
            path.to_str().expect("utf-8 temp path"),
            "--warmup-iter",
            "1",
        ]);
        let settings = cli.settings().expect("settings load");
        assert_eq!(settings.max_iter, 7);
        assert_eq!(settings.warmup_iter, 1);

        let defaults = Cli::parse_from(["lbmsweep"]).settings().expect("defaults");
        assert_eq!(defaults.max_iter, DEFAULT_MAX_ITER);
    }

    // Tests count mode reports the sweep size without touching the log
    #[test]
    fn test_process_count() {
        let dir = TempDir::new().expect("temp dir");
        let log = dir.path().join("count.log");
        let cli = Cli::parse_from([
            "lbmsweep",
            "--count",
            "--log",
            log.to_str().expect("utf-8 temp path"),
        ]);

        let report = SweepProcessor::new(cli).process().expect("count succeeds");
        assert_eq!(report, SweepReport::Counted(2304 * 13));
        assert!(!log.exists());
    }

    // Tests dry-run lists every configuration without running anything
    #[test]
    fn test_process_dry_run() {
        let dir = TempDir::new().expect("temp dir");
        let settings = dir.path().join("small.json");
        fs::write(
            &settings,
            r#"{
                "device_types": ["gpu"],
                "device_ids": ["0", "1"],
                "domain_sizes": ["64"],
                "grids": ["dGrid"],
                "space_curves": ["sweep"],
                "transfer_modes": ["get"],
                "stencil_semantics": ["grid"],
                "collisions": ["bgk"],
                "occ": ["nOCC"]
            }"#,
        )
        .expect("write settings");
        let log = dir.path().join("dry.log");

        let cli = Cli::parse_from([
            "lbmsweep",
            "--dry-run",
            "--settings",
            settings.to_str().expect("utf-8 temp path"),
            "--log",
            log.to_str().expect("utf-8 temp path"),
        ]);
        let report = SweepProcessor::new(cli).process().expect("dry run succeeds");

        // "0": 2 precisions * 3 streaming, "0 1": 2 precisions * pull
        assert_eq!(report, SweepReport::Listed(8));
        assert!(!log.exists());
    }

    // Tests a full run through the processor
    #[cfg(unix)]
    #[test]
    fn test_process_execute() {
        let dir = TempDir::new().expect("temp dir");
        let settings = dir.path().join("tiny.json");
        fs::write(
            &settings,
            r#"{
                "device_types": ["cpu"],
                "domain_sizes": ["64"],
                "grids": ["dGrid"],
                "space_curves": ["sweep"],
                "transfer_modes": ["get"],
                "stencil_semantics": ["grid"],
                "collisions": ["bgk"],
                "occ": ["nOCC"],
                "streaming_methods": ["pull"]
            }"#,
        )
        .expect("write settings");
        let log = dir.path().join("echo.log");

        let cli = Cli::parse_from([
            "lbmsweep",
            "--executable",
            "echo",
            "--quiet",
            "--settings",
            settings.to_str().expect("utf-8 temp path"),
            "--log",
            log.to_str().expect("utf-8 temp path"),
        ]);
        let report = SweepProcessor::new(cli).process().expect("sweep succeeds");

        match report {
            SweepReport::Executed(summary) => {
                assert_eq!(summary.total, 2);
                assert_eq!(summary.executed, 2);
            }
            other => unreachable!("Expected Executed, got {other:?}"),
        }
        let text = fs::read_to_string(&log).expect("read log");
        assert_eq!(text.lines().filter(|l| l.starts_with("echo ")).count(), 2);
    }
}
