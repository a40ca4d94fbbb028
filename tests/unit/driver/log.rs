//! Tests for the shared run log layout and append behavior

#[cfg(test)]
mod tests {
    use lbmsweep::SweepError;
    use lbmsweep::driver::invocation::Invocation;
    use lbmsweep::driver::log::{SweepLog, default_log_path};
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    fn invocation(args: &[&str]) -> Invocation {
        Invocation {
            program: PathBuf::from("./lbm"),
            args: args.iter().map(ToString::to_string).collect(),
        }
    }

    // Tests header layout: blank line, delimiter, command, delimiter
    // Verified by dropping the leading newline
    #[test]
    fn test_header_layout() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("lbm.log");

        let mut log = SweepLog::open(&path).expect("open log");
        log.write_header(&invocation(&["--grid", "dGrid"]))
            .expect("write header");

        let text = fs::read_to_string(&path).expect("read log");
        assert_eq!(
            text,
            "\n-------------------------------------------\n\
             ./lbm --grid dGrid\n\
             -------------------------------------------\n"
        );
        assert_eq!(log.path(), path.as_path());
    }

    // Tests reopening appends instead of truncating
    // Verified by opening with truncate
    #[test]
    fn test_append_across_opens() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("lbm.log");
        fs::write(&path, "earlier sweep\n").expect("seed log");

        let mut log = SweepLog::open(&path).expect("open log");
        log.write_header(&invocation(&["--occ", "nOCC"]))
            .expect("write header");

        let text = fs::read_to_string(&path).expect("read log");
        assert!(text.starts_with("earlier sweep\n"));
        assert!(text.contains("./lbm --occ nOCC"));
    }

    // Tests an unopenable log is a fatal log error
    #[test]
    fn test_open_failure() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("missing").join("lbm.log");

        match SweepLog::open(&path) {
            Err(SweepError::LogFile { operation, .. }) => assert_eq!(operation, "open"),
            Err(other) => unreachable!("Expected LogFile error, got {other}"),
            Ok(_) => unreachable!("Opening inside a missing directory should fail"),
        }
    }

    // Tests child handles can be produced repeatedly
    #[test]
    fn test_child_stdio() {
        let dir = TempDir::new().expect("temp dir");
        let log = SweepLog::open(&dir.path().join("lbm.log")).expect("open log");
        assert!(log.child_stdio().is_ok());
        assert!(log.child_stdio().is_ok());
    }

    // Tests the default log name appends the suffix to the executable path
    #[test]
    fn test_default_log_path() {
        assert_eq!(default_log_path(Path::new("./lbm")), PathBuf::from("./lbm.log"));
        assert_eq!(
            default_log_path(Path::new("/opt/bench/lbm")),
            PathBuf::from("/opt/bench/lbm.log")
        );
    }
}
