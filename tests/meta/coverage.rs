//! Keeps the unit test tree in step with the source tree

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::{Path, PathBuf};

    const SRC_ROOT: &str = "src";
    const UNIT_ROOT: &str = "tests/unit";

    // Entry points and module files carry no behavior of their own
    fn is_structural(relative: &Path) -> bool {
        matches!(
            relative.file_name().and_then(|name| name.to_str()),
            Some("mod.rs" | "lib.rs" | "main.rs")
        )
    }

    fn rust_files(root: &Path) -> io::Result<BTreeSet<PathBuf>> {
        let mut found = BTreeSet::new();
        let mut pending = vec![root.to_path_buf()];
        while let Some(dir) = pending.pop() {
            for entry in fs::read_dir(&dir)? {
                let path = entry?.path();
                if path.is_dir() {
                    pending.push(path);
                } else if path.extension().is_some_and(|ext| ext == "rs") {
                    let relative = path
                        .strip_prefix(root)
                        .map_err(|_| io::Error::other("path escaped its root"))?;
                    found.insert(relative.to_path_buf());
                }
            }
        }
        Ok(found)
    }

    fn behavior_files(root: &str) -> BTreeSet<PathBuf> {
        rust_files(Path::new(root))
            .unwrap_or_else(|error| unreachable!("Failed to scan {root}: {error}"))
            .into_iter()
            .filter(|path| !is_structural(path))
            .collect()
    }

    fn listing(paths: &[&PathBuf], from: &str, to: &str) -> String {
        paths
            .iter()
            .map(|path| format!("  - {from}/{0} -> {to}/{0}", path.display()))
            .collect::<Vec<_>>()
            .join("\n")
    }

    // Tests every source file has a unit test file at the mirrored path
    #[test]
    fn test_sources_have_unit_tests() {
        let sources = behavior_files(SRC_ROOT);
        let units = behavior_files(UNIT_ROOT);
        let missing: Vec<_> = sources.difference(&units).collect();

        assert!(
            missing.is_empty(),
            "Source files without unit tests:\n{}",
            listing(&missing, SRC_ROOT, UNIT_ROOT)
        );
    }

    // Tests no unit test file outlives its source file
    #[test]
    fn test_unit_tests_have_sources() {
        let sources = behavior_files(SRC_ROOT);
        let units = behavior_files(UNIT_ROOT);
        let orphaned: Vec<_> = units.difference(&sources).collect();

        assert!(
            orphaned.is_empty(),
            "Unit test files without sources:\n{}",
            listing(&orphaned, UNIT_ROOT, SRC_ROOT)
        );
    }

    // Tests each unit test file is declared by its directory's mod.rs
    // Verified by commenting out one `mod` line
    #[test]
    fn test_unit_tests_are_compiled() {
        let mut undeclared = Vec::new();
        for relative in behavior_files(UNIT_ROOT) {
            let Some(stem) = relative.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };
            let module_file = Path::new(UNIT_ROOT)
                .join(relative.parent().unwrap_or_else(|| Path::new("")))
                .join("mod.rs");
            let declared = fs::read_to_string(&module_file)
                .is_ok_and(|text| text.lines().any(|line| line.trim() == format!("mod {stem};")));
            if !declared {
                undeclared.push(format!("  - {UNIT_ROOT}/{}", relative.display()));
            }
        }

        assert!(
            undeclared.is_empty(),
            "Unit test files never declared as modules:\n{}",
            undeclared.join("\n")
        );
    }

    // Tests every non-structural test file defines at least one test
    #[test]
    fn test_test_files_contain_tests() {
        let files = rust_files(Path::new("tests"))
            .unwrap_or_else(|error| unreachable!("Failed to scan tests: {error}"));
        let empty: Vec<String> = files
            .iter()
            .filter(|relative| !is_structural(relative))
            .filter(|relative| {
                !fs::read_to_string(Path::new("tests").join(relative))
                    .is_ok_and(|text| text.contains("#[test]"))
            })
            .map(|relative| format!("  - tests/{}", relative.display()))
            .collect();

        assert!(
            empty.is_empty(),
            "Test files without any #[test] functions:\n{}",
            empty.join("\n")
        );
    }
}
