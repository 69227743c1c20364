//! Structural checks that keep `src` and `tests/unit` in step

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::{Path, PathBuf};

    // Entry points and module declaration files carry no logic of their own
    fn is_exempt(relative: &str) -> bool {
        relative == "main.rs" || relative == "lib.rs" || relative.ends_with("mod.rs")
    }

    // Relative paths of every directory and `.rs` file below `base`
    fn rust_paths(base: &Path) -> io::Result<BTreeSet<String>> {
        let mut found = BTreeSet::new();
        let mut pending = vec![base.to_path_buf()];

        while let Some(dir) = pending.pop() {
            for entry in fs::read_dir(&dir)? {
                let path = entry?.path();
                let relative = path
                    .strip_prefix(base)
                    .map_err(|_strip_error| io::Error::other("path outside base"))?
                    .to_string_lossy()
                    .replace('\\', "/");

                if path.is_dir() {
                    found.insert(relative);
                    pending.push(path);
                } else if path.extension().and_then(|ext| ext.to_str()) == Some("rs") {
                    found.insert(relative);
                }
            }
        }

        Ok(found)
    }

    fn rust_files(base: &Path) -> io::Result<Vec<PathBuf>> {
        Ok(rust_paths(base)?
            .into_iter()
            .map(|relative| base.join(relative))
            .filter(|path| path.is_file())
            .collect())
    }

    #[test]
    fn test_all_src_files_have_unit_tests() {
        let src = rust_paths(Path::new("src")).unwrap_or_default();
        let unit = rust_paths(Path::new("tests/unit")).unwrap_or_default();
        assert!(!src.is_empty(), "src directory could not be read");

        let missing: Vec<String> = src
            .iter()
            .filter(|path| !is_exempt(path) && !unit.contains(*path))
            .map(|path| format!("  - src/{path} -> tests/unit/{path}"))
            .collect();

        assert!(
            missing.is_empty(),
            "Source files without unit test counterparts:\n{}",
            missing.join("\n")
        );
    }

    #[test]
    fn test_all_unit_tests_have_src_counterparts() {
        let src = rust_paths(Path::new("src")).unwrap_or_default();
        let unit = rust_paths(Path::new("tests/unit")).unwrap_or_default();

        let orphaned: Vec<String> = unit
            .iter()
            .filter(|path| !path.ends_with("mod.rs") && !src.contains(*path))
            .map(|path| format!("  - tests/unit/{path} (no src/{path})"))
            .collect();

        assert!(
            orphaned.is_empty(),
            "Unit test files without source counterparts:\n{}",
            orphaned.join("\n")
        );
    }

    #[test]
    fn test_all_test_files_contain_tests() {
        let files = rust_files(Path::new("tests")).unwrap_or_default();
        assert!(!files.is_empty(), "tests directory could not be read");

        let empty: Vec<String> = files
            .iter()
            .filter(|path| path.file_name().and_then(|name| name.to_str()) != Some("mod.rs"))
            .filter(|path| {
                fs::read_to_string(path)
                    .map(|content| !content.contains("#[test]"))
                    .unwrap_or(true)
            })
            .map(|path| format!("  - {}", path.display()))
            .collect();

        assert!(
            empty.is_empty(),
            "Test files without any #[test] functions:\n{}",
            empty.join("\n")
        );
    }
}
