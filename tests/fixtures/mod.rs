#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use walkdir::WalkDir;

pub fn get_test_fixture_path(language: &str, fixture_name: Option<&str>) -> PathBuf {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(language);
    match fixture_name {
        Some(name) => root.join(name),
        None => root,
    }
}

/// Copies a fixture project into a fresh temp dir.
///
/// Generated test modules land next to the sources, and the fixture tree
/// itself lives under `tests/`, which the default folder filter skips.
pub fn copy_fixture(language: &str, fixture_name: &str) -> TempDir {
    let source = get_test_fixture_path(language, Some(fixture_name));
    let temp_dir = TempDir::new().unwrap();

    for entry in WalkDir::new(&source) {
        let entry = entry.unwrap();
        let relative = entry.path().strip_prefix(&source).unwrap();
        let target = temp_dir.path().join(relative);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).unwrap();
        } else {
            fs::copy(entry.path(), &target).unwrap();
        }
    }

    temp_dir
}

pub fn relative_paths(root: &Path, paths: &[PathBuf]) -> Vec<String> {
    paths
        .iter()
        .map(|p| {
            p.strip_prefix(root)
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/")
        })
        .collect()
}
