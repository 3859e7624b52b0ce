use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::IoError;
use crate::utils::clean_path;

pub const PYTHON_EXTENSION: &str = "py";

/// Recursively collects regular files under `root` with the given extension,
/// in file-name order so batches are reproducible across platforms.
pub fn walk_source_files(root: &Path, extension: &str) -> Result<Vec<PathBuf>, IoError> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|e| IoError::directory_scan_error(root, e))?;

        if entry.file_type().is_file() && has_extension(entry.path(), extension) {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

pub fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension().is_some_and(|ext| ext == extension)
}

/// File name without its final extension: `module.py` -> `module`.
pub fn module_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Key under which two spellings of the same file compare equal:
/// the canonical path when it resolves, the lexically cleaned one otherwise.
pub fn identity_key(path: &Path) -> PathBuf {
    fs::canonicalize(path).unwrap_or_else(|_| clean_path(path))
}
