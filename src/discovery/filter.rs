use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

use super::utils::{identity_key, module_stem, walk_source_files, PYTHON_EXTENSION};
use crate::config::FilterConfig;
use crate::error::IoError;
use crate::utils::is_dunder;

/// Turns raw operator input (files and directories) into the ordered list of
/// source modules to scaffold.
///
/// Exclusion is plain substring containment: the folder tokens are tested
/// against the file's parent path and the module patterns against the whole
/// path, so a `tests` token also skips `contests/`.
pub struct SourceFilter<'a> {
    config: &'a FilterConfig,
}

impl<'a> SourceFilter<'a> {
    pub fn new(config: &'a FilterConfig) -> Self {
        Self { config }
    }

    pub fn collect<P: AsRef<Path>>(&self, raw_paths: &[P]) -> Result<Vec<PathBuf>, IoError> {
        let mut candidates = Vec::new();
        for raw in raw_paths {
            candidates.extend(expand_input(raw.as_ref())?);
        }

        // Different spellings of one file (`app` and `./app`, relative and
        // absolute) collapse to the first one seen.
        let total = candidates.len();
        let mut seen = HashSet::new();
        let kept: Vec<PathBuf> = candidates
            .into_iter()
            .filter(|path| self.accepts(path))
            .filter(|path| seen.insert(identity_key(path)))
            .collect();

        debug!(candidates = total, kept = kept.len(), "filtered source modules");
        Ok(kept)
    }

    pub fn accepts(&self, path: &Path) -> bool {
        if self.in_ignored_folder(path) {
            trace!(path = %path.display(), "skipping: ignored folder");
            return false;
        }
        if !is_business_module(path) {
            trace!(path = %path.display(), "skipping: dunder module");
            return false;
        }
        if self.matches_ignored_pattern(path) {
            trace!(path = %path.display(), "skipping: ignored module pattern");
            return false;
        }
        true
    }

    fn in_ignored_folder(&self, path: &Path) -> bool {
        let parent = path
            .parent()
            .map(|p| p.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.config
            .folders_to_ignore
            .iter()
            .any(|token| parent.contains(token.as_str()))
    }

    fn matches_ignored_pattern(&self, path: &Path) -> bool {
        let full = path.to_string_lossy();
        self.config
            .module_patterns_to_ignore
            .iter()
            .any(|pattern| full.contains(pattern.as_str()))
    }
}

/// A regular file is taken as-is; a directory expands to its Python files.
pub fn expand_input(path: &Path) -> Result<Vec<PathBuf>, IoError> {
    if path.is_file() {
        Ok(vec![path.to_path_buf()])
    } else if path.is_dir() {
        walk_source_files(path, PYTHON_EXTENSION)
    } else {
        Err(IoError::invalid_path(path))
    }
}

/// Dunder modules such as `__init__.py` carry no business logic worth stubbing.
pub fn is_business_module(path: &Path) -> bool {
    !is_dunder(&module_stem(path))
}
