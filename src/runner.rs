//! Batch orchestration: filter, scan, render, write.
//!
//! Per-file read and syntax failures are logged and skipped so one bad module
//! never aborts the batch. Failures to write output are fatal.

use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::discovery::SourceFilter;
use crate::error::Result;
use crate::render::write_test_module;
use crate::scanner::Scanner;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    Written(PathBuf),
    NoTestableFunctions,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Test modules written, in processing order.
    pub written: Vec<PathBuf>,
    /// Source modules with no testable functions.
    pub skipped: Vec<PathBuf>,
    /// Source modules that could not be read or parsed, with the reason.
    pub failed: Vec<(PathBuf, String)>,
}

impl RunSummary {
    pub fn processed(&self) -> usize {
        self.written.len() + self.skipped.len() + self.failed.len()
    }
}

pub struct Runner {
    config: Config,
    scanner: Scanner,
}

impl Runner {
    pub fn new(config: Config) -> Result<Self> {
        Ok(Self {
            config,
            scanner: Scanner::new()?,
        })
    }

    /// Expands and filters the raw inputs into the ordered batch.
    pub fn collect_sources<P: AsRef<Path>>(&self, raw_paths: &[P]) -> Result<Vec<PathBuf>> {
        let sources = SourceFilter::new(&self.config.filter).collect(raw_paths)?;
        Ok(sources)
    }

    pub fn generate_tests<P: AsRef<Path>>(&mut self, raw_paths: &[P]) -> Result<RunSummary> {
        let sources = self.collect_sources(raw_paths)?;
        info!(modules = sources.len(), "Starting test generation");

        let mut summary = RunSummary::default();
        for path in sources {
            match self.process_file(&path) {
                Ok(FileOutcome::Written(output)) => {
                    info!(
                        source = %path.display(),
                        output = %output.display(),
                        "generated tests"
                    );
                    summary.written.push(output);
                }
                Ok(FileOutcome::NoTestableFunctions) => {
                    debug!(path = %path.display(), "no testable functions");
                    summary.skipped.push(path);
                }
                Err(e) if e.is_per_module() => {
                    warn!(path = %path.display(), error = %e, "skipping module");
                    summary.failed.push((path, e.to_string()));
                }
                Err(e) => return Err(e),
            }
        }

        info!(
            written = summary.written.len(),
            skipped = summary.skipped.len(),
            failed = summary.failed.len(),
            "Test generation complete"
        );
        Ok(summary)
    }

    pub fn process_file(&mut self, path: &Path) -> Result<FileOutcome> {
        let module = self.scanner.scan_file(path)?;
        if module.is_empty() {
            return Ok(FileOutcome::NoTestableFunctions);
        }

        let output = write_test_module(&module, &self.config.render)?;
        Ok(FileOutcome::Written(output))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RenderConfig;
    use crate::error::{Error, IoError};
    use std::fs;
    use tempfile::TempDir;

    fn write(root: &Path, relative: &str, contents: &str) -> PathBuf {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_writes_module_with_functions() {
        let temp_dir = TempDir::new().unwrap();
        write(temp_dir.path(), "pkg/calc.py", "def add(a, b):\n    return a + b\n");

        let mut runner = Runner::new(Config::default()).unwrap();
        let summary = runner.generate_tests(&[temp_dir.path()]).unwrap();

        let expected = temp_dir.path().join("pkg/tests/test_calc.py");
        assert_eq!(summary.written, vec![expected.clone()]);
        assert!(fs::read_to_string(expected).unwrap().contains("def test_add(self):"));
    }

    #[test]
    fn test_empty_module_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let source = write(temp_dir.path(), "consts.py", "ANSWER = 42\n");

        let mut runner = Runner::new(Config::default()).unwrap();
        let summary = runner.generate_tests(&[temp_dir.path()]).unwrap();

        assert!(summary.written.is_empty());
        assert_eq!(summary.skipped, vec![source]);
        assert!(!temp_dir.path().join("tests").exists());
    }

    #[test]
    fn test_syntax_error_does_not_abort_batch() {
        let temp_dir = TempDir::new().unwrap();
        let broken = write(temp_dir.path(), "a_broken.py", "def broken(:\n    pass\n");
        write(temp_dir.path(), "b_good.py", "def ok():\n    pass\n");

        let mut runner = Runner::new(Config::default()).unwrap();
        let summary = runner.generate_tests(&[temp_dir.path()]).unwrap();

        assert_eq!(summary.failed.len(), 1);
        assert_eq!(summary.failed[0].0, broken);
        assert!(summary.failed[0].1.contains("syntax error"));
        assert_eq!(
            summary.written,
            vec![temp_dir.path().join("tests/test_b_good.py")]
        );
        assert_eq!(summary.processed(), 2);
    }

    #[test]
    fn test_invalid_input_path_surfaces() {
        let mut runner = Runner::new(Config::default()).unwrap();
        let err = runner
            .generate_tests(&[Path::new("/nonexistent/input")])
            .unwrap_err();
        assert!(matches!(err, Error::Io(IoError::InvalidPath { .. })));
    }

    #[test]
    fn test_beside_source_output() {
        let temp_dir = TempDir::new().unwrap();
        let source = write(temp_dir.path(), "svc.py", "def run():\n    pass\n");

        let config = Config {
            render: RenderConfig {
                output_dir: ".".to_string(),
                ..RenderConfig::default()
            },
            ..Config::default()
        };
        let mut runner = Runner::new(config).unwrap();
        let outcome = runner.process_file(&source).unwrap();

        match outcome {
            FileOutcome::Written(path) => {
                assert_eq!(path, temp_dir.path().join("test_svc.py"));
                assert!(path.is_file());
            }
            other => panic!("expected a written module, got {other:?}"),
        }
    }

    #[test]
    fn test_unprefixed_beside_source_output_keeps_source() {
        let temp_dir = TempDir::new().unwrap();
        let source = write(temp_dir.path(), "svc.py", "def run():\n    pass\n");

        let config = Config {
            render: RenderConfig {
                output_dir: ".".to_string(),
                module_prefix: String::new(),
                ..RenderConfig::default()
            },
            ..Config::default()
        };
        let mut runner = Runner::new(config).unwrap();
        let err = runner.generate_tests(&[temp_dir.path()]).unwrap_err();

        assert!(matches!(err, Error::Io(IoError::OverwritesSource { .. })));
        assert!(!err.is_per_module());
        assert_eq!(fs::read_to_string(source).unwrap(), "def run():\n    pass\n");
    }

    #[test]
    fn test_same_directory_spelled_twice_is_generated_once() {
        let temp_dir = TempDir::new().unwrap();
        write(temp_dir.path(), "app/svc.py", "def run():\n    pass\n");

        let mut runner = Runner::new(Config::default()).unwrap();
        let summary = runner
            .generate_tests(&[temp_dir.path().join("app"), temp_dir.path().join("./app")])
            .unwrap();

        assert_eq!(summary.written.len(), 1);
        assert_eq!(summary.processed(), 1);
    }

    #[test]
    fn test_generated_tests_are_not_rescanned_by_default() {
        let temp_dir = TempDir::new().unwrap();
        write(temp_dir.path(), "svc.py", "def run():\n    pass\n");

        let mut runner = Runner::new(Config::default()).unwrap();
        runner.generate_tests(&[temp_dir.path()]).unwrap();
        let second = runner.generate_tests(&[temp_dir.path()]).unwrap();

        assert_eq!(second.written.len(), 1);
        assert!(second.failed.is_empty());
        assert!(!temp_dir.path().join("tests/tests").exists());
    }
}
