//! End-to-end generation tests
//!
//! Runs the full batch (discovery, scan, render, write) over a copied
//! fixture project and inspects the files left on disk.

mod fixtures;

use fixtures::{copy_fixture, relative_paths};
use pretty_assertions::assert_eq;
use pystub::config::{Config, FilterConfig, RenderConfig, TestFramework};
use pystub::Runner;
use std::fs;

#[test]
fn test_default_run_over_project() {
    let project = copy_fixture("python", "project");
    let mut runner = Runner::new(Config::default()).unwrap();

    let summary = runner.generate_tests(&[project.path()]).unwrap();

    assert_eq!(
        relative_paths(project.path(), &summary.written),
        vec![
            "app/tests/test_core.py",
            "app/tests/test_models.py",
            "app/staging/tests/test_jobs.py",
        ]
    );
    assert_eq!(
        relative_paths(project.path(), &summary.skipped),
        vec!["app/constants.py"]
    );
    assert_eq!(summary.failed.len(), 1);
    assert!(summary.failed[0].0.ends_with("app/broken.py"));

    // No stub for the module without functions, none for the broken one.
    assert!(!project.path().join("app/tests/test_constants.py").exists());
    assert!(!project.path().join("app/tests/test_broken.py").exists());
    // Existing tests are left alone.
    assert!(project.path().join("app/tests/test_existing.py").exists());
}

#[test]
fn test_models_output_on_disk() {
    let project = copy_fixture("python", "project");
    let mut runner = Runner::new(Config::default()).unwrap();
    runner
        .generate_tests(&[project.path().join("app/models.py")])
        .unwrap();

    let written = fs::read_to_string(project.path().join("app/tests/test_models.py")).unwrap();
    let test_names: Vec<&str> = written
        .lines()
        .filter_map(|line| line.trim().strip_prefix("def "))
        .collect();

    assert_eq!(
        test_names,
        vec![
            "setUp(self):",
            "test_greeting(self):",
            "test___secret(self):",
            "test_grant(self):",
            "test_promote(self):",
            "test_make_user(self):",
            "tearDown(self):",
        ]
    );
}

#[test]
fn test_pytest_beside_source_run() {
    let project = copy_fixture("python", "project");
    let config = Config {
        filter: FilterConfig {
            module_patterns_to_ignore: vec!["broken".to_string(), "models".to_string()],
            ..FilterConfig::default()
        },
        render: RenderConfig {
            output_dir: ".".to_string(),
            framework: TestFramework::Pytest,
            wrap_in_class: false,
            module_prefix: "pt_".to_string(),
            ..RenderConfig::default()
        },
    };
    let mut runner = Runner::new(config).unwrap();

    let summary = runner.generate_tests(&[project.path()]).unwrap();

    assert!(summary.failed.is_empty());
    assert_eq!(summary.written.len(), 2);

    let jobs = fs::read_to_string(project.path().join("app/staging/pt_jobs.py")).unwrap();
    assert_eq!(
        jobs,
        "import pytest\n\ndef test_nightly():\n  assert True\n  return\n"
    );
    assert!(project.path().join("app/pt_core.py").exists());
}

#[test]
fn test_rerun_overwrites_previous_output() {
    let project = copy_fixture("python", "project");
    let target = project.path().join("app/staging/jobs.py");

    let mut runner = Runner::new(Config::default()).unwrap();
    runner.generate_tests(&[&target]).unwrap();

    let output = project.path().join("app/staging/tests/test_jobs.py");
    fs::write(&output, "edited by hand").unwrap();

    let summary = runner.generate_tests(&[&target]).unwrap();
    assert_eq!(summary.written, vec![output.clone()]);
    assert!(fs::read_to_string(&output).unwrap().contains("def test_nightly(self):"));
}
