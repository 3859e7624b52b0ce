//! Parsing of operator-typed answers into configuration values.
//!
//! Each helper accepts the single-letter abbreviation or the full word.
//! Empty input selects the documented default; anything unrecognised is
//! logged as a warning and also falls back to the default.

use tracing::warn;

use super::{DocstringMode, TestFramework, TestOutcome};
use crate::utils::split_list;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TestLocation {
    /// A dedicated output directory next to each source module.
    #[default]
    NewFolder,
    /// The test module lands in the source module's own directory.
    BesideSource,
}

pub fn parse_framework(input: &str) -> TestFramework {
    match normalize(input).as_str() {
        "" => TestFramework::default(),
        "u" | "unittest" => TestFramework::Unittest,
        "p" | "pytest" => TestFramework::Pytest,
        other => {
            warn!(value = other, "unknown test framework, using unittest");
            TestFramework::default()
        }
    }
}

pub fn parse_outcome(input: &str) -> TestOutcome {
    match normalize(input).as_str() {
        "" | "p" | "pass" => TestOutcome::Pass,
        "f" | "fail" => TestOutcome::Fail,
        other => {
            warn!(value = other, "unknown test outcome, tests will pass");
            TestOutcome::default()
        }
    }
}

pub fn parse_docstring_mode(input: &str) -> DocstringMode {
    match normalize(input).as_str() {
        "s" | "source" => DocstringMode::Source,
        "e" | "empty" => DocstringMode::Empty,
        "" | "n" | "none" => DocstringMode::None,
        other => {
            warn!(value = other, "unknown docstring mode, emitting none");
            DocstringMode::default()
        }
    }
}

pub fn parse_test_location(input: &str) -> TestLocation {
    match normalize(input).as_str() {
        "" | "n" | "new" => TestLocation::NewFolder,
        "s" | "source" => TestLocation::BesideSource,
        other => {
            warn!(value = other, "unknown test location, using a new folder");
            TestLocation::default()
        }
    }
}

pub fn parse_yes_no(input: &str, default: bool) -> bool {
    match normalize(input).as_str() {
        "" => default,
        "y" | "yes" => true,
        "n" | "no" => false,
        other => {
            warn!(value = other, default, "expected y or n, using default");
            default
        }
    }
}

/// Indentation must be a positive number of spaces.
pub fn parse_indent(input: &str, default: usize) -> usize {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return default;
    }
    match trimmed.parse::<usize>() {
        Ok(size) if size > 0 => size,
        _ => {
            warn!(
                value = trimmed,
                default, "invalid indentation size, using the default"
            );
            default
        }
    }
}

pub fn parse_text(input: &str, default: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    }
}

pub fn parse_list(input: &str) -> Vec<String> {
    split_list(input)
}

fn normalize(input: &str) -> String {
    input.trim().to_lowercase()
}
