//! Diagnostics go to stderr; stdout carries prompts and the run summary.

use std::io;
use tracing::Level;
use tracing_subscriber::EnvFilter;

const CRATE_TARGET: &str = "pystub";

/// Ordered from least to most output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
    Trace,
}

impl Verbosity {
    /// `-q` wins over any number of `-v`.
    pub fn from_flags(verbose: u8, quiet: bool) -> Self {
        match (quiet, verbose) {
            (true, _) => Self::Quiet,
            (false, 0) => Self::Normal,
            (false, 1) => Self::Verbose,
            (false, 2) => Self::Debug,
            (false, _) => Self::Trace,
        }
    }

    pub fn level(self) -> Level {
        match self {
            Self::Quiet => Level::ERROR,
            Self::Normal => Level::WARN,
            Self::Verbose => Level::INFO,
            Self::Debug => Level::DEBUG,
            Self::Trace => Level::TRACE,
        }
    }

    /// Filter directive used when `RUST_LOG` is unset.
    pub fn directive(self) -> String {
        format!("{CRATE_TARGET}={}", self.level())
    }

    fn shows_source_location(self) -> bool {
        self >= Self::Debug
    }

    fn shows_timestamps(self) -> bool {
        self >= Self::Verbose
    }
}

pub fn init(verbosity: Verbosity) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.directive()));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_file(verbosity.shows_source_location())
        .with_line_number(verbosity.shows_source_location())
        .compact();

    match verbosity {
        Verbosity::Quiet => builder.with_writer(io::sink).init(),
        _ if verbosity.shows_timestamps() => builder.with_writer(io::stderr).init(),
        _ => builder.without_time().with_writer(io::stderr).init(),
    }
}
