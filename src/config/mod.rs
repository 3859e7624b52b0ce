//! Generation settings.
//!
//! [`Config`] bundles the path-filtering settings and the immutable
//! [`RenderConfig`] read by the renderer. Every field has a default, so an
//! empty configuration file (or none at all) still produces valid output.

pub mod parse;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

use crate::error::ConfigError;
use crate::utils::dedupe_preserving_order;

pub const DEFAULT_FOLDER_TO_IGNORE: &str = "tests";
pub const DEFAULT_OUTPUT_DIR: &str = "tests";
pub const BESIDE_SOURCE_DIR: &str = ".";
pub const DEFAULT_INDENT_SIZE: usize = 2;
pub const DEFAULT_MODULE_PREFIX: &str = "test_";
pub const DEFAULT_FUNCTION_PREFIX: &str = "test_";
pub const DEFAULT_CLASS_NAME: &str = "TestCase";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TestFramework {
    #[default]
    Unittest,
    Pytest,
}

impl TestFramework {
    /// Python module name imported by generated tests.
    pub fn module_name(&self) -> &'static str {
        match self {
            TestFramework::Unittest => "unittest",
            TestFramework::Pytest => "pytest",
        }
    }

    /// Base class for the wrapping test class, if the framework needs one.
    pub fn base_class(&self) -> Option<&'static str> {
        match self {
            TestFramework::Unittest => Some("unittest.TestCase"),
            TestFramework::Pytest => None,
        }
    }

    pub fn supports_lifecycle_hooks(&self) -> bool {
        matches!(self, TestFramework::Unittest)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DocstringMode {
    /// Docstring text carried by the catalog.
    Source,
    /// An empty `""""""` docstring.
    Empty,
    #[default]
    None,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestOutcome {
    #[default]
    Pass,
    Fail,
    /// Literal statement emitted verbatim as the test body.
    Statement(String),
}

impl TestOutcome {
    pub fn statement(&self) -> &str {
        match self {
            TestOutcome::Pass => "assert True",
            TestOutcome::Fail => "assert False",
            TestOutcome::Statement(statement) => statement,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FilterConfig {
    /// Substrings; a file whose parent path contains any of them is skipped.
    pub folders_to_ignore: Vec<String>,
    /// Substrings; a file whose path contains any of them is skipped.
    pub module_patterns_to_ignore: Vec<String>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            folders_to_ignore: vec![DEFAULT_FOLDER_TO_IGNORE.to_string()],
            module_patterns_to_ignore: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Directory, relative to each source module, receiving its test module.
    pub output_dir: String,
    pub framework: TestFramework,
    pub import_packages: Vec<String>,
    pub indent_size: usize,
    pub outcome: TestOutcome,
    pub module_prefix: String,
    pub function_prefix: String,
    pub docstring: DocstringMode,
    pub wrap_in_class: bool,
    pub class_name: String,
    pub set_up: bool,
    pub tear_down: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            output_dir: DEFAULT_OUTPUT_DIR.to_string(),
            framework: TestFramework::default(),
            import_packages: Vec::new(),
            indent_size: DEFAULT_INDENT_SIZE,
            outcome: TestOutcome::default(),
            module_prefix: DEFAULT_MODULE_PREFIX.to_string(),
            function_prefix: DEFAULT_FUNCTION_PREFIX.to_string(),
            docstring: DocstringMode::default(),
            wrap_in_class: true,
            class_name: DEFAULT_CLASS_NAME.to_string(),
            set_up: true,
            tear_down: true,
        }
    }
}

impl RenderConfig {
    pub fn indent_unit(&self) -> String {
        " ".repeat(self.indent_size)
    }

    /// Whether the framework import is already covered by `import_packages`.
    pub fn imports_framework(&self) -> bool {
        let name = self.framework.module_name();
        self.import_packages.iter().any(|p| p == name)
    }

    pub fn emits_set_up(&self) -> bool {
        self.wrap_in_class && self.set_up && self.framework.supports_lifecycle_hooks()
    }

    pub fn emits_tear_down(&self) -> bool {
        self.wrap_in_class && self.tear_down && self.framework.supports_lifecycle_hooks()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub filter: FilterConfig,
    pub render: RenderConfig,
}

impl Config {
    /// Loads a JSON or YAML configuration file, chosen by extension.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading config file");

        let content = fs::read_to_string(path)
            .map_err(|e| ConfigError::read_error(path, e.to_string()))?;

        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        let config = match extension {
            "json" | "yaml" | "yml" if content.trim().is_empty() => Config::default(),
            "json" => serde_json::from_str(&content)
                .map_err(|e| ConfigError::parse_error(path, e.to_string()))?,
            "yaml" | "yml" => serde_yaml::from_str(&content)
                .map_err(|e| ConfigError::parse_error(path, e.to_string()))?,
            _ => return Err(ConfigError::unsupported_format(extension)),
        };

        Ok(config.normalized())
    }

    pub fn load_or_default<P: AsRef<Path>>(path: Option<P>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    /// Drops blank list entries and repeated import packages, keeping first
    /// occurrences. A zero indentation width falls back to the default.
    pub fn normalized(mut self) -> Self {
        self.filter.folders_to_ignore = clean_list(self.filter.folders_to_ignore);
        self.filter.module_patterns_to_ignore = clean_list(self.filter.module_patterns_to_ignore);
        self.render.import_packages = clean_list(self.render.import_packages);
        if self.render.indent_size == 0 {
            warn!(
                default = DEFAULT_INDENT_SIZE,
                "indent_size must be positive, using the default"
            );
            self.render.indent_size = DEFAULT_INDENT_SIZE;
        }
        self
    }
}

fn clean_list(items: Vec<String>) -> Vec<String> {
    dedupe_preserving_order(
        items
            .into_iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty()),
    )
}
