use anyhow::{Context as AnyhowContext, Result};
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};

use crate::config::{Config, DocstringMode, TestFramework, TestOutcome, BESIDE_SOURCE_DIR};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutcomeArg {
    Pass,
    Fail,
}

impl From<OutcomeArg> for TestOutcome {
    fn from(outcome: OutcomeArg) -> Self {
        match outcome {
            OutcomeArg::Pass => TestOutcome::Pass,
            OutcomeArg::Fail => TestOutcome::Fail,
        }
    }
}

#[derive(Parser, Debug, Default)]
#[command(name = "pystub")]
#[command(about = "Generate skeleton unittest/pytest modules for Python source", long_about = None)]
pub struct Args {
    /// Python files or directories to scaffold tests for
    #[arg(value_name = "PATHS", required_unless_present = "interactive")]
    pub paths: Vec<PathBuf>,

    /// Configuration file (JSON or YAML)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Folder name to ignore, in addition to the defaults. Can be specified multiple times.
    #[arg(long, value_name = "NAME")]
    pub ignore_folder: Vec<String>,

    /// Module path pattern to ignore. Can be specified multiple times.
    #[arg(long, value_name = "PATTERN")]
    pub ignore_pattern: Vec<String>,

    /// Directory name, relative to each module, receiving its tests
    #[arg(short, long, value_name = "DIR", conflicts_with = "beside_source")]
    pub output_dir: Option<String>,

    /// Write each test module beside its source module
    #[arg(long)]
    pub beside_source: bool,

    /// Test framework
    #[arg(short, long)]
    pub framework: Option<TestFramework>,

    /// Package to import in every test module. Can be specified multiple times.
    #[arg(long = "import", value_name = "PKG")]
    pub imports: Vec<String>,

    /// Indentation width in spaces
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u16).range(1..))]
    pub indent: Option<u16>,

    /// Whether generated tests pass or fail
    #[arg(long)]
    pub outcome: Option<OutcomeArg>,

    /// Literal statement used as every test body (overrides --outcome)
    #[arg(long, value_name = "STMT")]
    pub assert_statement: Option<String>,

    /// Test module file name prefix
    #[arg(long, value_name = "PREFIX")]
    pub module_prefix: Option<String>,

    /// Test function name prefix
    #[arg(long, value_name = "PREFIX")]
    pub function_prefix: Option<String>,

    /// Docstring emitted in each test function
    #[arg(long)]
    pub docstring: Option<DocstringMode>,

    /// Emit tests at module scope instead of inside a class
    #[arg(long)]
    pub no_class: bool,

    /// Name of the wrapping test class
    #[arg(long, value_name = "NAME")]
    pub class_name: Option<String>,

    /// Omit the setUp method (unittest)
    #[arg(long)]
    pub no_setup: bool,

    /// Omit the tearDown method (unittest)
    #[arg(long)]
    pub no_teardown: bool,

    /// Ask for paths and settings on the terminal
    #[arg(short, long)]
    pub interactive: bool,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn validate(&self) -> Result<()> {
        for path in &self.paths {
            validate_path(path)?;
        }
        if let Some(ref config_path) = self.config {
            if !config_path.exists() {
                anyhow::bail!("Config file does not exist: {}", config_path.display());
            }
        }
        Ok(())
    }

    /// Configuration file values with command-line flags applied on top.
    pub fn build_config(&self) -> Result<Config> {
        let mut config = Config::load_or_default(self.config.as_ref())
            .context("Failed to load configuration")?;
        self.apply_overrides(&mut config);
        Ok(config.normalized())
    }

    fn apply_overrides(&self, config: &mut Config) {
        let filter = &mut config.filter;
        filter
            .folders_to_ignore
            .extend(self.ignore_folder.iter().cloned());
        filter
            .module_patterns_to_ignore
            .extend(self.ignore_pattern.iter().cloned());

        let render = &mut config.render;
        if self.beside_source {
            render.output_dir = BESIDE_SOURCE_DIR.to_string();
        } else if let Some(ref dir) = self.output_dir {
            render.output_dir = dir.clone();
        }
        if let Some(framework) = self.framework {
            render.framework = framework;
        }
        render.import_packages.extend(self.imports.iter().cloned());
        if let Some(indent) = self.indent {
            render.indent_size = usize::from(indent);
        }
        if let Some(ref statement) = self.assert_statement {
            render.outcome = TestOutcome::Statement(statement.clone());
        } else if let Some(outcome) = self.outcome {
            render.outcome = outcome.into();
        }
        if let Some(ref prefix) = self.module_prefix {
            render.module_prefix = prefix.clone();
        }
        if let Some(ref prefix) = self.function_prefix {
            render.function_prefix = prefix.clone();
        }
        if let Some(docstring) = self.docstring {
            render.docstring = docstring;
        }
        if self.no_class {
            render.wrap_in_class = false;
        }
        if let Some(ref name) = self.class_name {
            render.class_name = name.clone();
        }
        if self.no_setup {
            render.set_up = false;
        }
        if self.no_teardown {
            render.tear_down = false;
        }
    }
}

pub fn validate_path(path: &Path) -> Result<()> {
    if !path.exists() {
        anyhow::bail!("Path does not exist: {}", path.display());
    }

    if path.is_file() {
        std::fs::metadata(path).with_context(|| format!("Cannot read file: {}", path.display()))?;
    } else if path.is_dir() {
        std::fs::metadata(path)
            .with_context(|| format!("Cannot read directory: {}", path.display()))?;
    } else {
        anyhow::bail!("Path is neither a file nor a directory: {}", path.display());
    }

    Ok(())
}
