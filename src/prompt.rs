//! Interactive collection of source paths and generation settings.
//!
//! Every answer is optional except the source paths: a blank answer keeps the
//! value already present in the base [`Config`], which is how configuration
//! file and command-line values act as defaults here.

use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::debug;

use crate::config::parse::{
    parse_docstring_mode, parse_framework, parse_indent, parse_list, parse_outcome,
    parse_test_location, parse_text, parse_yes_no, TestLocation,
};
use crate::config::{Config, TestFramework, BESIDE_SOURCE_DIR};
use crate::error::{ConfigError, IoError, Result};

const PATHS: &str = "Paths to the Python modules or packages, separated by ';':\n> ";
const PATHS_MISSING: &str = "No path given. Try again:\n> ";
const FOLDERS_TO_IGNORE: &str = "Additional folder names to ignore, separated by ';':\n> ";
const PATTERNS_TO_IGNORE: &str = "Module name patterns to ignore, separated by ';':\n> ";
const TEST_LOCATION: &str = "Where should test modules go?\n  n  a new folder next to each module (default)\n  s  beside each source module\n[n|s] > ";
const IMPORT_PACKAGES: &str = "Packages to import in every test module, separated by ';':\n> ";
const FRAMEWORK: &str = "Test framework?\n  u  unittest (default)\n  p  pytest\n[u|p] > ";
const OUTCOME: &str = "Should generated tests pass or fail?\n  p  assert True (default)\n  f  assert False\n[p|f] > ";
const DOCSTRING: &str = "Docstrings for test functions?\n  s  source docstring\n  e  empty docstring\n  n  none (default)\n[s|e|n] > ";

struct Prompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    /// `None` once the input is exhausted.
    fn ask(&mut self, question: &str) -> std::result::Result<Option<String>, IoError> {
        self.output
            .write_all(question.as_bytes())
            .and_then(|()| self.output.flush())
            .map_err(IoError::prompt_error)?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(IoError::prompt_error)?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Exhausted input reads as a blank answer.
    fn answer(&mut self, question: &str) -> std::result::Result<String, IoError> {
        Ok(self.ask(question)?.unwrap_or_default())
    }

    fn source_paths(&mut self) -> Result<Vec<PathBuf>> {
        let mut question = PATHS;
        loop {
            let Some(answer) = self.ask(question)? else {
                return Err(ConfigError::MissingPaths.into());
            };
            let paths = parse_list(&answer);
            if !paths.is_empty() {
                return Ok(paths.into_iter().map(PathBuf::from).collect());
            }
            question = PATHS_MISSING;
        }
    }
}

/// Runs the question sequence and returns the source paths together with the
/// configuration the answers produce on top of `base`.
pub fn collect<R: BufRead, W: Write>(
    input: R,
    output: W,
    base: Config,
) -> Result<(Vec<PathBuf>, Config)> {
    let mut prompt = Prompt { input, output };
    let mut config = base;

    let paths = prompt.source_paths()?;

    let folders = parse_list(&prompt.answer(FOLDERS_TO_IGNORE)?);
    config.filter.folders_to_ignore.extend(folders);
    let patterns = parse_list(&prompt.answer(PATTERNS_TO_IGNORE)?);
    config.filter.module_patterns_to_ignore.extend(patterns);

    let render = &mut config.render;
    match parse_test_location(&prompt.answer(TEST_LOCATION)?) {
        TestLocation::NewFolder => {
            let question = format!(
                "Name of the directory receiving test modules? Default is '{}'.\n> ",
                render.output_dir
            );
            render.output_dir = parse_text(&prompt.answer(&question)?, &render.output_dir);
        }
        TestLocation::BesideSource => render.output_dir = BESIDE_SOURCE_DIR.to_string(),
    }

    let answer = prompt.answer(FRAMEWORK)?;
    if !answer.is_empty() {
        render.framework = parse_framework(&answer);
    }

    let imports = parse_list(&prompt.answer(IMPORT_PACKAGES)?);
    render.import_packages.extend(imports);

    let question = format!(
        "Indentation size in spaces? Default is {}.\n> ",
        render.indent_size
    );
    render.indent_size = parse_indent(&prompt.answer(&question)?, render.indent_size);

    let answer = prompt.answer(OUTCOME)?;
    if !answer.is_empty() {
        render.outcome = parse_outcome(&answer);
    }

    let question = format!(
        "Test module file prefix? Default is '{}'.\n> ",
        render.module_prefix
    );
    render.module_prefix = parse_text(&prompt.answer(&question)?, &render.module_prefix);

    let question = format!(
        "Test function name prefix? Default is '{}'.\n> ",
        render.function_prefix
    );
    render.function_prefix = parse_text(&prompt.answer(&question)?, &render.function_prefix);

    let answer = prompt.answer(DOCSTRING)?;
    if !answer.is_empty() {
        render.docstring = parse_docstring_mode(&answer);
    }

    let unittest = render.framework == TestFramework::Unittest;
    if unittest {
        render.wrap_in_class = true;
    } else {
        let question = yes_no_question("Put the tests inside a class?", render.wrap_in_class);
        render.wrap_in_class = parse_yes_no(&prompt.answer(&question)?, render.wrap_in_class);
    }

    if render.wrap_in_class {
        let question = format!(
            "Test class name? Default is '{}'.\n> ",
            render.class_name
        );
        render.class_name = parse_text(&prompt.answer(&question)?, &render.class_name);

        if unittest {
            let question = yes_no_question("Add a setUp method to the class?", render.set_up);
            render.set_up = parse_yes_no(&prompt.answer(&question)?, render.set_up);

            let question =
                yes_no_question("Add a tearDown method to the class?", render.tear_down);
            render.tear_down = parse_yes_no(&prompt.answer(&question)?, render.tear_down);
        }
    }

    debug!(paths = paths.len(), "collected interactive answers");
    Ok((paths, config.normalized()))
}

fn yes_no_question(text: &str, default: bool) -> String {
    let choices = if default { "[Y|n]" } else { "[y|N]" };
    format!("{text} {choices} > ")
}
