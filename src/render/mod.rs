//! Test module synthesis.
//!
//! [`TestModuleRenderer`] turns a cataloged [`SourceModule`] into the text of
//! a skeleton test module. The output is a pure function of the module and
//! the [`RenderConfig`]: imports, optional test class header, optional
//! `setUp`, one stub per cataloged function, optional `tearDown`.

use std::fs;
use std::path::PathBuf;
use tracing::debug;

use crate::config::{DocstringMode, RenderConfig};
use crate::discovery::identity_key;
use crate::error::IoError;
use crate::scanner::{FunctionDescriptor, SourceModule};

const NEWLINE: &str = "\n";
const TRIPLE_QUOTE: &str = "\"\"\"";

pub struct TestModuleRenderer<'a> {
    config: &'a RenderConfig,
    indent: String,
}

impl<'a> TestModuleRenderer<'a> {
    pub fn new(config: &'a RenderConfig) -> Self {
        Self {
            config,
            indent: config.indent_unit(),
        }
    }

    pub fn render(&self, module: &SourceModule) -> String {
        let mut out = String::new();

        self.push_imports(&mut out);
        if self.config.wrap_in_class {
            self.push_class_header(&mut out);
        }
        if self.config.emits_set_up() {
            self.push_set_up(&mut out);
        }
        self.push_tests(&mut out, &module.functions);
        if self.config.emits_tear_down() {
            self.push_tear_down(&mut out);
        }

        out
    }

    fn push_imports(&self, out: &mut String) {
        for package in &self.config.import_packages {
            out.push_str(&format!("import {package}{NEWLINE}"));
        }

        if self.config.imports_framework() {
            out.push_str(NEWLINE);
        } else {
            let framework = self.config.framework.module_name();
            out.push_str(&format!("import {framework}{NEWLINE}{NEWLINE}"));
        }
    }

    fn push_class_header(&self, out: &mut String) {
        let name = &self.config.class_name;
        match self.config.framework.base_class() {
            Some(base) => out.push_str(&format!("class {name}({base}):{NEWLINE}{NEWLINE}")),
            None => out.push_str(&format!("class {name}:{NEWLINE}{NEWLINE}")),
        }
    }

    fn push_set_up(&self, out: &mut String) {
        let indent = &self.indent;
        out.push_str(&format!(
            "{indent}def setUp(self):{NEWLINE}{indent}{indent}return{NEWLINE}{NEWLINE}"
        ));
    }

    fn push_tear_down(&self, out: &mut String) {
        let indent = &self.indent;
        out.push_str(&format!(
            "{NEWLINE}{indent}def tearDown(self):{NEWLINE}{indent}{indent}return{NEWLINE}"
        ));
    }

    fn push_tests(&self, out: &mut String, functions: &[FunctionDescriptor]) {
        for (index, function) in functions.iter().enumerate() {
            if index > 0 {
                out.push_str(NEWLINE);
            }
            self.push_test(out, function);
        }
    }

    fn push_test(&self, out: &mut String, function: &FunctionDescriptor) {
        let (depth, parameters) = if self.config.wrap_in_class {
            (1, "self")
        } else {
            (0, "")
        };
        let signature_indent = self.indent.repeat(depth);
        let body_indent = self.indent.repeat(depth + 1);
        let prefix = &self.config.function_prefix;
        let name = &function.name;

        out.push_str(&format!(
            "{signature_indent}def {prefix}{name}({parameters}):{NEWLINE}"
        ));
        if let Some(docstring) = self.docstring(function) {
            out.push_str(&format!("{body_indent}{docstring}{NEWLINE}"));
        }
        for line in self.config.outcome.statement().lines() {
            out.push_str(&format!("{body_indent}{line}{NEWLINE}"));
        }
        out.push_str(&format!("{body_indent}return{NEWLINE}"));
    }

    fn docstring(&self, function: &FunctionDescriptor) -> Option<String> {
        match self.config.docstring {
            DocstringMode::Source => Some(format!(
                "{TRIPLE_QUOTE}{}{TRIPLE_QUOTE}",
                function.docstring
            )),
            DocstringMode::Empty => Some(format!("{TRIPLE_QUOTE}{TRIPLE_QUOTE}")),
            DocstringMode::None => None,
        }
    }
}

/// `<module dir>/<output dir>/<module prefix><module file name>`.
pub fn output_path(module: &SourceModule, config: &RenderConfig) -> PathBuf {
    module
        .base_dir
        .join(&config.output_dir)
        .join(format!("{}{}", config.module_prefix, module.file_name))
}

/// Renders `module` and writes it, creating the output directory as needed.
/// An existing file at the destination is overwritten, unless it is the
/// source module itself.
pub fn write_test_module(module: &SourceModule, config: &RenderConfig) -> Result<PathBuf, IoError> {
    let path = output_path(module, config);
    let source = module.base_dir.join(&module.file_name);
    if identity_key(&path) == identity_key(&source) {
        return Err(IoError::overwrites_source(source));
    }

    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(|e| IoError::create_dir_error(dir, e))?;
    }

    let content = TestModuleRenderer::new(config).render(module);
    fs::write(&path, content).map_err(|e| IoError::write_error(&path, e))?;

    debug!(
        path = %path.display(),
        tests = module.functions.len(),
        "wrote test module"
    );
    Ok(path)
}
