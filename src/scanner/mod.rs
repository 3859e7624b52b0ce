pub mod catalog;
pub mod model;
pub mod parser;

use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::{IoError, Result};
pub use catalog::{extract_functions, PLACEHOLDER_DOCSTRING};
pub use model::{FunctionDescriptor, Scope, SourceModule, MODULE_SCOPE};
pub use parser::PythonParser;

/// Reads Python modules and catalogs their testable functions.
pub struct Scanner {
    parser: PythonParser,
}

impl Scanner {
    pub fn new() -> Result<Self> {
        Ok(Self {
            parser: PythonParser::new()?,
        })
    }

    pub fn scan_file(&mut self, path: &Path) -> Result<SourceModule> {
        let source = fs::read_to_string(path).map_err(|e| IoError::read_error(path, e))?;
        let functions = self.scan_source(&source, path)?;
        Ok(SourceModule::from_path(path).with_functions(functions))
    }

    /// `path` is only used for error reporting.
    pub fn scan_source(&mut self, source: &str, path: &Path) -> Result<Vec<FunctionDescriptor>> {
        let tree = self.parser.parse(source, path)?;
        let functions = extract_functions(&tree, source.as_bytes());

        debug!(
            path = %path.display(),
            functions = functions.len(),
            "scanned module"
        );
        Ok(functions)
    }
}
