use std::fmt;
use std::path::{Path, PathBuf};

use crate::discovery::{module_stem, PYTHON_EXTENSION};

/// Sentinel printed for functions defined at module level.
pub const MODULE_SCOPE: &str = ".";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Scope {
    Module,
    Class(String),
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::Module => f.write_str(MODULE_SCOPE),
            Scope::Class(name) => f.write_str(name),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDescriptor {
    pub scope: Scope,
    pub name: String,
    pub docstring: String,
}

impl FunctionDescriptor {
    pub fn new(scope: Scope, name: impl Into<String>, docstring: impl Into<String>) -> Self {
        Self {
            scope,
            name: name.into(),
            docstring: docstring.into(),
        }
    }

    pub fn module_level(name: impl Into<String>, docstring: impl Into<String>) -> Self {
        Self::new(Scope::Module, name, docstring)
    }

    pub fn method(
        class: impl Into<String>,
        name: impl Into<String>,
        docstring: impl Into<String>,
    ) -> Self {
        Self::new(Scope::Class(class.into()), name, docstring)
    }
}

impl fmt::Display for FunctionDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.scope, self.name)
    }
}

/// One source file and the testable functions found in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceModule {
    /// Module name without extension, e.g. `models`.
    pub name: String,
    /// `name` plus the `.py` extension.
    pub file_name: String,
    pub base_dir: PathBuf,
    pub functions: Vec<FunctionDescriptor>,
}

impl SourceModule {
    pub fn from_path(path: &Path) -> Self {
        let name = module_stem(path);
        let file_name = format!("{name}.{PYTHON_EXTENSION}");
        let base_dir = path.parent().map(Path::to_path_buf).unwrap_or_default();

        Self {
            name,
            file_name,
            base_dir,
            functions: Vec::new(),
        }
    }

    pub fn with_functions(mut self, functions: Vec<FunctionDescriptor>) -> Self {
        self.functions = functions;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}
