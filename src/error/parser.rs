use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParserError {
    #[error("python grammar could not be loaded: {source}")]
    LanguageSetupFailed { source: tree_sitter::LanguageError },

    #[error("{path}: parser produced no syntax tree")]
    ParseFailed { path: PathBuf },

    /// Line and column are 1-based.
    #[error("{path}:{line}:{column}: syntax error: {message}")]
    SyntaxError {
        path: PathBuf,
        line: usize,
        column: usize,
        message: String,
    },
}

impl ParserError {
    pub fn language_setup_failed(source: tree_sitter::LanguageError) -> Self {
        Self::LanguageSetupFailed { source }
    }

    pub fn parse_failed(path: impl Into<PathBuf>) -> Self {
        Self::ParseFailed { path: path.into() }
    }

    pub fn syntax_error(
        path: impl Into<PathBuf>,
        line: usize,
        column: usize,
        message: impl Into<String>,
    ) -> Self {
        Self::SyntaxError {
            path: path.into(),
            line,
            column,
            message: message.into(),
        }
    }

    /// Source module the error belongs to; grammar setup has none.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::LanguageSetupFailed { .. } => None,
            Self::ParseFailed { path } | Self::SyntaxError { path, .. } => Some(path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syntax_error_display() {
        let err = ParserError::syntax_error("pkg/broken.py", 10, 5, "missing ')'");
        assert_eq!(err.to_string(), "pkg/broken.py:10:5: syntax error: missing ')'");
    }

    #[test]
    fn test_parse_failed_display() {
        let err = ParserError::parse_failed("pkg/huge.py");
        assert_eq!(err.to_string(), "pkg/huge.py: parser produced no syntax tree");
    }

    #[test]
    fn test_path_accessor() {
        let err = ParserError::syntax_error("a.py", 1, 1, "invalid syntax");
        assert_eq!(err.path(), Some(Path::new("a.py")));
        assert_eq!(ParserError::parse_failed("b.py").path(), Some(Path::new("b.py")));
    }
}
