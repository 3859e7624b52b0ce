mod config;
mod io;
mod parser;

pub use config::ConfigError;
pub use io::IoError;
pub use parser::ParserError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] IoError),

    #[error(transparent)]
    Parser(#[from] ParserError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl Error {
    /// Failures confined to a single source module. A batch logs these and
    /// moves on; anything else stops the run.
    pub fn is_per_module(&self) -> bool {
        matches!(
            self,
            Error::Io(IoError::ReadError { .. })
                | Error::Parser(ParserError::SyntaxError { .. })
                | Error::Parser(ParserError::ParseFailed { .. })
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::ErrorKind;

    #[test]
    fn test_per_module_errors() {
        let read: Error = IoError::read_error("a.py", ErrorKind::NotFound.into()).into();
        assert!(read.is_per_module());

        let syntax: Error = ParserError::syntax_error("a.py", 1, 1, "invalid syntax").into();
        assert!(syntax.is_per_module());
    }

    #[test]
    fn test_fatal_errors() {
        let write: Error =
            IoError::write_error("tests/test_a.py", ErrorKind::PermissionDenied.into()).into();
        assert!(!write.is_per_module());

        let invalid: Error = IoError::invalid_path("/missing").into();
        assert!(!invalid.is_per_module());

        let config: Error = ConfigError::MissingPaths.into();
        assert!(!config.is_per_module());
    }

    #[test]
    fn test_transparent_display() {
        let err: Error = ConfigError::unsupported_format("toml").into();
        assert_eq!(
            err.to_string(),
            "unsupported config format: toml (expected json or yaml)"
        );
    }
}
