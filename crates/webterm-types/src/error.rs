//! Error types for WebTerm.

use std::io;

/// Errors produced by WebTerm.
#[derive(Debug, thiserror::Error)]
pub enum WebTermError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("invalid expression: {0}")]
    Expression(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, WebTermError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_argument_display() {
        let e = WebTermError::InvalidArgument("'abc' is not an integer".into());
        assert_eq!(format!("{e}"), "invalid argument: 'abc' is not an integer");
    }

    #[test]
    fn expression_error_display() {
        let e = WebTermError::Expression("division by zero".into());
        assert_eq!(format!("{e}"), "invalid expression: division by zero");
    }

    #[test]
    fn config_error_display() {
        let e = WebTermError::Config("missing key".into());
        assert_eq!(format!("{e}"), "config error: missing key");
    }

    #[test]
    fn io_error_from_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "gone");
        let e: WebTermError = io_err.into();
        let msg = format!("{e}");
        assert!(msg.contains("I/O error"));
        assert!(msg.contains("gone"));
    }

    #[test]
    fn toml_error_from_conversion() {
        let toml_err = toml::from_str::<toml::Value>("this is [[[not valid toml").unwrap_err();
        let e: WebTermError = toml_err.into();
        assert!(format!("{e}").contains("TOML parse error"));
    }

    #[test]
    fn error_is_debug() {
        let e = WebTermError::Config("test".into());
        assert!(format!("{e:?}").contains("Config"));
    }
}
