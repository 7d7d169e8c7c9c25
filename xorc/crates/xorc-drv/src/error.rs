//! Error handling module for the xorc driver.
//!
//! Scan errors travel as already-rendered diagnostics so `main` can print
//! them unchanged.

use std::path::PathBuf;

use thiserror::Error;
use xorc_lex::ScanError;

/// Main error type for the xorc driver.
#[derive(Error, Debug)]
pub enum DrvError {
    /// Error when the configuration file is missing or malformed.
    #[error("configuration error: {0}")]
    Config(String),

    /// Error when an input file cannot be read.
    #[error("cannot read {}", .path.display())]
    Read {
        /// The file that was being read.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Error when writing output fails.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The input is not valid Xor source.
    #[error("{rendered}")]
    Scan {
        /// Diagnostic text, ready to print.
        rendered: String,
        /// The scanner's error.
        #[source]
        source: ScanError,
    },

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error when the tracing subscriber cannot be installed.
    #[error("failed to initialize logging: {0}")]
    Logging(String),
}

/// Result type alias using DrvError.
pub type Result<T> = std::result::Result<T, DrvError>;

#[cfg(test)]
mod tests {
    use super::*;
    use xorc_util::Position;

    #[test]
    fn test_config_error_display() {
        let err = DrvError::Config("missing field".to_string());
        assert_eq!(err.to_string(), "configuration error: missing field");
    }

    #[test]
    fn test_read_error_display() {
        let err = DrvError::Read {
            path: PathBuf::from("main.xor"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
        };
        assert_eq!(err.to_string(), "cannot read main.xor");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_scan_error_displays_rendered_text() {
        let err = DrvError::Scan {
            rendered: "error: unexpected character '$'\n".to_string(),
            source: ScanError::UnexpectedCharacter {
                ch: '$',
                position: Position::START,
            },
        };
        assert_eq!(err.to_string(), "error: unexpected character '$'\n");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let drv_err: DrvError = io_err.into();
        assert!(matches!(drv_err, DrvError::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let drv_err: DrvError = json_err.into();
        assert!(matches!(drv_err, DrvError::Json(_)));
    }
}
