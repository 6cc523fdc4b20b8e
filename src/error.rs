//! # Error Types
//!
//! The streaming adapters never produce errors of their own: they return
//! [`std::io::Result`] and hand back whatever the wrapped stream reported.
//! [`Rot13Error`] is used by the helpers layered on top of them (stream copy,
//! file and batch operations, configuration validation).

use std::path::PathBuf;
use thiserror::Error;

/// The error type for the higher-level ROT13 helpers.
#[derive(Error, Debug)]
pub enum Rot13Error {
    /// I/O error from the underlying reader, writer or file.
    ///
    /// Created automatically from [`std::io::Error`]; the original error is
    /// kept as-is.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid [`StreamConfig`](crate::StreamConfig) value.
    #[error("Config error: {0}")]
    Config(String),

    /// Input and output of a file operation resolve to the same path.
    #[error("input and output are the same file: {}", .0.display())]
    SamePath(PathBuf),
}

impl From<Rot13Error> for std::io::Error {
    fn from(err: Rot13Error) -> Self {
        match err {
            Rot13Error::Io(e) => e,
            other => std::io::Error::new(std::io::ErrorKind::InvalidInput, other),
        }
    }
}
