//! Shared error type across ddline crates.

use thiserror::Error;

/// Stable error categories, for callers that branch on the failure class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Writing a line to the output sink failed.
    Write,
    /// Namespace or global tags would corrupt the wire format.
    InvalidConfig,
    /// A line could not be decoded.
    Malformed,
}

impl ErrorKind {
    /// String representation used in logs.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::Write => "WRITE_FAILED",
            ErrorKind::InvalidConfig => "INVALID_CONFIG",
            ErrorKind::Malformed => "MALFORMED_LINE",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, DdlineError>;

/// Unified error type used by core and client.
#[derive(Debug, Error)]
pub enum DdlineError {
    #[error("write failed: {0}")]
    Write(#[from] std::io::Error),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("malformed line: {0}")]
    Malformed(String),
}

impl DdlineError {
    /// Map to a stable error category.
    pub fn kind(&self) -> ErrorKind {
        match self {
            DdlineError::Write(_) => ErrorKind::Write,
            DdlineError::InvalidConfig(_) => ErrorKind::InvalidConfig,
            DdlineError::Malformed(_) => ErrorKind::Malformed,
        }
    }
}
