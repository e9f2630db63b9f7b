//! Unified error types for linediff.
//!
//! One top-level error enum with specific kinds, plus a convenient
//! `Result` alias used across the library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for linediff operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum DiffError {
    /// Construction rejected before any table work begins
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A comparator fault during table construction or backtracking
    #[error("Comparison failed: {context}")]
    Comparison {
        context: String,
        #[source]
        source: ComparisonFault,
    },

    /// The engine was poisoned by an earlier comparator fault and must be
    /// discarded and rebuilt with corrected inputs
    #[error("diff engine unusable after an earlier comparison fault")]
    Poisoned,

    /// IO errors with path context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },
}

/// A fault raised by a caller-supplied comparison function.
#[derive(Error, Debug)]
#[error("{0}")]
pub struct ComparisonFault(pub String);

/// Convenient Result type for linediff operations
pub type Result<T> = std::result::Result<T, DiffError>;

impl DiffError {
    /// Create an invalid-argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Create a comparison error with context
    pub fn comparison(context: impl Into<String>, source: ComparisonFault) -> Self {
        Self::Comparison {
            context: context.into(),
            source,
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }
}

impl From<std::io::Error> for DiffError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}
