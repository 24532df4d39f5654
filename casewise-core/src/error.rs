//! Typed error handling for casewise.
//!
//! Matching itself never fails: panics from caller-supplied predicates and
//! transforms propagate untouched. These errors cover the opt-in terminal
//! [`try_otherwise`](crate::ValueMatcher::try_otherwise) and configuration
//! loading.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for casewise operations.
#[derive(Error, Debug)]
pub enum MatchError {
    /// No branch matched and the caller asked for an error instead of a default
    #[error("no branch matched{} after {branches} branches", label_suffix(.label))]
    Unmatched {
        label: Option<String>,
        branches: usize,
    },

    /// I/O error when reading the configuration file
    #[error("I/O error at {path}: {message}")]
    Io {
        path: PathBuf,
        message: String,
        #[source]
        source: Option<std::io::Error>,
    },

    /// Configuration file errors
    #[error("Config error at {path}: {message}")]
    Config { path: PathBuf, message: String },
}

fn label_suffix(label: &Option<String>) -> String {
    label
        .as_deref()
        .map(|l| format!(" in '{}'", l))
        .unwrap_or_default()
}

impl MatchError {
    /// Create an unmatched error.
    pub fn unmatched(label: Option<&str>, branches: usize) -> Self {
        Self::Unmatched {
            label: label.map(String::from),
            branches,
        }
    }

    /// Create an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: err.to_string(),
            source: Some(err),
        }
    }

    /// Create a config error.
    pub fn config(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Get the path associated with this error, if any.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::Io { path, .. } => Some(path),
            Self::Config { path, .. } => Some(path),
            Self::Unmatched { .. } => None,
        }
    }
}

/// Convenience type alias for casewise results.
pub type MatchResult<T> = Result<T, MatchError>;

/// Extension trait for converting std::io::Error with path context.
pub trait IoResultExt<T> {
    /// Add path context to an I/O error.
    fn with_path(self, path: impl Into<PathBuf>) -> MatchResult<T>;
}

impl<T> IoResultExt<T> for std::io::Result<T> {
    fn with_path(self, path: impl Into<PathBuf>) -> MatchResult<T> {
        self.map_err(|e| MatchError::io(path, e))
    }
}
