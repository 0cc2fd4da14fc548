//! Error types for caret.
//!
//! Editing operations are total and never fail; errors only surface at
//! configuration boundaries.

use std::fmt;

/// Result type alias for caret operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for caret operations.
#[derive(Clone, Debug, PartialEq)]
pub enum Error {
    /// A configuration field holds an unusable value.
    InvalidConfig {
        field: &'static str,
        reason: String,
    },
    /// Text area dimension error (e.g., negative width/height).
    InvalidDimensions { width: f32, height: f32 },
}

impl Error {
    pub(crate) fn invalid_config(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig { field, reason } => {
                write!(f, "invalid config value for `{field}`: {reason}")
            }
            Self::InvalidDimensions { width, height } => {
                write!(f, "invalid dimensions: {width}x{height}")
            }
        }
    }
}

impl std::error::Error for Error {}
