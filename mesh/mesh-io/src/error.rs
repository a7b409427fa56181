//! Error types for mesh I/O operations.

use thiserror::Error;

/// Result type for mesh I/O operations.
pub type IoResult<T> = Result<T, IoError>;

/// Errors that can occur during mesh I/O operations.
#[derive(Debug, Error)]
pub enum IoError {
    /// A mesh without vertices or faces was given to a writer.
    #[error("mesh is empty; nothing to export")]
    EmptyMesh,

    /// A curve without points was given to a writer.
    #[error("curve is empty; nothing to export")]
    EmptyCurve,

    /// Invalid file content (parse error).
    #[error("invalid content at line {line}: {message}")]
    InvalidContent {
        /// 1-based line number.
        line: usize,
        /// Description of what was invalid.
        message: String,
    },

    /// I/O error from the standard library.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Float parsing error.
    #[error("float parsing error: {0}")]
    ParseFloat(#[from] std::num::ParseFloatError),

    /// Integer parsing error.
    #[error("integer parsing error: {0}")]
    ParseInt(#[from] std::num::ParseIntError),
}

impl IoError {
    /// Create an `InvalidContent` error for the given line.
    #[must_use]
    pub fn invalid_content(line: usize, message: impl Into<String>) -> Self {
        Self::InvalidContent {
            line,
            message: message.into(),
        }
    }

    /// Check if this error came from an empty mesh or curve.
    #[must_use]
    pub const fn is_empty_input(&self) -> bool {
        matches!(self, Self::EmptyMesh | Self::EmptyCurve)
    }

    /// Check if this error came from the filesystem.
    #[must_use]
    pub const fn is_io(&self) -> bool {
        matches!(self, Self::Io(_))
    }
}
