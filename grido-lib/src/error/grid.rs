//! Grid error types

use super::{ConfigError, FieldError, SourceError};

/// Errors raised while configuring, rendering or serving a grid.
///
/// Nothing in the grid catches these; they propagate to the caller, which
/// is expected to turn them into a server error.
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    /// An editable column is missing a callback its field or model requires.
    #[error("Column '{column}' has error: {message}")]
    Configuration { column: String, message: String },

    /// A setter received a value of the wrong kind.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A resolved edit control is not a form control.
    #[error("Runtime error: {0}")]
    Runtime(String),

    /// No column with the given name exists.
    #[error("Column '{0}' not found")]
    ColumnNotFound(String),

    /// The request named a signal this grid does not handle.
    #[error("Unknown signal '{0}'")]
    UnknownSignal(String),

    /// A required request parameter is missing.
    #[error("Missing request parameter '{0}'")]
    MissingParameter(String),

    #[error(transparent)]
    Field(#[from] FieldError),

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl GridError {
    /// Creates a new configuration error for a column.
    pub fn configuration(column: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Configuration {
            column: column.into(),
            message: message.into(),
        }
    }

    /// Returns `true` if this is a configuration error.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration { .. })
    }
}
