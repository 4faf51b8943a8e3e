//! Data source error types

/// Errors raised by a data source while reading or persisting rows.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SourceError {
    /// No row matches the given primary key value.
    #[error("Row '{id}' not found (primary key '{primary_key}')")]
    NotFound { id: String, primary_key: String },

    /// The backing store failed.
    #[error("Data source error: {0}")]
    Backend(String),
}

impl SourceError {
    /// Creates a new not-found error.
    pub fn not_found(id: impl Into<String>, primary_key: impl Into<String>) -> Self {
        Self::NotFound {
            id: id.into(),
            primary_key: primary_key.into(),
        }
    }

    /// Creates a new backend error.
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend(message.into())
    }
}
