//! Field path errors

/// Reading a field path from a row failed.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FieldError {
    /// A segment of the path does not exist.
    #[error("Field '{field}' not found in row")]
    Missing { field: String },

    /// The value has another type than the read expects, or a path segment
    /// other than the last is not a related row.
    #[error("Field '{field}' is {actual}, expected {expected}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
        actual: &'static str,
    },
}

impl FieldError {
    pub fn missing(field: impl Into<String>) -> Self {
        Self::Missing {
            field: field.into(),
        }
    }

    pub fn type_mismatch(
        field: impl Into<String>,
        expected: &'static str,
        actual: &'static str,
    ) -> Self {
        Self::TypeMismatch {
            field: field.into(),
            expected,
            actual,
        }
    }
}
