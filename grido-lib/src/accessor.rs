//! Property extraction from rows.

use crate::error::FieldError;
use crate::model::{Row, Value};

/// Extracts a named property (for example the primary key) from a row.
pub trait PropertyAccessor: Send + Sync {
    fn property(&self, row: &Row, name: &str) -> Result<Value, FieldError>;
}

/// Default accessor: reads fields directly, following dotted relation paths.
#[derive(Debug, Clone, Copy, Default)]
pub struct RowAccessor;

impl PropertyAccessor for RowAccessor {
    fn property(&self, row: &Row, name: &str) -> Result<Value, FieldError> {
        row.get_path(name).cloned()
    }
}

impl<F> PropertyAccessor for F
where
    F: Fn(&Row, &str) -> Result<Value, FieldError> + Send + Sync,
{
    fn property(&self, row: &Row, name: &str) -> Result<Value, FieldError> {
        self(row, name)
    }
}
