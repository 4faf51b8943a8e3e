//! In-memory data source

use std::sync::RwLock;

use super::{DataSource, RowFetchable, Updatable};
use crate::error::SourceError;
use crate::model::Row;

/// A data source over a vector of rows, with both editing capabilities.
///
/// Rows are matched by comparing the textual form of their primary-key field
/// with the requested id.
///
/// # Example
///
/// ```
/// use grido_lib::Row;
/// use grido_lib::source::{DataSource, MemorySource};
///
/// let source = MemorySource::new(vec![Row::new().set("id", 1).set("name", "a")]);
/// let updatable = source.as_updatable().unwrap();
/// assert!(updatable.update("1", &Row::new().set("name", "b"), "id").unwrap());
/// ```
#[derive(Debug, Default)]
pub struct MemorySource {
    rows: RwLock<Vec<Row>>,
}

impl MemorySource {
    /// Creates a new source holding the given rows.
    pub fn new(rows: Vec<Row>) -> Self {
        Self {
            rows: RwLock::new(rows),
        }
    }

    /// Returns the number of rows.
    pub fn len(&self) -> Result<usize, SourceError> {
        Ok(self.rows.read().map_err(poisoned)?.len())
    }

    /// Returns `true` if the source holds no rows.
    pub fn is_empty(&self) -> Result<bool, SourceError> {
        Ok(self.len()? == 0)
    }

    /// Appends a row.
    pub fn push(&self, row: Row) -> Result<(), SourceError> {
        self.rows.write().map_err(poisoned)?.push(row);
        Ok(())
    }
}

fn poisoned<T>(_: T) -> SourceError {
    SourceError::backend("row store lock poisoned")
}

fn matches_id(row: &Row, id: &str, primary_key: &str) -> bool {
    row.get(primary_key)
        .is_some_and(|value| value.to_plain_string() == id)
}

impl DataSource for MemorySource {
    fn rows(&self) -> Result<Vec<Row>, SourceError> {
        Ok(self.rows.read().map_err(poisoned)?.clone())
    }

    fn as_updatable(&self) -> Option<&dyn Updatable> {
        Some(self)
    }

    fn as_row_fetchable(&self) -> Option<&dyn RowFetchable> {
        Some(self)
    }
}

impl Updatable for MemorySource {
    fn update(&self, id: &str, changes: &Row, primary_key: &str) -> Result<bool, SourceError> {
        let mut rows = self.rows.write().map_err(poisoned)?;
        match rows.iter_mut().find(|row| matches_id(row, id, primary_key)) {
            Some(row) => {
                row.merge(changes);
                log::debug!(
                    "[source] updated row {}={} with {} field(s)",
                    primary_key,
                    id,
                    changes.len()
                );
                Ok(true)
            }
            None => {
                log::debug!("[source] no row {}={} to update", primary_key, id);
                Ok(false)
            }
        }
    }
}

impl RowFetchable for MemorySource {
    fn get_row(&self, id: &str, primary_key: &str) -> Result<Row, SourceError> {
        self.rows
            .read()
            .map_err(poisoned)?
            .iter()
            .find(|row| matches_id(row, id, primary_key))
            .cloned()
            .ok_or_else(|| SourceError::not_found(id, primary_key))
    }
}
