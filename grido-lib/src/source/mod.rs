//! Data sources and their optional capabilities.
//!
//! Editing needs two optional capabilities from the bound model: updating a
//! single field ([`Updatable`]) and fetching one row by primary key
//! ([`RowFetchable`]). A source declares them by returning `Some` from
//! [`DataSource::as_updatable`] / [`DataSource::as_row_fetchable`]; the
//! default is to declare neither.

mod memory;

pub use memory::MemorySource;

use crate::error::SourceError;
use crate::model::Row;

/// The model a grid reads its rows from.
pub trait DataSource: Send + Sync {
    /// All rows to display.
    fn rows(&self) -> Result<Vec<Row>, SourceError>;

    /// The update capability, if this source has one.
    fn as_updatable(&self) -> Option<&dyn Updatable> {
        None
    }

    /// The single-row fetch capability, if this source has one.
    fn as_row_fetchable(&self) -> Option<&dyn RowFetchable> {
        None
    }
}

/// Persists changed fields of one row.
pub trait Updatable: Send + Sync {
    /// Apply `changes` to the row whose `primary_key` equals `id`.
    ///
    /// Returns whether a row was updated.
    fn update(&self, id: &str, changes: &Row, primary_key: &str) -> Result<bool, SourceError>;
}

/// Fetches one row by primary key.
pub trait RowFetchable: Send + Sync {
    fn get_row(&self, id: &str, primary_key: &str) -> Result<Row, SourceError>;
}
