//! Data sources shared by the grid tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use grido_lib::error::SourceError;
use grido_lib::source::{DataSource, MemorySource, RowFetchable, Updatable};
use grido_lib::{Grid, GridConfig, Row};

/// A source with no editing capabilities.
pub struct OpaqueSource;

impl DataSource for OpaqueSource {
    fn rows(&self) -> Result<Vec<Row>, SourceError> {
        Ok(vec![Row::new().set("id", 1).set("status", "open")])
    }
}

/// A source that can update but not fetch single rows.
pub struct UpdateOnlySource;

impl DataSource for UpdateOnlySource {
    fn rows(&self) -> Result<Vec<Row>, SourceError> {
        Ok(Vec::new())
    }

    fn as_updatable(&self) -> Option<&dyn Updatable> {
        Some(self)
    }
}

impl Updatable for UpdateOnlySource {
    fn update(&self, _id: &str, _changes: &Row, _primary_key: &str) -> Result<bool, SourceError> {
        Ok(true)
    }
}

/// Wraps a [`MemorySource`] and counts update calls.
pub struct CountingSource {
    inner: MemorySource,
    updates: Arc<AtomicUsize>,
}

impl CountingSource {
    pub fn new(rows: Vec<Row>) -> (Self, Arc<AtomicUsize>) {
        let updates = Arc::new(AtomicUsize::new(0));
        let source = Self {
            inner: MemorySource::new(rows),
            updates: Arc::clone(&updates),
        };
        (source, updates)
    }
}

impl DataSource for CountingSource {
    fn rows(&self) -> Result<Vec<Row>, SourceError> {
        self.inner.rows()
    }

    fn as_updatable(&self) -> Option<&dyn Updatable> {
        Some(self)
    }

    fn as_row_fetchable(&self) -> Option<&dyn RowFetchable> {
        Some(&self.inner)
    }
}

impl Updatable for CountingSource {
    fn update(&self, id: &str, changes: &Row, primary_key: &str) -> Result<bool, SourceError> {
        self.updates.fetch_add(1, Ordering::SeqCst);
        self.inner.update(id, changes, primary_key)
    }
}

pub fn updates(counter: &AtomicUsize) -> usize {
    counter.load(Ordering::SeqCst)
}

pub fn order_rows() -> Vec<Row> {
    vec![
        Row::new().set("id", 7).set("status", "open").set("total", 1250),
        Row::new().set("id", 8).set("status", "closed").set("total", 80),
    ]
}

/// Grid over [`order_rows`] with a status column.
pub fn order_grid() -> Grid {
    let mut grid = Grid::new("grid", GridConfig::default());
    grid.set_model(MemorySource::new(order_rows()));
    grid.add_column_text("status", "Status");
    grid
}
