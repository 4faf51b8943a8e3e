//! The grid: columns, bound model, edit form and client options.

mod handlers;
mod render;
mod validate;

use grido_forms::Container;

use crate::accessor::{PropertyAccessor, RowAccessor};
use crate::column::{Column, ColumnKind};
use crate::config::GridConfig;
use crate::error::GridError;
use crate::request::Links;
use crate::source::DataSource;

/// Client option key announcing that the grid has editable columns.
pub const EDITABLE_OPTION: &str = "editable";

/// A data grid.
///
/// Columns are configured through the `&mut Column` handles returned by the
/// `add_column_*` methods and [`Grid::column_mut`]. Any mutation through the
/// grid invalidates the previous [`Grid::finalize`] result.
pub struct Grid {
    name: String,
    config: GridConfig,
    links: Links,
    primary_key: String,
    accessor: Box<dyn PropertyAccessor>,
    model: Option<Box<dyn DataSource>>,
    columns: Vec<Column>,
    /// Form edit controls are attached to.
    form: Container,
    client_options: serde_json::Map<String, serde_json::Value>,
    editable_registered: bool,
    finalized: bool,
}

impl std::fmt::Debug for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Grid")
            .field("name", &self.name)
            .field("primary_key", &self.primary_key)
            .field("model", &self.model.is_some())
            .field("columns", &self.columns)
            .field("editable_registered", &self.editable_registered)
            .field("finalized", &self.finalized)
            .finish()
    }
}

impl Grid {
    pub fn new(name: impl Into<String>, config: GridConfig) -> Self {
        let name = name.into();
        Self {
            links: Links::new(config.base_url.as_str(), name.as_str()),
            primary_key: config.primary_key.clone(),
            form: Container::form(name.as_str()),
            name,
            config,
            accessor: Box::new(RowAccessor),
            model: None,
            columns: Vec::new(),
            client_options: serde_json::Map::new(),
            editable_registered: false,
            finalized: false,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn links(&self) -> &Links {
        &self.links
    }

    pub fn primary_key(&self) -> &str {
        &self.primary_key
    }

    pub fn model(&self) -> Option<&dyn DataSource> {
        self.model.as_deref()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, name: &str) -> Result<&Column, GridError> {
        self.columns
            .iter()
            .find(|c| c.name() == name)
            .ok_or_else(|| GridError::ColumnNotFound(name.to_string()))
    }

    /// Mutable access to a column. Invalidates the last finalize.
    pub fn column_mut(&mut self, name: &str) -> Result<&mut Column, GridError> {
        let index = self.column_index(name)?;
        self.finalized = false;
        Ok(&mut self.columns[index])
    }

    pub fn form(&self) -> &Container {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut Container {
        &mut self.form
    }

    /// Options handed to the client script through `data-grido-options`.
    pub fn client_options(&self) -> &serde_json::Map<String, serde_json::Value> {
        &self.client_options
    }

    /// Request target for a column action.
    pub fn link(&self, column: &str, action: &str) -> String {
        self.links.signal(column, action)
    }

    pub(crate) fn column_index(&self, name: &str) -> Result<usize, GridError> {
        self.columns
            .iter()
            .position(|c| c.name() == name)
            .ok_or_else(|| GridError::ColumnNotFound(name.to_string()))
    }

    // =========================================================================
    // Setup
    // =========================================================================

    /// Binds the data source rows are read from and edits are written to.
    pub fn set_model(&mut self, model: impl DataSource + 'static) -> &mut Self {
        self.model = Some(Box::new(model));
        self.finalized = false;
        self
    }

    pub fn set_primary_key(&mut self, primary_key: impl Into<String>) -> &mut Self {
        self.primary_key = primary_key.into();
        self
    }

    /// Replaces the accessor used to read the primary key from rows.
    pub fn set_property_accessor(&mut self, accessor: impl PropertyAccessor + 'static) -> &mut Self {
        self.accessor = Box::new(accessor);
        self
    }

    pub fn set_client_option(
        &mut self,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> &mut Self {
        self.client_options.insert(key.into(), value.into());
        self
    }

    /// Adds a column, replacing any column of the same name.
    pub fn add_column(&mut self, column: Column) -> &mut Column {
        self.finalized = false;
        let index = match self.columns.iter().position(|c| c.name() == column.name()) {
            Some(index) => {
                log::warn!("[grid] column '{}' replaced in '{}'", column.name(), self.name);
                self.columns[index] = column;
                index
            }
            None => {
                self.columns.push(column);
                self.columns.len() - 1
            }
        };
        &mut self.columns[index]
    }

    pub fn add_column_text(&mut self, name: &str, label: &str) -> &mut Column {
        self.add_column(Column::new(name, label))
    }

    /// Adds a number column with `decimals` fraction digits.
    pub fn add_column_number(&mut self, name: &str, label: &str, decimals: u32) -> &mut Column {
        let mut column = Column::new(name, label);
        column.set_kind(ColumnKind::number(decimals));
        self.add_column(column)
    }

    /// Adds a date column using [`ColumnKind::DEFAULT_DATE_FORMAT`].
    pub fn add_column_date(&mut self, name: &str, label: &str) -> &mut Column {
        let mut column = Column::new(name, label);
        column.set_kind(ColumnKind::date(ColumnKind::DEFAULT_DATE_FORMAT));
        self.add_column(column)
    }
}
