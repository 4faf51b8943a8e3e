//! Grido data grid: columns with inline (AJAX) cell editing.
//!
//! A [`Grid`] owns its columns, the bound data source and the form that edit
//! controls are attached to. Editing is configured per column and validated
//! once per grid by [`Grid::finalize`], which every render and every edit
//! request runs first.
//!
//! # Example
//!
//! ```
//! use grido_lib::{Grid, GridConfig, Request, Row};
//! use grido_lib::source::MemorySource;
//!
//! let mut grid = Grid::new("grid", GridConfig::default());
//! grid.set_model(MemorySource::new(vec![
//!     Row::new().set("id", 7).set("status", "open"),
//! ]));
//! grid.add_column_text("status", "Status").set_editable(false);
//!
//! let response = grid
//!     .handle_editable("status", &Request::ajax(), "7", "done", "open")
//!     .unwrap();
//! assert_eq!(response.body(), r#"{"html":"done","updated":true}"#);
//! ```

pub mod accessor;
pub mod column;
pub mod config;
pub mod error;
pub mod grid;
pub mod model;
pub mod request;
pub mod source;

pub use column::{Column, ColumnKind, EditableOptions};
pub use config::GridConfig;
pub use error::GridError;
pub use grid::Grid;
pub use model::{Row, Value};
pub use request::{EditResult, Request, Response};
