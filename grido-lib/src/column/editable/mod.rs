//! Inline editing configuration for a column.
//!
//! Editing is switched on by [`Column::set_editable`] or by configuring any of
//! its aspects (control, edit callback, value callback, row callback).
//! [`Column::disable_editable`] switches it off for good.

mod annotate;
mod control;
mod render;

pub use annotate::{ACTION_EDITABLE, ACTION_EDITABLE_CONTROL};

use grido_forms::{Component, Container};

use super::Column;
use crate::error::{GridError, SourceError};
use crate::model::{Row, Value};

/// Persists an edit: `(id, new_value, old_value, column) -> updated`.
pub type EditCallback = Box<dyn Fn(&str, &str, &str, &Column) -> bool + Send + Sync>;

/// Computes the value carried by an editable cell.
pub type ValueCallback = Box<dyn Fn(&Row, &Column) -> Value + Send + Sync>;

/// Fetches the row an edited cell is re-rendered from.
pub type RowCallback = Box<dyn Fn(&str, &Column) -> Result<Row, SourceError> + Send + Sync>;

/// Returns `true` for rows whose cell must not be editable.
pub type DisablePredicate = Box<dyn Fn(&Row) -> bool + Send + Sync>;

/// Builds the edit component inside a container for a control name.
pub type ControlFactory = Box<dyn Fn(&mut Container, &str) -> Component + Send + Sync>;

/// Where the edit control comes from.
#[derive(Default)]
pub enum ControlSource {
    /// A text input with the configured control class.
    #[default]
    Default,
    /// Cloned for every resolution; never handed out itself.
    Prototype(Box<dyn grido_forms::Control>),
    Factory(ControlFactory),
}

impl ControlSource {
    pub fn is_default(&self) -> bool {
        matches!(self, Self::Default)
    }
}

impl std::fmt::Debug for ControlSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Default => f.write_str("Default"),
            Self::Prototype(control) => f.debug_tuple("Prototype").field(control).finish(),
            Self::Factory(_) => f.write_str("Factory(..)"),
        }
    }
}

/// Editing state owned by a [`Column`].
#[derive(Default)]
pub struct EditableState {
    pub(crate) enabled: bool,
    pub(crate) auto_init: bool,
    pub(crate) disabled: bool,
    pub(crate) disable_predicate: Option<DisablePredicate>,
    pub(crate) edit_callback: Option<EditCallback>,
    pub(crate) value_callback: Option<ValueCallback>,
    pub(crate) row_callback: Option<RowCallback>,
    pub(crate) control: ControlSource,
}

impl EditableState {
    fn has_aspect(&self) -> bool {
        !self.control.is_default()
            || self.edit_callback.is_some()
            || self.value_callback.is_some()
            || self.row_callback.is_some()
    }

    pub fn is_enabled(&self) -> bool {
        !self.disabled && (self.enabled || self.has_aspect())
    }
}

impl std::fmt::Debug for EditableState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditableState")
            .field("enabled", &self.enabled)
            .field("auto_init", &self.auto_init)
            .field("disabled", &self.disabled)
            .field("disable_predicate", &self.disable_predicate.is_some())
            .field("edit_callback", &self.edit_callback.is_some())
            .field("value_callback", &self.value_callback.is_some())
            .field("row_callback", &self.row_callback.is_some())
            .field("control", &self.control)
            .finish()
    }
}

/// Everything [`Column::set_editable_with`] can configure in one call.
///
/// # Example
///
/// ```
/// use grido_lib::{Column, EditableOptions};
/// use grido_forms::TextInput;
///
/// let mut column = Column::new("status", "Status");
/// column
///     .set_editable_with(
///         EditableOptions::new()
///             .callback(|_id, _new, _old, _column| true)
///             .control(TextInput::new())
///             .auto_init(true),
///     )
///     .unwrap();
/// assert!(column.is_editable());
/// assert!(column.is_auto_init());
/// ```
#[derive(Default)]
pub struct EditableOptions {
    callback: Option<EditCallback>,
    control: Option<Component>,
    auto_init: bool,
    disable_predicate: Option<DisablePredicate>,
}

impl EditableOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn callback<F>(mut self, callback: F) -> Self
    where
        F: Fn(&str, &str, &str, &Column) -> bool + Send + Sync + 'static,
    {
        self.callback = Some(Box::new(callback));
        self
    }

    pub fn control(mut self, control: impl Into<Component>) -> Self {
        self.control = Some(control.into());
        self
    }

    pub fn auto_init(mut self, auto_init: bool) -> Self {
        self.auto_init = auto_init;
        self
    }

    pub fn disable_if<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&Row) -> bool + Send + Sync + 'static,
    {
        self.disable_predicate = Some(Box::new(predicate));
        self
    }
}

impl Column {
    // =========================================================================
    // Editing setup
    // =========================================================================

    /// Makes the column editable.
    ///
    /// With `auto_init` the cell renders as an edit control straight away
    /// instead of waiting for a click.
    pub fn set_editable(&mut self, auto_init: bool) -> &mut Self {
        self.warn_if_disabled("set_editable");
        self.editable.enabled = true;
        self.editable.auto_init = auto_init;
        self
    }

    /// Makes the column editable and applies every option given.
    pub fn set_editable_with(&mut self, options: EditableOptions) -> Result<&mut Self, GridError> {
        self.set_editable(options.auto_init);
        if let Some(predicate) = options.disable_predicate {
            self.editable.disable_predicate = Some(predicate);
        }
        if let Some(callback) = options.callback {
            self.editable.edit_callback = Some(callback);
        }
        if let Some(control) = options.control {
            self.set_editable_control(control)?;
        }
        Ok(self)
    }

    /// Uses a copy of `control` as the edit control.
    ///
    /// Only form controls are accepted; containers and static markup give
    /// [`GridError::InvalidArgument`].
    pub fn set_editable_control(
        &mut self,
        control: impl Into<Component>,
    ) -> Result<&mut Self, GridError> {
        let control = control.into().into_control().map_err(|other| {
            GridError::InvalidArgument(format!(
                "Editable control of column '{}' must be a form control, got {}.",
                self.name(),
                other.kind()
            ))
        })?;
        self.warn_if_disabled("set_editable_control");
        self.editable.control = ControlSource::Prototype(control);
        Ok(self)
    }

    /// Builds the edit control with `factory(container, name)` on each use.
    pub fn set_editable_control_factory<F>(&mut self, factory: F) -> &mut Self
    where
        F: Fn(&mut Container, &str) -> Component + Send + Sync + 'static,
    {
        self.warn_if_disabled("set_editable_control_factory");
        self.editable.control = ControlSource::Factory(Box::new(factory));
        self
    }

    /// Persists edits with `callback(id, new_value, old_value, column)`
    /// instead of the model.
    pub fn set_editable_callback<F>(&mut self, callback: F) -> &mut Self
    where
        F: Fn(&str, &str, &str, &Column) -> bool + Send + Sync + 'static,
    {
        self.warn_if_disabled("set_editable_callback");
        self.editable.edit_callback = Some(Box::new(callback));
        self
    }

    /// Computes the value put on editable cells.
    pub fn set_editable_value_callback<F>(&mut self, callback: F) -> &mut Self
    where
        F: Fn(&Row, &Column) -> Value + Send + Sync + 'static,
    {
        self.warn_if_disabled("set_editable_value_callback");
        self.editable.value_callback = Some(Box::new(callback));
        self
    }

    /// Fetches the row a committed cell is re-rendered from.
    pub fn set_editable_row_callback<F>(&mut self, callback: F) -> &mut Self
    where
        F: Fn(&str, &Column) -> Result<Row, SourceError> + Send + Sync + 'static,
    {
        self.warn_if_disabled("set_editable_row_callback");
        self.editable.row_callback = Some(Box::new(callback));
        self
    }

    /// Rows for which `predicate` returns `true` are not editable.
    pub fn set_disable_editable_if<F>(&mut self, predicate: F) -> &mut Self
    where
        F: Fn(&Row) -> bool + Send + Sync + 'static,
    {
        self.editable.disable_predicate = Some(Box::new(predicate));
        self
    }

    /// Turns editing off. Nothing turns it back on.
    pub fn disable_editable(&mut self) -> &mut Self {
        log::debug!("[editable] column '{}' disabled", self.name());
        self.editable.enabled = false;
        self.editable.disabled = true;
        self
    }

    fn warn_if_disabled(&self, setter: &str) {
        if self.editable.disabled {
            log::warn!(
                "[editable] {}() on disabled column '{}' has no effect on editability",
                setter,
                self.name()
            );
        }
    }

    // =========================================================================
    // Editing accessors
    // =========================================================================

    pub fn is_editable(&self) -> bool {
        self.editable.is_enabled()
    }

    pub fn is_editable_disabled(&self) -> bool {
        self.editable.disabled
    }

    pub fn is_auto_init(&self) -> bool {
        self.editable.auto_init
    }

    pub fn editable_callback(&self) -> Option<&EditCallback> {
        self.editable.edit_callback.as_ref()
    }

    pub fn editable_value_callback(&self) -> Option<&ValueCallback> {
        self.editable.value_callback.as_ref()
    }

    pub fn editable_row_callback(&self) -> Option<&RowCallback> {
        self.editable.row_callback.as_ref()
    }

    pub fn editable_control(&self) -> &ControlSource {
        &self.editable.control
    }

    /// Whether the cell of `row` may be edited: the column is editable and the
    /// disable predicate, if any, does not exclude the row.
    pub fn is_row_editable(&self, row: &Row) -> bool {
        self.is_editable()
            && !self
                .editable
                .disable_predicate
                .as_ref()
                .is_some_and(|disabled| disabled(row))
    }
}
