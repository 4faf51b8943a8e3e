//! Grid columns
//!
//! A [`Column`] reads its value from a row through a field path, formats it
//! according to its [`ColumnKind`] and may be made editable, see
//! [`Column::set_editable`].

pub mod editable;
mod format;

pub use editable::{
    ACTION_EDITABLE, ACTION_EDITABLE_CONTROL, ControlFactory, ControlSource, DisablePredicate,
    EditCallback, EditableOptions, EditableState, RowCallback, ValueCallback,
};
pub use format::ColumnKind;

use htmldom::{Element, escape_text};

use crate::error::GridError;
use crate::model::{RELATION_SEPARATOR, Row, Value};

/// Renders a row into raw cell markup.
pub type CustomRender = Box<dyn Fn(&Row) -> String + Send + Sync>;

/// A grid column.
pub struct Column {
    name: String,
    label: String,
    /// Field path; dotted segments traverse relations.
    field: String,
    kind: ColumnKind,
    /// Exact-match display substitutions, applied after formatting.
    replacements: Vec<(String, String)>,
    custom_render: Option<CustomRender>,
    pub(crate) editable: EditableState,
}

impl std::fmt::Debug for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Column")
            .field("name", &self.name)
            .field("field", &self.field)
            .field("kind", &self.kind)
            .field("custom_render", &self.custom_render.is_some())
            .field("editable", &self.editable)
            .finish()
    }
}

impl Column {
    /// Creates a text column whose field path is its name.
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            field: name.clone(),
            name,
            label: label.into(),
            kind: ColumnKind::Text,
            replacements: Vec::new(),
            custom_render: None,
            editable: EditableState::default(),
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn kind(&self) -> &ColumnKind {
        &self.kind
    }

    /// Returns `true` if the field path goes through a relation, i.e. there is
    /// no direct field on the row to update.
    pub fn is_relation(&self) -> bool {
        self.field.contains(RELATION_SEPARATOR)
    }

    pub fn custom_render(&self) -> Option<&CustomRender> {
        self.custom_render.as_ref()
    }

    pub fn has_custom_render(&self) -> bool {
        self.custom_render.is_some()
    }

    // =========================================================================
    // Setters
    // =========================================================================

    /// Sets the field path (for example `customer.name`).
    pub fn set_field(&mut self, field: impl Into<String>) -> &mut Self {
        self.field = field.into();
        self
    }

    pub fn set_kind(&mut self, kind: ColumnKind) -> &mut Self {
        self.kind = kind;
        self
    }

    pub fn set_label(&mut self, label: impl Into<String>) -> &mut Self {
        self.label = label.into();
        self
    }

    /// Displays `to` wherever the formatted value equals `from`.
    pub fn set_replacement(&mut self, from: impl Into<String>, to: impl Into<String>) -> &mut Self {
        let from = from.into();
        let to = to.into();
        match self.replacements.iter_mut().find(|(f, _)| *f == from) {
            Some(slot) => slot.1 = to,
            None => self.replacements.push((from, to)),
        }
        self
    }

    /// Renders cells with `render` instead of the formatted value.
    pub fn set_custom_render<F>(&mut self, render: F) -> &mut Self
    where
        F: Fn(&Row) -> String + Send + Sync + 'static,
    {
        self.custom_render = Some(Box::new(render));
        self
    }

    // =========================================================================
    // Rendering primitives
    // =========================================================================

    /// Reads this column's value from a row.
    pub fn value(&self, row: &Row) -> Result<Value, GridError> {
        Ok(row.get_path(&self.field)?.clone())
    }

    /// Formats a value as plain text.
    ///
    /// With `replacements` off, registered replacements are skipped; used for
    /// edit seeds.
    pub fn format_plain(&self, value: &Value, replacements: bool) -> String {
        let formatted = self.kind.format(value);
        if replacements
            && let Some((_, to)) = self.replacements.iter().find(|(from, _)| *from == formatted)
        {
            return to.clone();
        }
        formatted
    }

    /// Formats a value for display as escaped HTML.
    pub fn format_value(&self, value: &Value) -> String {
        escape_text(&self.format_plain(value, true))
    }

    /// Normal (non-editable) cell content for a row.
    pub fn render(&self, row: &Row) -> Result<String, GridError> {
        match &self.custom_render {
            Some(render) => Ok(render(row)),
            None => Ok(self.format_value(&self.value(row)?)),
        }
    }

    /// Header cell without editing markers.
    pub fn base_header_prototype(&self) -> Element {
        Element::th().class(format!("grid-header-{}", self.name))
    }

    /// Body cell without editing markers.
    pub fn base_cell_prototype(&self) -> Element {
        Element::td().class(format!("grid-cell-{}", self.name))
    }
}
