use htmldom::Element;

use crate::column::Column;
use crate::error::GridError;
use crate::model::Row;
use crate::request::Links;

/// Action committing an edited value.
pub const ACTION_EDITABLE: &str = "editable";
/// Action fetching the edit control markup.
pub const ACTION_EDITABLE_CONTROL: &str = "editableControl";

impl Column {
    /// Header cell carrying the label and, for editable columns, the targets
    /// the client script sends edits and control requests to.
    pub fn header_prototype(&self, links: &Links) -> Element {
        let mut th = self.base_header_prototype();
        th.set_text(self.label());

        if self.is_editable() {
            th.set_data(
                "grido-editable-handler",
                links.signal(self.name(), ACTION_EDITABLE),
            );
            th.set_data(
                "grido-editableControl-handler",
                links.signal(self.name(), ACTION_EDITABLE_CONTROL),
            );
        }

        th
    }

    /// Body cell for `row`, marked editable when the column and the row allow
    /// it. The current value goes into `data-grido-editable-value`.
    pub fn cell_prototype(&self, row: Option<&Row>) -> Result<Element, GridError> {
        let mut td = self.base_cell_prototype();

        let Some(row) = row else {
            return Ok(td);
        };
        if !self.is_row_editable(row) {
            return Ok(td);
        }

        td.add_class("editable");
        if self.is_auto_init() {
            td.add_class("editable-auto-init");
        }

        let value = match self.editable_value_callback() {
            Some(callback) => callback(row, self),
            None => self.value(row)?,
        };
        td.set_data("grido-editable-value", value.to_plain_string());

        Ok(td)
    }
}
