use grido_forms::Container;
use htmldom::Element;

use crate::column::Column;
use crate::config::GridConfig;
use crate::error::GridError;
use crate::model::Row;

impl Column {
    /// Name of the form container holding this column's edit controls.
    pub fn edit_container_name(&self) -> String {
        format!("edit{}", self.name())
    }

    /// Cell content for `row`.
    ///
    /// Auto-init cells of editable rows render their edit control, seeded with
    /// the formatted value (replacements skipped) and named `row_id`, followed
    /// by the confirmation marker. Everything else renders normally.
    pub fn render_editable(
        &self,
        row: &Row,
        row_id: &str,
        form: &mut Container,
        config: &GridConfig,
    ) -> Result<String, GridError> {
        if !(self.is_auto_init() && self.is_row_editable(row)) {
            return self.render(row);
        }

        let seed = self.format_plain(&self.value(row)?, false);
        let container = form.get_or_add_container(&self.edit_container_name());
        let control = self.resolve_editable_control(container, row_id, &config.control_class)?;
        control.set_value(&seed);

        let confirm =
            Element::text(config.confirm_label.as_str()).class(config.confirm_class.as_str());

        log::trace!(
            "[editable] auto-init control '{}' for column '{}'",
            control.html_name(),
            self.name()
        );
        Ok(format!("{}{}", control.render(), confirm.to_html()))
    }
}
