use super::Grid;
use crate::column::{ACTION_EDITABLE, ACTION_EDITABLE_CONTROL};
use crate::error::GridError;
use crate::model::{Row, Value};
use crate::request::{EditResult, Request, Response, SIGNAL_PARAM};

impl Grid {
    /// Commits an edited cell value.
    ///
    /// Non-AJAX requests and columns that are not editable are terminated
    /// without touching the model. Otherwise the value is persisted through
    /// the column's edit callback, or the model when there is none, and the
    /// reply carries whether it was updated plus the new cell markup.
    pub fn handle_editable(
        &mut self,
        column: &str,
        request: &Request,
        id: &str,
        new_value: &str,
        old_value: &str,
    ) -> Result<Response, GridError> {
        self.finalize()?;

        let column = self.column(column)?;
        if !request.is_ajax() || !column.is_editable() {
            log::debug!("[editable] commit on '{}' terminated", column.name());
            return Ok(Response::Terminated);
        }

        let updated = match column.editable_callback() {
            Some(callback) => callback(id, new_value, old_value, column),
            None => {
                let updatable = self
                    .model
                    .as_deref()
                    .and_then(|model| model.as_updatable())
                    .ok_or_else(|| {
                        GridError::configuration(
                            column.name(),
                            "You must define callback via set_editable_callback().",
                        )
                    })?;
                let changes = Row::new().set(column.field(), new_value);
                updatable.update(id, &changes, &self.primary_key)?
            }
        };
        log::debug!(
            "[editable] commit {}={} on '{}': updated={}",
            self.primary_key,
            id,
            column.name(),
            updated
        );

        let html = if column.has_custom_render() {
            let row = match column.editable_row_callback() {
                Some(callback) => callback(id, column)?,
                None => self
                    .model
                    .as_deref()
                    .and_then(|model| model.as_row_fetchable())
                    .ok_or_else(|| {
                        GridError::configuration(
                            column.name(),
                            "You must define callback via set_editable_row_callback().",
                        )
                    })?
                    .get_row(id, &self.primary_key)?,
            };
            column.render(&row)?
        } else {
            column.format_value(&Value::from(new_value))
        };

        Ok(Response::json(&EditResult { updated, html })?)
    }

    /// Renders the edit control of a column seeded with `value`.
    pub fn handle_editable_control(
        &mut self,
        column: &str,
        request: &Request,
        value: &str,
    ) -> Result<Response, GridError> {
        self.finalize()?;

        let index = self.column_index(column)?;
        let column = &self.columns[index];
        if !request.is_ajax() || !column.is_editable() {
            log::debug!("[editable] control request on '{}' terminated", column.name());
            return Ok(Response::Terminated);
        }

        let name = column.edit_container_name();
        let control =
            column.resolve_editable_control(&mut self.form, &name, &self.config.control_class)?;
        control.set_value(value);

        Ok(Response::Text(control.render()))
    }

    /// Routes a request by its `do` parameter to the matching handler.
    ///
    /// The signal is `<grid>-columns-<column>-<action>`; handler arguments are
    /// read from the parameters prefixed with `<grid>-columns-<column>-`.
    pub fn dispatch(&mut self, request: &Request) -> Result<Response, GridError> {
        let signal = request
            .param(SIGNAL_PARAM)
            .ok_or_else(|| GridError::MissingParameter(SIGNAL_PARAM.to_string()))?;
        let (column, action) = self
            .links
            .parse_signal(signal)
            .ok_or_else(|| GridError::UnknownSignal(signal.to_string()))?;
        log::trace!("[grid] dispatching '{}' to column '{}'", action, column);

        let param = |name: &str| request.param(&self.links.param_name(column, name));

        match action {
            ACTION_EDITABLE => {
                let id_name = self.links.param_name(column, "id");
                let id = param("id")
                    .ok_or(GridError::MissingParameter(id_name))?
                    .to_string();
                let new_value = param("newValue").unwrap_or_default().to_string();
                let old_value = param("oldValue").unwrap_or_default().to_string();
                self.handle_editable(column, request, &id, &new_value, &old_value)
            }
            ACTION_EDITABLE_CONTROL => {
                let value = param("value").unwrap_or_default().to_string();
                self.handle_editable_control(column, request, &value)
            }
            _ => Err(GridError::UnknownSignal(signal.to_string())),
        }
    }
}
