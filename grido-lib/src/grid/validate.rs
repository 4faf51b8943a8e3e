use super::{EDITABLE_OPTION, Grid};
use crate::error::GridError;

impl Grid {
    /// Announces editing to the client script. Only the first call has an
    /// effect; returns whether this call registered it.
    pub fn register_editable(&mut self) -> bool {
        if self.editable_registered {
            return false;
        }

        log::debug!("[editable] registering editable option on '{}'", self.name);
        self.editable_registered = true;
        self.client_options
            .insert(EDITABLE_OPTION.to_string(), serde_json::Value::Bool(true));
        true
    }

    pub fn is_editable_registered(&self) -> bool {
        self.editable_registered
    }

    /// Checks every editable column against the bound model.
    ///
    /// A column without an edit callback needs a direct field and a model that
    /// can update rows. A custom-rendered column without a row callback needs
    /// a model that can fetch a single row. Without a model neither is
    /// available.
    ///
    /// The result is kept until a column or the model changes.
    pub fn finalize(&mut self) -> Result<(), GridError> {
        if self.finalized {
            return Ok(());
        }

        if self.columns.iter().any(|c| c.is_editable()) {
            self.register_editable();
        }

        let model = self.model.as_deref();
        let can_update = model.is_some_and(|m| m.as_updatable().is_some());
        let can_fetch = model.is_some_and(|m| m.as_row_fetchable().is_some());

        for column in self.columns.iter().filter(|c| c.is_editable()) {
            log::debug!(
                "[editable] checking column '{}' (update: {}, get_row: {})",
                column.name(),
                can_update,
                can_fetch
            );

            if column.editable_callback().is_none() && (column.is_relation() || !can_update) {
                let err = GridError::configuration(
                    column.name(),
                    "You must define callback via set_editable_callback().",
                );
                log::warn!("[editable] {}", err);
                return Err(err);
            }

            if column.editable_row_callback().is_none()
                && column.has_custom_render()
                && !can_fetch
            {
                let err = GridError::configuration(
                    column.name(),
                    "You must define callback via set_editable_row_callback().",
                );
                log::warn!("[editable] {}", err);
                return Err(err);
            }
        }

        self.finalized = true;
        Ok(())
    }
}
