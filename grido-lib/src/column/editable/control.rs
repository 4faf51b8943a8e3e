use grido_forms::{Container, Control, TextInput};

use super::ControlSource;
use crate::column::Column;
use crate::error::GridError;

impl Column {
    /// Resolves the edit control and attaches it to `container` under `name`,
    /// replacing any control of that name.
    ///
    /// The default control is a text input carrying `control_class`. A
    /// prototype is cloned, so each call returns an independent control.
    pub fn resolve_editable_control<'c>(
        &self,
        container: &'c mut Container,
        name: &str,
        control_class: &str,
    ) -> Result<&'c mut dyn Control, GridError> {
        let control: Box<dyn Control> = match &self.editable.control {
            ControlSource::Default => {
                let mut input = TextInput::new();
                input.add_class(control_class);
                Box::new(input)
            }
            ControlSource::Prototype(prototype) => prototype.clone_box(),
            ControlSource::Factory(factory) => {
                factory(&mut *container, name).into_control().map_err(|other| {
                    GridError::Runtime(format!(
                        "Editable control factory of column '{}' returned {}, expected a form control.",
                        self.name(),
                        other.kind()
                    ))
                })?
            }
        };

        log::trace!(
            "[editable] control '{}' resolved for column '{}' in '{}'",
            name,
            self.name(),
            container.name()
        );
        Ok(container.add_control(name, control))
    }
}
