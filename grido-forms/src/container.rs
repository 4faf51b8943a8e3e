//! Named container of controls and nested containers.

use crate::control::Control;

/// A container of named controls and nested containers.
///
/// The root container of a form has an empty path, so its controls are named
/// plainly (`editstatus`). Nested containers prefix their controls with their
/// own path (`editstatus[7]`).
#[derive(Debug, Clone, Default)]
pub struct Container {
    /// Name within the parent (or the form name for a root).
    name: String,
    /// HTML name prefix; empty for a root form.
    path: String,
    controls: Vec<(String, Box<dyn Control>)>,
    containers: Vec<Container>,
}

impl Container {
    /// Create a root form container.
    pub fn form(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// HTML name prefix used for children of this container.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// HTML name a child called `name` receives in this container.
    pub fn html_name_for(&self, name: &str) -> String {
        if self.path.is_empty() {
            name.to_string()
        } else {
            format!("{}[{}]", self.path, name)
        }
    }

    // -------------------------------------------------------------------------
    // Controls
    // -------------------------------------------------------------------------

    /// Attach a control under `name`, replacing any control of that name.
    pub fn add_control(&mut self, name: &str, mut control: Box<dyn Control>) -> &mut dyn Control {
        control.attach(name, self.html_name_for(name));

        let index = match self.controls.iter().position(|(n, _)| n == name) {
            Some(index) => {
                log::trace!("[form] replacing control '{}' in '{}'", name, self.name);
                self.controls[index].1 = control;
                index
            }
            None => {
                self.controls.push((name.to_string(), control));
                self.controls.len() - 1
            }
        };

        self.controls[index].1.as_mut()
    }

    pub fn control(&self, name: &str) -> Option<&dyn Control> {
        self.controls
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, c)| &**c as &dyn Control)
    }

    pub fn control_mut(&mut self, name: &str) -> Option<&mut dyn Control> {
        match self.controls.iter_mut().find(|(n, _)| n == name) {
            Some((_, control)) => Some(control.as_mut()),
            None => None,
        }
    }

    pub fn remove_control(&mut self, name: &str) -> Option<Box<dyn Control>> {
        let index = self.controls.iter().position(|(n, _)| n == name)?;
        Some(self.controls.remove(index).1)
    }

    /// Controls directly in this container, in insertion order.
    pub fn controls(&self) -> impl Iterator<Item = &dyn Control> {
        self.controls.iter().map(|(_, c)| &**c as &dyn Control)
    }

    // -------------------------------------------------------------------------
    // Containers
    // -------------------------------------------------------------------------

    /// Add an empty nested container, replacing any container of that name.
    pub fn add_container(&mut self, name: &str) -> &mut Container {
        let child = Container {
            name: name.to_string(),
            path: self.html_name_for(name),
            controls: Vec::new(),
            containers: Vec::new(),
        };

        let index = match self.containers.iter().position(|c| c.name == name) {
            Some(index) => {
                self.containers[index] = child;
                index
            }
            None => {
                self.containers.push(child);
                self.containers.len() - 1
            }
        };

        &mut self.containers[index]
    }

    /// Return the nested container called `name`, creating it if needed.
    pub fn get_or_add_container(&mut self, name: &str) -> &mut Container {
        match self.containers.iter().position(|c| c.name == name) {
            Some(index) => &mut self.containers[index],
            None => self.add_container(name),
        }
    }

    pub fn container(&self, name: &str) -> Option<&Container> {
        self.containers.iter().find(|c| c.name == name)
    }

    pub fn container_mut(&mut self, name: &str) -> Option<&mut Container> {
        self.containers.iter_mut().find(|c| c.name == name)
    }

    pub fn containers(&self) -> impl Iterator<Item = &Container> {
        self.containers.iter()
    }

    /// Number of direct children (controls and containers).
    pub fn len(&self) -> usize {
        self.controls.len() + self.containers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
