use htmldom::Element;

use crate::container::Container;
use crate::control::Control;
use crate::widgets::{SelectBox, TextInput};

/// Anything that can be placed on a form.
///
/// Only the `Control` variant can receive a value; callers that need an
/// editable control use [`Component::into_control`] and report the rest.
#[derive(Debug, Clone)]
pub enum Component {
    Control(Box<dyn Control>),
    Container(Container),
    /// Static markup such as a hint or a separator.
    Markup(Element),
}

impl Component {
    pub fn is_control(&self) -> bool {
        matches!(self, Self::Control(_))
    }

    /// Short description used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Control(_) => "control",
            Self::Container(_) => "container",
            Self::Markup(_) => "markup",
        }
    }

    /// Returns the control, or gives the component back if it is not one.
    pub fn into_control(self) -> Result<Box<dyn Control>, Component> {
        match self {
            Self::Control(control) => Ok(control),
            other => Err(other),
        }
    }
}

impl From<Box<dyn Control>> for Component {
    fn from(control: Box<dyn Control>) -> Self {
        Self::Control(control)
    }
}

impl From<TextInput> for Component {
    fn from(control: TextInput) -> Self {
        Self::Control(Box::new(control))
    }
}

impl From<SelectBox> for Component {
    fn from(control: SelectBox) -> Self {
        Self::Control(Box::new(control))
    }
}

impl From<Container> for Component {
    fn from(container: Container) -> Self {
        Self::Container(container)
    }
}

impl From<Element> for Component {
    fn from(element: Element) -> Self {
        Self::Markup(element)
    }
}
