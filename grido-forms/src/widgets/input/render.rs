//! Text input rendering.

use htmldom::Element;

use super::TextInput;
use crate::control::html_id;

/// Build the `<input>` element for a text input.
pub(super) fn input_element(input: &TextInput) -> Element {
    let mut el = Element::input(input.kind());

    if !input.html_name.is_empty() {
        el = el
            .id(html_id(&input.html_name))
            .attr("name", input.html_name.as_str());
    }

    if let Some(max) = input.max_length {
        el = el.attr("maxlength", max.to_string());
    }

    if !input.placeholder.is_empty() {
        el = el.attr("placeholder", input.placeholder.as_str());
    }

    for class in &input.classes {
        el.add_class(class.as_str());
    }

    for (name, value) in &input.attrs {
        el.set_attr(name.as_str(), value.as_str());
    }

    el.attr("value", input.value.as_str())
}
