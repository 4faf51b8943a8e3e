//! Select box rendering.

use htmldom::Element;

use super::SelectBox;
use crate::control::html_id;

pub(super) fn select_element(select: &SelectBox) -> Element {
    let mut el = Element::new("select");

    if !select.html_name.is_empty() {
        el = el
            .id(html_id(&select.html_name))
            .attr("name", select.html_name.as_str());
    }

    for class in &select.classes {
        el.add_class(class.as_str());
    }

    if let Some(prompt) = &select.prompt {
        el.push_child(Element::new("option").attr("value", "").content(
            htmldom::Content::Text(prompt.clone()),
        ));
    }

    for (key, label) in &select.items {
        let mut option = Element::new("option")
            .attr("value", key.as_str())
            .content(htmldom::Content::Text(label.clone()));
        if *key == select.value {
            option.set_attr("selected", "selected");
        }
        el.push_child(option);
    }

    el
}
