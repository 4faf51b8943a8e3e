use std::fmt::Write;

use crate::element::{Content, Element};
use crate::text::{escape_attr, escape_text};

/// Render an element tree to an HTML string.
pub fn render_to_string(element: &Element) -> String {
    let mut out = String::new();
    render_element(element, &mut out);
    out
}

fn render_element(element: &Element, out: &mut String) {
    out.push('<');
    out.push_str(&element.tag);

    if let Some(id) = &element.id {
        push_attr(out, "id", id);
    }

    if !element.classes.is_empty() {
        push_attr(out, "class", &element.classes.join(" "));
    }

    for (name, value) in &element.attrs {
        push_attr(out, name, value);
    }

    for (key, value) in &element.data {
        push_attr(out, &format!("data-{key}"), value);
    }

    out.push('>');

    if element.is_void() {
        if !element.content.is_empty() {
            log::trace!("[render] dropping content of void element <{}>", element.tag);
        }
        return;
    }

    match &element.content {
        Content::None => {}
        Content::Text(text) => out.push_str(&escape_text(text)),
        Content::Raw(html) => out.push_str(html),
        Content::Children(children) => {
            for child in children {
                render_element(child, out);
            }
        }
    }

    let _ = write!(out, "</{}>", element.tag);
}

fn push_attr(out: &mut String, name: &str, value: &str) {
    let _ = write!(out, " {}=\"{}\"", name, escape_attr(value));
}
