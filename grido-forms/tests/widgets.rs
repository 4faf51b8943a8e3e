//! Tests for the built-in controls.

use grido_forms::{Container, Control, SelectBox, TextInput};

#[test]
fn test_text_input_renders_value_and_classes() {
    let mut form = Container::form("grid");
    let control = form.add_control("editstatus", Box::new(TextInput::new().class("form-control")));
    control.set_value("42");

    assert_eq!(
        control.render(),
        r#"<input id="frm-editstatus" class="form-control" type="text" name="editstatus" value="42">"#
    );
}

#[test]
fn test_text_input_escapes_value() {
    let mut input = TextInput::new();
    input.set_value(r#"a "quoted" <value>"#);

    assert!(input.render().contains(r#"value="a &quot;quoted&quot; &lt;value&gt;""#));
}

#[test]
fn test_text_input_max_length_truncates() {
    let mut input = TextInput::new().max_length(3);
    input.set_value("abcdef");

    assert_eq!(input.value(), "abc");
    assert!(input.render().contains(r#"maxlength="3""#));
}

#[test]
fn test_clone_box_is_independent() {
    let prototype: Box<dyn Control> = Box::new(TextInput::with_value("seed"));

    let mut first = prototype.clone_box();
    first.set_value("changed");
    first.add_class("dirty");

    let second = prototype.clone();
    assert_eq!(second.value(), "seed");
    assert!(second.classes().is_empty());
}

#[test]
fn test_select_marks_selected_item() {
    let mut select = SelectBox::with_items([("open", "Open"), ("done", "Done")]).prompt("-");
    select.set_value("done");

    let html = select.render();
    assert!(html.contains(r#"<option value="done" selected="selected">Done</option>"#));
    assert!(html.contains(r#"<option value="">-</option>"#));
    assert_eq!(select.selected_label(), Some("Done"));
}

#[test]
fn test_select_unknown_value_selects_nothing() {
    let mut select = SelectBox::new().item("a", "A");
    select.set_value("zzz");

    assert!(!select.render().contains("selected"));
    assert_eq!(select.selected_label(), None);
    assert_eq!(select.value(), "zzz");
}
