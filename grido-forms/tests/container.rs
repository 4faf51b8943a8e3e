//! Tests for form containers.

use grido_forms::{Component, Container, Control, SelectBox, TextInput};

#[test]
fn test_root_controls_use_plain_names() {
    let mut form = Container::form("grid");
    let control = form.add_control("editstatus", Box::new(TextInput::new()));

    assert_eq!(control.name(), "editstatus");
    assert_eq!(control.html_name(), "editstatus");
}

#[test]
fn test_nested_controls_use_bracket_names() {
    let mut form = Container::form("grid");
    let edit = form.add_container("editstatus");
    let control = edit.add_control("7", Box::new(TextInput::new()));

    assert_eq!(control.html_name(), "editstatus[7]");
    assert!(control.render().contains(r#"id="frm-editstatus-7""#));
}

#[test]
fn test_add_control_replaces_same_name() {
    let mut form = Container::form("grid");
    form.add_control("a", Box::new(TextInput::with_value("first")));
    form.add_control("a", Box::new(TextInput::with_value("second")));

    assert_eq!(form.len(), 1);
    assert_eq!(form.control("a").unwrap().value(), "second");
}

#[test]
fn test_get_or_add_container_reuses_existing() {
    let mut form = Container::form("grid");
    form.get_or_add_container("editstatus")
        .add_control("1", Box::new(TextInput::new()));
    form.get_or_add_container("editstatus")
        .add_control("2", Box::new(TextInput::new()));

    let edit = form.container("editstatus").unwrap();
    assert_eq!(edit.controls().count(), 2);
    assert_eq!(form.containers().count(), 1);
}

#[test]
fn test_control_mut_changes_value() {
    let mut form = Container::form("grid");
    form.add_control("a", Box::new(TextInput::new()));
    form.control_mut("a").unwrap().set_value("x");

    assert_eq!(form.control("a").unwrap().value(), "x");
    assert!(form.control_mut("missing").is_none());
}

#[test]
fn test_component_into_control() {
    let control: Component = TextInput::new().into();
    assert!(control.is_control());
    assert!(control.into_control().is_ok());

    let container: Component = Container::form("x").into();
    assert_eq!(container.kind(), "container");
    assert!(container.into_control().is_err());

    let markup: Component = htmldom::Element::span().into();
    assert!(!markup.is_control());

    let select: Component = SelectBox::new().into();
    assert!(select.is_control());
}
