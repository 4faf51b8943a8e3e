//! The `Control` trait shared by all form controls.

use htmldom::Element;

/// A form control that can be attached to a [`Container`](crate::Container),
/// seeded with a value and rendered.
///
/// Cloning goes through [`Control::clone_box`], which must produce an
/// independent copy: mutating the clone never affects the original.
pub trait Control: std::fmt::Debug + Send + Sync {
    /// Name within the parent container.
    fn name(&self) -> &str;

    /// Full HTML `name` attribute, including parent containers.
    fn html_name(&self) -> &str;

    /// Called by the container when the control is attached under `name`.
    fn attach(&mut self, name: &str, html_name: String);

    /// Current value as submitted text.
    fn value(&self) -> String;

    fn set_value(&mut self, value: &str);

    /// Add a CSS class to the rendered control.
    fn add_class(&mut self, class: &str);

    fn classes(&self) -> &[String];

    /// Build the element for this control.
    fn element(&self) -> Element;

    fn clone_box(&self) -> Box<dyn Control>;

    /// Render the control markup.
    fn render(&self) -> String {
        self.element().to_html()
    }
}

impl Clone for Box<dyn Control> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// HTML id for a control, derived from its full name: `editstatus[7]` becomes
/// `frm-editstatus-7`.
pub(crate) fn html_id(html_name: &str) -> String {
    let mut id = String::from("frm-");
    for ch in html_name.chars() {
        match ch {
            '[' => id.push('-'),
            ']' => {}
            _ => id.push(ch),
        }
    }
    id
}
