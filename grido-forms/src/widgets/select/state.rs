use crate::control::Control;

/// A select box with a fixed list of `(key, label)` items.
///
/// Values that match no item are kept as-is; the rendered select then has no
/// option marked as selected.
#[derive(Debug, Clone, Default)]
pub struct SelectBox {
    pub(super) name: String,
    pub(super) html_name: String,
    pub(super) items: Vec<(String, String)>,
    /// Key of the selected item
    pub(super) value: String,
    /// Leading empty option label
    pub(super) prompt: Option<String>,
    pub(super) classes: Vec<String>,
}

impl SelectBox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a select box from `(key, label)` pairs.
    pub fn with_items<K, L>(items: impl IntoIterator<Item = (K, L)>) -> Self
    where
        K: Into<String>,
        L: Into<String>,
    {
        Self {
            items: items
                .into_iter()
                .map(|(k, l)| (k.into(), l.into()))
                .collect(),
            ..Default::default()
        }
    }

    pub fn item(mut self, key: impl Into<String>, label: impl Into<String>) -> Self {
        self.items.push((key.into(), label.into()));
        self
    }

    pub fn prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        let class: String = class.into();
        Control::add_class(&mut self, &class);
        self
    }

    pub fn items(&self) -> &[(String, String)] {
        &self.items
    }

    /// Label of the selected item, if the value matches one.
    pub fn selected_label(&self) -> Option<&str> {
        self.items
            .iter()
            .find(|(k, _)| *k == self.value)
            .map(|(_, l)| l.as_str())
    }
}

impl Control for SelectBox {
    fn name(&self) -> &str {
        &self.name
    }

    fn html_name(&self) -> &str {
        &self.html_name
    }

    fn attach(&mut self, name: &str, html_name: String) {
        self.name = name.to_string();
        self.html_name = html_name;
    }

    fn value(&self) -> String {
        self.value.clone()
    }

    fn set_value(&mut self, value: &str) {
        if !self.items.iter().any(|(k, _)| k == value) {
            log::debug!("[form] select '{}' has no item '{}'", self.html_name, value);
        }
        self.value = value.to_string();
    }

    fn add_class(&mut self, class: &str) {
        if !class.is_empty() && !self.classes.iter().any(|c| c == class) {
            self.classes.push(class.to_string());
        }
    }

    fn classes(&self) -> &[String] {
        &self.classes
    }

    fn element(&self) -> htmldom::Element {
        super::render::select_element(self)
    }

    fn clone_box(&self) -> Box<dyn Control> {
        Box::new(self.clone())
    }
}
