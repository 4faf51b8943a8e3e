use crate::control::Control;

/// A single-line text input.
///
/// Unlike a shared widget handle, `TextInput` is a plain value: cloning it
/// yields an independent control, which makes it usable as a prototype.
///
/// # Example
///
/// ```
/// use grido_forms::{Control, TextInput};
///
/// let mut input = TextInput::with_placeholder("Status").class("form-control");
/// input.set_value("open");
/// assert!(input.render().contains(r#"value="open""#));
/// ```
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    /// Name within the parent container
    pub(super) name: String,
    /// Full HTML name
    pub(super) html_name: String,
    /// `type` attribute, `text` unless overridden
    pub(super) input_type: Option<String>,
    /// Current text value
    pub(super) value: String,
    /// Placeholder text
    pub(super) placeholder: String,
    pub(super) max_length: Option<usize>,
    pub(super) classes: Vec<String>,
    /// Extra attributes
    pub(super) attrs: Vec<(String, String)>,
}

impl TextInput {
    /// Create a new empty input
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an input with an initial value
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Default::default()
        }
    }

    /// Create an input with a placeholder
    pub fn with_placeholder(placeholder: impl Into<String>) -> Self {
        Self {
            placeholder: placeholder.into(),
            ..Default::default()
        }
    }

    /// Override the `type` attribute (`email`, `number`, `date`, ...).
    pub fn input_type(mut self, input_type: impl Into<String>) -> Self {
        self.input_type = Some(input_type.into());
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        let class: String = class.into();
        Control::add_class(&mut self, &class);
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn kind(&self) -> &str {
        self.input_type.as_deref().unwrap_or("text")
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    // -------------------------------------------------------------------------
    // Write methods
    // -------------------------------------------------------------------------

    pub fn set_placeholder(&mut self, placeholder: impl Into<String>) {
        self.placeholder = placeholder.into();
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }
}

impl Control for TextInput {
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
        self.value = match self.max_length {
            Some(max) => value.chars().take(max).collect(),
            None => value.to_string(),
        };
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
        super::render::input_element(self)
    }

    fn clone_box(&self) -> Box<dyn Control> {
        Box::new(self.clone())
    }
}
