//! Grid configuration

use std::path::Path;

use serde::Deserialize;
use serde::Serialize;

use crate::error::ConfigError;

/// Configuration for a grid's editing markup and request targets.
///
/// Every field has a default, so a config file only needs the keys it
/// changes.
///
/// # Example
///
/// ```
/// use grido_lib::GridConfig;
///
/// let config = GridConfig::from_json(r#"{ "base_url": "/orders" }"#).unwrap();
/// assert_eq!(config.base_url, "/orders");
/// assert_eq!(config.primary_key, "id");
///
/// let config = GridConfig::default().with_control_class("input-sm");
/// assert_eq!(config.control_class, "input-sm");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Path that request targets (`?do=...`) are appended to.
    ///
    /// Default: `/`
    pub base_url: String,

    /// Name of the primary-key field.
    ///
    /// Default: `id`
    pub primary_key: String,

    /// CSS class put on the default text control.
    ///
    /// Default: `form-control`
    pub control_class: String,

    /// CSS class of the confirmation marker rendered after auto-init controls.
    ///
    /// Default: `grido-editable-confirm`
    pub confirm_class: String,

    /// Text inside the confirmation marker.
    ///
    /// Default: empty
    pub confirm_label: String,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            base_url: "/".to_string(),
            primary_key: "id".to_string(),
            control_class: "form-control".to_string(),
            confirm_class: "grido-editable-confirm".to_string(),
            confirm_label: String::new(),
        }
    }
}

impl GridConfig {
    /// Creates a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a config from JSON. Missing keys keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        log::debug!("[config] loading {}", path.display());
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the primary-key field name.
    pub fn with_primary_key(mut self, primary_key: impl Into<String>) -> Self {
        self.primary_key = primary_key.into();
        self
    }

    /// Sets the default control class.
    pub fn with_control_class(mut self, class: impl Into<String>) -> Self {
        self.control_class = class.into();
        self
    }

    /// Sets the confirmation marker class and label.
    pub fn with_confirm(mut self, class: impl Into<String>, label: impl Into<String>) -> Self {
        self.confirm_class = class.into();
        self.confirm_label = label.into();
        self
    }
}
