//! Configuration error types

/// Errors that can occur while loading a [`GridConfig`](crate::GridConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration is not valid JSON for `GridConfig`.
    #[error("Invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}
