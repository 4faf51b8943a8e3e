//! Request and response boundary for grid signals.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;

/// Query parameter carrying the signal name.
pub const SIGNAL_PARAM: &str = "do";

/// An incoming request as the grid sees it: whether it was made
/// asynchronously, and its parameters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Request {
    ajax: bool,
    params: BTreeMap<String, String>,
}

impl Request {
    /// Creates an asynchronous (AJAX) request with no parameters.
    pub fn ajax() -> Self {
        Self {
            ajax: true,
            params: BTreeMap::new(),
        }
    }

    /// Creates a regular, non-asynchronous request with no parameters.
    pub fn plain() -> Self {
        Self::default()
    }

    /// Parses an `application/x-www-form-urlencoded` query string.
    ///
    /// A leading `?` is ignored; repeated keys keep the last value.
    pub fn from_query(query: &str, ajax: bool) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        Self {
            ajax,
            params: url::form_urlencoded::parse(query.as_bytes())
                .into_owned()
                .collect(),
        }
    }

    /// Adds a parameter (builder pattern).
    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }

    /// Returns `true` if the request was made asynchronously.
    pub fn is_ajax(&self) -> bool {
        self.ajax
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(|s| s.as_str())
    }

    pub fn params(&self) -> &BTreeMap<String, String> {
        &self.params
    }
}

/// What a grid signal handler sends back.
#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    /// The request was terminated without a body.
    Terminated,
    /// A structured JSON payload.
    Json(serde_json::Value),
    /// A raw text body (rendered markup).
    Text(String),
}

impl Response {
    /// Serializes `payload` into a JSON response.
    pub fn json<T: Serialize>(payload: &T) -> Result<Self, serde_json::Error> {
        Ok(Self::Json(serde_json::to_value(payload)?))
    }

    pub fn is_terminated(&self) -> bool {
        matches!(self, Self::Terminated)
    }

    /// The body as sent over the wire. Empty for a terminated request.
    pub fn body(&self) -> String {
        match self {
            Self::Terminated => String::new(),
            Self::Json(value) => value.to_string(),
            Self::Text(text) => text.clone(),
        }
    }

    /// The `Content-Type` for the body, if there is one.
    pub fn content_type(&self) -> Option<&'static str> {
        match self {
            Self::Terminated => None,
            Self::Json(_) => Some("application/json; charset=utf-8"),
            Self::Text(_) => Some("text/plain; charset=utf-8"),
        }
    }

    pub fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Json(value) => Some(value),
            _ => None,
        }
    }
}

/// Payload of a committed edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditResult {
    /// Whether the new value was persisted.
    pub updated: bool,
    /// Markup to display in the edited cell.
    pub html: String,
}

/// Builds request targets for column signals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Links {
    base_url: String,
    grid: String,
}

impl Links {
    pub fn new(base_url: impl Into<String>, grid: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            grid: grid.into(),
        }
    }

    /// Component path of a column: `<grid>-columns-<column>`.
    pub fn column_path(&self, column: &str) -> String {
        format!("{}-columns-{}", self.grid, column)
    }

    /// Signal name for a column action: `<grid>-columns-<column>-<action>`.
    pub fn signal_name(&self, column: &str, action: &str) -> String {
        format!("{}-{}", self.column_path(column), action)
    }

    /// Name of a column signal parameter: `<grid>-columns-<column>-<param>`.
    pub fn param_name(&self, column: &str, param: &str) -> String {
        format!("{}-{}", self.column_path(column), param)
    }

    /// Request target for a column action.
    pub fn signal(&self, column: &str, action: &str) -> String {
        let query = url::form_urlencoded::Serializer::new(String::new())
            .append_pair(SIGNAL_PARAM, &self.signal_name(column, action))
            .finish();
        let separator = if self.base_url.contains('?') { '&' } else { '?' };
        format!("{}{}{}", self.base_url, separator, query)
    }

    /// Splits a signal name into `(column, action)` if it targets this grid.
    pub fn parse_signal<'a>(&self, signal: &'a str) -> Option<(&'a str, &'a str)> {
        let rest = signal.strip_prefix(&self.grid)?.strip_prefix("-columns-")?;
        rest.rsplit_once('-')
            .filter(|(column, action)| !column.is_empty() && !action.is_empty())
    }
}
