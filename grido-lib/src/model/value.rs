//! Cell values

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use super::Row;

/// A dynamically typed cell value.
///
/// # Example
///
/// ```
/// use grido_lib::Value;
///
/// assert_eq!(Value::from(42).to_plain_string(), "42");
/// assert_eq!(Value::from(true).to_plain_string(), "1");
/// assert_eq!(Value::Null.to_plain_string(), "");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i32),
    Long(i64),
    Float(f64),
    Decimal(Decimal),
    String(String),
    Guid(Uuid),
    /// Always UTC.
    DateTime(DateTime<Utc>),
    /// A related row, reached through a dotted field path.
    Row(Box<Row>),
    /// Anything the other variants cannot hold.
    Json(serde_json::Value),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Short type name used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Long(_) => "long",
            Self::Float(_) => "float",
            Self::Decimal(_) => "decimal",
            Self::String(_) => "string",
            Self::Guid(_) => "guid",
            Self::DateTime(_) => "datetime",
            Self::Row(_) => "row",
            Self::Json(_) => "json",
        }
    }

    /// Textual form used for data attributes and control seeds.
    ///
    /// `Null` becomes the empty string and booleans become `1` / `0`.
    pub fn to_plain_string(&self) -> String {
        match self {
            Self::Null => String::new(),
            Self::Bool(flag) => u8::from(*flag).to_string(),
            Self::Int(n) => n.to_string(),
            Self::Long(n) => n.to_string(),
            Self::Float(n) => n.to_string(),
            Self::Decimal(d) => d.to_string(),
            Self::String(s) => s.clone(),
            Self::Guid(g) => g.hyphenated().to_string(),
            Self::DateTime(dt) => dt.to_rfc3339(),
            Self::Row(row) => serde_json::to_string(row).unwrap_or_default(),
            Self::Json(json) => json.to_string(),
        }
    }

    /// The string content, if this is a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_plain_string())
    }
}

macro_rules! value_from {
    ($($source:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$source> for Value {
                fn from(inner: $source) -> Self {
                    Self::$variant(inner)
                }
            }
        )*
    };
}

value_from! {
    bool => Bool,
    i32 => Int,
    i64 => Long,
    f64 => Float,
    Decimal => Decimal,
    String => String,
    Uuid => Guid,
    DateTime<Utc> => DateTime,
    serde_json::Value => Json,
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_owned())
    }
}

impl From<Row> for Value {
    fn from(row: Row) -> Self {
        Self::Row(Box::new(row))
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(option: Option<T>) -> Self {
        option.map_or(Self::Null, Into::into)
    }
}
