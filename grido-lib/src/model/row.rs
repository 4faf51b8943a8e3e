//! Dynamic grid row

use std::collections::BTreeMap;

use serde::Serialize;

use super::Value;
use crate::error::FieldError;

/// Separator between relation segments in a field path.
pub const RELATION_SEPARATOR: char = '.';

/// A dynamic row of field values.
///
/// Related rows are stored as nested [`Value::Row`] values and reached with a
/// dotted path such as `customer.name`.
///
/// # Example
///
/// ```
/// use grido_lib::Row;
///
/// let row = Row::new()
///     .set("id", 7)
///     .set("customer", Row::new().set("name", "Contoso"));
///
/// assert_eq!(row.get_path("customer.name").unwrap().to_plain_string(), "Contoso");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Row {
    fields: BTreeMap<String, Value>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Fields
    // =========================================================================

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Returns `true` if the row contains the given field.
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// All fields, ordered by name.
    pub fn fields(&self) -> &BTreeMap<String, Value> {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Resolves a dotted field path through nested rows.
    ///
    /// A bare name is a direct field lookup. A null relation along the path
    /// resolves to `Null`.
    pub fn get_path(&self, path: &str) -> Result<&Value, FieldError> {
        let mut segments = path.split(RELATION_SEPARATOR);
        let first = segments.next().unwrap_or(path);
        let mut current = self.fields.get(first).ok_or_else(|| FieldError::missing(path))?;

        for segment in segments {
            current = match current {
                Value::Null => return Ok(current),
                Value::Row(row) => row
                    .fields
                    .get(segment)
                    .ok_or_else(|| FieldError::missing(path))?,
                other => return Err(FieldError::type_mismatch(path, "row", other.type_name())),
            };
        }

        Ok(current)
    }

    // =========================================================================
    // Setters
    // =========================================================================

    /// Builder form of [`Row::insert`].
    pub fn set(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    /// Sets a field, replacing any previous value.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(field.into(), value.into());
    }

    pub fn remove(&mut self, field: &str) -> Option<Value> {
        self.fields.remove(field)
    }

    /// Copies every field of `changes` into this row.
    pub fn merge(&mut self, changes: &Row) {
        for (field, value) in &changes.fields {
            self.fields.insert(field.clone(), value.clone());
        }
    }

    // =========================================================================
    // Typed getters
    //
    // A missing field or a value of another type is an error; only an
    // explicit `Null` reads as `None`.
    // =========================================================================

    fn typed<'a, T>(
        &'a self,
        field: &str,
        expected: &'static str,
        extract: impl FnOnce(&'a Value) -> Option<T>,
    ) -> Result<Option<T>, FieldError> {
        let value = self.fields.get(field).ok_or_else(|| FieldError::missing(field))?;
        if value.is_null() {
            return Ok(None);
        }
        extract(value)
            .map(Some)
            .ok_or_else(|| FieldError::type_mismatch(field, expected, value.type_name()))
    }

    /// Reads a string field.
    pub fn get_string(&self, field: &str) -> Result<Option<&str>, FieldError> {
        self.typed(field, "string", Value::as_str)
    }

    /// Reads an integer field; 32-bit values widen.
    pub fn get_long(&self, field: &str) -> Result<Option<i64>, FieldError> {
        self.typed(field, "long", |value| match value {
            Value::Long(n) => Some(*n),
            Value::Int(n) => Some(i64::from(*n)),
            _ => None,
        })
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Row {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
