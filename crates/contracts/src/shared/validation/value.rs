//! Runtime value of a single form field
//!
//! Form state arrives as JSON (text inputs, selects, multi-selects, toggles),
//! so the value type mirrors the JSON scalars plus arrays. Untagged serde
//! keeps the wire shape identical to what the screens post to the API.

use serde::{Deserialize, Serialize};

/// Value currently held by one form field.
///
/// Variant order matters for untagged deserialization: bool and number must
/// be tried before string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Null,
    Flag(bool),
    Number(f64),
    Text(String),
    Items(Vec<FieldValue>),
}

impl FieldValue {
    /// Empty check used by the required gate.
    ///
    /// Only null, whitespace-only text and zero-length arrays count as
    /// empty. Numeric `0` and `false` are real values and must pass a
    /// required check.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Text(text) => text.trim().is_empty(),
            Self::Items(items) => items.is_empty(),
            Self::Flag(_) | Self::Number(_) => false,
        }
    }

    /// Lossy string form, matching the JS `String()` coercion the legacy
    /// validator relied on: numbers render via Display, bools as
    /// `true`/`false`, arrays join their elements with a comma.
    pub fn as_text(&self) -> String {
        match self {
            Self::Null => String::new(),
            Self::Flag(flag) => flag.to_string(),
            Self::Number(number) => number.to_string(),
            Self::Text(text) => text.clone(),
            Self::Items(items) => items
                .iter()
                .map(FieldValue::as_text)
                .collect::<Vec<_>>()
                .join(","),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

impl From<Vec<FieldValue>> for FieldValue {
    fn from(value: Vec<FieldValue>) -> Self {
        Self::Items(value)
    }
}

impl<T> From<Option<T>> for FieldValue
where
    T: Into<FieldValue>,
{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(inner) => inner.into(),
            None => Self::Null,
        }
    }
}
