//! Loosely typed option values.
//!
//! Options read from untyped sources keep their original shape here until
//! extraction or validation inspects them.

use std::fmt;

use serde::Deserialize;

/// A loosely typed option value.
///
/// Header keys, fallback emails and suffix requirements may come from
/// configuration files or deserialized request options, where nothing
/// guarantees they are strings. `OptionValue` keeps whatever arrived so the
/// extraction and validation steps can report a non-string argument as a
/// status instead of failing to deserialize.
///
/// # Examples
///
/// ```
/// use header_email::OptionValue;
///
/// let key = OptionValue::from("X-Email");
/// assert_eq!(key.as_text(), Some("X-Email"));
///
/// let number = OptionValue::from(42_i64);
/// assert_eq!(number.as_text(), None);
/// assert_eq!(number.type_name(), "integer");
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    /// A string value.
    Text(String),
    /// Any non-string value (integer, boolean, array, table, ...).
    Other(toml::Value),
}

impl OptionValue {
    /// Returns the string content if this value is text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            OptionValue::Text(s) => Some(s),
            OptionValue::Other(_) => None,
        }
    }

    /// Returns `true` if this value is text.
    pub fn is_text(&self) -> bool {
        matches!(self, OptionValue::Text(_))
    }

    /// Short name of the carried type, used in log events.
    pub fn type_name(&self) -> &'static str {
        match self {
            OptionValue::Text(_) => "string",
            OptionValue::Other(v) => v.type_str(),
        }
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        OptionValue::Text(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        OptionValue::Text(value)
    }
}

impl From<i64> for OptionValue {
    fn from(value: i64) -> Self {
        OptionValue::Other(toml::Value::Integer(value))
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        OptionValue::Other(toml::Value::Boolean(value))
    }
}

impl From<toml::Value> for OptionValue {
    fn from(value: toml::Value) -> Self {
        match value {
            toml::Value::String(s) => OptionValue::Text(s),
            other => OptionValue::Other(other),
        }
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Text(s) => f.write_str(s),
            OptionValue::Other(v) => write!(f, "{}", v),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_value_exposes_string() {
        let value = OptionValue::from("a@b.com".to_string());
        assert!(value.is_text());
        assert_eq!(value.as_text(), Some("a@b.com"));
        assert_eq!(value.type_name(), "string");
    }

    #[test]
    fn non_text_values_are_not_strings() {
        assert_eq!(OptionValue::from(true).as_text(), None);
        assert_eq!(OptionValue::from(true).type_name(), "boolean");
        assert_eq!(OptionValue::from(7_i64).type_name(), "integer");
    }

    #[test]
    fn toml_string_normalizes_to_text() {
        let value = OptionValue::from(toml::Value::String("x".to_string()));
        assert_eq!(value, OptionValue::Text("x".to_string()));
    }

    #[test]
    fn deserializes_untagged() {
        #[derive(Deserialize)]
        struct Doc {
            a: OptionValue,
            b: OptionValue,
        }

        let doc: Doc = toml::from_str("a = \"X-Email\"\nb = 3\n").expect("valid toml");
        assert_eq!(doc.a.as_text(), Some("X-Email"));
        assert_eq!(doc.b, OptionValue::Other(toml::Value::Integer(3)));
    }
}
