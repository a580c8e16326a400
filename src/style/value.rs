//! Style property values.

use serde::{Deserialize, Serialize};

/// A single style property value.
///
/// Compiled sheets hold three leaf shapes: numbers (`zIndex`, pixel sizes),
/// strings (colors, keywords, `var(...)` references), and lists of strings
/// (`fontVariant`).
///
/// # Example
///
/// ```rust
/// use tailwind_resolve::StyleValue;
///
/// let value: StyleValue = serde_json::from_str("\"justify\"").unwrap();
/// assert_eq!(value, StyleValue::from("justify"));
///
/// let value: StyleValue = serde_json::from_str("48").unwrap();
/// assert_eq!(value, StyleValue::from(48));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    /// A numeric value, e.g. `zIndex: 10` or `paddingTop: 48`.
    Number(f64),
    /// A string value, e.g. a color or a text-align keyword.
    Text(String),
    /// An ordered list of strings, e.g. `fontVariant: ["oldstyle-nums"]`.
    List(Vec<String>),
}

impl StyleValue {
    /// Returns the string content if this is a text value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            StyleValue::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl From<&str> for StyleValue {
    fn from(text: &str) -> Self {
        StyleValue::Text(text.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(text: String) -> Self {
        StyleValue::Text(text)
    }
}

impl From<f64> for StyleValue {
    fn from(number: f64) -> Self {
        StyleValue::Number(number)
    }
}

impl From<i32> for StyleValue {
    fn from(number: i32) -> Self {
        StyleValue::Number(number as f64)
    }
}

impl From<Vec<&str>> for StyleValue {
    fn from(items: Vec<&str>) -> Self {
        StyleValue::List(items.into_iter().map(String::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_untagged_shapes() {
        let number: StyleValue = serde_json::from_str("16").unwrap();
        assert_eq!(number, StyleValue::Number(16.0));

        let text: StyleValue = serde_json::from_str("\"rgba(59, 130, 246, 1)\"").unwrap();
        assert_eq!(text, StyleValue::from("rgba(59, 130, 246, 1)"));

        let list: StyleValue = serde_json::from_str("[\"oldstyle-nums\"]").unwrap();
        assert_eq!(list, StyleValue::from(vec!["oldstyle-nums"]));
    }

    #[test]
    fn test_serialize_round_trip() {
        let value = StyleValue::from(0.45);
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, "0.45");
    }

    #[test]
    fn test_as_str() {
        assert_eq!(StyleValue::from("justify").as_str(), Some("justify"));
        assert_eq!(StyleValue::Number(10.0).as_str(), None);
        assert_eq!(StyleValue::from(vec!["a"]).as_str(), None);
    }
}
