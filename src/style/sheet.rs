//! The class-name to style-fragment registry.

use std::collections::HashMap;

use serde::Deserialize;

use super::value::StyleValue;

/// The partial style mapping associated with one class name.
///
/// Keys use target-platform property naming (`backgroundColor`, `zIndex`).
/// Keys starting with `--` are custom properties: they never reach the final
/// output but serve as `var(...)` reference targets within the same fragment.
pub type StyleFragment = HashMap<String, StyleValue>;

/// An immutable lookup from utility class name to its style fragment.
///
/// Built offline by the compile pipeline and loaded once at resolver
/// construction; the resolver never mutates it. Breakpoint-prefixed variants
/// are not separate keys — prefixes are stripped before lookup.
///
/// # Example
///
/// ```rust
/// use tailwind_resolve::StyleSheet;
///
/// let sheet = StyleSheet::from_json(
///     r#"{"text-justify": {"textAlign": "justify"}}"#,
/// ).unwrap();
///
/// assert!(sheet.get("text-justify").is_some());
/// assert!(sheet.get("sm:text-justify").is_none());
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct StyleSheet {
    classes: HashMap<String, StyleFragment>,
}

impl StyleSheet {
    /// Creates an empty sheet.
    pub fn new() -> Self {
        Self {
            classes: HashMap::new(),
        }
    }

    /// Parses a sheet from the compile pipeline's JSON document.
    ///
    /// The document is a top-level object with one entry per class name,
    /// each entry an object of property name to value.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not valid JSON of that shape.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Adds a class fragment, returning an updated sheet for chaining.
    pub fn add(mut self, class_name: &str, fragment: StyleFragment) -> Self {
        self.classes.insert(class_name.to_string(), fragment);
        self
    }

    /// Looks up the fragment for a plain (unprefixed) class name.
    pub fn get(&self, class_name: &str) -> Option<&StyleFragment> {
        self.classes.get(class_name)
    }

    /// Number of classes in the sheet.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Whether the sheet contains no classes.
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}
