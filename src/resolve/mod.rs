//! Runtime resolution of class-name lists into flat style mappings.
//!
//! This module provides the engine of the crate:
//!
//! - [`Resolver`]: Holds a [`StyleSheet`] and resolves class-name strings
//! - [`ResolvedStyle`]: The flat property mapping produced per call
//! - [`ResolveError`]: Fatal resolution errors
//! - [`UnknownClassReporter`]: Injectable diagnostic channel
//!
//! Resolution is a pure, synchronous computation: tokenize, arrange by
//! breakpoint, filter by viewport width, merge fragments last-write-wins,
//! then normalize `var(...)` references.

mod error;
mod report;
mod vars;

pub use error::ResolveError;
pub use report::UnknownClassReporter;
pub use vars::CUSTOM_PROPERTY_PREFIX;

use std::collections::HashMap;

use serde::Serialize;

use crate::breakpoint::Breakpoint;
use crate::style::{StyleFragment, StyleSheet, StyleValue};

/// The flat style mapping produced by one resolution call.
///
/// Values are always literal: custom-property keys and `var(...)` references
/// never survive normalization. Serializes as a plain JSON object for
/// handoff to a UI rendering layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ResolvedStyle {
    properties: HashMap<String, StyleValue>,
}

impl ResolvedStyle {
    /// Gets the value for a style property.
    pub fn get(&self, property: &str) -> Option<&StyleValue> {
        self.properties.get(property)
    }

    /// Number of properties in the result.
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Whether the result has no properties.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Iterates over property name/value pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleValue)> {
        self.properties.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl FromIterator<(String, StyleValue)> for ResolvedStyle {
    fn from_iter<I: IntoIterator<Item = (String, StyleValue)>>(iter: I) -> Self {
        Self {
            properties: iter.into_iter().collect(),
        }
    }
}

/// Resolves whitespace-separated utility class names into styles.
///
/// A resolver wraps an immutable [`StyleSheet`] injected at construction
/// time; multiple independently configured resolvers can coexist in one
/// process, and calls may run concurrently since nothing is mutated.
///
/// # Example
///
/// ```rust
/// use tailwind_resolve::{Resolver, StyleSheet, StyleValue};
///
/// let sheet = StyleSheet::from_json(r#"{
///     "text-blue-500": {
///         "--text-opacity": "1",
///         "color": "rgba(59, 130, 246, var(--text-opacity))"
///     },
///     "z-10": {"zIndex": 10}
/// }"#).unwrap();
///
/// let resolver = Resolver::new(sheet);
/// let style = resolver.resolve("text-blue-500 z-10", None).unwrap();
///
/// assert_eq!(style.get("color"), Some(&StyleValue::from("rgba(59, 130, 246, 1)")));
/// assert_eq!(style.get("zIndex"), Some(&StyleValue::from(10)));
/// ```
pub struct Resolver {
    sheet: StyleSheet,
    reporter: UnknownClassReporter,
}

impl Resolver {
    /// Creates a resolver that reports unknown classes through `log::warn!`.
    pub fn new(sheet: StyleSheet) -> Self {
        Self::with_reporter(sheet, report::log_reporter())
    }

    /// Creates a resolver with an explicit unknown-class reporter.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tailwind_resolve::{Resolver, StyleSheet};
    ///
    /// let resolver = Resolver::with_reporter(StyleSheet::new(), Box::new(|class| {
    ///     eprintln!("no styles for {class}");
    /// }));
    /// resolver.resolve("missing", None).unwrap();
    /// ```
    pub fn with_reporter(sheet: StyleSheet, reporter: UnknownClassReporter) -> Self {
        Self { sheet, reporter }
    }

    /// Returns the sheet this resolver was built with.
    pub fn sheet(&self) -> &StyleSheet {
        &self.sheet
    }

    /// Resolves a class-name list into a flat style mapping.
    ///
    /// Whitespace between tokens is collapsed; an empty or all-whitespace
    /// input yields an empty result. Breakpoint-prefixed tokens (`sm:` /
    /// `md:` / `lg:` / `xl:`) are sorted after plain tokens in ascending
    /// breakpoint order, filtered against `window_width`, and stripped
    /// before lookup, so a wider breakpoint's fragment merges last and wins
    /// property conflicts. Plain tokens keep their relative order, and a
    /// later fragment always overwrites an earlier one on the same property.
    ///
    /// Class names missing from the sheet are reported through the
    /// configured [`UnknownClassReporter`] and skipped.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::MissingViewportWidth`] when breakpoint
    /// prefixes are present but `window_width` is `None`. `Some(0)` is a
    /// legitimate width at which no breakpoint is active.
    pub fn resolve(
        &self,
        class_names: &str,
        window_width: Option<u32>,
    ) -> Result<ResolvedStyle, ResolveError> {
        let mut tokens: Vec<&str> = class_names.split_whitespace().collect();
        if tokens.is_empty() {
            return Ok(ResolvedStyle::default());
        }

        if tokens.iter().any(|t| Breakpoint::rank_of(t).is_some()) {
            let width = window_width.ok_or(ResolveError::MissingViewportWidth)?;

            // Plain tokens rank before every breakpoint token; the sort is
            // stable so same-rank tokens preserve author order.
            tokens.sort_by_key(|t| Breakpoint::rank_of(t).map_or(-1, |rank| rank as i32));

            let active = Breakpoint::active_count(width);
            tokens.retain(|t| match Breakpoint::rank_of(t) {
                None => true,
                Some(rank) => rank < active,
            });
        }

        let mut merged = StyleFragment::new();
        for token in tokens {
            // Surviving breakpoint prefixes are exactly three bytes.
            let class_name = match Breakpoint::rank_of(token) {
                Some(_) => &token[3..],
                None => token,
            };
            match self.sheet.get(class_name) {
                Some(fragment) => {
                    merged.extend(fragment.iter().map(|(k, v)| (k.clone(), v.clone())));
                }
                None => (self.reporter)(class_name),
            }
        }

        Ok(vars::normalize(&merged).into_iter().collect())
    }

    /// Looks up a color value by name, e.g. `"blue-500"`.
    ///
    /// Resolves the synthetic class `bg-<name>` and returns its
    /// `backgroundColor`, or `None` for unknown color names.
    pub fn color(&self, name: &str) -> Option<String> {
        let resolved = self.resolve(&format!("bg-{name}"), None).ok()?;
        resolved
            .get("backgroundColor")?
            .as_str()
            .map(String::from)
    }
}


#[cfg(test)]
mod proptests {
    use proptest::prelude::*;

    use super::tests::sheet;
    use super::*;

    fn known_token() -> impl Strategy<Value = &'static str> {
        prop::sample::select(vec![
            "text-blue-500",
            "text-gray-100",
            "text-opacity-50",
            "z-10",
            "z-20",
        ])
    }

    proptest! {
        #[test]
        fn whitespace_between_tokens_is_irrelevant(
            tokens in prop::collection::vec(known_token(), 1..6),
            gaps in prop::collection::vec("[ \t\n]{1,4}", 0..8),
        ) {
            let resolver = Resolver::new(sheet());

            let canonical = tokens.join(" ");
            let mut messy = String::new();
            for (i, token) in tokens.iter().enumerate() {
                let gap = gaps.get(i).map(String::as_str).unwrap_or("  \n");
                messy.push_str(gap);
                messy.push_str(token);
            }
            messy.push_str("   ");

            prop_assert_eq!(
                resolver.resolve(&canonical, None).unwrap(),
                resolver.resolve(&messy, None).unwrap()
            );
        }

        #[test]
        fn duplicate_tokens_are_idempotent(token in known_token()) {
            let resolver = Resolver::new(sheet());

            let once = resolver.resolve(token, None).unwrap();
            let twice = resolver.resolve(&format!("{token} {token}"), None).unwrap();
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn output_never_contains_references_or_custom_properties(
            tokens in prop::collection::vec(known_token(), 0..6),
        ) {
            let resolver = Resolver::new(sheet());
            let style = resolver.resolve(&tokens.join(" "), None).unwrap();

            for (key, value) in style.iter() {
                prop_assert!(!key.starts_with(CUSTOM_PROPERTY_PREFIX));
                if let Some(text) = value.as_str() {
                    prop_assert!(!text.contains("var("));
                }
            }
        }
    }
}
