//! Post-merge normalization of CSS custom-property references.
//!
//! Compiled sheets express color opacity through custom properties: a class
//! like `text-blue-500` carries `--text-opacity: "1"` alongside
//! `color: "rgba(59, 130, 246, var(--text-opacity))"`, and an opacity class
//! overrides the custom property. After merging, every `var(...)` reference
//! is replaced by the value it points at and the custom-property keys are
//! removed from the output.

use crate::style::{StyleFragment, StyleValue};

/// Key prefix marking a custom property. Such keys never appear in the
/// final output but remain valid reference targets.
pub const CUSTOM_PROPERTY_PREFIX: &str = "--";

/// Normalizes a merged property mapping into its final form.
///
/// Custom-property keys are dropped; string values have their first
/// `var(<name>)` occurrence substituted with the value stored under `<name>`
/// in the pre-normalization mapping (dropped custom properties included);
/// non-string values pass through unchanged.
///
/// A reference whose target is missing, or is not itself a string, drops the
/// whole key rather than emitting a broken value.
pub(crate) fn normalize(merged: &StyleFragment) -> StyleFragment {
    let mut normalized = StyleFragment::new();

    for (key, value) in merged {
        if key.starts_with(CUSTOM_PROPERTY_PREFIX) {
            continue;
        }
        match value {
            StyleValue::Text(text) => {
                if let Some(replaced) = substitute(text, merged) {
                    normalized.insert(key.clone(), StyleValue::Text(replaced));
                }
            }
            other => {
                normalized.insert(key.clone(), other.clone());
            }
        }
    }

    normalized
}

/// Substitutes the first `var(<name>)` reference in `text` from `scope`.
///
/// Returns the text unchanged when it contains no reference, and `None`
/// when a reference exists but cannot be resolved to a string value.
fn substitute(text: &str, scope: &StyleFragment) -> Option<String> {
    let Some((name, start, end)) = find_reference(text) else {
        return Some(text.to_string());
    };

    match scope.get(name) {
        Some(StyleValue::Text(target)) => {
            let mut replaced = String::with_capacity(text.len() + target.len());
            replaced.push_str(&text[..start]);
            replaced.push_str(target);
            replaced.push_str(&text[end..]);
            Some(replaced)
        }
        _ => None,
    }
}

/// Finds the first well-formed `var(<name>)` occurrence in `text`.
///
/// Names consist of ASCII letters and dashes, like `--text-opacity`.
/// Returns the name together with the byte range of the whole reference.
fn find_reference(text: &str) -> Option<(&str, usize, usize)> {
    let mut offset = 0;
    while let Some(position) = text[offset..].find("var(") {
        let start = offset + position;
        let body = &text[start + 4..];
        if let Some(close) = body.find(')') {
            let name = &body[..close];
            if !name.is_empty() && name.chars().all(|c| c.is_ascii_alphabetic() || c == '-') {
                return Some((name, start, start + 4 + close + 1));
            }
        }
        offset = start + 4;
    }
    None
}
