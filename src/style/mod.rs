//! Style data loaded from a compiled utility sheet.
//!
//! This module provides the input side of the resolver:
//!
//! - [`StyleValue`]: A single style property value (number, string, or list)
//! - [`StyleFragment`]: The partial style mapping for one class name
//! - [`StyleSheet`]: A registry of class names to fragments
//!
//! Sheets are produced offline by compiling the utility framework's CSS into
//! a JSON document; this crate only consumes the result.

mod sheet;
mod value;

pub use sheet::{StyleFragment, StyleSheet};
pub use value::StyleValue;
