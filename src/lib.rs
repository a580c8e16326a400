//! Resolve Tailwind utility class names into flat style objects.
//!
//! This crate is the runtime half of a two-stage system: an offline pipeline
//! compiles the utility framework's CSS into a JSON mapping from class name
//! to partial style object, and this crate resolves whitespace-separated
//! class lists against that mapping at runtime. Resolution handles
//! responsive breakpoint prefixes (`sm:` / `md:` / `lg:` / `xl:`),
//! last-write-wins merging of the selected fragments, and substitution of
//! `var(...)` custom-property references into concrete values.
//!
//! # Example
//!
//! ```rust
//! use tailwind_resolve::{Resolver, StyleSheet, StyleValue};
//!
//! let sheet = StyleSheet::from_json(r#"{
//!     "text-blue-500": {
//!         "--text-opacity": "1",
//!         "color": "rgba(59, 130, 246, var(--text-opacity))"
//!     },
//!     "sm-only-class": {"zIndex": 10}
//! }"#).unwrap();
//!
//! let resolver = Resolver::new(sheet);
//!
//! // Plain classes need no viewport width.
//! let style = resolver.resolve("text-blue-500", None).unwrap();
//! assert_eq!(style.get("color"), Some(&StyleValue::from("rgba(59, 130, 246, 1)")));
//!
//! // Breakpoint-prefixed classes apply only at sufficient widths.
//! let style = resolver.resolve("sm:sm-only-class", Some(640)).unwrap();
//! assert_eq!(style.get("zIndex"), Some(&StyleValue::from(10)));
//! ```
//!
//! The resolver performs no I/O and holds no mutable state: the sheet is
//! injected once at construction and shared read-only across calls.

pub mod breakpoint;
pub mod resolve;
pub mod style;

pub use breakpoint::{Breakpoint, BREAKPOINTS};
pub use resolve::{
    ResolveError, ResolvedStyle, Resolver, UnknownClassReporter, CUSTOM_PROPERTY_PREFIX,
};
pub use style::{StyleFragment, StyleSheet, StyleValue};
