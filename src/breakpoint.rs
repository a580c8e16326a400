//! The fixed responsive breakpoint table.
//!
//! Breakpoints are an ordered set: the order defines both the sort priority
//! used when arranging tokens for merging and the cumulative applicability
//! check (a viewport width activates a prefix of this table, never a subset
//! with gaps).

/// A named minimum-viewport-width threshold.
///
/// The `prefix` is always exactly three characters (`"sm:"` etc.) so that
/// stripping it from a token is a fixed-length slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Breakpoint {
    /// Breakpoint name, e.g. `"sm"`.
    pub name: &'static str,
    /// Token prefix including the colon, e.g. `"sm:"`.
    pub prefix: &'static str,
    /// Minimum viewport width in pixels at which this breakpoint applies.
    pub min_width: u32,
}

/// The fixed breakpoint table, in ascending width order.
pub const BREAKPOINTS: [Breakpoint; 4] = [
    Breakpoint {
        name: "sm",
        prefix: "sm:",
        min_width: 640,
    },
    Breakpoint {
        name: "md",
        prefix: "md:",
        min_width: 768,
    },
    Breakpoint {
        name: "lg",
        prefix: "lg:",
        min_width: 1024,
    },
    Breakpoint {
        name: "xl",
        prefix: "xl:",
        min_width: 1280,
    },
];

impl Breakpoint {
    /// Returns the table index of the breakpoint whose prefix starts the
    /// given token, or `None` for a plain (unprefixed) token.
    ///
    /// Tokens that merely look prefixed (`"ab:card"`) are plain tokens.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tailwind_resolve::Breakpoint;
    ///
    /// assert_eq!(Breakpoint::rank_of("lg:z-10"), Some(2));
    /// assert_eq!(Breakpoint::rank_of("z-10"), None);
    /// ```
    pub fn rank_of(token: &str) -> Option<usize> {
        BREAKPOINTS.iter().position(|bp| token.starts_with(bp.prefix))
    }

    /// Number of breakpoints active at the given viewport width.
    ///
    /// Because the table is ascending, the active set is always a prefix of
    /// [`BREAKPOINTS`]; this returns its length.
    pub fn active_count(width: u32) -> usize {
        BREAKPOINTS.iter().filter(|bp| width >= bp.min_width).count()
    }
}
