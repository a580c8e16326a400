//! Resolution errors.

/// Error returned when class resolution cannot proceed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// Breakpoint-prefixed classes were given without a viewport width,
    /// so their applicability cannot be determined.
    MissingViewportWidth,
}

impl std::fmt::Display for ResolveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResolveError::MissingViewportWidth => {
                write!(
                    f,
                    "breakpoint-prefixed classes require a viewport width, but none was given"
                )
            }
        }
    }
}

impl std::error::Error for ResolveError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_viewport_width_display() {
        let msg = ResolveError::MissingViewportWidth.to_string();
        assert!(msg.contains("viewport width"));
    }
}
