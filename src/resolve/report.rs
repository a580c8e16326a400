//! Diagnostics for class names missing from the sheet.
//!
//! Unknown classes are non-fatal: resolution skips them and keeps going.
//! The report channel is injectable so embedders can route the diagnostic
//! wherever they like and tests can assert on it without capturing process
//! output.

/// Callback invoked once per class name that has no entry in the sheet.
///
/// Receives the plain class name with any breakpoint prefix already stripped.
pub type UnknownClassReporter = Box<dyn Fn(&str) + Send + Sync>;

/// The default reporter: warns through the `log` facade.
pub(crate) fn log_reporter() -> UnknownClassReporter {
    Box::new(|class_name| {
        log::warn!("unsupported class name: \"{class_name}\"");
    })
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;

    #[test]
    fn test_reporter_is_callable_and_shareable() {
        let seen: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let reporter: UnknownClassReporter =
            Box::new(move |name| sink.lock().unwrap().push(name.to_string()));

        reporter("unknown");
        reporter("also-unknown");

        assert_eq!(
            *seen.lock().unwrap(),
            vec!["unknown".to_string(), "also-unknown".to_string()]
        );
    }
}
