//! ObservationScope for automatic start/complete logging
//!
//! - Logs `{name}_BEGIN` on creation
//! - Logs `{name}_COMPLETE` or `{name}_FAILED` when closed
//! - Logs `{name}_INCOMPLETE` on drop if never closed (e.g. on panic)

use std::time::Instant;

use super::logger::{Logger, Severity};

/// A scope that logs begin and outcome events around an operation.
pub struct ObservationScope {
    name: &'static str,
    fields: Vec<(&'static str, String)>,
    started: Instant,
    closed: bool,
}

impl ObservationScope {
    /// Create a new observation scope; logs `{name}_BEGIN` at TRACE.
    pub fn new(name: &'static str) -> Self {
        Self::with_fields(name, Vec::new())
    }

    /// Create a scope whose fields are repeated on every event it logs.
    pub fn with_fields(name: &'static str, fields: Vec<(&'static str, String)>) -> Self {
        let scope = Self {
            name,
            fields,
            started: Instant::now(),
            closed: false,
        };
        scope.emit(Severity::Trace, "BEGIN", &[]);
        scope
    }

    fn emit(&self, severity: Severity, suffix: &str, extra: &[(&str, &str)]) {
        if !Logger::enabled(severity) {
            return;
        }
        let event = format!("{}_{}", self.name, suffix);
        let mut fields: Vec<(&str, &str)> =
            self.fields.iter().map(|(k, v)| (*k, v.as_str())).collect();
        fields.extend_from_slice(extra);
        Logger::log(severity, &event, &fields);
    }

    fn elapsed_micros(&self) -> String {
        self.started.elapsed().as_micros().to_string()
    }

    /// Marks the scope as successfully completed; logs `{name}_COMPLETE`.
    pub fn complete(mut self, extra: &[(&str, &str)]) {
        self.closed = true;
        let elapsed = self.elapsed_micros();
        let mut fields = vec![("elapsed_us", elapsed.as_str())];
        fields.extend_from_slice(extra);
        self.emit(Severity::Info, "COMPLETE", &fields);
    }

    /// Marks the scope as failed; logs `{name}_FAILED` at ERROR.
    pub fn fail(mut self, reason: &str) {
        self.closed = true;
        self.emit(Severity::Error, "FAILED", &[("reason", reason)]);
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

impl Drop for ObservationScope {
    fn drop(&mut self) {
        if !self.closed {
            self.emit(
                Severity::Warn,
                "INCOMPLETE",
                &[("reason", "scope dropped without completion")],
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_complete_closes() {
        let scope = ObservationScope::with_fields("TEST", vec![("path", "/tmp/x".to_string())]);
        assert!(!scope.is_closed());
        scope.complete(&[("records", "3")]);
    }

    #[test]
    fn test_scope_fail_closes() {
        let scope = ObservationScope::new("TEST");
        scope.fail("boom");
    }

    #[test]
    fn test_scope_drop_without_completion_does_not_panic() {
        let scope = ObservationScope::new("TEST");
        drop(scope);
    }
}
