//! Observability for the append store
//!
//! - Structured logging (JSON lines on stderr)
//! - Per-store counters
//! - Typed lifecycle events
//!
//! Observability is read-only: it never changes the outcome of a store
//! operation, and logging failures are swallowed.
//!
//! # Usage
//!
//! ```ignore
//! use appendstore::observability::{log_event_with_fields, Event};
//!
//! log_event_with_fields(Event::StoreAppend, &[("path", "/var/lib/audit.log")]);
//! ```

mod events;
mod logger;
mod metrics;
mod scope;

pub use events::Event;
pub use logger::{Logger, Severity};
pub use metrics::{MetricsSnapshot, StoreMetrics};
pub use scope::ObservationScope;

/// Log a lifecycle event at TRACE, or ERROR for failure events
pub fn log_event(event: Event) {
    log_event_with_fields(event, &[]);
}

/// Log a lifecycle event with fields
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    let severity = if event.is_failure() {
        Severity::Error
    } else {
        Severity::Trace
    };
    Logger::log(severity, event.as_str(), fields);
}
