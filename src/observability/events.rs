//! Observable events of the append store
//!
//! Events are explicit and typed.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Record operations
    /// Record appended and synced
    StoreAppend,
    /// File forced to durable storage
    StoreFsync,
    /// File truncated ahead of a rewrite
    StoreTruncate,
    /// Bulk rewrite finished
    StoreRewrite,
    /// Full read finished
    StoreRead,
    /// A fragment failed to decode (FATAL for the read)
    StoreMalformedRecord,
    /// Append or truncate failed
    StoreWriteFailed,

    // Locking
    /// Exclusive lock taken on the store file
    LockAcquired,
    /// Exclusive lock dropped
    LockReleased,

    // Transform (begin and completion are logged by the TRANSFORM scope)
    /// Transformer returned an error; nothing written
    TransformAborted,

    // Configuration
    /// Configuration loaded
    ConfigLoaded,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::StoreAppend => "STORE_APPEND",
            Event::StoreFsync => "STORE_FSYNC",
            Event::StoreTruncate => "STORE_TRUNCATE",
            Event::StoreRewrite => "STORE_REWRITE",
            Event::StoreRead => "STORE_READ",
            Event::StoreMalformedRecord => "STORE_MALFORMED_RECORD",
            Event::StoreWriteFailed => "STORE_WRITE_FAILED",
            Event::LockAcquired => "LOCK_ACQUIRED",
            Event::LockReleased => "LOCK_RELEASED",
            Event::TransformAborted => "TRANSFORM_ABORTED",
            Event::ConfigLoaded => "CONFIG_LOADED",
        }
    }

    /// Whether the event describes a failure that aborts an operation.
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            Event::StoreMalformedRecord | Event::StoreWriteFailed | Event::TransformAborted
        )
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
