//! Crash point injection for testing durability
//!
//! When `APPENDSTORE_CRASH_POINT` names a crash point, the process
//! terminates via `std::process::abort()` on reaching it: no cleanup, no
//! unwinding, no lock release other than what the OS does for a dead
//! process.
//!
//! # Usage
//!
//! ```ignore
//! use appendstore::crash_point::{maybe_crash, points};
//!
//! maybe_crash(points::APPEND_BEFORE_FSYNC);
//! ```
//!
//! ```bash
//! APPENDSTORE_CRASH_POINT=append_before_fsync appendstore append --file f "'x'"
//! ```

use std::sync::OnceLock;

/// Environment variable selecting the crash point
pub const CRASH_POINT_ENV: &str = "APPENDSTORE_CRASH_POINT";

static CRASH_POINT: OnceLock<Option<String>> = OnceLock::new();

#[inline]
fn get_crash_point() -> Option<&'static str> {
    CRASH_POINT
        .get_or_init(|| std::env::var(CRASH_POINT_ENV).ok())
        .as_deref()
}

/// Returns true if `APPENDSTORE_CRASH_POINT` equals the given name.
#[inline]
pub fn crash_point_enabled(name: &str) -> bool {
    get_crash_point().map(|p| p == name).unwrap_or(false)
}

/// Aborts the process if the named crash point is enabled.
#[inline]
pub fn maybe_crash(name: &str) {
    if crash_point_enabled(name) {
        eprintln!("[CRASH] Triggering crash at point: {}", name);
        std::process::abort();
    }
}

/// All defined crash point names
pub mod points {
    // Append
    pub const APPEND_BEFORE_WRITE: &str = "append_before_write";
    pub const APPEND_BEFORE_FSYNC: &str = "append_before_fsync";
    pub const APPEND_AFTER_FSYNC: &str = "append_after_fsync";

    // Rewrite
    pub const REWRITE_AFTER_TRUNCATE: &str = "rewrite_after_truncate";

    // Transform
    pub const TRANSFORM_AFTER_READ: &str = "transform_after_read";

    /// Get all crash point names
    pub fn all() -> &'static [&'static str] {
        &[
            APPEND_BEFORE_WRITE,
            APPEND_BEFORE_FSYNC,
            APPEND_AFTER_FSYNC,
            REWRITE_AFTER_TRUNCATE,
            TRANSFORM_AFTER_READ,
        ]
    }
}
