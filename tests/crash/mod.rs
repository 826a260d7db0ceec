//! Crash testing framework
//!
//! - Crash injection at deterministic points via `APPENDSTORE_CRASH_POINT`
//! - Subprocess management
//! - Post-crash validation

pub mod harness;
pub mod scenarios;
