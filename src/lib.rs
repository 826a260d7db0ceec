//! appendstore - a locked, fsync'd append-only record file
//!
//! An [`store::AppendStore`] keeps an ordered sequence of structured records
//! in one file. Each record is a textual literal (see [`literal`]) followed
//! by a NUL byte. Appends are serialized by an advisory file lock and forced
//! to disk before the lock is released.

pub mod cli;
pub mod crash_point;
pub mod literal;
pub mod observability;
pub mod store;
