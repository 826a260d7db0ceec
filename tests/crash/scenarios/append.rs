//! Crashes during `append`

use std::fs;

use tempfile::TempDir;

use crate::crash::harness::*;
use appendstore::crash_point::points;

#[test]
fn crash_before_write_leaves_file_unchanged() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("audit.mk");
    seed(&path, &["a", "b"]);
    let before = fs::read(&path).unwrap();

    let file = path.to_str().unwrap();
    let result = execute_with_crash_point(
        points::APPEND_BEFORE_WRITE,
        &["append", "--file", file, "'c'"],
        "",
    );

    assert_crashed_at(&result, points::APPEND_BEFORE_WRITE);
    assert_eq!(fs::read(&path).unwrap(), before);
    assert_eq!(read_back(&path), strs(&["a", "b"]));
}

#[test]
fn crash_before_fsync_leaves_complete_record() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("audit.mk");
    seed(&path, &["a"]);

    let file = path.to_str().unwrap();
    let result = execute_with_crash_point(
        points::APPEND_BEFORE_FSYNC,
        &["append", "--file", file, "'b'"],
        "",
    );

    // Flushed bytes survive a process crash through the page cache.
    assert_crashed_at(&result, points::APPEND_BEFORE_FSYNC);
    assert_eq!(read_back(&path), strs(&["a", "b"]));
    assert_eq!(fs::read(&path).unwrap().last(), Some(&0u8));
}

#[test]
fn crash_after_fsync_keeps_record() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("audit.mk");

    let file = path.to_str().unwrap();
    let result = execute_with_crash_point(
        points::APPEND_AFTER_FSYNC,
        &["append", "--file", file, "{'k': 1}"],
        "",
    );

    assert_crashed_at(&result, points::APPEND_AFTER_FSYNC);
    assert_eq!(fs::read(&path).unwrap(), b"{'k': 1}\0");
}

#[test]
fn lock_is_released_when_process_dies() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("audit.mk");

    let file = path.to_str().unwrap();
    let result = execute_with_crash_point(
        points::APPEND_BEFORE_FSYNC,
        &["append", "--file", file, "1"],
        "",
    );
    assert_crashed_at(&result, points::APPEND_BEFORE_FSYNC);

    // Blocks forever if the dead process still held the lock.
    seed(&path, &["after"]);
    assert_eq!(read_back(&path), strs(&["after"]));
}

#[test]
fn unknown_crash_point_runs_normally() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("audit.mk");

    let file = path.to_str().unwrap();
    let result = execute_with_crash_point("no_such_point", &["append", "--file", file, "'x'"], "");

    assert!(!result.crashed, "stderr:\n{}", result.stderr);
    assert_eq!(read_back(&path), strs(&["x"]));
}
