//! Crashes during `write`

use std::fs;

use tempfile::TempDir;

use crate::crash::harness::*;
use appendstore::crash_point::points;

#[test]
fn crash_after_truncate_leaves_empty_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("audit.mk");
    seed(&path, &["a", "b", "c"]);

    let file = path.to_str().unwrap();
    let result = execute_with_crash_point(
        points::REWRITE_AFTER_TRUNCATE,
        &["write", "--file", file],
        "'x'\n'y'\n",
    );

    assert_crashed_at(&result, points::REWRITE_AFTER_TRUNCATE);
    assert!(path.exists());
    assert_eq!(fs::read(&path).unwrap(), b"");
    assert!(read_back(&path).is_empty());
}

#[test]
fn crash_during_refill_keeps_records_already_appended() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("audit.mk");
    seed(&path, &["old"]);

    // Fires on the first append after truncation.
    let file = path.to_str().unwrap();
    let result = execute_with_crash_point(
        points::APPEND_AFTER_FSYNC,
        &["write", "--file", file],
        "'x'\n'y'\n",
    );

    assert_crashed_at(&result, points::APPEND_AFTER_FSYNC);
    assert_eq!(read_back(&path), strs(&["x"]));
}
