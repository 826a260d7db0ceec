//! Crash test harness for subprocess management

use std::io::Write;
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

use appendstore::crash_point::CRASH_POINT_ENV;
use appendstore::literal::Literal;
use appendstore::store::{AppendStore, LiteralCodec};

/// Result of running the binary
#[derive(Debug)]
pub struct CrashTestResult {
    /// Whether the process died without a successful exit
    pub crashed: bool,
    pub exit_status: Option<ExitStatus>,
    pub stdout: String,
    pub stderr: String,
}

/// Runs `appendstore <args>` with `crash_point` set, feeding `stdin`.
pub fn execute_with_crash_point(crash_point: &str, args: &[&str], stdin: &str) -> CrashTestResult {
    let child = Command::new(env!("CARGO_BIN_EXE_appendstore"))
        .args(args)
        .env(CRASH_POINT_ENV, crash_point)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn();

    let mut child = match child {
        Ok(child) => child,
        Err(e) => {
            return CrashTestResult {
                crashed: true,
                exit_status: None,
                stdout: String::new(),
                stderr: format!("Failed to execute: {}", e),
            }
        }
    };

    if let Some(mut input) = child.stdin.take() {
        // The child may abort before reading; a broken pipe is fine then.
        let _ = input.write_all(stdin.as_bytes());
    }

    match child.wait_with_output() {
        Ok(output) => CrashTestResult {
            crashed: !output.status.success(),
            exit_status: Some(output.status),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        },
        Err(e) => CrashTestResult {
            crashed: true,
            exit_status: None,
            stdout: String::new(),
            stderr: format!("Failed to wait: {}", e),
        },
    }
}

/// Asserts that the process died at `crash_point`.
pub fn assert_crashed_at(result: &CrashTestResult, crash_point: &str) {
    assert!(result.crashed, "process exited cleanly: {:?}", result);
    assert!(
        result
            .stderr
            .contains(&format!("Triggering crash at point: {}", crash_point)),
        "crash point {} not reached, stderr:\n{}",
        crash_point,
        result.stderr
    );
}

/// Seeds a store with string records through the library.
pub fn seed(path: &Path, records: &[&str]) {
    let store = AppendStore::new(path, LiteralCodec);
    store.write(&strs(records)).unwrap();
}

/// Reads a store back through the library.
pub fn read_back(path: &Path) -> Vec<Literal> {
    AppendStore::new(path, LiteralCodec).read().unwrap()
}

pub fn strs(items: &[&str]) -> Vec<Literal> {
    items.iter().map(|s| Literal::from(*s)).collect()
}
