//! Append store error types
//!
//! Error codes:
//! - APPEND_STORE_READ_FAILED (ERROR severity)
//! - APPEND_STORE_WRITE_FAILED (ERROR severity)
//! - APPEND_STORE_LOCK_FAILED (ERROR severity)
//! - APPEND_STORE_TRANSFORM_ABORTED (ERROR severity)
//! - APPEND_STORE_MALFORMED_RECORD (FATAL severity)
//!
//! A missing file is never an error: `exists()` is false and `read()` is
//! empty.

use std::error::Error as StdError;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Boxed underlying cause of a store error
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Severity levels for store errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Operation fails, caller may retry
    Error,
    /// On-disk content cannot be trusted
    Fatal,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "ERROR"),
            Severity::Fatal => write!(f, "FATAL"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreErrorCode {
    /// Existing file could not be read
    AppendStoreReadFailed,
    /// Open, write, flush, fsync, chmod or truncate failed
    AppendStoreWriteFailed,
    /// Lock target could not be opened or locked
    AppendStoreLockFailed,
    /// A fragment failed UTF-8 decoding, literal parsing or deserialization
    AppendStoreMalformedRecord,
    /// The transform callback returned an error; nothing was written
    AppendStoreTransformAborted,
}

impl StoreErrorCode {
    pub fn code(&self) -> &'static str {
        match self {
            StoreErrorCode::AppendStoreReadFailed => "APPEND_STORE_READ_FAILED",
            StoreErrorCode::AppendStoreWriteFailed => "APPEND_STORE_WRITE_FAILED",
            StoreErrorCode::AppendStoreLockFailed => "APPEND_STORE_LOCK_FAILED",
            StoreErrorCode::AppendStoreMalformedRecord => "APPEND_STORE_MALFORMED_RECORD",
            StoreErrorCode::AppendStoreTransformAborted => "APPEND_STORE_TRANSFORM_ABORTED",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            StoreErrorCode::AppendStoreMalformedRecord => Severity::Fatal,
            _ => Severity::Error,
        }
    }
}

impl fmt::Display for StoreErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Store error with the file path and the underlying cause.
///
/// The cause is kept unwrapped as [`std::error::Error::source`], so callers
/// can downcast to e.g. [`crate::literal::LiteralError`] or
/// [`std::io::Error`].
#[derive(Debug)]
pub struct StoreError {
    code: StoreErrorCode,
    path: PathBuf,
    message: String,
    details: Option<String>,
    source: Option<BoxError>,
}

impl StoreError {
    fn new(code: StoreErrorCode, path: &Path, message: String, source: Option<BoxError>) -> Self {
        Self {
            code,
            path: path.to_path_buf(),
            message,
            details: None,
            source,
        }
    }

    /// The file exists but could not be read.
    pub fn read_failed(path: &Path, source: io::Error) -> Self {
        let message = format!("Cannot read file \"{}\": {}", path.display(), source);
        Self::new(
            StoreErrorCode::AppendStoreReadFailed,
            path,
            message,
            Some(Box::new(source)),
        )
    }

    /// Wraps any failure while writing into `Cannot write file "<path>": <cause>`.
    pub fn write_failed(path: &Path, cause: impl Into<BoxError>) -> Self {
        let cause = cause.into();
        let message = format!("Cannot write file \"{}\": {}", path.display(), cause);
        Self::new(
            StoreErrorCode::AppendStoreWriteFailed,
            path,
            message,
            Some(cause),
        )
    }

    pub fn lock_failed(path: &Path, source: io::Error) -> Self {
        let message = format!("Cannot lock file \"{}\": {}", path.display(), source);
        Self::new(
            StoreErrorCode::AppendStoreLockFailed,
            path,
            message,
            Some(Box::new(source)),
        )
    }

    /// A fragment at `record_index` / `byte_offset` could not be decoded.
    /// The message is the cause's own text.
    pub fn malformed_record(
        path: &Path,
        record_index: usize,
        byte_offset: u64,
        cause: impl Into<BoxError>,
    ) -> Self {
        let cause = cause.into();
        let mut err = Self::new(
            StoreErrorCode::AppendStoreMalformedRecord,
            path,
            cause.to_string(),
            Some(cause),
        );
        err.details = Some(format!(
            "record_index: {}, byte_offset: {}",
            record_index, byte_offset
        ));
        err
    }

    pub fn transform_aborted(path: &Path, cause: impl Into<BoxError>) -> Self {
        let cause = cause.into();
        let message = format!("Transform of \"{}\" aborted: {}", path.display(), cause);
        Self::new(
            StoreErrorCode::AppendStoreTransformAborted,
            path,
            message,
            Some(cause),
        )
    }

    pub fn code(&self) -> StoreErrorCode {
        self.code
    }

    pub fn severity(&self) -> Severity {
        self.code.severity()
    }

    /// Path of the store file the error refers to
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn details(&self) -> Option<&str> {
        self.details.as_deref()
    }

    /// Text of the underlying cause, if any
    pub fn cause_text(&self) -> Option<String> {
        self.source.as_ref().map(|e| e.to_string())
    }

    pub fn is_fatal(&self) -> bool {
        self.severity() == Severity::Fatal
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: {}",
            self.code.severity(),
            self.code.code(),
            self.message
        )?;
        if let Some(ref details) = self.details {
            write!(f, " ({})", details)?;
        }
        Ok(())
    }
}

impl StdError for StoreError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|e| &**e as &(dyn StdError + 'static))
    }
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;
