//! The append store
//!
//! One file holds an ordered sequence of records, each rendered as literal
//! text and terminated by a NUL byte.
//!
//! Locking layers:
//! - `read` takes no lock.
//! - `append` holds the path lock across open, write, flush, fsync and chmod.
//! - `write` truncates under the lock, then appends each record. With
//!   [`RewriteLocking::PerRecord`] the truncation lock is released first and
//!   every append locks on its own; with [`RewriteLocking::WholeRewrite`] one
//!   lock covers the whole rewrite.
//! - `transform` holds the lock across read, transformer call and
//!   truncation, then writes back like `write`.

use std::fs::{self, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use super::codec::RecordCodec;
use super::config::{RewriteLocking, StoreConfig};
use super::errors::{BoxError, StoreError, StoreResult};
use super::lock::PathLock;
use super::record::{decode_fragment, encode_record, RecordFragments};
use crate::crash_point::{maybe_crash, points};
use crate::observability::{log_event_with_fields, Event, ObservationScope, StoreMetrics};

/// Mode applied to the store file after every append
pub const STORE_FILE_MODE: u32 = 0o660;

pub struct AppendStore<C: RecordCodec> {
    path: PathBuf,
    codec: C,
    config: StoreConfig,
    metrics: StoreMetrics,
}

impl<C: RecordCodec> AppendStore<C> {
    pub fn new(path: impl Into<PathBuf>, codec: C) -> Self {
        Self::with_config(path, codec, StoreConfig::default())
    }

    pub fn with_config(path: impl Into<PathBuf>, codec: C, config: StoreConfig) -> Self {
        Self {
            path: path.into(),
            codec,
            config,
            metrics: StoreMetrics::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn codec(&self) -> &C {
        &self.codec
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn metrics(&self) -> &StoreMetrics {
        &self.metrics
    }

    /// Whether the backing file is present. Takes no lock.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Reads every record, without locking.
    ///
    /// A missing file reads as empty. The first fragment that fails to
    /// decode aborts the whole read with `APPEND_STORE_MALFORMED_RECORD`.
    pub fn read(&self) -> StoreResult<Vec<C::Record>> {
        self.read_unlocked()
    }

    fn read_unlocked(&self) -> StoreResult<Vec<C::Record>> {
        let data = match fs::read(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StoreError::read_failed(&self.path, e)),
        };

        let mut records = Vec::new();
        for (index, fragment) in RecordFragments::new(&data).enumerate() {
            let decoded = decode_fragment(fragment.bytes)
                .map_err(|e| e.into_cause())
                .and_then(|raw| self.codec.deserialize(raw).map_err(BoxError::from));
            match decoded {
                Ok(record) => records.push(record),
                Err(cause) => {
                    return Err(self.malformed(index, fragment.offset, cause));
                }
            }
        }

        self.metrics.record_read(records.len() as u64);
        let path_text = self.path.display().to_string();
        let count = records.len().to_string();
        log_event_with_fields(
            Event::StoreRead,
            &[("path", path_text.as_str()), ("records", count.as_str())],
        );
        Ok(records)
    }

    fn malformed(&self, index: usize, offset: u64, cause: BoxError) -> StoreError {
        self.metrics.increment_malformed_reads();
        let err = StoreError::malformed_record(&self.path, index, offset, cause);
        let path_text = self.path.display().to_string();
        let index_text = index.to_string();
        let offset_text = offset.to_string();
        log_event_with_fields(
            Event::StoreMalformedRecord,
            &[
                ("path", path_text.as_str()),
                ("record_index", index_text.as_str()),
                ("byte_offset", offset_text.as_str()),
                ("reason", err.message()),
            ],
        );
        err
    }

    /// Appends one record under the path lock and fsyncs it.
    ///
    /// Any failure is reported as `Cannot write file "<path>": <cause>`;
    /// the lock is released either way.
    pub fn append(&self, entry: &C::Record) -> StoreResult<()> {
        self.prepare_parent()?;
        let _guard = PathLock::acquire(&self.path)?;
        self.append_locked(entry)
    }

    fn append_locked(&self, entry: &C::Record) -> StoreResult<()> {
        match self.write_record(entry) {
            Ok(bytes) => {
                self.metrics.record_append(bytes as u64);
                let path_text = self.path.display().to_string();
                let bytes_text = bytes.to_string();
                log_event_with_fields(
                    Event::StoreAppend,
                    &[("path", path_text.as_str()), ("bytes", bytes_text.as_str())],
                );
                Ok(())
            }
            Err(cause) => Err(self.write_failure(cause)),
        }
    }

    fn write_record(&self, entry: &C::Record) -> Result<usize, BoxError> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        let literal = self.codec.serialize(entry)?;
        let bytes = encode_record(&literal)?;

        maybe_crash(points::APPEND_BEFORE_WRITE);
        let mut writer = BufWriter::new(file);
        writer.write_all(&bytes)?;
        writer.flush()?;

        maybe_crash(points::APPEND_BEFORE_FSYNC);
        writer.get_ref().sync_all()?;
        self.metrics.increment_fsyncs();
        let path_text = self.path.display().to_string();
        log_event_with_fields(Event::StoreFsync, &[("path", path_text.as_str())]);
        maybe_crash(points::APPEND_AFTER_FSYNC);

        set_store_permissions(&self.path)?;
        Ok(bytes.len())
    }

    /// Replaces the content with `entries`, in order.
    ///
    /// With the default [`RewriteLocking::PerRecord`] a concurrent reader can
    /// observe the file empty or partially refilled. The final content
    /// equals `entries` once this returns `Ok`.
    pub fn write(&self, entries: &[C::Record]) -> StoreResult<()> {
        self.prepare_parent()?;
        let guard = PathLock::acquire(&self.path)?;
        self.rewrite(entries, guard)
    }

    fn rewrite(&self, entries: &[C::Record], guard: PathLock) -> StoreResult<()> {
        self.truncate()?;
        maybe_crash(points::REWRITE_AFTER_TRUNCATE);

        let _held = match self.config.rewrite_locking {
            RewriteLocking::PerRecord => {
                drop(guard);
                None
            }
            RewriteLocking::WholeRewrite => Some(guard),
        };

        for entry in entries {
            self.append(entry)?;
        }

        self.metrics.increment_rewrites();
        let path_text = self.path.display().to_string();
        let count = entries.len().to_string();
        log_event_with_fields(
            Event::StoreRewrite,
            &[
                ("path", path_text.as_str()),
                ("records", count.as_str()),
                ("locking", self.config.rewrite_locking.as_str()),
            ],
        );
        Ok(())
    }

    fn truncate(&self) -> StoreResult<()> {
        let truncated = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)
            .and_then(|file| file.sync_all());
        if let Err(e) = truncated {
            return Err(self.write_failure(e.into()));
        }

        let path_text = self.path.display().to_string();
        log_event_with_fields(Event::StoreTruncate, &[("path", path_text.as_str())]);
        Ok(())
    }

    /// Read-modify-write under the path lock.
    ///
    /// The transformer sees every record read while the lock is held. If it
    /// returns `Err`, nothing is written and the error comes back as
    /// `APPEND_STORE_TRANSFORM_ABORTED` with the transformer's error as
    /// source. Otherwise its result is written back as by [`Self::write`].
    pub fn transform<F, E>(&self, transformer: F) -> StoreResult<()>
    where
        F: FnOnce(Vec<C::Record>) -> Result<Vec<C::Record>, E>,
        E: Into<BoxError>,
    {
        let scope = ObservationScope::with_fields(
            "TRANSFORM",
            vec![("path", self.path.display().to_string())],
        );

        match self.transform_locked(transformer) {
            Ok((before, after)) => {
                let before = before.to_string();
                let after = after.to_string();
                scope.complete(&[
                    ("records_before", before.as_str()),
                    ("records_after", after.as_str()),
                ]);
                Ok(())
            }
            Err(err) => {
                scope.fail(err.message());
                Err(err)
            }
        }
    }

    fn transform_locked<F, E>(&self, transformer: F) -> StoreResult<(usize, usize)>
    where
        F: FnOnce(Vec<C::Record>) -> Result<Vec<C::Record>, E>,
        E: Into<BoxError>,
    {
        self.prepare_parent()?;
        let guard = PathLock::acquire(&self.path)?;

        let entries = self.read_unlocked()?;
        maybe_crash(points::TRANSFORM_AFTER_READ);
        let before = entries.len();

        let transformed = match transformer(entries) {
            Ok(transformed) => transformed,
            Err(cause) => {
                self.metrics.increment_transforms_aborted();
                let err = StoreError::transform_aborted(&self.path, cause);
                let path_text = self.path.display().to_string();
                log_event_with_fields(
                    Event::TransformAborted,
                    &[("path", path_text.as_str()), ("reason", err.message())],
                );
                return Err(err);
            }
        };
        let after = transformed.len();

        self.rewrite(&transformed, guard)?;

        self.metrics.increment_transforms();
        Ok((before, after))
    }

    fn prepare_parent(&self) -> StoreResult<()> {
        if !self.config.create_parent_dirs {
            return Ok(());
        }
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent)
                .map_err(|e| self.write_failure(e.into())),
            _ => Ok(()),
        }
    }

    fn write_failure(&self, cause: BoxError) -> StoreError {
        self.metrics.increment_write_failures();
        let err = StoreError::write_failed(&self.path, cause);
        let path_text = self.path.display().to_string();
        log_event_with_fields(
            Event::StoreWriteFailed,
            &[("path", path_text.as_str()), ("reason", err.message())],
        );
        err
    }
}

#[cfg(unix)]
fn set_store_permissions(path: &Path) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(STORE_FILE_MODE))
}

#[cfg(not(unix))]
fn set_store_permissions(_path: &Path) -> io::Result<()> {
    Ok(())
}
