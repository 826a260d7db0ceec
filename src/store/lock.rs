//! Scoped exclusive lock on a store file
//!
//! The lock is an OS advisory lock (`flock`) taken on the store file itself,
//! so every process and every thread pointing at the same path is
//! serialized. Acquisition blocks without timeout.
//!
//! Locks are re-entrant per thread: a thread that already holds the lock
//! for a path gets a nested guard instead of deadlocking on its own `flock`.
//! The OS lock is released when the outermost guard drops, on every exit
//! path including unwinding.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs::{self, File, OpenOptions};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use fs2::FileExt;

use super::errors::{StoreError, StoreResult};
use crate::observability::{log_event_with_fields, Event};

struct HeldLock {
    file: File,
    depth: usize,
}

thread_local! {
    static HELD_LOCKS: RefCell<HashMap<PathBuf, HeldLock>> = RefCell::new(HashMap::new());
}

/// Registry key for `path`: the canonical path, so symlinks and `..`
/// spellings of one file share an entry. A missing file falls back to its
/// canonical parent directory, then to the plain absolute path.
fn lock_key(path: &Path) -> PathBuf {
    if let Ok(canonical) = fs::canonicalize(path) {
        return canonical;
    }
    let parent = path.parent().filter(|p| !p.as_os_str().is_empty());
    match (parent.map(fs::canonicalize), path.file_name()) {
        (Some(Ok(dir)), Some(name)) => dir.join(name),
        _ => std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf()),
    }
}

/// RAII guard for the exclusive lock on one path.
///
/// Not `Send`: the guard belongs to the thread that took it.
#[must_use = "the lock is released as soon as the guard is dropped"]
pub struct PathLock {
    key: PathBuf,
    _not_send: PhantomData<*const ()>,
}

impl PathLock {
    /// Blocks until the exclusive lock on `path` is held.
    ///
    /// Opening the lock target creates the file if it is missing.
    pub fn acquire(path: &Path) -> StoreResult<Self> {
        // The key is computed once the file exists.
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| StoreError::lock_failed(path, e))?;
        let key = lock_key(path);

        let nested = HELD_LOCKS.with(|held| match held.borrow_mut().get_mut(&key) {
            Some(lock) => {
                lock.depth += 1;
                true
            }
            None => false,
        });
        if nested {
            // The extra descriptor holds no lock; closing it leaves the
            // outer flock in place.
            drop(file);
            return Ok(Self::guard(key));
        }

        FileExt::lock_exclusive(&file).map_err(|e| StoreError::lock_failed(path, e))?;

        HELD_LOCKS.with(|held| {
            held.borrow_mut()
                .insert(key.clone(), HeldLock { file, depth: 1 });
        });
        let path_text = path.display().to_string();
        log_event_with_fields(Event::LockAcquired, &[("path", path_text.as_str())]);

        Ok(Self::guard(key))
    }

    fn guard(key: PathBuf) -> Self {
        Self {
            key,
            _not_send: PhantomData,
        }
    }

    /// Canonical path the lock was taken for
    pub fn path(&self) -> &Path {
        &self.key
    }
}

impl Drop for PathLock {
    fn drop(&mut self) {
        // During thread teardown the registry may already be gone; closing
        // the file descriptor releases the lock in that case.
        let released = HELD_LOCKS.try_with(|held| {
            let mut held = held.borrow_mut();
            let outermost = match held.get_mut(&self.key) {
                Some(lock) => {
                    lock.depth -= 1;
                    lock.depth == 0
                }
                None => false,
            };
            if outermost {
                if let Some(lock) = held.remove(&self.key) {
                    let _ = FileExt::unlock(&lock.file);
                }
            }
            outermost
        });

        if let Ok(true) = released {
            let path_text = self.key.display().to_string();
            log_event_with_fields(Event::LockReleased, &[("path", path_text.as_str())]);
        }
    }
}

/// Nesting depth of the current thread's lock on `path`; 0 if not held.
pub fn held_depth(path: &Path) -> usize {
    let key = lock_key(path);
    HELD_LOCKS
        .try_with(|held| held.borrow().get(&key).map_or(0, |lock| lock.depth))
        .unwrap_or(0)
}
