//! Per-store operation counters
//!
//! - Counters only, monotonic
//! - Thread-safe, Relaxed ordering (exactness per counter, no cross-counter
//!   consistency)

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

#[derive(Debug, Default)]
pub struct StoreMetrics {
    appends: AtomicU64,
    bytes_appended: AtomicU64,
    fsyncs: AtomicU64,
    reads: AtomicU64,
    records_read: AtomicU64,
    rewrites: AtomicU64,
    transforms: AtomicU64,
    transforms_aborted: AtomicU64,
    malformed_reads: AtomicU64,
    write_failures: AtomicU64,
}

impl StoreMetrics {
    /// Create a registry with all counters at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one durable append of `bytes` bytes (including the separator).
    pub fn record_append(&self, bytes: u64) {
        self.appends.fetch_add(1, Ordering::Relaxed);
        self.bytes_appended.fetch_add(bytes, Ordering::Relaxed);
    }

    pub fn increment_fsyncs(&self) {
        self.fsyncs.fetch_add(1, Ordering::Relaxed);
    }

    /// Count one completed read returning `records` records.
    pub fn record_read(&self, records: u64) {
        self.reads.fetch_add(1, Ordering::Relaxed);
        self.records_read.fetch_add(records, Ordering::Relaxed);
    }

    pub fn increment_rewrites(&self) {
        self.rewrites.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_transforms(&self) {
        self.transforms.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_transforms_aborted(&self) {
        self.transforms_aborted.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_malformed_reads(&self) {
        self.malformed_reads.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_write_failures(&self) {
        self.write_failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Point-in-time copy of all counters
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            appends: self.appends.load(Ordering::Relaxed),
            bytes_appended: self.bytes_appended.load(Ordering::Relaxed),
            fsyncs: self.fsyncs.load(Ordering::Relaxed),
            reads: self.reads.load(Ordering::Relaxed),
            records_read: self.records_read.load(Ordering::Relaxed),
            rewrites: self.rewrites.load(Ordering::Relaxed),
            transforms: self.transforms.load(Ordering::Relaxed),
            transforms_aborted: self.transforms_aborted.load(Ordering::Relaxed),
            malformed_reads: self.malformed_reads.load(Ordering::Relaxed),
            write_failures: self.write_failures.load(Ordering::Relaxed),
        }
    }
}

/// A point-in-time snapshot of store metrics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub appends: u64,
    pub bytes_appended: u64,
    pub fsyncs: u64,
    pub reads: u64,
    pub records_read: u64,
    pub rewrites: u64,
    pub transforms: u64,
    pub transforms_aborted: u64,
    pub malformed_reads: u64,
    pub write_failures: u64,
}

impl MetricsSnapshot {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_registry_has_zero_values() {
        assert_eq!(StoreMetrics::new().snapshot(), MetricsSnapshot::default());
    }

    #[test]
    fn test_record_append_counts_bytes() {
        let metrics = StoreMetrics::new();
        metrics.record_append(10);
        metrics.record_append(5);

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.appends, 2);
        assert_eq!(snapshot.bytes_appended, 15);
    }

    #[test]
    fn test_to_json() {
        let metrics = StoreMetrics::new();
        metrics.record_read(3);
        metrics.increment_malformed_reads();

        let parsed: serde_json::Value =
            serde_json::from_str(&metrics.snapshot().to_json()).unwrap();
        assert_eq!(parsed["reads"], 1);
        assert_eq!(parsed["records_read"], 3);
        assert_eq!(parsed["malformed_reads"], 1);
    }

    #[test]
    fn test_thread_safety() {
        use std::sync::Arc;
        use std::thread;

        let metrics = Arc::new(StoreMetrics::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let metrics = Arc::clone(&metrics);
                thread::spawn(move || {
                    for _ in 0..100 {
                        metrics.record_append(1);
                        metrics.increment_fsyncs();
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.appends, 800);
        assert_eq!(snapshot.fsyncs, 800);
    }
}
