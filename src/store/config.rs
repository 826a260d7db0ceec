//! Store configuration

use serde::{Deserialize, Serialize};

/// How `write` (and the write-back half of `transform`) holds the lock.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RewriteLocking {
    /// Truncation and every re-appended record lock independently. A
    /// concurrent reader can observe a truncated or partially refilled
    /// file, and a concurrent appender can slip in between two records.
    #[default]
    PerRecord,
    /// One lock scope covers truncation and all re-appended records.
    WholeRewrite,
}

impl RewriteLocking {
    pub fn as_str(&self) -> &'static str {
        match self {
            RewriteLocking::PerRecord => "per_record",
            RewriteLocking::WholeRewrite => "whole_rewrite",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StoreConfig {
    /// Lock scope used when rewriting the file
    pub rewrite_locking: RewriteLocking,

    /// Create missing parent directories before the first write
    pub create_parent_dirs: bool,
}

impl StoreConfig {
    pub fn with_rewrite_locking(mut self, rewrite_locking: RewriteLocking) -> Self {
        self.rewrite_locking = rewrite_locking;
        self
    }

    pub fn with_create_parent_dirs(mut self, create_parent_dirs: bool) -> Self {
        self.create_parent_dirs = create_parent_dirs;
        self
    }
}
