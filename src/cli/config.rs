//! CLI configuration file
//!
//! ```json
//! {
//!   "log_level": "warn",
//!   "store": { "rewrite_locking": "per_record", "create_parent_dirs": false }
//! }
//! ```
//!
//! Every field is optional; unknown fields are rejected.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::errors::{CliError, CliResult};
use crate::observability::{log_event_with_fields, Event, Severity};
use crate::store::StoreConfig;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Minimum log severity: trace, info, warn, error or fatal
    pub log_level: String,

    /// Options passed to every store the CLI opens
    pub store: StoreConfig,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            store: StoreConfig::default(),
        }
    }
}

impl CliConfig {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let config: CliConfig = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        let path_text = path.display().to_string();
        log_event_with_fields(Event::ConfigLoaded, &[("path", path_text.as_str())]);
        Ok(config)
    }

    fn validate(&self) -> CliResult<()> {
        self.log_severity().map(|_| ())
    }

    /// The configured minimum log severity
    pub fn log_severity(&self) -> CliResult<Severity> {
        Severity::parse(&self.log_level).ok_or_else(|| {
            CliError::config_error(format!(
                "Invalid log_level: '{}'. Expected trace, info, warn, error or fatal.",
                self.log_level
            ))
        })
    }
}
