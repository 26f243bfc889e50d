//! Application configuration loaded from environment variables.

use std::path::PathBuf;

/// Runtime configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `INVENTORY_DATA_FILE` — catalog snapshot path (default: `"inventory.json"`)
/// - `INVENTORY_AUDIT_LOG` — audit log path (default: `"inventory-audit.jsonl"`)
/// - `INVENTORY_CHANNEL_BUFFER` — actor mailbox size (default: `32`)
///
/// `default_log_filter` is only a fallback; `RUST_LOG` is read by
/// [`setup_tracing`](crate::app_system::setup_tracing) and overrides it.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub data_file: PathBuf,
    pub audit_log: PathBuf,
    pub channel_buffer: usize,
    pub default_log_filter: String,
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            data_file: lookup("INVENTORY_DATA_FILE")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_file),
            audit_log: lookup("INVENTORY_AUDIT_LOG")
                .map(PathBuf::from)
                .unwrap_or(defaults.audit_log),
            channel_buffer: lookup("INVENTORY_CHANNEL_BUFFER")
                .and_then(|v| v.parse().ok())
                .filter(|&n: &usize| n > 0)
                .unwrap_or(defaults.channel_buffer),
            default_log_filter: defaults.default_log_filter,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("inventory.json"),
            audit_log: PathBuf::from("inventory-audit.jsonl"),
            channel_buffer: 32,
            default_log_filter: "info".to_string(),
        }
    }
}
