//! Partitioning config file parser.
//!
//! The file mirrors the `workloadSettings` section of an install config:
//!
//! ```toml
//! role = "master"
//!
//! [[workload_settings]]
//! name = "management"
//! cpuIDs = "0-1"
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;
use crate::types::WorkloadPartition;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartitioningConfig {
    /// Target machine config pool role, e.g. `master` or `worker`.
    pub role: Option<String>,
    #[serde(default, alias = "workloadSettings")]
    pub workload_settings: Vec<WorkloadPartition>,
}

impl PartitioningConfig {
    /// Load a config, picking the parser from the file extension.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        let format_parser: fn(&str) -> Result<Self, ConfigError> = match ext.as_str() {
            "toml" => Self::from_toml_str,
            "json" => Self::from_json_str,
            _ => return Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        };
        let content = std::fs::read_to_string(path)?;
        format_parser(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Role from the file, or `default` when the file leaves it unset.
    pub fn role_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.role.as_deref().unwrap_or(default)
    }
}
