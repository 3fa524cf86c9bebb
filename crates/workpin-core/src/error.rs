//! Error types for partition validation and config loading.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PartitionError {
    #[error("workload partition at index {index} has an empty name")]
    EmptyName { index: usize },
    #[error("duplicate workload partition name: {name}")]
    DuplicateName { name: String },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid TOML config: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported config format: {0} (expected .toml or .json)")]
    UnsupportedFormat(String),
}
