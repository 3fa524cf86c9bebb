//! Error types for Ignition embedding and MachineConfig assembly.

use thiserror::Error;
use workpin_core::PartitionError;
use workpin_dropin::DropinError;

#[derive(Debug, Error)]
pub enum IgnitionError {
    #[error("ignition config JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid data URL: {0}")]
    InvalidDataUrl(String),

    #[error("invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),
}

#[derive(Debug, Error)]
pub enum AssembleError {
    #[error("invalid workload partitions: {0}")]
    Partition(#[from] PartitionError),

    #[error(transparent)]
    Dropin(#[from] DropinError),

    #[error("could not convert to raw extension: {0}")]
    EnvelopeConversion(#[source] IgnitionError),
}

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("manifest JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("manifest YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
