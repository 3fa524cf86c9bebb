//! Subset of the Ignition v3.2 config schema.
//!
//! Only the storage files section is modelled. Files carry their contents
//! inline as `data:` URLs.

use base64::{Engine as _, engine::general_purpose};
use percent_encoding::percent_decode_str;
use serde::{Deserialize, Serialize};

use crate::error::IgnitionError;

/// Highest Ignition spec version this crate emits.
pub const MAX_VERSION: &str = "3.2.0";

const TEXT_MEDIA_TYPE: &str = "text/plain;charset=utf-8";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub ignition: Ignition,
    #[serde(default)]
    pub storage: Storage,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ignition {
    pub version: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Storage {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<File>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct File {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overwrite: Option<bool>,
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<NodeUser>,
    #[serde(default)]
    pub contents: Resource,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeUser {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl Config {
    pub fn new(files: Vec<File>) -> Self {
        Config {
            ignition: Ignition { version: MAX_VERSION.to_string() },
            storage: Storage { files },
        }
    }
}

impl File {
    /// Decode the inline contents back to bytes.
    pub fn decoded_contents(&self) -> Result<Vec<u8>, IgnitionError> {
        let source = self
            .contents
            .source
            .as_deref()
            .ok_or_else(|| IgnitionError::InvalidDataUrl(format!("{} has no contents", self.path)))?;
        decode_data_url(source)
    }
}

/// Build a file entry that overwrites `path` with `contents`.
pub fn file_from_string(path: &str, owner: &str, mode: u32, contents: &str) -> File {
    File {
        overwrite: Some(true),
        path: path.to_string(),
        user: Some(NodeUser { name: Some(owner.to_string()) }),
        contents: Resource { source: Some(encode_data_url(contents.as_bytes())) },
        mode: Some(mode),
    }
}

/// Encode bytes as a base64 `data:` URL.
pub fn encode_data_url(data: &[u8]) -> String {
    format!(
        "data:{TEXT_MEDIA_TYPE};base64,{}",
        general_purpose::STANDARD.encode(data)
    )
}

/// Decode a `data:` URL produced by [`encode_data_url`] or by other Ignition
/// tooling. Both base64 and percent-encoded payloads are accepted.
pub fn decode_data_url(url: &str) -> Result<Vec<u8>, IgnitionError> {
    let rest = url
        .strip_prefix("data:")
        .ok_or_else(|| IgnitionError::InvalidDataUrl(format!("missing data: scheme in {url:?}")))?;
    let (params, payload) = rest
        .split_once(',')
        .ok_or_else(|| IgnitionError::InvalidDataUrl(format!("missing payload separator in {url:?}")))?;
    if params.ends_with(";base64") {
        Ok(general_purpose::STANDARD.decode(payload)?)
    } else {
        Ok(percent_decode_str(payload).collect())
    }
}

/// Serialize `config` as the raw JSON payload of a `MachineConfig`.
pub fn to_raw_extension(config: &Config) -> Result<crate::RawExtension, IgnitionError> {
    let json = serde_json::to_string(config)?;
    crate::RawExtension::from_json(json)
}
