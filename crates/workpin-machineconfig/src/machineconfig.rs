//! Subset of the `machineconfiguration.openshift.io/v1` API.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;

use crate::error::{IgnitionError, ManifestError};
use crate::ignition;

pub const API_VERSION: &str = "machineconfiguration.openshift.io/v1";
pub const KIND: &str = "MachineConfig";

/// Label the machine config operator uses to select a pool.
pub const ROLE_LABEL: &str = "machineconfiguration.openshift.io/role";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MachineConfig {
    pub api_version: String,
    pub kind: String,
    #[serde(default)]
    pub metadata: ObjectMeta,
    pub spec: MachineConfigSpec,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectMeta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MachineConfigSpec {
    pub config: RawExtension,
}

/// Pre-encoded JSON embedded as-is in the parent document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawExtension {
    raw: Box<RawValue>,
}

impl RawExtension {
    pub fn from_json(json: String) -> Result<Self, IgnitionError> {
        Ok(RawExtension { raw: RawValue::from_string(json)? })
    }

    pub fn raw(&self) -> &[u8] {
        self.raw.get().as_bytes()
    }
}

impl PartialEq for RawExtension {
    fn eq(&self, other: &Self) -> bool {
        self.raw.get() == other.raw.get()
    }
}

impl MachineConfig {
    pub fn name(&self) -> Option<&str> {
        self.metadata.name.as_deref()
    }

    pub fn role(&self) -> Option<&str> {
        self.metadata
            .labels
            .as_ref()
            .and_then(|labels| labels.get(ROLE_LABEL))
            .map(String::as_str)
    }

    /// Decode the embedded Ignition config.
    pub fn ignition_config(&self) -> Result<ignition::Config, IgnitionError> {
        Ok(serde_json::from_slice(self.spec.config.raw())?)
    }

    pub fn to_json_pretty(&self) -> Result<String, ManifestError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Render as a YAML manifest, with `spec.config` expanded into YAML.
    pub fn to_yaml(&self) -> Result<String, ManifestError> {
        let value = serde_json::to_value(self)?;
        Ok(serde_yaml::to_string(&value)?)
    }
}
