//! Kubelet workload pinning encoder.
//!
//! Example output:
//!
//! ```text
//! {
//!   "management": {
//!     "cpuset": "0-1"
//!   }
//! }
//! ```

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use workpin_core::WorkloadPartition;

use crate::error::{Artifact, DropinError};
use crate::keyed_partitions;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KubeletWorkloadEntry {
    pub cpuset: String,
}

/// Serializes as a JSON object in partition order.
struct PinningMap<'a>(Vec<&'a WorkloadPartition>);

impl Serialize for PinningMap<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for p in &self.0 {
            map.serialize_entry(&p.name, &KubeletWorkloadEntry { cpuset: p.cpu_ids.clone() })?;
        }
        map.end()
    }
}

/// Render the kubelet pinning file, two-space indented, no trailing newline.
pub fn kubelet_workload_pinning(partitions: &[WorkloadPartition]) -> Result<String, DropinError> {
    serde_json::to_string_pretty(&PinningMap(keyed_partitions(partitions)))
        .map_err(|e| DropinError::serialize(Artifact::KubeletPinning, e))
}
