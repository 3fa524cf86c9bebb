//! Builds the workload partitioning `MachineConfig` for a pool role.

use std::collections::BTreeMap;

use tracing::debug;
use workpin_core::{WorkloadPartition, validate_partitions};
use workpin_dropin::{crio_workload_dropin, kubelet_workload_pinning};

use crate::error::AssembleError;
use crate::ignition::{self, file_from_string};
use crate::machineconfig::{API_VERSION, KIND, MachineConfig, MachineConfigSpec, ObjectMeta, ROLE_LABEL};

pub const CRIO_DROPIN_PATH: &str = "/etc/crio/crio.conf.d/01-workload-partitioning";
pub const KUBELET_PINNING_PATH: &str = "/etc/kubernetes/workload-pinning";

const FILE_OWNER: &str = "root";
const FILE_MODE: u32 = 0o644;

/// Name of the generated `MachineConfig` for `role`.
pub fn machine_config_name(role: &str) -> String {
    format!("02-{role}-workload-partitioning")
}

/// Create the `MachineConfig` that configures CRI-O and the kubelet with the
/// given workload partitions.
pub fn for_workload_partitions(
    partitions: &[WorkloadPartition],
    role: &str,
) -> Result<MachineConfig, AssembleError> {
    validate_partitions(partitions)?;

    let crio_cfg = crio_workload_dropin(partitions)?;
    let kubelet_cfg = kubelet_workload_pinning(partitions)?;

    let ign_config = ignition::Config::new(vec![
        file_from_string(CRIO_DROPIN_PATH, FILE_OWNER, FILE_MODE, &crio_cfg),
        file_from_string(KUBELET_PINNING_PATH, FILE_OWNER, FILE_MODE, &kubelet_cfg),
    ]);
    let raw = ignition::to_raw_extension(&ign_config).map_err(AssembleError::EnvelopeConversion)?;

    let name = machine_config_name(role);
    debug!(%name, role, partitions = partitions.len(), "workload partitioning machine config built");

    Ok(MachineConfig {
        api_version: API_VERSION.to_string(),
        kind: KIND.to_string(),
        metadata: ObjectMeta {
            name: Some(name),
            labels: Some(BTreeMap::from([(ROLE_LABEL.to_string(), role.to_string())])),
        },
        spec: MachineConfigSpec { config: raw },
    })
}
