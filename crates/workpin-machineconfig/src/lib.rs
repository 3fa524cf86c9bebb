//! workpin-machineconfig — MachineConfig assembly for workload partitioning.
//!
//! Wraps the CRI-O and kubelet drop-ins into an Ignition config and embeds
//! that config in a `MachineConfig` resource for the machine config operator.
//!
//! # Architecture
//!
//! ```text
//! for_workload_partitions(partitions, role)
//!   ├── validate_partitions()
//!   ├── crio_workload_dropin()     ─┐
//!   ├── kubelet_workload_pinning() ─┴→ ignition::file_from_string() × 2
//!   ├── ignition::Config { version: MAX_VERSION, files }
//!   ├── ignition::to_raw_extension()
//!   └── MachineConfig { metadata: name + role label, spec.config }
//! ```

pub mod assemble;
pub mod error;
pub mod ignition;
pub mod machineconfig;

pub use assemble::{CRIO_DROPIN_PATH, KUBELET_PINNING_PATH, for_workload_partitions};
pub use error::{AssembleError, IgnitionError, ManifestError};
pub use machineconfig::{MachineConfig, MachineConfigSpec, ObjectMeta, RawExtension};
