//! Workload partition types shared across workpin crates.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::PartitionError;

/// Name of the partition that hosts platform management workloads.
pub const MANAGEMENT_WORKLOAD_PARTITION: &str = "management";

/// A named set of CPUs reserved for one class of workloads.
///
/// `cpu_ids` is a cpuset expression such as `0-1` or `0,2-3`. It is carried
/// through to the generated drop-ins verbatim and never parsed here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkloadPartition {
    pub name: String,
    #[serde(rename = "cpuIDs", alias = "cpu_ids")]
    pub cpu_ids: String,
}

impl WorkloadPartition {
    pub fn new(name: impl Into<String>, cpu_ids: impl Into<String>) -> Self {
        WorkloadPartition {
            name: name.into(),
            cpu_ids: cpu_ids.into(),
        }
    }

    /// Partition pinned to the management workload class.
    pub fn management(cpu_ids: impl Into<String>) -> Self {
        Self::new(MANAGEMENT_WORKLOAD_PARTITION, cpu_ids)
    }
}

/// Check that every partition has a name and that no name repeats.
///
/// The drop-in formats are keyed by name, so a repeated name would silently
/// replace an earlier partition.
pub fn validate_partitions(partitions: &[WorkloadPartition]) -> Result<(), PartitionError> {
    let mut seen = HashSet::with_capacity(partitions.len());
    for (index, p) in partitions.iter().enumerate() {
        if p.name.is_empty() {
            return Err(PartitionError::EmptyName { index });
        }
        if !seen.insert(p.name.as_str()) {
            return Err(PartitionError::DuplicateName { name: p.name.clone() });
        }
    }
    Ok(())
}
