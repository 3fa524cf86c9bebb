//! workpin-dropin — drop-in file encoders for workload partitioning.
//!
//! Turns an ordered list of [`WorkloadPartition`]s into the two text files a
//! node needs:
//!
//! ```text
//! [WorkloadPartition]
//!   ├── crio_workload_dropin()      → /etc/crio/crio.conf.d/01-workload-partitioning
//!   └── kubelet_workload_pinning()  → /etc/kubernetes/workload-pinning
//! ```
//!
//! Both formats are keyed by partition name. Output follows input order, and a
//! repeated name replaces the earlier entry in place. Callers that need
//! repeated names rejected run [`workpin_core::validate_partitions`] first.

pub mod crio;
pub mod error;
pub mod kubelet;

use std::collections::HashMap;

use workpin_core::WorkloadPartition;

pub use crio::{CrioWorkloadEncoder, CrioWorkloadSection, crio_workload_dropin};
pub use error::{Artifact, DropinError};
pub use kubelet::{KubeletWorkloadEntry, kubelet_workload_pinning};

/// Collapse partitions to one entry per name, keeping first-seen order.
pub(crate) fn keyed_partitions(partitions: &[WorkloadPartition]) -> Vec<&WorkloadPartition> {
    let mut ordered: Vec<&WorkloadPartition> = Vec::with_capacity(partitions.len());
    let mut index: HashMap<&str, usize> = HashMap::with_capacity(partitions.len());
    for p in partitions {
        match index.get(p.name.as_str()) {
            Some(&slot) => {
                tracing::warn!(name = %p.name, "duplicate workload partition replaces earlier entry");
                ordered[slot] = p;
            }
            None => {
                index.insert(p.name.as_str(), ordered.len());
                ordered.push(p);
            }
        }
    }
    ordered
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyed_partitions_last_write_wins_in_place() {
        let partitions = vec![
            WorkloadPartition::management("0-1"),
            WorkloadPartition::new("secondary", "2-3"),
            WorkloadPartition::management("4-5"),
        ];
        let keyed = keyed_partitions(&partitions);
        assert_eq!(keyed.len(), 2);
        assert_eq!(keyed[0], &WorkloadPartition::management("4-5"));
        assert_eq!(keyed[1].name, "secondary");
    }
}
