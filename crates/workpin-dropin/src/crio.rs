//! CRI-O workload drop-in encoder.
//!
//! Example output:
//!
//! ```text
//! [crio.runtime.workloads.management]
//! label = "management.workload.openshift.io/cores"
//! annotation_prefix = "io.openshift.workload.management"
//! resources = { "cpu" = "", "cpuset" = "0-1", }
//! ```
//!
//! `resources` is written exactly as templated, not as a TOML value. CRI-O
//! reads it as an inline table, so quoting it would change its meaning.

use std::io::Write;

use workpin_core::WorkloadPartition;

use crate::error::{Artifact, DropinError};
use crate::keyed_partitions;

/// Table prefix CRI-O reads workload definitions from.
pub const CRIO_WORKLOADS_PREFIX: &str = "crio.runtime.workloads";

/// One `[crio.runtime.workloads.<name>]` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrioWorkloadSection {
    pub name: String,
    pub label: String,
    pub annotation_prefix: String,
    /// Pre-formatted inline table, emitted verbatim.
    pub resources: String,
}

impl CrioWorkloadSection {
    pub fn for_partition(p: &WorkloadPartition) -> Self {
        CrioWorkloadSection {
            name: p.name.clone(),
            label: format!("{}.workload.openshift.io/cores", p.name),
            annotation_prefix: format!("io.openshift.workload.{}", p.name),
            resources: format!(r#"{{ "cpu" = "", "cpuset" = "{}", }}"#, p.cpu_ids),
        }
    }

    /// Dotted table key, e.g. `crio.runtime.workloads.management`.
    pub fn table_key(&self) -> String {
        format!("{CRIO_WORKLOADS_PREFIX}.{}", toml_key(&self.name))
    }
}

/// Streams workload tables into any `io::Write` sink.
pub struct CrioWorkloadEncoder<W> {
    sink: W,
}

impl<W: Write> CrioWorkloadEncoder<W> {
    pub fn new(sink: W) -> Self {
        Self { sink }
    }

    /// Write one table per distinct partition name, in input order.
    pub fn encode(&mut self, partitions: &[WorkloadPartition]) -> Result<(), DropinError> {
        for p in keyed_partitions(partitions) {
            self.write_section(&CrioWorkloadSection::for_partition(p))
                .map_err(|e| DropinError::serialize(Artifact::CrioWorkloads, e))?;
        }
        self.sink
            .flush()
            .map_err(|e| DropinError::serialize(Artifact::CrioWorkloads, e))
    }

    fn write_section(&mut self, section: &CrioWorkloadSection) -> std::io::Result<()> {
        writeln!(self.sink, "[{}]", section.table_key())?;
        writeln!(self.sink, "label = {}", basic_string(&section.label))?;
        writeln!(self.sink, "annotation_prefix = {}", basic_string(&section.annotation_prefix))?;
        writeln!(self.sink, "resources = {}", section.resources)?;
        writeln!(self.sink)
    }

    pub fn into_inner(self) -> W {
        self.sink
    }
}

/// Render the CRI-O drop-in for `partitions`.
///
/// An empty slice yields an empty document.
pub fn crio_workload_dropin(partitions: &[WorkloadPartition]) -> Result<String, DropinError> {
    let mut encoder = CrioWorkloadEncoder::new(Vec::new());
    encoder.encode(partitions)?;
    String::from_utf8(encoder.into_inner())
        .map_err(|e| DropinError::serialize(Artifact::CrioWorkloads, e))
}

/// Quote `value` as a single-line TOML basic string.
///
/// JSON string escapes are a subset of TOML basic string escapes, except that
/// TOML also forbids a raw DEL.
fn basic_string(value: &str) -> String {
    serde_json::Value::String(value.to_string())
        .to_string()
        .replace('\u{7f}', "\\u007F")
}

/// Single table-key segment, bare when TOML allows it.
fn toml_key(key: &str) -> String {
    toml_edit::Key::new(key).to_string()
}
