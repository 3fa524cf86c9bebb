//! End-to-end checks of the generated MachineConfig.
//!
//! Expected drop-in bodies are rebuilt here from the partition list, so any
//! change to the on-disk format has to be made in both places.

use std::collections::BTreeMap;

use workpin_core::WorkloadPartition;
use workpin_dropin::{KubeletWorkloadEntry, crio_workload_dropin, kubelet_workload_pinning};
use workpin_machineconfig::ignition::{decode_data_url, encode_data_url};
use workpin_machineconfig::{CRIO_DROPIN_PATH, KUBELET_PINNING_PATH, for_workload_partitions};

fn expected_crio_cfg(partitions: &[WorkloadPartition]) -> String {
    partitions
        .iter()
        .map(|p| {
            format!(
                "[crio.runtime.workloads.{name}]\n\
                 label = \"{name}.workload.openshift.io/cores\"\n\
                 annotation_prefix = \"io.openshift.workload.{name}\"\n\
                 resources = {{ \"cpu\" = \"\", \"cpuset\" = \"{cpus}\", }}\n\n",
                name = p.name,
                cpus = p.cpu_ids,
            )
        })
        .collect()
}

fn expected_kubelet_cfg(partitions: &[WorkloadPartition]) -> String {
    if partitions.is_empty() {
        return "{}".to_string();
    }
    let parts: Vec<String> = partitions
        .iter()
        .map(|p| format!("  {:?}: {{\n    \"cpuset\": {:?}\n  }}", p.name, p.cpu_ids))
        .collect();
    format!("{{\n{}\n}}", parts.join(",\n"))
}

fn cases() -> Vec<(Vec<WorkloadPartition>, &'static str)> {
    vec![
        (vec![WorkloadPartition::management("0-1")], "master"),
        (
            vec![
                WorkloadPartition::management("0-1"),
                WorkloadPartition::new("secondary", "50-51"),
            ],
            "master",
        ),
        (vec![], "worker"),
    ]
}

#[test]
fn workload_partitioning_machine_config() {
    for (partitions, role) in cases() {
        let expected_crio = expected_crio_cfg(&partitions);
        assert_eq!(crio_workload_dropin(&partitions).unwrap(), expected_crio);

        let expected_kubelet = expected_kubelet_cfg(&partitions);
        assert_eq!(kubelet_workload_pinning(&partitions).unwrap(), expected_kubelet);

        let mc = for_workload_partitions(&partitions, role).unwrap();
        assert_eq!(mc.role(), Some(role));
        assert_eq!(mc.name().unwrap(), format!("02-{role}-workload-partitioning"));

        let config = mc.ignition_config().unwrap();
        assert_eq!(config.ignition.version, "3.2.0");

        let files = &config.storage.files;
        assert_eq!(files.len(), 2, "two files in the machine config");

        assert_eq!(files[0].path, CRIO_DROPIN_PATH);
        assert_eq!(
            files[0].contents.source.as_deref(),
            Some(encode_data_url(expected_crio.as_bytes()).as_str())
        );
        assert_eq!(files[1].path, KUBELET_PINNING_PATH);
        assert_eq!(
            files[1].contents.source.as_deref(),
            Some(encode_data_url(expected_kubelet.as_bytes()).as_str())
        );

        for file in files {
            assert_eq!(file.mode, Some(0o644));
            assert_eq!(file.user.as_ref().and_then(|u| u.name.as_deref()), Some("root"));
        }
    }
}

#[test]
fn template_fidelity_for_management_partition() {
    let mc = for_workload_partitions(&[WorkloadPartition::management("0-1")], "master").unwrap();
    let files = mc.ignition_config().unwrap().storage.files;
    let crio = String::from_utf8(files[0].decoded_contents().unwrap()).unwrap();

    assert!(crio.contains("[crio.runtime.workloads.management]"));
    assert!(crio.contains(r#"label = "management.workload.openshift.io/cores""#));
    assert!(crio.contains(r#"annotation_prefix = "io.openshift.workload.management""#));
    assert!(crio.contains(r#"resources = { "cpu" = "", "cpuset" = "0-1", }"#));
}

#[test]
fn kubelet_file_decodes_to_partition_map() {
    let partitions = vec![
        WorkloadPartition::management("0-1"),
        WorkloadPartition::new("secondary", "50-51"),
    ];
    let mc = for_workload_partitions(&partitions, "master").unwrap();
    let files = mc.ignition_config().unwrap().storage.files;
    let raw = decode_data_url(files[1].contents.source.as_deref().unwrap()).unwrap();

    let decoded: BTreeMap<String, KubeletWorkloadEntry> = serde_json::from_slice(&raw).unwrap();
    assert_eq!(decoded.len(), 2);
    assert_eq!(decoded["management"].cpuset, "0-1");
    assert_eq!(decoded["secondary"].cpuset, "50-51");
}

#[test]
fn repeated_builds_are_byte_identical() {
    let partitions = vec![
        WorkloadPartition::new("secondary", "50-51"),
        WorkloadPartition::management("0-1"),
    ];
    let first = for_workload_partitions(&partitions, "master")
        .unwrap()
        .to_json_pretty()
        .unwrap();
    for _ in 0..5 {
        let again = for_workload_partitions(&partitions, "master")
            .unwrap()
            .to_json_pretty()
            .unwrap();
        assert_eq!(again, first);
    }
}
