use std::path::Path;

use anyhow::{Result, bail};
use workpin_dropin::{crio_workload_dropin, kubelet_workload_pinning};

use super::load_config;

pub fn dropins(config_path: &Path, kind: &str) -> Result<()> {
    print!("{}", render_dropins(config_path, kind)?);
    Ok(())
}

fn render_dropins(config_path: &Path, kind: &str) -> Result<String> {
    let config = load_config(config_path)?;
    let partitions = &config.workload_settings;
    workpin_core::validate_partitions(partitions)?;

    let out = match kind {
        "crio" => crio_workload_dropin(partitions)?,
        "kubelet" => kubelet_workload_pinning(partitions)? + "\n",
        "all" => format!(
            "# {}\n{}# {}\n{}\n",
            workpin_machineconfig::CRIO_DROPIN_PATH,
            crio_workload_dropin(partitions)?,
            workpin_machineconfig::KUBELET_PINNING_PATH,
            kubelet_workload_pinning(partitions)?,
        ),
        _ => bail!("Unsupported drop-in kind: {kind}. Supported: crio, kubelet, all"),
    };
    Ok(out)
}
