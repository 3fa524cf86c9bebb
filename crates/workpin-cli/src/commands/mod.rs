pub mod dropins;
pub mod render;

use std::path::Path;

use anyhow::Context;
use workpin_core::PartitioningConfig;

pub(crate) fn load_config(path: &Path) -> anyhow::Result<PartitioningConfig> {
    let config = PartitioningConfig::from_file(path)
        .with_context(|| format!("Failed to load partitioning config {}", path.display()))?;
    tracing::debug!(
        path = %path.display(),
        partitions = config.workload_settings.len(),
        "Loaded partitioning config"
    );
    Ok(config)
}
