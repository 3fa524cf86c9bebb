use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::info;
use workpin_machineconfig::for_workload_partitions;

use super::load_config;

const DEFAULT_ROLE: &str = "master";

pub fn render(
    config_path: &Path,
    role: Option<&str>,
    format: &str,
    output: Option<&Path>,
) -> Result<()> {
    let manifest = render_manifest(config_path, role, format)?;
    match output {
        Some(path) => {
            std::fs::write(path, &manifest)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(path = %path.display(), "Wrote machine config");
            println!("✓ Generated {}", path.display());
        }
        None => print!("{manifest}"),
    }
    Ok(())
}

fn render_manifest(config_path: &Path, role: Option<&str>, format: &str) -> Result<String> {
    let config = load_config(config_path)?;
    let role = role.unwrap_or_else(|| config.role_or(DEFAULT_ROLE));

    let mc = for_workload_partitions(&config.workload_settings, role)
        .context("Could not build workload partitioning machine config")?;

    let manifest = match format {
        "yaml" => mc.to_yaml()?,
        "json" => mc.to_json_pretty()? + "\n",
        _ => bail!("Unsupported output format: {format}. Supported: yaml, json"),
    };
    Ok(manifest)
}
