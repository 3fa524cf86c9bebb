use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "workpin",
    about = "workpin — workload partitioning manifest generator",
    version,
    propagate_version = true,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the CRI-O and kubelet drop-in files
    Dropins {
        /// Partitioning config file (.toml or .json)
        #[arg(short, long)]
        config: PathBuf,
        /// Which drop-in to print: crio, kubelet, or all
        #[arg(short, long, default_value = "all")]
        kind: String,
    },
    /// Render the workload partitioning MachineConfig.
    ///
    /// The role is read from the config file unless --role is given,
    /// and defaults to "master".
    Render {
        /// Partitioning config file (.toml or .json)
        #[arg(short, long)]
        config: PathBuf,
        /// Machine config pool role (overrides the config file)
        #[arg(short, long)]
        role: Option<String>,
        /// Output format: yaml or json
        #[arg(short, long, default_value = "yaml")]
        format: String,
        /// Write the manifest to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("workpin=info".parse()?)
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Dropins { config, kind } => {
            commands::dropins::dropins(&config, &kind)
        }
        Commands::Render { config, role, format, output } => {
            commands::render::render(&config, role.as_deref(), &format, output.as_deref())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_render_defaults() {
        let cli = Cli::try_parse_from(["workpin", "render", "--config", "p.toml"]).unwrap();
        match cli.command {
            Commands::Render { config, role, format, output } => {
                assert_eq!(config, PathBuf::from("p.toml"));
                assert_eq!(role, None);
                assert_eq!(format, "yaml");
                assert_eq!(output, None);
            }
            _ => panic!("expected render"),
        }
    }

    #[test]
    fn test_parse_dropins_kind() {
        let cli = Cli::try_parse_from(["workpin", "dropins", "-c", "p.json", "-k", "kubelet"]).unwrap();
        match cli.command {
            Commands::Dropins { kind, .. } => assert_eq!(kind, "kubelet"),
            _ => panic!("expected dropins"),
        }
    }

    #[test]
    fn test_config_is_required() {
        assert!(Cli::try_parse_from(["workpin", "render"]).is_err());
    }
}
