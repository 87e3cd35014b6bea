// CLI command definitions

use super::inspect::{ConfigCommand, InspectCommand};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "kube-inventory",
    version,
    about = "Read-only Kubernetes cluster inventory",
    long_about = "Reports the control plane version, the etcd version, the distinct kubelet versions \
                  and the externally reachable endpoints of a Kubernetes cluster"
)]
pub struct CliArgs {
    /// Defaults to `inspect` when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl CliArgs {
    pub fn command(self) -> Commands {
        self.command
            .unwrap_or_else(|| Commands::Inspect(InspectCommand::default()))
    }
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Inspect a cluster and print its inventory report
    Inspect(InspectCommand),

    /// Print the effective inventory configuration as TOML
    Config(ConfigCommand),
}
