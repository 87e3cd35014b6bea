//! Cluster inspection commands

use super::display::OutputFormat;
use crate::{ClusterInspector, InventoryConf};
use clap::Parser;

#[derive(Parser, Debug, Clone, Default)]
pub struct InspectCommand {
    /// Path to kubeconfig file
    /// If not specified, uses default kubeconfig resolution (KUBECONFIG env or ~/.kube/config)
    #[arg(long)]
    pub kubeconfig: Option<String>,

    /// Kubernetes context to use
    /// If not specified, uses current context from kubeconfig
    #[arg(long)]
    pub context: Option<String>,

    /// Path to inventory configuration file (TOML)
    /// If not provided, reads KUBE_INVENTORY_CONF_FILE, then falls back to defaults
    #[arg(long, value_name = "PATH")]
    pub config_file: Option<String>,

    /// Output format
    #[arg(long, short = 'o', value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

#[derive(Parser, Debug, Clone)]
pub struct ConfigCommand {
    /// Path to inventory configuration file (TOML)
    #[arg(long, value_name = "PATH")]
    pub config_file: Option<String>,
}

impl InspectCommand {
    pub async fn execute(&self) -> anyhow::Result<()> {
        let conf = InventoryConf::resolve(self.config_file.as_deref())
            .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?;

        let inspector =
            ClusterInspector::new_with_config(conf, self.kubeconfig.clone(), self.context.clone())
                .await
                .map_err(|e| anyhow::anyhow!("Failed to connect to Kubernetes cluster: {}", e))?;

        let report = inspector
            .inspect()
            .await
            .map_err(|e| anyhow::anyhow!("Failed to get Kubernetes version: {}", e))?;

        println!("{}", self.output.render(&report)?);
        Ok(())
    }
}

impl ConfigCommand {
    pub async fn execute(&self) -> anyhow::Result<()> {
        let conf = InventoryConf::resolve(self.config_file.as_deref())
            .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?;

        print!("{}", conf.to_toml()?);
        Ok(())
    }
}
