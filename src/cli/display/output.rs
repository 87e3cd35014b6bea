//! Report output formats

use super::TableRenderer;
use crate::domain::cluster::InventoryReport;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Colored tables
    #[default]
    Table,
    /// One fact per line
    Text,
    Json,
    Yaml,
}

impl OutputFormat {
    pub fn render(&self, report: &InventoryReport) -> anyhow::Result<String> {
        let output = match self {
            OutputFormat::Table => TableRenderer::new().render_inventory(report),
            OutputFormat::Text => TableRenderer::new().render_text(report),
            OutputFormat::Json => serde_json::to_string_pretty(report)
                .map_err(|e| anyhow::anyhow!("Failed to serialize report as JSON: {}", e))?,
            OutputFormat::Yaml => serde_yaml::to_string(report)
                .map_err(|e| anyhow::anyhow!("Failed to serialize report as YAML: {}", e))?,
        };
        Ok(output)
    }
}
