//! Table rendering for CLI output

use super::{ColorTheme, StatusIcon};
use crate::domain::cluster::{Finding, InventoryReport};
use crate::domain::inventory::ExposureRecord;
use crate::infrastructure::constants::UNKNOWN_VERSION;
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, ContentArrangement, Table};
use std::fmt::Display;

const NO_ENDPOINTS: &str = "No exposed LoadBalancer, NodePort services, or Ingresses found.";

/// Table renderer for formatted output
pub struct TableRenderer {
    theme: ColorTheme,
}

impl Default for TableRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TableRenderer {
    /// Create a new table renderer with default theme
    pub fn new() -> Self {
        Self {
            theme: ColorTheme::default(),
        }
    }

    /// Render the report as a versions table followed by an endpoints table
    pub fn render_inventory(&self, report: &InventoryReport) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "╭─ Cluster Inventory {} ─╮\n",
            format!("[{}]", report.collected_at).bright_black()
        ));
        output.push_str(&self.render_versions(report).to_string());
        output.push('\n');

        match &report.exposed_endpoints {
            Finding::Found(records) if records.is_empty() => {
                output.push_str(NO_ENDPOINTS);
                output.push('\n');
            }
            Finding::Found(records) => {
                output.push_str(&format!(
                    "╭─ Exposed Endpoints {} ─╮\n",
                    format!("[{} endpoints]", records.len()).bright_black()
                ));
                output.push_str(&self.render_endpoints(records).to_string());
                output.push('\n');
            }
            Finding::Unavailable(reason) => {
                output.push_str(&format!("{} {}\n", StatusIcon::WARNING.yellow(), reason));
            }
        }

        output
    }

    fn render_versions(&self, report: &InventoryReport) -> Table {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec![
                Cell::new("COMPONENT").set_alignment(CellAlignment::Left),
                Cell::new("VERSION").set_alignment(CellAlignment::Left),
                Cell::new("STATUS").set_alignment(CellAlignment::Left),
            ]);

        table.add_row(self.version_row(
            "Control plane",
            &Finding::Found(report.control_plane_version.as_str()),
        ));
        table.add_row(self.version_row(
            "etcd",
            &as_ref_finding(&report.consensus_store_version),
        ));
        table.add_row(self.version_row(
            "kubelet",
            &as_ref_finding(&report.node_agent_versions),
        ));

        table
    }

    fn version_row<T: Display>(&self, component: &str, finding: &Finding<T>) -> Vec<Cell> {
        let found = matches!(finding, Finding::Found(_));
        let color = self.theme.get_finding_color(found);
        let icon = StatusIcon::get_finding_icon(found);

        let (version, status) = match finding {
            Finding::Found(value) => (value.to_string(), format!("{} OK", icon)),
            Finding::Unavailable(reason) => (UNKNOWN_VERSION.to_string(), format!("{} {}", icon, reason)),
        };

        vec![
            Cell::new(component),
            Cell::new(version).fg(color),
            Cell::new(status).fg(color),
        ]
    }

    fn render_endpoints(&self, records: &[ExposureRecord]) -> Table {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec![
                Cell::new("KIND").set_alignment(CellAlignment::Left),
                Cell::new("RESOURCE").set_alignment(CellAlignment::Left),
                Cell::new("EXPOSURE").set_alignment(CellAlignment::Left),
            ]);

        for record in records {
            let color = self.theme.get_exposure_color(record);
            table.add_row(vec![
                Cell::new(format!(
                    "{} {}",
                    StatusIcon::get_exposure_icon(record),
                    record.kind_label()
                ))
                .fg(color),
                Cell::new(record.qualified_name()),
                Cell::new(record.details()),
            ]);
        }

        table
    }

    /// Render the report as plain console lines
    pub fn render_text(&self, report: &InventoryReport) -> String {
        let mut lines = vec![format!(
            "Kubernetes API server version: {}",
            report.control_plane_version
        )];

        lines.push(match &report.consensus_store_version {
            Finding::Found(version) => format!("Detected etcd version: {}", version),
            Finding::Unavailable(reason) => reason.clone(),
        });

        lines.push(match &report.node_agent_versions {
            Finding::Found(versions) => format!("Detected node versions: {}", versions),
            Finding::Unavailable(reason) => reason.clone(),
        });

        match &report.exposed_endpoints {
            Finding::Found(records) => {
                lines.push("Detected Exposed Endpoints:".to_string());
                if records.is_empty() {
                    lines.push(format!("  {}", NO_ENDPOINTS));
                }
                lines.extend(records.iter().map(|record| format!("  - {}", record)));
            }
            Finding::Unavailable(reason) => lines.push(reason.clone()),
        }

        lines.join("\n")
    }
}

fn as_ref_finding<T>(finding: &Finding<T>) -> Finding<&T> {
    match finding {
        Finding::Found(value) => Finding::Found(value),
        Finding::Unavailable(reason) => Finding::Unavailable(reason.clone()),
    }
}
