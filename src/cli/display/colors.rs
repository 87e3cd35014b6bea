//! Color theme for CLI output

use crate::domain::inventory::ExposureRecord;
use comfy_table::Color as TableColor;

/// Color theme for terminal output
#[derive(Debug, Clone)]
pub struct ColorTheme {
    pub success: TableColor,
    pub warning: TableColor,
    pub error: TableColor,
    pub info: TableColor,
    pub muted: TableColor,
}

impl Default for ColorTheme {
    fn default() -> Self {
        Self {
            success: TableColor::Green,
            warning: TableColor::Yellow,
            error: TableColor::Red,
            info: TableColor::Cyan,
            muted: TableColor::DarkGrey,
        }
    }
}

impl ColorTheme {
    /// Found values are green, best-effort values that could not be read are yellow
    pub fn get_finding_color(&self, found: bool) -> TableColor {
        if found {
            self.success
        } else {
            self.warning
        }
    }

    /// Public load balancer addresses stand out more than node ports or routes
    pub fn get_exposure_color(&self, record: &ExposureRecord) -> TableColor {
        match record {
            ExposureRecord::LoadBalancer { .. } => self.error,
            ExposureRecord::NodePort { .. } => self.warning,
            ExposureRecord::Ingress { .. } => self.info,
        }
    }
}
