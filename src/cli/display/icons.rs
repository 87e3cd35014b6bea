//! Status icons for CLI output

use crate::domain::inventory::ExposureRecord;

/// Status icons for different states
pub struct StatusIcon;

impl StatusIcon {
    /// Value was read from the cluster
    pub const SUCCESS: &'static str = "✓";

    /// Best-effort value could not be determined
    pub const WARNING: &'static str = "⚠";

    pub const LOAD_BALANCER: &'static str = "🌐";
    pub const NODE_PORT: &'static str = "🔌";
    pub const INGRESS: &'static str = "🔀";

    pub fn get_finding_icon(found: bool) -> &'static str {
        if found {
            Self::SUCCESS
        } else {
            Self::WARNING
        }
    }

    pub fn get_exposure_icon(record: &ExposureRecord) -> &'static str {
        match record {
            ExposureRecord::LoadBalancer { .. } => Self::LOAD_BALANCER,
            ExposureRecord::NodePort { .. } => Self::NODE_PORT,
            ExposureRecord::Ingress { .. } => Self::INGRESS,
        }
    }
}
