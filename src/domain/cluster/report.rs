// Copyright 2025 JiangLong.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use super::outcome::Finding;
use crate::domain::inventory::{ExposureRecord, NodeAgentVersions};
use serde::Serialize;

/// Everything one inspection run found out about a cluster.
#[derive(Debug, Clone, Serialize)]
pub struct InventoryReport {
    /// RFC 3339 timestamp of when the run finished.
    pub collected_at: String,
    pub control_plane_version: String,
    pub consensus_store_version: Finding<String>,
    pub node_agent_versions: Finding<NodeAgentVersions>,
    pub exposed_endpoints: Finding<Vec<ExposureRecord>>,
}
