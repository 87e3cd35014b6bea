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

use super::outcome::{Operation, Outcome};
use super::report::InventoryReport;
use crate::domain::config::InventoryConf;
use crate::domain::inventory::{endpoints, versions};
use crate::infrastructure::kubernetes::{ClusterClient, KubeClusterClient};
use crate::shared::error::InventoryError;
use tracing::info;

/// Runs the inventory operations one after another against a single connection.
pub struct ClusterInspector {
    client: Box<dyn ClusterClient>,
    conf: InventoryConf,
}

impl ClusterInspector {
    pub async fn new(conf: InventoryConf) -> Result<Self, InventoryError> {
        let client = KubeClusterClient::new().await?;
        Ok(Self::with_client(Box::new(client), conf))
    }

    pub async fn new_with_config(
        conf: InventoryConf,
        kubeconfig_path: Option<String>,
        context: Option<String>,
    ) -> Result<Self, InventoryError> {
        let client = KubeClusterClient::new_with_config(kubeconfig_path, context).await?;
        Ok(Self::with_client(Box::new(client), conf))
    }

    pub fn with_client(client: Box<dyn ClusterClient>, conf: InventoryConf) -> Self {
        Self { client, conf }
    }

    /// Collects the full report.
    ///
    /// Fails only when the control plane version cannot be read; every other
    /// operation's failure is recorded in the report and the run continues.
    pub async fn inspect(&self) -> Result<InventoryReport, InventoryError> {
        let client = self.client.as_ref();

        info!("Querying control plane version");
        let control_plane_version = Outcome::settle(
            Operation::ControlPlaneVersion,
            versions::control_plane_version(client).await,
        )
        .require()?;

        info!("Detecting consensus store version");
        let consensus_store_version = Outcome::settle(
            Operation::ConsensusStoreVersion,
            versions::consensus_store_version(client, &self.conf.consensus_store).await,
        )
        .dispatch()?;

        info!("Collecting node agent versions");
        let node_agent_versions = Outcome::settle(
            Operation::NodeAgentVersions,
            versions::node_agent_versions(client).await,
        )
        .dispatch()?;

        info!("Aggregating exposed endpoints");
        let exposed_endpoints = Outcome::settle(
            Operation::ExposedEndpoints,
            endpoints::exposed_endpoints(client, &self.conf.endpoints).await,
        )
        .dispatch()?;

        Ok(InventoryReport {
            collected_at: chrono::Utc::now().to_rfc3339(),
            control_plane_version,
            consensus_store_version,
            node_agent_versions,
            exposed_endpoints,
        })
    }
}
