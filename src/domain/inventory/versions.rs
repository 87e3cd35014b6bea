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

//! Version extractors for the control plane, the consensus store and node agents

use super::image::{image_matches, image_tag_version};
use crate::domain::config::ConsensusStoreConf;
use crate::infrastructure::constants::{LIST_SEPARATOR, UNKNOWN_VERSION};
use crate::infrastructure::kubernetes::ClusterClient;
use crate::shared::error::{InventoryError, Result};
use k8s_openapi::api::core::v1::{Node, Pod};
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;
use tracing::debug;

/// Distinct kubelet versions reported across the cluster's nodes, sorted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NodeAgentVersions(Vec<String>);

impl NodeAgentVersions {
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for NodeAgentVersions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(LIST_SEPARATOR))
    }
}

impl<S: Into<String>> FromIterator<S> for NodeAgentVersions {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let distinct: BTreeSet<String> = iter.into_iter().map(Into::into).collect();
        Self(distinct.into_iter().collect())
    }
}

pub async fn control_plane_version(client: &dyn ClusterClient) -> Result<String> {
    let version = client.server_version().await?;
    debug!(version = %version, "Control plane version");
    Ok(version)
}

pub async fn consensus_store_version(
    client: &dyn ClusterClient,
    conf: &ConsensusStoreConf,
) -> Result<String> {
    let pods = client
        .list_pods(&conf.namespace, &conf.label_selector)
        .await?;
    debug!(count = pods.len(), namespace = %conf.namespace, "Listed consensus store pods");

    consensus_store_version_from_pods(&pods, conf)
}

/// Reads the store version off the first listed pod; replicas are assumed to
/// run the same version.
pub fn consensus_store_version_from_pods(pods: &[Pod], conf: &ConsensusStoreConf) -> Result<String> {
    let pod = pods.first().ok_or_else(|| {
        InventoryError::not_found(format!(
            "no pods matching '{}' found in {} namespace",
            conf.label_selector, conf.namespace
        ))
    })?;
    let pod_name = pod.metadata.name.as_deref().unwrap_or_default();

    let image = pod
        .spec
        .iter()
        .flat_map(|spec| spec.containers.iter())
        .filter_map(|container| container.image.as_deref())
        .find(|image| image_matches(image, &conf.image_marker))
        .ok_or_else(|| {
            InventoryError::not_found(format!(
                "could not find {} container in pod {}",
                conf.image_marker, pod_name
            ))
        })?;

    debug!(pod = pod_name, image, "Matched consensus store container");
    image_tag_version(image)
}

pub async fn node_agent_versions(client: &dyn ClusterClient) -> Result<NodeAgentVersions> {
    let nodes = client.list_nodes().await?;
    debug!(count = nodes.len(), "Listed nodes");

    if nodes.is_empty() {
        return Err(InventoryError::not_found("no nodes found in the cluster"));
    }

    Ok(distinct_kubelet_versions(&nodes))
}

/// A node that has not reported its system info yet counts as `unknown`.
pub fn distinct_kubelet_versions(nodes: &[Node]) -> NodeAgentVersions {
    nodes
        .iter()
        .map(|node| {
            node.status
                .as_ref()
                .and_then(|status| status.node_info.as_ref())
                .map(|info| info.kubelet_version.as_str())
                .filter(|version| !version.is_empty())
                .unwrap_or(UNKNOWN_VERSION)
        })
        .collect()
}
