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

use crate::shared::error::InventoryError;
use k8s_openapi::api::core::v1::{Node, Pod, Service};
use k8s_openapi::api::networking::v1::Ingress;
use kube::api::ListParams;
use kube::{Api, Client};
use tracing::{debug, info};

/// Read-only view of the cluster API used by the inventory operations.
///
/// Every method performs one blocking round-trip; timeouts and retries are
/// left to the underlying [`kube::Client`].
#[async_trait::async_trait]
pub trait ClusterClient: Send + Sync {
    /// The control plane's self-reported `gitVersion`.
    async fn server_version(&self) -> Result<String, InventoryError>;

    async fn list_pods(
        &self,
        namespace: &str,
        label_selector: &str,
    ) -> Result<Vec<Pod>, InventoryError>;

    async fn list_nodes(&self) -> Result<Vec<Node>, InventoryError>;

    /// Services across all namespaces.
    async fn list_services(&self) -> Result<Vec<Service>, InventoryError>;

    /// Ingresses across all namespaces.
    async fn list_ingresses(&self) -> Result<Vec<Ingress>, InventoryError>;
}

pub struct KubeClusterClient {
    client: Client,
}

impl KubeClusterClient {
    /// Connect using the default resolution: `KUBECONFIG`, then
    /// `~/.kube/config`, then the in-cluster service account.
    pub async fn new() -> Result<Self, InventoryError> {
        debug!("Initializing Kubernetes client from default configuration");

        let client = Client::try_default().await.map_err(|e| {
            InventoryError::auth(format!("Failed to create Kubernetes client: {}", e))
        })?;

        info!("Successfully connected to Kubernetes cluster");
        Ok(Self { client })
    }

    pub async fn new_with_config(
        kubeconfig_path: Option<String>,
        context: Option<String>,
    ) -> Result<Self, InventoryError> {
        use kube::config::{KubeConfigOptions, Kubeconfig};

        if kubeconfig_path.is_none() && context.is_none() {
            return Self::new().await;
        }

        let kubeconfig = if let Some(path) = kubeconfig_path {
            debug!(path = %path, "Loading kubeconfig");
            Kubeconfig::read_from(&path).map_err(|e| {
                InventoryError::auth(format!("Failed to load kubeconfig {}: {}", path, e))
            })?
        } else {
            Kubeconfig::read()
                .map_err(|e| InventoryError::auth(format!("Failed to load kubeconfig: {}", e)))?
        };

        let config_options = KubeConfigOptions {
            context,
            cluster: None,
            user: None,
        };

        let config = kube::Config::from_custom_kubeconfig(kubeconfig, &config_options)
            .await
            .map_err(|e| {
                InventoryError::auth(format!("Failed to create Kubernetes config: {}", e))
            })?;

        let client = Client::try_from(config).map_err(|e| {
            InventoryError::auth(format!("Failed to create Kubernetes client: {}", e))
        })?;

        info!("Successfully connected to Kubernetes cluster");
        Ok(Self { client })
    }
}

#[async_trait::async_trait]
impl ClusterClient for KubeClusterClient {
    async fn server_version(&self) -> Result<String, InventoryError> {
        let info = self
            .client
            .apiserver_version()
            .await
            .map_err(|e| InventoryError::query(format!("Failed to get server version: {}", e)))?;
        Ok(info.git_version)
    }

    async fn list_pods(
        &self,
        namespace: &str,
        label_selector: &str,
    ) -> Result<Vec<Pod>, InventoryError> {
        let api: Api<Pod> = Api::namespaced(self.client.clone(), namespace);
        let lp = ListParams::default().labels(label_selector);

        api.list(&lp).await.map(|list| list.items).map_err(|e| {
            InventoryError::query(format!(
                "Failed to list pods '{}' in namespace '{}': {}",
                label_selector, namespace, e
            ))
        })
    }

    async fn list_nodes(&self) -> Result<Vec<Node>, InventoryError> {
        let api: Api<Node> = Api::all(self.client.clone());

        api.list(&ListParams::default())
            .await
            .map(|list| list.items)
            .map_err(|e| InventoryError::query(format!("Failed to list nodes: {}", e)))
    }

    async fn list_services(&self) -> Result<Vec<Service>, InventoryError> {
        let api: Api<Service> = Api::all(self.client.clone());

        api.list(&ListParams::default())
            .await
            .map(|list| list.items)
            .map_err(|e| InventoryError::query(format!("Failed to list services: {}", e)))
    }

    async fn list_ingresses(&self) -> Result<Vec<Ingress>, InventoryError> {
        let api: Api<Ingress> = Api::all(self.client.clone());

        api.list(&ListParams::default())
            .await
            .map(|list| list.items)
            .map_err(|e| InventoryError::query(format!("Failed to list ingresses: {}", e)))
    }
}
