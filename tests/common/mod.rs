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

//! In-memory cluster used by the integration tests

#![allow(dead_code)]

use k8s_openapi::api::core::v1::{
    Container, LoadBalancerIngress, LoadBalancerStatus, Node, NodeStatus, NodeSystemInfo, Pod,
    PodSpec, Service, ServicePort, ServiceSpec, ServiceStatus,
};
use k8s_openapi::api::networking::v1::{
    HTTPIngressPath, HTTPIngressRuleValue, Ingress, IngressBackend, IngressRule,
    IngressServiceBackend, IngressSpec, ServiceBackendPort,
};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use kube_inventory::{ClusterClient, InventoryError};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[derive(Default)]
pub struct FakeCluster {
    pub version: Option<String>,
    pub pods: Vec<Pod>,
    pub nodes: Vec<Node>,
    pub services: Vec<Service>,
    pub ingresses: Vec<Ingress>,
    pub fail_nodes: bool,
    pub fail_services: bool,
    pub fail_ingresses: bool,
    /// Number of API calls served, shared with clones handed to the inspector
    pub calls: Arc<AtomicUsize>,
}

impl FakeCluster {
    pub fn new(version: &str) -> Self {
        Self {
            version: Some(version.to_string()),
            ..Default::default()
        }
    }

    fn record_call(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

fn matches_selector(pod: &Pod, label_selector: &str) -> bool {
    let labels = pod.metadata.labels.clone().unwrap_or_default();
    label_selector
        .split(',')
        .filter(|term| !term.is_empty())
        .all(|term| match term.split_once('=') {
            Some((key, value)) => labels.get(key).map(String::as_str) == Some(value),
            None => labels.contains_key(term),
        })
}

#[async_trait::async_trait]
impl ClusterClient for FakeCluster {
    async fn server_version(&self) -> Result<String, InventoryError> {
        self.record_call();
        self.version
            .clone()
            .ok_or_else(|| InventoryError::query("Failed to get server version: connection refused"))
    }

    async fn list_pods(
        &self,
        namespace: &str,
        label_selector: &str,
    ) -> Result<Vec<Pod>, InventoryError> {
        self.record_call();
        Ok(self
            .pods
            .iter()
            .filter(|pod| pod.metadata.namespace.as_deref() == Some(namespace))
            .filter(|pod| matches_selector(pod, label_selector))
            .cloned()
            .collect())
    }

    async fn list_nodes(&self) -> Result<Vec<Node>, InventoryError> {
        self.record_call();
        if self.fail_nodes {
            return Err(InventoryError::query("Failed to list nodes: forbidden"));
        }
        Ok(self.nodes.clone())
    }

    async fn list_services(&self) -> Result<Vec<Service>, InventoryError> {
        self.record_call();
        if self.fail_services {
            return Err(InventoryError::query("Failed to list services: forbidden"));
        }
        Ok(self.services.clone())
    }

    async fn list_ingresses(&self) -> Result<Vec<Ingress>, InventoryError> {
        self.record_call();
        if self.fail_ingresses {
            return Err(InventoryError::query("Failed to list ingresses: forbidden"));
        }
        Ok(self.ingresses.clone())
    }
}

fn meta(namespace: Option<&str>, name: &str) -> ObjectMeta {
    ObjectMeta {
        namespace: namespace.map(str::to_string),
        name: Some(name.to_string()),
        ..Default::default()
    }
}

pub fn etcd_pod(name: &str, images: &[&str]) -> Pod {
    let mut labels = BTreeMap::new();
    labels.insert("component".to_string(), "etcd".to_string());
    labels.insert("tier".to_string(), "control-plane".to_string());

    Pod {
        metadata: ObjectMeta {
            labels: Some(labels),
            ..meta(Some("kube-system"), name)
        },
        spec: Some(PodSpec {
            containers: images
                .iter()
                .map(|image| Container {
                    name: "etcd".to_string(),
                    image: Some(image.to_string()),
                    ..Default::default()
                })
                .collect(),
            ..Default::default()
        }),
        ..Default::default()
    }
}

pub fn node(name: &str, kubelet_version: &str) -> Node {
    Node {
        metadata: meta(None, name),
        status: Some(NodeStatus {
            node_info: Some(NodeSystemInfo {
                kubelet_version: kubelet_version.to_string(),
                ..Default::default()
            }),
            ..Default::default()
        }),
        ..Default::default()
    }
}

pub fn service(
    namespace: &str,
    name: &str,
    type_: &str,
    ports: &[(i32, Option<i32>, &str)],
    external_ips: &[&str],
) -> Service {
    Service {
        metadata: meta(Some(namespace), name),
        spec: Some(ServiceSpec {
            type_: Some(type_.to_string()),
            ports: Some(
                ports
                    .iter()
                    .map(|(port, node_port, protocol)| ServicePort {
                        port: *port,
                        node_port: *node_port,
                        protocol: Some(protocol.to_string()),
                        ..Default::default()
                    })
                    .collect(),
            ),
            ..Default::default()
        }),
        status: Some(ServiceStatus {
            load_balancer: Some(LoadBalancerStatus {
                ingress: Some(
                    external_ips
                        .iter()
                        .map(|ip| LoadBalancerIngress {
                            ip: Some(ip.to_string()),
                            ..Default::default()
                        })
                        .collect(),
                ),
            }),
            ..Default::default()
        }),
    }
}

/// `rules` is a list of (host, [(path, backend service, backend port)])
pub fn ingress(namespace: &str, name: &str, rules: Vec<(&str, Vec<(&str, &str, i32)>)>) -> Ingress {
    Ingress {
        metadata: meta(Some(namespace), name),
        spec: Some(IngressSpec {
            rules: Some(
                rules
                    .iter()
                    .map(|(host, paths)| IngressRule {
                        host: Some(host.to_string()),
                        http: Some(HTTPIngressRuleValue {
                            paths: paths
                                .iter()
                                .map(|(path, backend, port)| HTTPIngressPath {
                                    path: Some(path.to_string()),
                                    path_type: "Prefix".to_string(),
                                    backend: IngressBackend {
                                        service: Some(IngressServiceBackend {
                                            name: backend.to_string(),
                                            port: Some(ServiceBackendPort {
                                                number: Some(*port),
                                                ..Default::default()
                                            }),
                                        }),
                                        ..Default::default()
                                    },
                                })
                                .collect(),
                        }),
                    })
                    .collect(),
            ),
            ..Default::default()
        }),
        ..Default::default()
    }
}
