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

//! Externally reachable services and ingress routes

use crate::domain::config::EndpointsConf;
use crate::infrastructure::constants::{
    DEFAULT_PORT_PROTOCOL, LIST_SEPARATOR, SERVICE_TYPE_LOAD_BALANCER, SERVICE_TYPE_NODE_PORT,
};
use crate::infrastructure::kubernetes::ClusterClient;
use crate::shared::error::Result;
use k8s_openapi::api::core::v1::{Service, ServicePort};
use k8s_openapi::api::networking::v1::{Ingress, IngressBackend};
use serde::Serialize;
use std::fmt;
use tracing::debug;

/// One externally reachable resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ExposureRecord {
    LoadBalancer {
        namespace: String,
        name: String,
        addresses: Vec<String>,
        ports: Vec<String>,
    },
    NodePort {
        namespace: String,
        name: String,
        ports: Vec<String>,
    },
    Ingress {
        namespace: String,
        name: String,
        host: String,
        path: String,
        backend: String,
        addresses: Vec<String>,
    },
}

impl ExposureRecord {
    pub fn kind_label(&self) -> &'static str {
        match self {
            Self::LoadBalancer { .. } => "Service (LoadBalancer)",
            Self::NodePort { .. } => "Service (NodePort)",
            Self::Ingress { .. } => "Ingress",
        }
    }

    /// `<namespace>/<name>`
    pub fn qualified_name(&self) -> String {
        let (namespace, name) = match self {
            Self::LoadBalancer {
                namespace, name, ..
            }
            | Self::NodePort {
                namespace, name, ..
            }
            | Self::Ingress {
                namespace, name, ..
            } => (namespace, name),
        };
        format!("{}/{}", namespace, name)
    }

    /// Kind-specific addressing facts, without the kind and name prefix.
    pub fn details(&self) -> String {
        match self {
            Self::LoadBalancer {
                addresses, ports, ..
            } => format!(
                "External Endpoint(s): [{}], Port(s): [{}]",
                addresses.join(LIST_SEPARATOR),
                ports.join(LIST_SEPARATOR)
            ),
            Self::NodePort { ports, .. } => format!(
                "NodePort(s): [{}] (exposed on all node IPs)",
                ports.join(LIST_SEPARATOR)
            ),
            Self::Ingress {
                host,
                path,
                backend,
                addresses,
                ..
            } => {
                let mut text = format!("Host: {}, Path: {} -> {}", host, path, backend);
                if !addresses.is_empty() {
                    text.push_str(&format!(
                        ", External Endpoint(s): [{}]",
                        addresses.join(LIST_SEPARATOR)
                    ));
                }
                text
            }
        }
    }
}

impl fmt::Display for ExposureRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} - {}",
            self.kind_label(),
            self.qualified_name(),
            self.details()
        )
    }
}

/// Lists services and ingresses cluster-wide. Either listing failing aborts
/// the whole aggregation.
pub async fn exposed_endpoints(
    client: &dyn ClusterClient,
    conf: &EndpointsConf,
) -> Result<Vec<ExposureRecord>> {
    let services = client.list_services().await?;
    let ingresses = client.list_ingresses().await?;
    debug!(
        services = services.len(),
        ingresses = ingresses.len(),
        "Listed exposure candidates"
    );

    Ok(collect_exposures(&services, &ingresses, conf))
}

/// Services first in listing order, then every ingress rule path.
pub fn collect_exposures(
    services: &[Service],
    ingresses: &[Ingress],
    conf: &EndpointsConf,
) -> Vec<ExposureRecord> {
    services
        .iter()
        .filter_map(service_exposure)
        .chain(
            ingresses
                .iter()
                .flat_map(|ingress| ingress_exposures(ingress, conf)),
        )
        .collect()
}

/// `None` for service types that are not externally exposed, and for
/// LoadBalancer services still waiting for an address.
pub fn service_exposure(service: &Service) -> Option<ExposureRecord> {
    let spec = service.spec.as_ref()?;
    let namespace = service.metadata.namespace.clone().unwrap_or_default();
    let name = service.metadata.name.clone().unwrap_or_default();
    let ports = spec.ports.as_deref().unwrap_or_default();

    match spec.type_.as_deref() {
        Some(SERVICE_TYPE_LOAD_BALANCER) => {
            let addresses: Vec<String> = service
                .status
                .as_ref()
                .and_then(|status| status.load_balancer.as_ref())
                .and_then(|lb| lb.ingress.as_ref())
                .into_iter()
                .flatten()
                .filter_map(|point| preferred_address(point.ip.as_deref(), point.hostname.as_deref()))
                .collect();

            if addresses.is_empty() {
                debug!(service = %name, namespace = %namespace, "LoadBalancer has no external address yet");
                return None;
            }

            Some(ExposureRecord::LoadBalancer {
                namespace,
                name,
                addresses,
                ports: ports
                    .iter()
                    .map(|p| format!("{}/{}", p.port, protocol(p)))
                    .collect(),
            })
        }
        Some(SERVICE_TYPE_NODE_PORT) => Some(ExposureRecord::NodePort {
            namespace,
            name,
            ports: ports
                .iter()
                .map(|p| format!("{}:{}/{}", p.port, p.node_port.unwrap_or_default(), protocol(p)))
                .collect(),
        }),
        _ => None,
    }
}

/// One record per path of every rule; a rule without HTTP paths yields nothing.
pub fn ingress_exposures(ingress: &Ingress, conf: &EndpointsConf) -> Vec<ExposureRecord> {
    let namespace = ingress.metadata.namespace.clone().unwrap_or_default();
    let name = ingress.metadata.name.clone().unwrap_or_default();

    let addresses: Vec<String> = ingress
        .status
        .as_ref()
        .and_then(|status| status.load_balancer.as_ref())
        .and_then(|lb| lb.ingress.as_ref())
        .into_iter()
        .flatten()
        .filter_map(|point| preferred_address(point.ip.as_deref(), point.hostname.as_deref()))
        .collect();

    let rules = ingress
        .spec
        .as_ref()
        .and_then(|spec| spec.rules.as_deref())
        .unwrap_or_default();

    let mut records = Vec::new();
    for rule in rules {
        let host = match rule.host.as_deref() {
            Some(host) if !host.is_empty() => host.to_string(),
            _ => conf.wildcard_host.clone(),
        };

        let Some(http) = rule.http.as_ref() else {
            continue;
        };

        for path in &http.paths {
            records.push(ExposureRecord::Ingress {
                namespace: namespace.clone(),
                name: name.clone(),
                host: host.clone(),
                path: path.path.clone().unwrap_or_default(),
                backend: backend_target(&path.backend),
                addresses: addresses.clone(),
            });
        }
    }
    records
}

/// Literal address first, DNS name as fallback; empty strings count as absent.
fn preferred_address(ip: Option<&str>, hostname: Option<&str>) -> Option<String> {
    ip.filter(|ip| !ip.is_empty())
        .or_else(|| hostname.filter(|hostname| !hostname.is_empty()))
        .map(str::to_string)
}

fn protocol(port: &ServicePort) -> &str {
    port.protocol.as_deref().unwrap_or(DEFAULT_PORT_PROTOCOL)
}

/// `<service>:<port>`, using the port name when no number is set.
/// Resource backends render as `<Kind>/<name>`.
fn backend_target(backend: &IngressBackend) -> String {
    if let Some(service) = &backend.service {
        let port = service
            .port
            .as_ref()
            .and_then(|port| {
                port.number
                    .map(|number| number.to_string())
                    .or_else(|| port.name.clone())
            })
            .unwrap_or_else(|| "0".to_string());
        return format!("{}:{}", service.name, port);
    }

    match &backend.resource {
        Some(resource) => format!("{}/{}", resource.kind, resource.name),
        None => String::new(),
    }
}
