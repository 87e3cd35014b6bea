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

/// Consensus store (etcd) detection
pub const DEFAULT_SYSTEM_NAMESPACE: &str = "kube-system";
pub const DEFAULT_CONSENSUS_LABEL_SELECTOR: &str = "component=etcd";
pub const DEFAULT_CONSENSUS_IMAGE_MARKER: &str = "etcd";

/// Image reference tag separator
pub const IMAGE_TAG_SEPARATOR: char = ':';

/// Service types that expose a workload outside the cluster
pub const SERVICE_TYPE_LOAD_BALANCER: &str = "LoadBalancer";
pub const SERVICE_TYPE_NODE_PORT: &str = "NodePort";

/// Protocol assumed when a service port omits it (API server default)
pub const DEFAULT_PORT_PROTOCOL: &str = "TCP";

/// Host rendered for ingress rules without a host restriction
pub const DEFAULT_WILDCARD_HOST: &str = "*";

/// Placeholder for a version that could not be determined
pub const UNKNOWN_VERSION: &str = "unknown";

/// Joiner for rendered address, port and version lists
pub const LIST_SEPARATOR: &str = ", ";

/// Environment variable pointing at the inventory configuration file
pub const CONF_FILE_ENV: &str = "KUBE_INVENTORY_CONF_FILE";
