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

//! Inventory configuration loaded from an optional TOML file

use crate::infrastructure::constants::{
    CONF_FILE_ENV, DEFAULT_CONSENSUS_IMAGE_MARKER, DEFAULT_CONSENSUS_LABEL_SELECTOR,
    DEFAULT_SYSTEM_NAMESPACE, DEFAULT_WILDCARD_HOST,
};
use crate::shared::error::{InventoryError, Result};
use serde::{Deserialize, Serialize};
use std::fs::read_to_string;
use tracing::debug;

// ============================================================================
// Main inventory configuration
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct InventoryConf {
    pub consensus_store: ConsensusStoreConf,
    pub endpoints: EndpointsConf,
}

impl InventoryConf {
    /// Load configuration from TOML file
    pub fn from<T: AsRef<str>>(path: T) -> Result<Self> {
        let content = read_to_string(path.as_ref()).map_err(|e| {
            InventoryError::config_error(format!(
                "Failed to read config file {}: {}",
                path.as_ref(),
                e
            ))
        })?;

        let conf: Self = toml::from_str(&content)?;
        conf.validate()?;
        Ok(conf)
    }

    /// Resolve the effective configuration.
    ///
    /// Priority: explicit path > `KUBE_INVENTORY_CONF_FILE` > defaults.
    pub fn resolve(path: Option<&str>) -> Result<Self> {
        if let Some(path) = path {
            debug!(path, "Loading inventory configuration");
            return Self::from(path);
        }

        match std::env::var(CONF_FILE_ENV) {
            Ok(env_path) if !env_path.is_empty() => {
                debug!(path = %env_path, "Loading inventory configuration from {}", CONF_FILE_ENV);
                Self::from(env_path)
            }
            _ => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        let store = &self.consensus_store;
        for (field, value) in [
            ("consensus_store.namespace", &store.namespace),
            ("consensus_store.label_selector", &store.label_selector),
            ("consensus_store.image_marker", &store.image_marker),
            ("endpoints.wildcard_host", &self.endpoints.wildcard_host),
        ] {
            if value.trim().is_empty() {
                return Err(InventoryError::config_error(format!(
                    "{} must not be empty",
                    field
                )));
            }
        }
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| InventoryError::config_error(format!("Failed to render TOML: {}", e)))
    }
}

// ============================================================================
// Consensus store detection
// ============================================================================

/// Where to look for the consensus store pods and how to recognise its container
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ConsensusStoreConf {
    pub namespace: String,
    pub label_selector: String,
    /// Substring an image reference must contain to count as the store's container
    pub image_marker: String,
}

impl Default for ConsensusStoreConf {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_SYSTEM_NAMESPACE.to_string(),
            label_selector: DEFAULT_CONSENSUS_LABEL_SELECTOR.to_string(),
            image_marker: DEFAULT_CONSENSUS_IMAGE_MARKER.to_string(),
        }
    }
}

// ============================================================================
// Endpoint rendering
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct EndpointsConf {
    pub wildcard_host: String,
}

impl Default for EndpointsConf {
    fn default() -> Self {
        Self {
            wildcard_host: DEFAULT_WILDCARD_HOST.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let conf = InventoryConf::default();
        assert_eq!(conf.consensus_store.namespace, "kube-system");
        assert_eq!(conf.consensus_store.label_selector, "component=etcd");
        assert_eq!(conf.consensus_store.image_marker, "etcd");
        assert_eq!(conf.endpoints.wildcard_host, "*");
        assert!(conf.validate().is_ok());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[consensus_store]\nnamespace = \"etcd-system\"").unwrap();

        let conf = InventoryConf::from(file.path().to_str().unwrap()).unwrap();
        assert_eq!(conf.consensus_store.namespace, "etcd-system");
        assert_eq!(conf.consensus_store.label_selector, "component=etcd");
        assert_eq!(conf.endpoints, EndpointsConf::default());
    }

    #[test]
    fn test_empty_marker_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[consensus_store]\nimage_marker = \"\"").unwrap();

        let err = InventoryConf::from(file.path().to_str().unwrap()).unwrap_err();
        assert!(matches!(err, InventoryError::ConfigError(_)));
        assert!(err.to_string().contains("consensus_store.image_marker"));
    }

    #[test]
    fn test_empty_wildcard_host_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[endpoints]\nwildcard_host = \"\"").unwrap();

        let err = InventoryConf::from(file.path().to_str().unwrap()).unwrap_err();
        assert!(matches!(err, InventoryError::ConfigError(_)));
        assert!(err.to_string().contains("endpoints.wildcard_host"));
    }

    #[test]
    fn test_invalid_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[consensus_store\nnamespace = ").unwrap();

        let err = InventoryConf::from(file.path().to_str().unwrap()).unwrap_err();
        assert!(matches!(err, InventoryError::TomlParse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = InventoryConf::from("/nonexistent/kube-inventory.toml").unwrap_err();
        assert!(matches!(err, InventoryError::ConfigError(_)));
    }

    #[test]
    fn test_explicit_path_wins() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[endpoints]\nwildcard_host = \"<any>\"").unwrap();

        let conf = InventoryConf::resolve(file.path().to_str()).unwrap();
        assert_eq!(conf.endpoints.wildcard_host, "<any>");
    }

    #[test]
    fn test_toml_round_trip() {
        let conf = InventoryConf::default();
        let rendered = conf.to_toml().unwrap();
        assert!(rendered.contains("[consensus_store]"));
        let parsed: InventoryConf = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed, conf);
    }
}
