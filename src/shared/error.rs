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

use thiserror::Error;
pub type Result<T> = std::result::Result<T, InventoryError>;

#[derive(Error, Debug)]
pub enum InventoryError {
    /// The cluster connection could not be established. Always fatal.
    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Kubernetes API error: {0}")]
    Query(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Container image '{image}' does not have a discernible version tag")]
    MalformedImage { image: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

impl From<kube::Error> for InventoryError {
    fn from(err: kube::Error) -> Self {
        InventoryError::Query(err.to_string())
    }
}

impl InventoryError {
    pub fn auth(context: impl Into<String>) -> Self {
        Self::Auth(context.into())
    }

    pub fn query(context: impl Into<String>) -> Self {
        Self::Query(context.into())
    }

    pub fn not_found(context: impl Into<String>) -> Self {
        Self::NotFound(context.into())
    }

    pub fn malformed_image(image: impl Into<String>) -> Self {
        Self::MalformedImage {
            image: image.into(),
        }
    }

    pub fn config_error(context: impl Into<String>) -> Self {
        Self::ConfigError(context.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_image_message_names_image() {
        let err = InventoryError::malformed_image("registry/etcd");
        assert_eq!(
            err.to_string(),
            "Container image 'registry/etcd' does not have a discernible version tag"
        );
    }

    #[test]
    fn test_is_not_found() {
        assert!(InventoryError::not_found("no nodes found in the cluster").is_not_found());
        assert!(!InventoryError::query("boom").is_not_found());
    }
}
