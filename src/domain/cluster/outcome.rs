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

//! Per-operation outcomes and their severity

use crate::shared::error::{InventoryError, Result};
use serde::Serialize;
use std::fmt;
use tracing::{error, warn};

/// The inventory operations, in the order they run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    ControlPlaneVersion,
    ConsensusStoreVersion,
    NodeAgentVersions,
    ExposedEndpoints,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Fatal,
    Recoverable,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::ControlPlaneVersion,
        Operation::ConsensusStoreVersion,
        Operation::NodeAgentVersions,
        Operation::ExposedEndpoints,
    ];

    /// Only the control plane version is load-bearing for the rest of the report.
    pub fn severity(&self) -> Severity {
        match self {
            Operation::ControlPlaneVersion => Severity::Fatal,
            _ => Severity::Recoverable,
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            Operation::ControlPlaneVersion => "Kubernetes version",
            Operation::ConsensusStoreVersion => "etcd version",
            Operation::NodeAgentVersions => "node versions",
            Operation::ExposedEndpoints => "exposed endpoints",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

#[derive(Debug)]
pub struct OperationFailure {
    pub operation: Operation,
    pub error: InventoryError,
}

impl fmt::Display for OperationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Could not get {}: {}", self.operation, self.error)
    }
}

#[derive(Debug)]
pub enum Outcome<T> {
    Success(T),
    Recoverable(OperationFailure),
    Fatal(OperationFailure),
}

/// What the report keeps for a best-effort operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum Finding<T> {
    Found(T),
    /// Informational message naming the operation and the cause.
    Unavailable(String),
}

impl<T> Finding<T> {
    pub fn found(&self) -> Option<&T> {
        match self {
            Finding::Found(value) => Some(value),
            Finding::Unavailable(_) => None,
        }
    }
}

impl<T> Outcome<T> {
    /// Classify an operation's result by the operation's severity.
    pub fn settle(operation: Operation, result: Result<T>) -> Self {
        match result {
            Ok(value) => Outcome::Success(value),
            Err(error) => {
                let failure = OperationFailure { operation, error };
                match operation.severity() {
                    Severity::Fatal => Outcome::Fatal(failure),
                    Severity::Recoverable => Outcome::Recoverable(failure),
                }
            }
        }
    }

    /// Recoverable failures become an [`Finding::Unavailable`] message; a fatal
    /// failure is handed back as the error that ends the run.
    pub fn dispatch(self) -> Result<Finding<T>> {
        match self {
            Outcome::Success(value) => Ok(Finding::Found(value)),
            Outcome::Recoverable(failure) => {
                warn!(operation = ?failure.operation, error = %failure.error, "Operation failed, continuing");
                Ok(Finding::Unavailable(failure.to_string()))
            }
            Outcome::Fatal(failure) => {
                error!(operation = ?failure.operation, error = %failure.error, "Operation failed, aborting");
                Err(failure.error)
            }
        }
    }

    /// For operations the report cannot do without: any failure ends the run.
    pub fn require(self) -> Result<T> {
        match self {
            Outcome::Success(value) => Ok(value),
            Outcome::Recoverable(failure) | Outcome::Fatal(failure) => {
                error!(operation = ?failure.operation, error = %failure.error, "Operation failed, aborting");
                Err(failure.error)
            }
        }
    }

    pub fn is_fatal(&self) -> bool {
        matches!(self, Outcome::Fatal(_))
    }
}
