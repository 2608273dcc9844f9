//! Error types for the dataset.

use std::path::PathBuf;

use hr_primitives::{EmployeeId, PolicyKey};
use serde_json::Error as SerdeError;
use thiserror::Error;

/// Errors emitted while building, loading, or querying a dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// No employee record exists for the requested identifier.
    #[error("employee `{employee_id}` not found")]
    EmployeeNotFound {
        /// Identifier that was looked up.
        employee_id: String,
    },
    /// No policy entry exists for the requested key.
    #[error("policy `{policy_key}` not found")]
    PolicyNotFound {
        /// Key that was looked up.
        policy_key: String,
    },
    /// Two employee records share the same identifier.
    #[error("employee `{employee_id}` is defined more than once")]
    DuplicateEmployee {
        /// The repeated identifier.
        employee_id: EmployeeId,
    },
    /// Two policy entries share the same key.
    #[error("policy `{policy_key}` is defined more than once")]
    DuplicatePolicy {
        /// The repeated key.
        policy_key: PolicyKey,
    },
    /// An employee record was built without one of its required fields.
    #[error("employee `{employee_id}` is missing required field `{field}`")]
    IncompleteRecord {
        /// Identifier of the incomplete record.
        employee_id: EmployeeId,
        /// Name of the missing field.
        field: &'static str,
    },
    /// A key failed to construct.
    #[error(transparent)]
    InvalidKey {
        /// Source [`hr_primitives::Error`].
        #[from]
        source: hr_primitives::Error,
    },
    /// Snapshot file could not be read.
    #[error("failed to read dataset snapshot {path}: {source}")]
    Io {
        /// Path of the snapshot file.
        path: PathBuf,
        /// Source [`std::io::Error`].
        #[source]
        source: std::io::Error,
    },
    /// Snapshot JSON was malformed or violated a dataset invariant.
    #[error("snapshot serialization error: {source}")]
    Serialization {
        /// Source [`serde_json::Error`].
        #[from]
        source: SerdeError,
    },
}

impl DatasetError {
    /// Returns `true` for the expected lookup misses.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::EmployeeNotFound { .. } | Self::PolicyNotFound { .. }
        )
    }
}

/// Result type alias for dataset operations.
pub type DatasetResult<T> = Result<T, DatasetError>;
