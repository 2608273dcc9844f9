//! Shared error definitions for HR primitives.

use thiserror::Error;

/// Result alias used by the primitive constructors.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while constructing primitive key types.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Employee identifier was empty or whitespace.
    #[error("invalid employee id `{id}`: {reason}")]
    InvalidEmployeeId {
        /// The offending identifier string.
        id: String,
        /// Human-readable reason for rejection.
        reason: &'static str,
    },

    /// Policy key was empty or whitespace.
    #[error("invalid policy key `{key}`: {reason}")]
    InvalidPolicyKey {
        /// The offending key string.
        key: String,
        /// Human-readable reason for rejection.
        reason: &'static str,
    },
}
