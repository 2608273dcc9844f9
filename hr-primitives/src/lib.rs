//! Shared key types for the HR dataset and its consumers.

#![warn(missing_docs, clippy::pedantic)]

mod error;
mod keys;

/// Error type and result alias for key construction.
pub use error::{Error, Result};
/// Lookup keys for employee records and policy entries.
pub use keys::{EmployeeId, PolicyKey};
