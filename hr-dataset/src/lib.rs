//! In-memory HR dataset.
//!
//! A [`StaticDataset`] holds two read-only lookup tables: employee records
//! keyed by [`EmployeeId`] and policy texts keyed by [`PolicyKey`]. Datasets
//! are assembled once through [`DatasetBuilder`] (or loaded from a JSON
//! snapshot) and never change afterwards, so they can be shared freely
//! between threads.
//!
//! Lookups are exact-match only. A missing key is an ordinary outcome and is
//! reported as [`DatasetError::EmployeeNotFound`] or
//! [`DatasetError::PolicyNotFound`].

#![warn(missing_docs, clippy::pedantic)]

pub mod dataset;
pub mod error;
pub mod fixture;
pub mod policy;
pub mod record;
pub mod snapshot;
pub mod source;

pub use dataset::{DatasetBuilder, StaticDataset};
pub use error::{DatasetError, DatasetResult};
pub use hr_primitives::{EmployeeId, PolicyKey};
pub use policy::PolicyEntry;
pub use record::{EmployeeRecord, EmployeeRecordBuilder};
pub use source::DatasetSource;
