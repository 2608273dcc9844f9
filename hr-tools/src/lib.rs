//! Assistant tools over the HR dataset.
//!
//! [`registry`] holds named JSON-in/JSON-out tools an agent can invoke, and
//! [`hr`] registers the dataset lookups as such tools.

#![warn(missing_docs, clippy::pedantic)]

pub mod hr;
pub mod registry;
