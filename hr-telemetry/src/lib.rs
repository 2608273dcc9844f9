//! Logging setup for binaries built on the HR dataset crates.
//!
//! Library crates only emit `tracing` events; installing a subscriber is left
//! to the binary, which calls [`init_tracing`] once at startup.

#![warn(missing_docs, clippy::pedantic)]

use thiserror::Error;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;

/// Default filter directive when none is configured.
pub const DEFAULT_FILTER: &str = "info";

/// Errors emitted while installing the global subscriber.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// The filter directive could not be parsed.
    #[error("invalid log filter `{filter}`: {source}")]
    InvalidFilter {
        /// The rejected directive.
        filter: String,
        /// Source parse error.
        #[source]
        source: ParseError,
    },
    /// A global subscriber was already installed.
    #[error("tracing subscriber already initialised: {reason}")]
    AlreadyInitialised {
        /// Message from the subscriber registry.
        reason: String,
    },
}

/// Subscriber configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelemetryConfig {
    filter: String,
    with_target: bool,
}

impl TelemetryConfig {
    /// Creates a configuration using the given filter directive.
    #[must_use]
    pub fn new(filter: impl Into<String>) -> Self {
        Self {
            filter: filter.into(),
            with_target: false,
        }
    }

    /// Includes event targets (module paths) in log lines.
    #[must_use]
    pub fn with_target(mut self, with_target: bool) -> Self {
        self.with_target = with_target;
        self
    }

    /// Returns the filter directive.
    #[must_use]
    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// Parses the filter directive.
    ///
    /// # Errors
    ///
    /// Returns [`TelemetryError::InvalidFilter`] if the directive is malformed.
    pub fn env_filter(&self) -> Result<EnvFilter, TelemetryError> {
        EnvFilter::try_new(&self.filter).map_err(|source| TelemetryError::InvalidFilter {
            filter: self.filter.clone(),
            source,
        })
    }
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self::new(DEFAULT_FILTER)
    }
}

/// Installs a formatted subscriber writing to stderr.
///
/// # Errors
///
/// Returns [`TelemetryError::InvalidFilter`] for a malformed directive and
/// [`TelemetryError::AlreadyInitialised`] if a global subscriber exists.
pub fn init_tracing(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let filter = config.env_filter()?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(config.with_target)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| TelemetryError::AlreadyInitialised {
            reason: err.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_is_info() {
        let config = TelemetryConfig::default();
        assert_eq!(config.filter(), DEFAULT_FILTER);
        assert!(config.env_filter().is_ok());
    }

    #[test]
    fn malformed_filter_is_reported() {
        let config = TelemetryConfig::new("hr_dataset=loud");
        let err = config.env_filter().expect_err("bad level should fail");
        assert!(matches!(err, TelemetryError::InvalidFilter { filter, .. } if filter == "hr_dataset=loud"));
    }

    #[test]
    fn second_init_is_an_error_not_a_panic() {
        let config = TelemetryConfig::new("hr_dataset=debug").with_target(true);
        init_tracing(&config).unwrap();

        let err = init_tracing(&config).expect_err("global subscriber already set");
        assert!(matches!(err, TelemetryError::AlreadyInitialised { .. }));
    }
}
