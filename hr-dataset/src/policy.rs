//! Policy entry type.

use hr_primitives::PolicyKey;
use serde::{Deserialize, Serialize};

/// Named block of free-text policy documentation.
///
/// The text is stored and returned as-is; nothing is extracted from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PolicyEntry {
    policy_key: PolicyKey,
    text: String,
}

impl PolicyEntry {
    /// Creates a policy entry.
    #[must_use]
    pub fn new(policy_key: PolicyKey, text: impl Into<String>) -> Self {
        Self {
            policy_key,
            text: text.into(),
        }
    }

    /// Returns the policy key.
    #[must_use]
    pub fn policy_key(&self) -> &PolicyKey {
        &self.policy_key
    }

    /// Returns the policy text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}
