//! Runtime registry for tool metadata and execution.

use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info};

/// Result alias for tool operations.
pub type ToolResult<T> = Result<T, ToolError>;

/// Metadata describing a registered tool.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ToolMetadata {
    name: String,
    version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

impl ToolMetadata {
    /// Creates metadata for the supplied identifier and version.
    ///
    /// # Errors
    ///
    /// Returns [`ToolError::InvalidMetadata`] if either field is empty.
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> ToolResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ToolError::InvalidMetadata {
                reason: "tool name cannot be empty".into(),
            });
        }

        let version = version.into();
        if version.trim().is_empty() {
            return Err(ToolError::InvalidMetadata {
                reason: "tool version cannot be empty".into(),
            });
        }

        Ok(Self {
            name,
            version,
            description: None,
        })
    }

    /// Sets the human-readable description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Returns the tool name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the semantic version string.
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Returns the optional description.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// Trait implemented by tool executors.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Invokes the tool with the given JSON input, returning JSON output.
    async fn invoke(&self, input: Value) -> ToolResult<Value>;
}

#[async_trait]
impl<F, Fut> Tool for F
where
    F: Send + Sync + Fn(Value) -> Fut,
    Fut: Future<Output = ToolResult<Value>> + Send,
{
    async fn invoke(&self, input: Value) -> ToolResult<Value> {
        (self)(input).await
    }
}

/// Handle returned by the registry for direct invocation.
#[derive(Clone)]
pub struct ToolHandle {
    metadata: ToolMetadata,
    executor: Arc<dyn Tool>,
}

impl ToolHandle {
    /// Returns the associated metadata.
    #[must_use]
    pub fn metadata(&self) -> &ToolMetadata {
        &self.metadata
    }

    /// Executes the underlying tool implementation.
    ///
    /// # Errors
    ///
    /// Propagates any error returned by the underlying implementation.
    pub async fn invoke(&self, input: Value) -> ToolResult<Value> {
        self.executor.invoke(input).await
    }
}

/// Registry that stores tool implementations keyed by name.
#[derive(Default)]
pub struct ToolRegistry {
    inner: RwLock<HashMap<String, ToolHandle>>,
}

impl std::fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<_> = match self.inner.read() {
            Ok(inner) => inner.keys().cloned().collect(),
            Err(_) => Vec::new(),
        };
        names.sort();
        f.debug_struct("ToolRegistry")
            .field("registered", &names)
            .finish()
    }
}

impl ToolRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a tool implementation.
    ///
    /// # Errors
    ///
    /// Returns [`ToolError::DuplicateTool`] if the name is already present.
    ///
    /// # Panics
    ///
    /// Panics if the internal registry lock is poisoned.
    pub fn register_tool<T>(&self, metadata: ToolMetadata, tool: T) -> ToolResult<()>
    where
        T: Tool + 'static,
    {
        let mut inner = self.inner.write().expect("tool registry poisoned");
        let name = metadata.name().to_owned();
        if inner.contains_key(&name) {
            return Err(ToolError::DuplicateTool { name });
        }

        info!(tool = %name, version = metadata.version(), "tool registered");
        inner.insert(
            name,
            ToolHandle {
                metadata,
                executor: Arc::new(tool),
            },
        );

        Ok(())
    }

    /// Returns a handle to the tool matching the supplied name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<ToolHandle> {
        let inner = self.inner.read().ok()?;
        inner.get(name).cloned()
    }

    /// Invokes a registered tool directly.
    ///
    /// # Errors
    ///
    /// Returns [`ToolError::UnknownTool`] when the tool is not found or
    /// propagates the error returned by the implementation.
    pub async fn invoke(&self, name: &str, input: Value) -> ToolResult<Value> {
        let handle = self.get(name).ok_or_else(|| ToolError::UnknownTool {
            name: name.to_owned(),
        })?;
        debug!(tool = name, "invoking tool");
        handle.invoke(input).await
    }

    /// Lists the metadata of all registered tools, sorted by name.
    ///
    /// # Panics
    ///
    /// Panics if the internal registry lock is poisoned.
    #[must_use]
    pub fn list(&self) -> Vec<ToolMetadata> {
        let inner = self.inner.read().expect("tool registry poisoned");
        let mut tools: Vec<_> = inner
            .values()
            .map(|handle| handle.metadata.clone())
            .collect();
        tools.sort_by(|a, b| a.name.cmp(&b.name));
        tools
    }
}

/// Errors produced by tool registration and invocation.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Tool metadata failed validation.
    #[error("invalid tool metadata: {reason}")]
    InvalidMetadata {
        /// Human-readable reason for rejection.
        reason: String,
    },

    /// Tool name collided with an existing registration.
    #[error("tool `{name}` is already registered")]
    DuplicateTool {
        /// Name of the offending tool.
        name: String,
    },

    /// Requested tool does not exist.
    #[error("tool `{name}` is not registered")]
    UnknownTool {
        /// Name of the missing tool.
        name: String,
    },

    /// Tool input did not match the shape the tool expects.
    #[error("invalid input for tool `{tool}`: {reason}")]
    InvalidInput {
        /// Name of the tool that rejected the input.
        tool: String,
        /// Human-readable reason for rejection.
        reason: String,
    },

    /// Tool execution failed.
    #[error("tool execution failed: {reason}")]
    Execution {
        /// Human-readable error returned by the tool implementation.
        reason: String,
    },
}

impl ToolError {
    /// Creates an execution error from the supplied reason.
    #[must_use]
    pub fn execution(reason: impl Into<String>) -> Self {
        Self::Execution {
            reason: reason.into(),
        }
    }

    /// Creates an input error for the named tool.
    #[must_use]
    pub fn invalid_input(tool: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            tool: tool.into(),
            reason: reason.into(),
        }
    }
}
