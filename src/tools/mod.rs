//! Tool system.
//!
//! Tools are async trait objects the caller invokes by name. Each tool
//! provides its own definition (name, description, input schema) and an async
//! execute method. The registry validates arguments against the declared
//! schema before dispatching, so a malformed call never reaches tmux.

pub mod catalog;
pub mod execution;
pub mod listing;
pub mod pane_control;
pub mod schema;
pub mod send_command;
pub mod split_pane;

use crate::error::{RegistryError, ToolError};
use crate::types::{OutputShape, ToolDefinition};
use async_trait::async_trait;
use catalog::ToolName;
use execution::TmuxContext;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::{debug, warn};

// ---------------------------------------------------------------------------
// Tool trait
// ---------------------------------------------------------------------------

/// A tool that can be invoked by the calling agent.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Unique name matching what the caller will invoke.
    fn name(&self) -> &'static str;

    /// Definition advertised through `tools/list`.
    fn definition(&self) -> ToolDefinition;

    /// Execute with arguments already validated against `definition()`.
    /// Returns the text result for the caller.
    async fn execute(&self, arguments: Map<String, Value>) -> Result<String, ToolError>;
}

/// Build a catalog tool's definition from its input schema.
pub(crate) fn catalog_definition(name: ToolName, input_schema: Value) -> ToolDefinition {
    ToolDefinition {
        name: name.as_str().into(),
        description: name.description().into(),
        input_schema,
        output: OutputShape::Text,
    }
}

/// Deserialize validated arguments into a tool's typed input.
pub(crate) fn parse_args<T: DeserializeOwned>(arguments: Map<String, Value>) -> Result<T, ToolError> {
    serde_json::from_value(Value::Object(arguments))
        .map_err(|e| ToolError::InvalidArguments(e.to_string()))
}

/// Treat an empty optional reference the same as an absent one.
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

// ---------------------------------------------------------------------------
// Tool registry
// ---------------------------------------------------------------------------

/// Registry of available tools, keyed by name.
pub struct ToolRegistry {
    tools: Vec<Box<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self { tools: Vec::new() }
    }

    /// Registry holding all seven tmux tools, checked against the catalog.
    pub fn tmux(tmux: TmuxContext) -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        registry.register(listing::ListSessionsTool {
            tmux: tmux.clone(),
        })?;
        registry.register(listing::ListWindowsTool {
            tmux: tmux.clone(),
        })?;
        registry.register(listing::ListPanesTool { tmux: tmux.clone() })?;
        registry.register(split_pane::SplitPaneTool { tmux: tmux.clone() })?;
        registry.register(send_command::SendCommandTool {
            tmux: tmux.clone(),
        })?;
        registry.register(pane_control::KillPaneTool { tmux: tmux.clone() })?;
        registry.register(pane_control::SelectPaneTool { tmux })?;
        registry.ensure_complete()?;
        Ok(registry)
    }

    /// Register a tool. Names must be unique.
    pub fn register(&mut self, tool: impl Tool + 'static) -> Result<(), RegistryError> {
        if self.get(tool.name()).is_some() {
            return Err(RegistryError::Duplicate(tool.name().into()));
        }
        self.tools.push(Box::new(tool));
        Ok(())
    }

    /// Check the 1:1 correspondence between the catalog and the handlers.
    pub fn ensure_complete(&self) -> Result<(), RegistryError> {
        for declared in ToolName::ALL {
            if self.get(declared.as_str()).is_none() {
                return Err(RegistryError::MissingHandler(declared.as_str().into()));
            }
        }
        for tool in &self.tools {
            if tool.name().parse::<ToolName>().is_err() {
                return Err(RegistryError::UndeclaredHandler(tool.name().into()));
            }
        }
        Ok(())
    }

    /// Tool definitions in registration order.
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        self.tools.iter().map(|t| t.definition()).collect()
    }

    /// Registered tool names in registration order.
    pub fn names(&self) -> Vec<&'static str> {
        self.tools.iter().map(|t| t.name()).collect()
    }

    fn get(&self, name: &str) -> Option<&dyn Tool> {
        self.tools
            .iter()
            .find(|t| t.name() == name)
            .map(|t| t.as_ref())
    }

    /// Validate `arguments` against the named tool's schema, then run it.
    pub async fn execute(&self, name: &str, arguments: Option<Value>) -> Result<String, ToolError> {
        let tool = self
            .get(name)
            .ok_or_else(|| ToolError::UnknownTool(name.to_string()))?;
        let arguments = schema::arguments_object(arguments)?;
        schema::validate_arguments(&tool.definition().input_schema, &arguments)?;

        debug!(tool = name, "dispatching tool call");
        let result = tool.execute(arguments).await;
        if let Err(err) = &result {
            warn!(tool = name, error = %err, "tool call failed");
        }
        result
    }

    /// True if no tools are registered.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}
