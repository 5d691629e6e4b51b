//! Pane kill/select tools.
//!
//! Both require an explicit target: acting on an implicit "current pane" is
//! never assumed for destructive or focus-changing operations.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Map, Value};

use super::catalog::ToolName;
use super::execution::TmuxContext;
use super::{catalog_definition, parse_args, Tool};
use crate::error::ToolError;
use crate::types::ToolDefinition;

#[derive(Deserialize)]
struct TargetArgs {
    target: String,
}

fn required_target_schema() -> Value {
    serde_json::json!({
        "type": "object",
        "properties": {
            "target": {
                "type": "string",
                "minLength": 1,
                "description": "Target pane ID or index"
            }
        },
        "required": ["target"]
    })
}

/// Parse and re-check the target so direct callers get the same guarantee
/// as registry dispatch.
fn parse_target(arguments: Map<String, Value>) -> Result<String, ToolError> {
    let args: TargetArgs = parse_args(arguments)?;
    if args.target.is_empty() {
        return Err(ToolError::invalid_argument("target", "must not be empty"));
    }
    Ok(args.target)
}

/// Tool: kill one pane.
pub struct KillPaneTool {
    pub tmux: TmuxContext,
}

#[async_trait]
impl Tool for KillPaneTool {
    fn name(&self) -> &'static str {
        ToolName::KillPane.as_str()
    }

    fn definition(&self) -> ToolDefinition {
        catalog_definition(ToolName::KillPane, required_target_schema())
    }

    async fn execute(&self, arguments: Map<String, Value>) -> Result<String, ToolError> {
        let target = parse_target(arguments)?;
        self.tmux.ensure_available()?;
        self.tmux
            .invoke(&["kill-pane".into(), "-t".into(), target.clone()])
            .await
            .map_err(|failure| failure.into_tool_error("kill pane"))?;
        Ok(format!("Pane {target} killed"))
    }
}

/// Tool: make one pane the active pane.
pub struct SelectPaneTool {
    pub tmux: TmuxContext,
}

#[async_trait]
impl Tool for SelectPaneTool {
    fn name(&self) -> &'static str {
        ToolName::SelectPane.as_str()
    }

    fn definition(&self) -> ToolDefinition {
        catalog_definition(ToolName::SelectPane, required_target_schema())
    }

    async fn execute(&self, arguments: Map<String, Value>) -> Result<String, ToolError> {
        let target = parse_target(arguments)?;
        self.tmux.ensure_available()?;
        self.tmux
            .invoke(&["select-pane".into(), "-t".into(), target.clone()])
            .await
            .map_err(|failure| failure.into_tool_error("select pane"))?;
        Ok(format!("Pane {target} selected"))
    }
}
