//! Pane splitting tool.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Map, Value};

use super::catalog::ToolName;
use super::execution::TmuxContext;
use super::{catalog_definition, non_empty, parse_args, Tool};
use crate::error::ToolError;
use crate::types::ToolDefinition;

/// Axis along which the new pane is placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SplitDirection {
    /// Side by side (left/right), `split-window -h`.
    Horizontal,
    /// Stacked (top/bottom), `split-window -v`.
    Vertical,
}

impl SplitDirection {
    fn flag(self) -> &'static str {
        match self {
            Self::Horizontal => "-h",
            Self::Vertical => "-v",
        }
    }

    fn adverb(self) -> &'static str {
        match self {
            Self::Horizontal => "horizontally",
            Self::Vertical => "vertically",
        }
    }
}

/// Tool: split a pane, optionally starting a command in the new pane.
pub struct SplitPaneTool {
    pub tmux: TmuxContext,
}

#[derive(Deserialize)]
struct Args {
    target: Option<String>,
    direction: SplitDirection,
    command: Option<String>,
}

fn split_window_args(
    direction: SplitDirection,
    target: Option<&str>,
    command: Option<&str>,
) -> Vec<String> {
    let mut args = vec!["split-window".to_string(), direction.flag().to_string()];
    if let Some(target) = target {
        args.push("-t".into());
        args.push(target.into());
    }
    // Without a command tmux starts the default interactive shell.
    if let Some(command) = command {
        args.push(command.into());
    }
    args
}

fn confirmation(direction: SplitDirection, command: Option<&str>) -> String {
    match command {
        Some(command) => format!("Pane split {} with command: {command}", direction.adverb()),
        None => format!("Pane split {}", direction.adverb()),
    }
}

#[async_trait]
impl Tool for SplitPaneTool {
    fn name(&self) -> &'static str {
        ToolName::SplitPane.as_str()
    }

    fn definition(&self) -> ToolDefinition {
        catalog_definition(
            ToolName::SplitPane,
            serde_json::json!({
                "type": "object",
                "properties": {
                    "target": {
                        "type": "string",
                        "description": "Target pane (default: current pane)"
                    },
                    "direction": {
                        "type": "string",
                        "enum": ["horizontal", "vertical"],
                        "description": "Split direction (horizontal: left/right, vertical: top/bottom)"
                    },
                    "command": {
                        "type": "string",
                        "description": "Command to run in the new pane"
                    }
                },
                "required": ["direction"]
            }),
        )
    }

    async fn execute(&self, arguments: Map<String, Value>) -> Result<String, ToolError> {
        let args: Args = parse_args(arguments)?;
        let target = non_empty(args.target);
        let command = non_empty(args.command);
        self.tmux.ensure_available()?;
        self.tmux
            .invoke(&split_window_args(
                args.direction,
                target.as_deref(),
                command.as_deref(),
            ))
            .await
            .map_err(|failure| failure.into_tool_error("split pane"))?;
        Ok(confirmation(args.direction, command.as_deref()))
    }
}
