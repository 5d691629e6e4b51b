//! Keystroke injection tool.
//!
//! Types a command into a pane and, unless told otherwise, presses Enter so
//! the pane's shell runs it. With `enter: false` the text is left on the
//! command line, which lets a caller build one up across several calls.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Map, Value};

use super::catalog::ToolName;
use super::execution::TmuxContext;
use super::{catalog_definition, non_empty, parse_args, Tool};
use crate::error::ToolError;
use crate::types::ToolDefinition;

/// Tool for sending a command line to a tmux pane.
pub struct SendCommandTool {
    pub tmux: TmuxContext,
}

#[derive(Deserialize)]
struct Args {
    target: Option<String>,
    command: String,
    /// `None` (absent or null) presses Enter.
    enter: Option<bool>,
}

fn send_keys_args(target: Option<&str>, command: &str, enter: bool) -> Vec<String> {
    let mut args = vec!["send-keys".to_string()];
    if let Some(target) = target {
        args.push("-t".into());
        args.push(target.into());
    }
    args.push(command.into());
    if enter {
        args.push("Enter".into());
    }
    args
}

#[async_trait]
impl Tool for SendCommandTool {
    fn name(&self) -> &'static str {
        ToolName::SendCommand.as_str()
    }

    fn definition(&self) -> ToolDefinition {
        catalog_definition(
            ToolName::SendCommand,
            serde_json::json!({
                "type": "object",
                "properties": {
                    "target": {
                        "type": "string",
                        "description": "Target pane (default: current pane)"
                    },
                    "command": {
                        "type": "string",
                        "description": "Command to execute"
                    },
                    "enter": {
                        "type": "boolean",
                        "default": true,
                        "description": "Press Enter after command (default: true)"
                    }
                },
                "required": ["command"]
            }),
        )
    }

    async fn execute(&self, arguments: Map<String, Value>) -> Result<String, ToolError> {
        let args: Args = parse_args(arguments)?;
        let target = non_empty(args.target);
        let enter = args.enter.unwrap_or(true);
        self.tmux.ensure_available()?;
        self.tmux
            .invoke(&send_keys_args(target.as_deref(), &args.command, enter))
            .await
            .map_err(|failure| failure.into_tool_error("send command"))?;
        Ok(match target {
            Some(target) => format!("Command sent to pane {target}: {}", args.command),
            None => format!("Command sent to pane: {}", args.command),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testsupport::{args, RecordingTmux};
    use crate::tools::execution::ExecOutput;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[tokio::test]
    async fn enter_defaults_to_true() {
        let fake = RecordingTmux::new();
        let tool = SendCommandTool {
            tmux: fake.context(),
        };
        let out = tool.execute(object(json!({ "command": "ls" }))).await.unwrap();
        assert_eq!(out, "Command sent to pane: ls");
        assert_eq!(fake.only_call(), args(&["send-keys", "ls", "Enter"]));
    }

    #[tokio::test]
    async fn enter_false_sends_text_only() {
        let fake = RecordingTmux::new();
        let tool = SendCommandTool {
            tmux: fake.context(),
        };
        tool.execute(object(json!({ "command": "ls", "enter": false })))
            .await
            .unwrap();
        assert_eq!(fake.only_call(), args(&["send-keys", "ls"]));
    }

    #[tokio::test]
    async fn null_enter_means_default() {
        let fake = RecordingTmux::new();
        let registry = crate::tools::ToolRegistry::tmux(fake.context()).unwrap();
        let out = registry
            .execute("send_command", Some(json!({ "command": "ls", "enter": null })))
            .await
            .unwrap();
        assert_eq!(out, "Command sent to pane: ls");
        assert_eq!(fake.only_call(), args(&["send-keys", "ls", "Enter"]));
    }

    #[tokio::test]
    async fn target_is_passed_and_echoed() {
        let fake = RecordingTmux::new();
        let tool = SendCommandTool {
            tmux: fake.context(),
        };
        let out = tool
            .execute(object(json!({ "command": "make test", "target": "%4" })))
            .await
            .unwrap();
        assert_eq!(out, "Command sent to pane %4: make test");
        assert_eq!(
            fake.only_call(),
            args(&["send-keys", "-t", "%4", "make test", "Enter"])
        );
    }

    #[tokio::test]
    async fn failure_is_wrapped() {
        let fake = RecordingTmux::with_outputs(vec![ExecOutput::failed("can't find pane: %4")]);
        let tool = SendCommandTool {
            tmux: fake.context(),
        };
        let err = tool
            .execute(object(json!({ "command": "ls", "target": "%4" })))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Failed to send command: can't find pane: %4");
    }
}
