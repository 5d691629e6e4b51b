//! Read-only tmux listing tools: sessions, windows, panes.
//!
//! Each listing runs one `tmux list-*` query with a fixed `-F` row format.
//! A successful query with no rows answers with an informational string
//! instead of empty text.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Map, Value};

use super::catalog::ToolName;
use super::execution::TmuxContext;
use super::{catalog_definition, non_empty, parse_args, Tool};
use crate::error::ToolError;
use crate::types::ToolDefinition;

const SESSION_FORMAT: &str =
    "#{session_name}: #{session_windows} windows (created #{session_created_string})";
const WINDOW_FORMAT: &str = "#{window_index}: #{window_name} (#{window_panes} panes)";
const PANE_FORMAT: &str =
    "#{pane_id} (#{pane_index}): #{pane_current_command} [#{pane_width}x#{pane_height}]";
/// Appended to pane rows when no target narrows the listing.
const PANE_LOCATION_SUFFIX: &str = " in #{session_name}:#{window_index}";

pub const NO_SERVER_RUNNING: &str = "No tmux server running";
pub const NO_SESSIONS: &str = "No tmux sessions found";
pub const NO_WINDOWS: &str = "No windows found";
pub const NO_PANES: &str = "No panes found";

fn or_empty_message(rows: String, empty: &str) -> String {
    if rows.is_empty() {
        empty.to_string()
    } else {
        rows
    }
}

// ---------------------------------------------------------------------------
// list_sessions
// ---------------------------------------------------------------------------

/// Tool: list every session on the tmux server.
pub struct ListSessionsTool {
    pub tmux: TmuxContext,
}

fn list_sessions_args() -> Vec<String> {
    vec!["list-sessions".into(), "-F".into(), SESSION_FORMAT.into()]
}

#[async_trait]
impl Tool for ListSessionsTool {
    fn name(&self) -> &'static str {
        ToolName::ListSessions.as_str()
    }

    fn definition(&self) -> ToolDefinition {
        catalog_definition(
            ToolName::ListSessions,
            serde_json::json!({
                "type": "object",
                "properties": {}
            }),
        )
    }

    async fn execute(&self, _arguments: Map<String, Value>) -> Result<String, ToolError> {
        self.tmux.ensure_available()?;
        match self.tmux.invoke(&list_sessions_args()).await {
            Ok(rows) => Ok(or_empty_message(rows, NO_SESSIONS)),
            // No server is an expected empty state, not a failure.
            Err(failure) if failure.is_no_server_running() => Ok(NO_SERVER_RUNNING.into()),
            Err(failure) => Err(failure.into_tool_error("list sessions")),
        }
    }
}

// ---------------------------------------------------------------------------
// list_windows
// ---------------------------------------------------------------------------

/// Tool: list windows of one session (default: the current session).
pub struct ListWindowsTool {
    pub tmux: TmuxContext,
}

#[derive(Deserialize)]
struct ListWindowsArgs {
    session: Option<String>,
}

fn list_windows_args(session: Option<&str>) -> Vec<String> {
    let mut args = vec!["list-windows".to_string()];
    if let Some(session) = session {
        args.push("-t".into());
        args.push(session.into());
    }
    args.push("-F".into());
    args.push(WINDOW_FORMAT.into());
    args
}

#[async_trait]
impl Tool for ListWindowsTool {
    fn name(&self) -> &'static str {
        ToolName::ListWindows.as_str()
    }

    fn definition(&self) -> ToolDefinition {
        catalog_definition(
            ToolName::ListWindows,
            serde_json::json!({
                "type": "object",
                "properties": {
                    "session": {
                        "type": "string",
                        "description": "Session name (default: current session)"
                    }
                }
            }),
        )
    }

    async fn execute(&self, arguments: Map<String, Value>) -> Result<String, ToolError> {
        let args: ListWindowsArgs = parse_args(arguments)?;
        let session = non_empty(args.session);
        self.tmux.ensure_available()?;
        let rows = self
            .tmux
            .invoke(&list_windows_args(session.as_deref()))
            .await
            .map_err(|failure| failure.into_tool_error("list windows"))?;
        Ok(or_empty_message(rows, NO_WINDOWS))
    }
}

// ---------------------------------------------------------------------------
// list_panes
// ---------------------------------------------------------------------------

/// Tool: list panes of a window or session (default: the current window).
pub struct ListPanesTool {
    pub tmux: TmuxContext,
}

#[derive(Deserialize)]
struct ListPanesArgs {
    target: Option<String>,
}

fn list_panes_args(target: Option<&str>) -> Vec<String> {
    let mut args = vec!["list-panes".to_string()];
    let format = match target {
        Some(target) => {
            args.push("-t".into());
            args.push(target.into());
            PANE_FORMAT.to_string()
        }
        // Without a target the rows need their owning session and window.
        None => format!("{PANE_FORMAT}{PANE_LOCATION_SUFFIX}"),
    };
    args.push("-F".into());
    args.push(format);
    args
}

#[async_trait]
impl Tool for ListPanesTool {
    fn name(&self) -> &'static str {
        ToolName::ListPanes.as_str()
    }

    fn definition(&self) -> ToolDefinition {
        catalog_definition(
            ToolName::ListPanes,
            serde_json::json!({
                "type": "object",
                "properties": {
                    "target": {
                        "type": "string",
                        "description": "Target session:window (default: current)"
                    }
                }
            }),
        )
    }

    async fn execute(&self, arguments: Map<String, Value>) -> Result<String, ToolError> {
        let args: ListPanesArgs = parse_args(arguments)?;
        let target = non_empty(args.target);
        self.tmux.ensure_available()?;
        let rows = self
            .tmux
            .invoke(&list_panes_args(target.as_deref()))
            .await
            .map_err(|failure| failure.into_tool_error("list panes"))?;
        Ok(or_empty_message(rows, NO_PANES))
    }
}
