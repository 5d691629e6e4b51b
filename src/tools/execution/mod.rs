//! Shared tmux execution context for tools.
//!
//! Every tool call goes through `TmuxContext`: it checks that the binary is
//! reachable, spawns exactly one tmux process, and reduces the result to a
//! text payload or a failure cause.

mod backend;
mod contracts;
mod locate;
mod process;
mod types;

use crate::error::ToolError;
use backend::local::LocalTmux;
use process::into_payload;
use std::sync::Arc;
use tracing::{debug, warn};

pub use contracts::TmuxBackend;
pub use types::{is_no_server_running, CommandFailure, ExecOutput};

/// Message reported when the tmux binary cannot be located.
pub const TMUX_UNAVAILABLE: &str = "tmux is not installed or not in PATH";

/// tmux execution backend shared across tool instances.
#[derive(Clone)]
pub struct TmuxContext {
    inner: Arc<dyn TmuxBackend>,
}

impl TmuxContext {
    /// Spawn `binary` from this machine, optionally against a specific server
    /// socket (`tmux -S <socket>`).
    pub fn local(binary: impl Into<String>, socket: Option<String>) -> Self {
        Self {
            inner: Arc::new(LocalTmux {
                binary: binary.into(),
                socket,
            }),
        }
    }

    /// Wrap a custom backend.
    pub fn from_backend(backend: Arc<dyn TmuxBackend>) -> Self {
        Self { inner: backend }
    }

    /// Human-readable backend summary.
    pub fn summary(&self) -> String {
        self.inner.summary()
    }

    /// Fail fast when tmux cannot be reached. Re-evaluated on every call.
    pub fn ensure_available(&self) -> Result<(), ToolError> {
        if self.inner.is_available() {
            Ok(())
        } else {
            warn!(backend = %self.inner.summary(), "tmux binary not found");
            Err(ToolError::Unavailable(TMUX_UNAVAILABLE.into()))
        }
    }

    /// Run tmux once and return trimmed stdout, or why it failed.
    pub async fn invoke(&self, args: &[String]) -> Result<String, CommandFailure> {
        debug!(?args, "running tmux");
        let output = self.inner.run(args).await.map_err(|e| CommandFailure {
            cause: format!("tmux: {e}"),
        })?;
        let exit_code = output.exit_code;
        into_payload(output).inspect_err(|failure| {
            debug!(exit_code, cause = %failure.cause, "tmux command failed");
        })
    }
}

impl CommandFailure {
    /// Wrap as an operation failure: `Failed to <operation>: <cause>`.
    pub fn into_tool_error(self, operation: &str) -> ToolError {
        ToolError::ExecutionFailed(format!("Failed to {operation}: {}", self.cause))
    }
}
