//! Shared execution data structures.

/// Raw process output for one tmux invocation.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ExecOutput {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl ExecOutput {
    /// Successful output carrying `stdout`.
    pub fn ok(stdout: impl Into<String>) -> Self {
        Self {
            exit_code: 0,
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    /// Failed output with exit code 1 and `stderr`.
    pub fn failed(stderr: impl Into<String>) -> Self {
        Self {
            exit_code: 1,
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }
}

/// Why a tmux invocation did not succeed, as human-readable cause text.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CommandFailure {
    pub cause: String,
}

impl CommandFailure {
    /// tmux reports this when no server socket is listening.
    ///
    /// The match is on tmux's wording, which this crate does not control.
    pub fn is_no_server_running(&self) -> bool {
        is_no_server_running(&self.cause)
    }
}

/// Substring match for tmux's "no server running" diagnostic.
pub fn is_no_server_running(cause: &str) -> bool {
    cause.contains("no server running")
}
