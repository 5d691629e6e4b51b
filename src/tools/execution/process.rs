//! Process execution helpers shared by tmux backends.

use std::process::Stdio;
use tokio::process::Command;

use super::types::{CommandFailure, ExecOutput};

/// Spawn and wait for a process, capturing stdout and stderr.
pub(super) async fn run_process(program: &str, args: &[String]) -> std::io::Result<ExecOutput> {
    let mut cmd = Command::new(program);
    // A dropped call future must not leave the child running.
    cmd.kill_on_drop(true);
    cmd.args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    let output = cmd.spawn()?.wait_with_output().await?;

    Ok(ExecOutput {
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    })
}

/// Turn a finished process into its text payload or a failure cause.
pub(super) fn into_payload(output: ExecOutput) -> Result<String, CommandFailure> {
    if output.exit_code == 0 {
        return Ok(strip_trailing_newline(output.stdout));
    }

    let mut cause = if output.stderr.trim().is_empty() {
        output.stdout.trim().to_string()
    } else {
        output.stderr.trim().to_string()
    };
    if cause.is_empty() {
        cause = format!("command exited with {}", output.exit_code);
    }
    Err(CommandFailure { cause })
}

/// Drop exactly one trailing newline (`\n` or `\r\n`).
pub(super) fn strip_trailing_newline(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    text
}
