//! Shared test fixtures for execution, tool, and server test modules.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::tools::execution::{ExecOutput, TmuxBackend, TmuxContext};

static TEST_DIR_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Temporary directory fixture with best-effort cleanup.
#[derive(Debug)]
pub struct TestTempDir {
    path: PathBuf,
}

impl TestTempDir {
    /// Create a unique temporary directory with a readable prefix.
    pub fn new(prefix: &str) -> Self {
        let suffix = TEST_DIR_COUNTER.fetch_add(1, Ordering::Relaxed);
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();
        let dir = std::env::temp_dir().join(format!(
            "tmux-mcp-{prefix}-{}-{millis}-{suffix}",
            std::process::id()
        ));
        fs::create_dir_all(&dir).expect("failed to create temporary fixture directory");
        Self { path: dir }
    }

    /// Root directory path for this fixture.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Build a child path under the fixture root.
    pub fn child(&self, relative: &str) -> PathBuf {
        self.path.join(relative)
    }

    /// Write UTF-8 text to a child path, creating parent directories as needed.
    pub fn write_text(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.child(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create parent directories for fixture");
        }
        fs::write(&path, content).expect("failed to write fixture file");
        path
    }
}

impl Drop for TestTempDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

#[derive(Default)]
struct RecordingState {
    available: bool,
    outputs: VecDeque<Result<ExecOutput, String>>,
    calls: Vec<Vec<String>>,
}

/// tmux double that records every argument vector and replays scripted
/// outputs in order. Once the script runs out, calls succeed with no output.
#[derive(Clone)]
pub struct RecordingTmux {
    state: Arc<Mutex<RecordingState>>,
}

impl RecordingTmux {
    /// Available backend that answers every call with empty success.
    pub fn new() -> Self {
        Self::with_outputs(Vec::new())
    }

    /// Available backend replaying `outputs`.
    pub fn with_outputs(outputs: Vec<ExecOutput>) -> Self {
        Self {
            state: Arc::new(Mutex::new(RecordingState {
                available: true,
                outputs: outputs.into_iter().map(Ok).collect(),
                calls: Vec::new(),
            })),
        }
    }

    /// Backend whose binary is not installed.
    pub fn unavailable() -> Self {
        let fake = Self::new();
        fake.state.lock().unwrap().available = false;
        fake
    }

    /// Backend whose first spawn fails with an io error.
    pub fn spawn_error(message: &str) -> Self {
        let fake = Self::new();
        fake.state
            .lock()
            .unwrap()
            .outputs
            .push_back(Err(message.to_string()));
        fake
    }

    /// Execution context backed by this double.
    pub fn context(&self) -> TmuxContext {
        TmuxContext::from_backend(Arc::new(self.clone()))
    }

    /// Every argument vector passed to tmux so far.
    pub fn calls(&self) -> Vec<Vec<String>> {
        self.state.lock().unwrap().calls.clone()
    }

    /// The single recorded call, panicking if there were zero or several.
    pub fn only_call(&self) -> Vec<String> {
        let calls = self.calls();
        assert_eq!(calls.len(), 1, "expected exactly one tmux call, got {calls:?}");
        calls.into_iter().next().unwrap()
    }
}

#[async_trait]
impl TmuxBackend for RecordingTmux {
    fn summary(&self) -> String {
        "recording".into()
    }

    fn is_available(&self) -> bool {
        self.state.lock().unwrap().available
    }

    async fn run(&self, args: &[String]) -> std::io::Result<ExecOutput> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(args.to_vec());
        match state.outputs.pop_front() {
            Some(Ok(output)) => Ok(output),
            Some(Err(message)) => Err(std::io::Error::other(message)),
            None => Ok(ExecOutput::ok("")),
        }
    }
}

/// Convert string literals into an owned argument vector.
pub fn args(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temp_dir_fixture_writes_and_resolves_paths() {
        let fixture = TestTempDir::new("fixture");
        let file = fixture.write_text("nested/file.txt", "hello");
        assert_eq!(fs::read_to_string(file).unwrap(), "hello");
        assert!(fixture.path().exists());
    }

    #[tokio::test]
    async fn recording_tmux_replays_then_defaults_to_empty_success() {
        let fake = RecordingTmux::with_outputs(vec![ExecOutput::failed("boom")]);
        let first = fake.run(&args(&["a"])).await.unwrap();
        let second = fake.run(&args(&["b"])).await.unwrap();
        assert_eq!(first.exit_code, 1);
        assert_eq!(second, ExecOutput::ok(""));
        assert_eq!(fake.calls(), vec![args(&["a"]), args(&["b"])]);
    }
}
