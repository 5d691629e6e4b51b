//! Backend contract used by `TmuxContext`.

use async_trait::async_trait;

use super::types::ExecOutput;

/// Where tmux commands actually run.
///
/// The production backend spawns the local binary; tests substitute a
/// recording double. Implementations hold no per-call state.
#[async_trait]
pub trait TmuxBackend: Send + Sync {
    /// Human-readable backend summary for logs.
    fn summary(&self) -> String;
    /// Whether the tmux binary can be reached right now. Checked on every call.
    fn is_available(&self) -> bool;
    /// Run tmux once with `args` (the verb first) and wait for it to exit.
    async fn run(&self, args: &[String]) -> std::io::Result<ExecOutput>;
}
