//! Local tmux backend: spawns the configured binary on this machine.

use async_trait::async_trait;

use crate::tools::execution::contracts::TmuxBackend;
use crate::tools::execution::locate::can_resolve_command;
use crate::tools::execution::process::run_process;
use crate::tools::execution::types::ExecOutput;

/// Runs `<binary> [-S socket] <args...>` as a child process.
#[derive(Clone, Debug)]
pub(in crate::tools::execution) struct LocalTmux {
    pub(in crate::tools::execution) binary: String,
    pub(in crate::tools::execution) socket: Option<String>,
}

impl LocalTmux {
    /// Full argument vector including the global socket flag, if any.
    pub(in crate::tools::execution) fn command_args(&self, args: &[String]) -> Vec<String> {
        let mut full = Vec::with_capacity(args.len() + 2);
        if let Some(socket) = &self.socket {
            full.push("-S".to_string());
            full.push(socket.clone());
        }
        full.extend(args.iter().cloned());
        full
    }
}

#[async_trait]
impl TmuxBackend for LocalTmux {
    fn summary(&self) -> String {
        match &self.socket {
            Some(socket) => format!("local ({} -S {socket})", self.binary),
            None => format!("local ({})", self.binary),
        }
    }

    fn is_available(&self) -> bool {
        can_resolve_command(&self.binary)
    }

    async fn run(&self, args: &[String]) -> std::io::Result<ExecOutput> {
        run_process(&self.binary, &self.command_args(args)).await
    }
}
