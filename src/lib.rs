//! tmux session, window and pane tools for agents.
//!
//! The crate exposes a fixed catalog of seven tools (list sessions, windows
//! and panes; split, kill and select panes; send a command) behind a
//! [`tools::ToolRegistry`], and a line-delimited JSON-RPC server that
//! answers MCP `tools/list` and `tools/call` on stdio.
//!
//! # Quick start
//!
//! ```no_run
//! use tmux_mcp::tools::execution::TmuxContext;
//! use tmux_mcp::tools::ToolRegistry;
//!
//! # async fn example() {
//! let registry = ToolRegistry::tmux(TmuxContext::local("tmux", None)).unwrap();
//! let sessions = registry.execute("list_sessions", None).await.unwrap();
//! println!("{sessions}");
//! # }
//! ```

pub mod config;
pub mod error;
pub mod server;
#[cfg(test)]
pub mod testsupport;
pub mod tools;
pub mod types;
