//! CLI argument parsing via clap.

use clap::{Parser, Subcommand};

/// tmux pane and session tools served over stdio.
#[derive(Debug, Parser)]
#[command(name = "tmux-mcp", version)]
pub struct Args {
    /// Path to config file (default: ./tmux-mcp.toml or ~/.config/tmux-mcp/tmux-mcp.toml).
    #[arg(short = 'c', long = "config")]
    pub config: Option<String>,

    /// Override the tmux binary.
    #[arg(long = "tmux-bin", value_name = "BIN")]
    pub tmux_bin: Option<String>,

    /// Talk to the tmux server on this socket (`tmux -S`).
    #[arg(short = 'S', long = "socket", value_name = "PATH")]
    pub socket: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand, PartialEq, Eq)]
pub enum Command {
    /// Serve the tool protocol on stdin/stdout (default).
    Serve,
    /// Print the tool catalog as JSON.
    Tools,
    /// Invoke one tool and print its text result.
    Call {
        /// Tool name, e.g. `list_panes`.
        tool: String,
        /// Arguments as a JSON object.
        #[arg(value_name = "ARGS_JSON")]
        args: Option<String>,
    },
}

impl Args {
    pub fn command(&self) -> &Command {
        self.command.as_ref().unwrap_or(&Command::Serve)
    }
}
