//! Default configuration constants.

/// tmux binary looked up on `PATH`.
pub(super) const DEFAULT_TMUX_BINARY: &str = "tmux";
/// Server name reported during `initialize`.
pub(super) const DEFAULT_SERVER_NAME: &str = "tmux-mcp";
/// Log filter when neither `RUST_LOG` nor config sets one.
pub(super) const DEFAULT_LOG_FILTER: &str = "info";
/// Local config file name, also used under the per-user config directory.
pub(super) const CONFIG_FILE_NAME: &str = "tmux-mcp.toml";
/// Directory under the platform config root.
pub(super) const CONFIG_DIR_NAME: &str = "tmux-mcp";
