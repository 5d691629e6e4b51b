//! Environment overrides (`TMUX_MCP_*`).

use super::Config;

pub(super) const ENV_BINARY: &str = "TMUX_MCP_BINARY";
pub(super) const ENV_SOCKET: &str = "TMUX_MCP_SOCKET";
pub(super) const ENV_LOG: &str = "TMUX_MCP_LOG";

/// Apply environment overrides on top of file values.
pub(super) fn apply_env_overrides<FEnv>(config: &mut Config, env_lookup: &FEnv)
where
    FEnv: Fn(&str) -> Option<String>,
{
    if let Some(binary) = env_lookup(ENV_BINARY) {
        config.tmux.binary = binary;
    }
    if let Some(socket) = env_lookup(ENV_SOCKET) {
        config.tmux.socket = Some(socket);
    }
    if let Some(filter) = env_lookup(ENV_LOG) {
        config.logging.filter = filter;
    }
}
