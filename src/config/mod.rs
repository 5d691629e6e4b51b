//! Configuration loading.
//!
//! Precedence, highest first: CLI flags (applied by the binary), `TMUX_MCP_*`
//! environment variables, the config file, built-in defaults.
//!
//! ```toml
//! [tmux]
//! binary = "tmux"
//! socket = "/tmp/agent.sock"   # optional, passed as `tmux -S`
//!
//! [server]
//! name = "tmux-mcp"
//!
//! [logging]
//! filter = "info"
//! ```

mod defaults;
mod env;
mod loader;
mod sources;

use serde::Deserialize;

use crate::error::ConfigError;
use defaults::{DEFAULT_LOG_FILTER, DEFAULT_SERVER_NAME, DEFAULT_TMUX_BINARY};

pub use loader::{load_config, load_config_with_source};
pub use sources::{default_global_config_path, ConfigSource};

/// Top-level runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub tmux: TmuxConfig,
    pub server: ServerConfig,
    pub logging: LoggingConfig,
}

/// How the external tmux binary is reached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TmuxConfig {
    /// Binary name looked up on `PATH`, or an explicit path.
    pub binary: String,
    /// Server socket path passed as `-S`; `None` uses tmux's default server.
    pub socket: Option<String>,
}

/// Identity reported in the `initialize` handshake.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// `tracing-subscriber` env-filter directive used when `RUST_LOG` is unset.
    pub filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tmux: TmuxConfig {
                binary: DEFAULT_TMUX_BINARY.into(),
                socket: None,
            },
            server: ServerConfig {
                name: DEFAULT_SERVER_NAME.into(),
                version: env!("CARGO_PKG_VERSION").into(),
            },
            logging: LoggingConfig {
                filter: DEFAULT_LOG_FILTER.into(),
            },
        }
    }
}

impl Config {
    /// Reject values that would make every tool call fail.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tmux.binary.trim().is_empty() {
            return Err(ConfigError::Invalid("tmux.binary cannot be empty".into()));
        }
        if self
            .tmux
            .socket
            .as_ref()
            .is_some_and(|socket| socket.trim().is_empty())
        {
            return Err(ConfigError::Invalid("tmux.socket cannot be empty".into()));
        }
        if self.server.name.trim().is_empty() {
            return Err(ConfigError::Invalid("server.name cannot be empty".into()));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// On-disk shape
// ---------------------------------------------------------------------------

/// Raw TOML file shape; every field optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FileConfig {
    tmux: FileTmuxConfig,
    server: FileServerConfig,
    logging: FileLoggingConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FileTmuxConfig {
    binary: Option<String>,
    socket: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FileServerConfig {
    name: Option<String>,
    version: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FileLoggingConfig {
    filter: Option<String>,
}

impl FileConfig {
    fn resolve(self) -> Config {
        let mut config = Config::default();
        if let Some(binary) = self.tmux.binary {
            config.tmux.binary = binary;
        }
        config.tmux.socket = self.tmux.socket;
        if let Some(name) = self.server.name {
            config.server.name = name;
        }
        if let Some(version) = self.server.version {
            config.server.version = version;
        }
        if let Some(filter) = self.logging.filter {
            config.logging.filter = filter;
        }
        config
    }
}
