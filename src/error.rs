//! Unified error types for the tool server.

use std::fmt;

// ---------------------------------------------------------------------------
// ToolError
// ---------------------------------------------------------------------------

/// Errors arising from tool dispatch and execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolError {
    /// The tmux binary could not be located; nothing was spawned.
    Unavailable(String),
    /// The arguments payload was not a JSON object.
    InvalidArguments(String),
    /// One field failed its declared input shape.
    InvalidArgument { field: String, message: String },
    /// No handler is registered under this name.
    UnknownTool(String),
    /// The tmux invocation ran and failed. Already carries the
    /// `Failed to <op>:` prefix.
    ExecutionFailed(String),
}

impl ToolError {
    pub fn invalid_argument(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            field: field.into(),
            message: message.into(),
        }
    }

    /// True for errors raised before any tmux process could run.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidArguments(_) | Self::InvalidArgument { .. })
    }
}

impl fmt::Display for ToolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable(msg) => write!(f, "{msg}"),
            Self::InvalidArguments(msg) => write!(f, "invalid arguments: {msg}"),
            Self::InvalidArgument { field, message } => {
                write!(f, "invalid argument `{field}`: {message}")
            }
            Self::UnknownTool(name) => write!(f, "unknown tool: {name}"),
            Self::ExecutionFailed(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for ToolError {}

// ---------------------------------------------------------------------------
// RegistryError
// ---------------------------------------------------------------------------

/// Errors from building the tool registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Two handlers claimed the same tool name.
    Duplicate(String),
    /// A catalog name has no handler.
    MissingHandler(String),
    /// A handler was registered for a name outside the catalog.
    UndeclaredHandler(String),
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Duplicate(name) => write!(f, "tool `{name}` registered twice"),
            Self::MissingHandler(name) => write!(f, "tool `{name}` is declared but has no handler"),
            Self::UndeclaredHandler(name) => {
                write!(f, "handler `{name}` has no matching tool declaration")
            }
        }
    }
}

impl std::error::Error for RegistryError {}

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Errors when loading or parsing configuration.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Toml(toml::de::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {e}"),
            Self::Toml(e) => write!(f, "toml: {e}"),
            Self::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Toml(e)
    }
}

// ---------------------------------------------------------------------------
// ServerError
// ---------------------------------------------------------------------------

/// Top-level error type for the stdio server and CLI.
#[derive(Debug)]
pub enum ServerError {
    Config(ConfigError),
    Registry(RegistryError),
    Tool(ToolError),
    /// Reading requests or writing responses failed.
    Io(std::io::Error),
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Registry(e) => write!(f, "registry: {e}"),
            Self::Tool(e) => write!(f, "tool: {e}"),
            Self::Io(e) => write!(f, "io: {e}"),
        }
    }
}

impl std::error::Error for ServerError {}

impl From<ConfigError> for ServerError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<RegistryError> for ServerError {
    fn from(e: RegistryError) -> Self {
        Self::Registry(e)
    }
}

impl From<ToolError> for ServerError {
    fn from(e: ToolError) -> Self {
        Self::Tool(e)
    }
}

impl From<std::io::Error> for ServerError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
