//! Top-level config loading pipeline.

use std::path::{Path, PathBuf};

use crate::error::ConfigError;

use super::env::apply_env_overrides;
use super::sources::{default_global_config_path, read_config_text_with_sources, ConfigSource};
use super::{Config, FileConfig};

/// Load configuration from disk and environment.
///
/// `path_override` is an explicit config file path (from `--config`).
pub fn load_config(path_override: Option<&str>) -> Result<Config, ConfigError> {
    load_config_with_source(path_override).map(|(config, _)| config)
}

/// Like [`load_config`], also reporting which source the file text came from.
///
/// Loading runs before logging is set up, so callers log the source.
pub fn load_config_with_source(
    path_override: Option<&str>,
) -> Result<(Config, ConfigSource), ConfigError> {
    load_config_from_sources(
        path_override,
        |path| std::fs::read_to_string(path),
        |name| std::env::var(name).ok(),
        default_global_config_path,
    )
}

pub(super) fn load_config_from_sources<FRead, FEnv, FRoot>(
    path_override: Option<&str>,
    read_file: FRead,
    env_lookup: FEnv,
    global_path: FRoot,
) -> Result<(Config, ConfigSource), ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
    FEnv: Fn(&str) -> Option<String>,
    FRoot: Fn() -> Option<PathBuf>,
{
    let (text, source) = read_config_text_with_sources(path_override, &read_file, &global_path)?;
    let parsed: FileConfig = toml::from_str(&text)?;
    let mut config = parsed.resolve();
    apply_env_overrides(&mut config, &env_lookup);
    config.validate()?;
    Ok((config, source))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testsupport::TestTempDir;

    #[test]
    fn missing_files_yield_defaults() {
        let (config, source) = load_config_from_sources(
            None,
            |_| Err(std::io::Error::new(std::io::ErrorKind::NotFound, "missing")),
            |_| None,
            || None,
        )
        .unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(source, ConfigSource::BuiltInDefaults);
    }

    #[test]
    fn env_overrides_file_values() {
        let fixture = TestTempDir::new("config");
        let path = fixture.write_text("tmux-mcp.toml", "[tmux]\nsocket = \"/tmp/file.sock\"\n");
        let (config, source) = load_config_from_sources(
            Some(path.to_string_lossy().as_ref()),
            |p| std::fs::read_to_string(p),
            |name| (name == "TMUX_MCP_SOCKET").then(|| "/tmp/env.sock".to_string()),
            || None,
        )
        .unwrap();
        assert_eq!(config.tmux.socket.as_deref(), Some("/tmp/env.sock"));
        assert_eq!(source, ConfigSource::Explicit(path));
    }

    #[test]
    fn invalid_values_are_rejected_after_overrides() {
        let err = load_config_from_sources(
            None,
            |_| Ok("[tmux]\nbinary = \"tmux\"\n".to_string()),
            |name| (name == "TMUX_MCP_BINARY").then(String::new),
            || None,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)), "got: {err}");
    }

    #[test]
    fn malformed_toml_is_reported() {
        let err = load_config_from_sources(
            None,
            |_| Ok("[tmux\n".to_string()),
            |_| None,
            || None,
        )
        .unwrap_err();
        assert!(err.to_string().starts_with("toml:"), "got: {err}");
    }
}
