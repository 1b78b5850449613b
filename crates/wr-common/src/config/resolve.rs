//! Configuration resolution and path discovery.
//!
//! Resolution order: CLI argument → environment variables → XDG paths → defaults.

use std::path::{Path, PathBuf};

/// Where a configuration file was found.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConfigSource {
    /// Explicitly provided via CLI argument.
    CliArgument,

    /// Set via environment variable.
    Environment,

    /// Found in XDG config directory.
    XdgConfig,

    /// Using built-in defaults.
    #[default]
    BuiltinDefault,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigSource::CliArgument => write!(f, "CLI argument"),
            ConfigSource::Environment => write!(f, "environment variable"),
            ConfigSource::XdgConfig => write!(f, "XDG config"),
            ConfigSource::BuiltinDefault => write!(f, "builtin default"),
        }
    }
}

/// Environment variable naming the parameters file directly.
pub const ENV_PARAMETERS_PATH: &str = "WEATHER_REPORT_PARAMETERS";
/// Environment variable naming the configuration directory.
pub const ENV_CONFIG_DIR: &str = "WEATHER_REPORT_CONFIG_DIR";

/// Standard parameters file name.
pub const PARAMETERS_FILENAME: &str = "parameters.json";

/// Application name for XDG directories.
const APP_NAME: &str = "weather-report";

/// Resolve the gateway parameters file.
///
/// Resolution order:
/// 1. Explicit CLI path (used even if missing, so the load reports the error)
/// 2. `WEATHER_REPORT_PARAMETERS`
/// 3. `WEATHER_REPORT_CONFIG_DIR` + `parameters.json`
/// 4. XDG config directory (`~/.config/weather-report/parameters.json`)
/// 5. Built-in defaults (None)
pub fn resolve_parameters_path(cli_path: Option<&Path>) -> (Option<PathBuf>, ConfigSource) {
    if let Some(path) = cli_path {
        return (Some(path.to_path_buf()), ConfigSource::CliArgument);
    }

    if let Ok(env_path) = std::env::var(ENV_PARAMETERS_PATH) {
        let path = PathBuf::from(env_path);
        if path.exists() {
            return (Some(path), ConfigSource::Environment);
        }
    }

    if let Ok(config_dir) = std::env::var(ENV_CONFIG_DIR) {
        let path = PathBuf::from(config_dir).join(PARAMETERS_FILENAME);
        if path.exists() {
            return (Some(path), ConfigSource::Environment);
        }
    }

    if let Some(dir) = xdg_config_dir() {
        let path = dir.join(PARAMETERS_FILENAME);
        if path.exists() {
            return (Some(path), ConfigSource::XdgConfig);
        }
    }

    (None, ConfigSource::BuiltinDefault)
}

/// Get the XDG config directory for weather-report.
pub fn xdg_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(APP_NAME))
}
