pub mod types;

pub use types::{Config, SETTINGS_SECTION, SettingValue, Settings};

use crate::error::{ConfigError, Result};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE_NAME: &str = ".cfn-lint-bridge.toml";

/// Get the global config file path (~/.cfn-lint-bridge.toml)
pub fn global_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(CONFIG_FILE_NAME))
}

/// Get the local config file path (project/.cfn-lint-bridge.toml)
pub fn local_config_path(project_path: &Path) -> PathBuf {
    project_path.join(CONFIG_FILE_NAME)
}

/// Load a configuration file, failing if it is missing or malformed.
pub fn load_config_file(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Err(ConfigError::NotFound(path.display().to_string()).into());
    }
    let content = fs::read_to_string(path)?;
    let config = toml::from_str(&content)
        .map_err(|e| ConfigError::ParsingFailed(format!("{}: {}", path.display(), e)))?;
    debug!("Loaded configuration from {}", path.display());
    Ok(config)
}

/// Load configuration from file or use defaults
/// Checks local config first, then global config
pub fn load_config(project_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = project_path {
        let local = local_config_path(path);
        if local.exists() {
            return load_config_file(&local);
        }
    }

    if let Some(global) = global_config_path()
        && global.exists()
    {
        return load_config_file(&global);
    }

    debug!("No configuration file found; using defaults");
    Ok(Config::default())
}

/// Resolve settings from an explicit file when given, otherwise by discovery.
pub fn resolve_settings(explicit: Option<&Path>, project_path: &Path) -> Result<Settings> {
    let config = match explicit {
        Some(path) => load_config_file(path)?,
        None => load_config(Some(project_path))?,
    };
    Ok(config.cfnlint)
}
