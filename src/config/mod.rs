pub mod types;

use crate::error::ConfigError;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE_NAME: &str = ".podsec.toml";

/// Get the global config file path (~/.podsec.toml)
pub fn global_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(CONFIG_FILE_NAME))
}

/// Load configuration from file or use defaults
/// An explicit path must exist; the global file is optional
pub fn load_config(explicit: Option<&Path>) -> Result<types::Config, ConfigError> {
    if let Some(path) = explicit {
        return load_from(path);
    }

    if let Some(global) = global_config_path()
        && global.exists()
    {
        return load_from(&global);
    }

    log::debug!("No config file found, using defaults");
    Ok(types::Config::default())
}

/// Read and parse a single config file
pub fn load_from(path: &Path) -> Result<types::Config, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::ReadFailed {
        path: path.to_path_buf(),
        source,
    })?;
    let config = toml::from_str(&content).map_err(|source| ConfigError::ParsingFailed {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("Loaded config from {}", path.display());
    Ok(config)
}
