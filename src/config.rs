//! Configuration loading
//!
//! Settings live in `~/.config/autocomp/config.toml`. A missing file means
//! defaults; a file that does not parse is an error the caller reports.

mod types;

pub use types::{AutocompleteConfig, Config, ListConfig};

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::AutocompError;

const CONFIG_DIR: &str = "autocomp";
const CONFIG_FILE: &str = "config.toml";

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

pub fn load_config() -> Result<Config, AutocompError> {
    match config_path() {
        Some(path) => load_config_from_path(&path),
        None => Ok(Config::default()),
    }
}

pub fn load_config_from_path(path: &Path) -> Result<Config, AutocompError> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Config::default()),
        Err(e) => return Err(e.into()),
    };
    parse_config(&contents)
}

pub fn parse_config(content: &str) -> Result<Config, AutocompError> {
    let config: Config =
        toml::from_str(content).map_err(|e| AutocompError::ConfigParse(e.to_string()))?;
    config.validate()?;
    Ok(config)
}

/// Load the config, falling back to defaults with a warning when it is unusable.
pub fn load_config_or_default(path: Option<&Path>) -> Config {
    let result = match path {
        Some(path) => load_config_from_path(path),
        None => load_config(),
    };
    result.unwrap_or_else(|e| {
        log::warn!("Using default configuration: {}", e);
        Config::default()
    })
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
