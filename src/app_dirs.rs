//! Platform directories for `tabview`.
//!
//! `TABVIEW_CONFIG_DIR` and `TABVIEW_DATA_DIR` take precedence over the
//! locations reported by the `directories` crate.

use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};
use directories::ProjectDirs;

const CONFIG_DIR_ENV: &str = "TABVIEW_CONFIG_DIR";
const DATA_DIR_ENV: &str = "TABVIEW_DATA_DIR";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Directory holding `config.toml`.
pub fn get_config_dir() -> Result<PathBuf> {
    resolve(CONFIG_DIR_ENV, ProjectDirs::config_local_dir)
}

/// Directory for the log file and other runtime output.
pub fn get_data_dir() -> Result<PathBuf> {
    resolve(DATA_DIR_ENV, ProjectDirs::data_local_dir)
}

/// The per-user configuration file, whether or not it exists yet.
pub fn config_file() -> Result<PathBuf> {
    Ok(get_config_dir()?.join(CONFIG_FILE_NAME))
}

fn resolve(env_var: &str, platform: fn(&ProjectDirs) -> &Path) -> Result<PathBuf> {
    if let Some(dir) = env::var_os(env_var).filter(|value| !value.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    let dirs = ProjectDirs::from("io", "tabview", "tabview")
        .ok_or_else(|| anyhow!("unable to determine project directories for tabview"))?;
    Ok(platform(&dirs).to_path_buf())
}
