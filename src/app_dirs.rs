//! Locate the per-user configuration file.
//!
//! `TGSEARCH_CONFIG_DIR` wins when set and non-empty; otherwise the platform
//! location from the `directories` crate is used.

use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use directories::ProjectDirs;

const CONFIG_DIR_ENV: &str = "TGSEARCH_CONFIG_DIR";
const CONFIG_FILE_NAME: &str = "config.toml";

fn platform_config_dir() -> Result<PathBuf> {
    ProjectDirs::from("io", "tgsearch", "tgsearch")
        .map(|dirs| dirs.config_local_dir().to_path_buf())
        .ok_or_else(|| anyhow!("no home directory to place tgsearch configuration in"))
}

fn config_dir_from(override_dir: Option<OsString>) -> Result<PathBuf> {
    match override_dir {
        Some(dir) if !dir.is_empty() => Ok(PathBuf::from(dir)),
        _ => platform_config_dir(),
    }
}

/// Path of the user's configuration file. It does not have to exist.
pub fn config_file() -> Result<PathBuf> {
    Ok(config_dir_from(env::var_os(CONFIG_DIR_ENV))?.join(CONFIG_FILE_NAME))
}
