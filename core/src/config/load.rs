use std::path::{Path, PathBuf};

use super::types::AppConfig;
use crate::error::ConfigError;

pub const ENV_LOG_LEVEL: &str = "NAVSTATE_LOG_LEVEL";
pub const ENV_EVENT_CAPACITY: &str = "NAVSTATE_EVENT_CAPACITY";

/// Get the default navstate data directory: ~/.navstate
pub fn get_navstate_data_dir() -> Result<PathBuf, ConfigError> {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .map_err(|_| ConfigError::HomeDir)?;
    Ok(PathBuf::from(home).join(".navstate"))
}

pub fn load_default() -> Result<AppConfig, ConfigError> {
    let navstate_dir = get_navstate_data_dir()?;

    // Priority 1: ~/.navstate/config.toml (highest)
    let user_config = navstate_dir.join("config.toml");

    // Priority 2: ./config.toml (current directory)
    let local_config = Path::new("config.toml");

    let mut cfg = if user_config.exists() {
        read_config(&user_config)?
    } else if local_config.exists() {
        read_config(local_config)?
    } else {
        AppConfig::default()
    };

    fill_default_log_dir(&mut cfg, &navstate_dir);

    // Environment variable overrides (Priority 0: highest)
    apply_env_overrides(&mut cfg, |key| std::env::var(key).ok())?;
    Ok(cfg)
}

/// Load an explicit config file; environment overrides still apply.
pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<AppConfig, ConfigError> {
    let mut cfg = read_config(path.as_ref())?;
    if let Ok(navstate_dir) = get_navstate_data_dir() {
        fill_default_log_dir(&mut cfg, &navstate_dir);
    }
    apply_env_overrides(&mut cfg, |key| std::env::var(key).ok())?;
    Ok(cfg)
}

/// Point an unset or blank `logging.directory` at `<navstate_dir>/logs`.
/// The directory itself is created by whoever opens the log file.
pub fn fill_default_log_dir(cfg: &mut AppConfig, navstate_dir: &Path) {
    let unset = cfg
        .logging
        .directory
        .as_deref()
        .map(|s| s.trim().is_empty())
        .unwrap_or(true);

    if unset {
        let logs_dir = navstate_dir.join("logs");
        cfg.logging.directory = Some(logs_dir.to_string_lossy().to_string());
    }
}

fn read_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let s = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str::<AppConfig>(&s).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Blank values are ignored.
pub fn apply_env_overrides<F>(cfg: &mut AppConfig, lookup: F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(v) = lookup(ENV_LOG_LEVEL) {
        if !v.trim().is_empty() {
            cfg.logging.level = v.trim().to_string();
        }
    }

    if let Some(v) = lookup(ENV_EVENT_CAPACITY) {
        if !v.trim().is_empty() {
            cfg.navigation.event_channel_capacity = v
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or(ConfigError::InvalidOverride {
                    key: ENV_EVENT_CAPACITY,
                    value: v,
                })?;
        }
    }

    Ok(())
}
