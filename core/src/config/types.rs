use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub navigation: NavigationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_logging_enabled")]
    pub enabled: bool,

    /// If true, log to stderr.
    #[serde(default = "default_logging_console")]
    pub console: bool,

    /// If true, log to a file under `directory`.
    #[serde(default = "default_logging_file")]
    pub file: bool,

    /// EnvFilter string, e.g. "info" or "navstate_core=debug".
    #[serde(default = "default_logging_level")]
    pub level: String,

    /// Directory for log files. The loaders default it to `~/.navstate/logs`.
    #[serde(default)]
    pub directory: Option<String>,
}

fn default_logging_enabled() -> bool {
    true
}

fn default_logging_console() -> bool {
    true
}

fn default_logging_file() -> bool {
    false
}

fn default_logging_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: default_logging_enabled(),
            console: default_logging_console(),
            file: default_logging_file(),
            level: default_logging_level(),
            directory: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigationConfig {
    /// Buffered events per `subscribe_events` receiver before it starts lagging.
    #[serde(default = "default_event_channel_capacity")]
    pub event_channel_capacity: usize,

    /// Re-check route/overlay invariants after every commit.
    #[serde(default = "default_check_invariants")]
    pub check_invariants: bool,
}

fn default_event_channel_capacity() -> usize {
    256
}

fn default_check_invariants() -> bool {
    true
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            event_channel_capacity: default_event_channel_capacity(),
            check_invariants: default_check_invariants(),
        }
    }
}
