//! Stable re-exports for consumers (`cli` and embedding applications).
//!
//! Prefer importing from `navstate_core::api` instead of reaching into internal modules.

pub use crate::config::{
    load_default, load_from_path, AppConfig, LoggingConfig, NavigationConfig,
};
pub use crate::error::{ActionParseError, CliError, ConfigError, InvariantViolation};
pub use crate::state::{
    NavAction, NavEvent, NavigationSnapshot, NavigationStore, NavigationStoreHandle, OverlayKind,
    Route, SubscriptionId, Tab,
};
