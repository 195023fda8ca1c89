pub mod load;
pub mod types;

pub use load::{
    apply_env_overrides, fill_default_log_dir, get_navstate_data_dir, load_default, load_from_path,
};
pub use types::{AppConfig, LoggingConfig, NavigationConfig};
