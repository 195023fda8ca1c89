#[allow(clippy::module_inception)]
pub mod error;
pub mod action;
pub mod invariant;

pub use action::ActionParseError;
pub use error::{CliError, ConfigError};
pub use invariant::InvariantViolation;
