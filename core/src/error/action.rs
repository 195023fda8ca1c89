use thiserror::Error;

/// Errors produced while turning a textual action (`detail:7`, `hide`, ...)
/// into a [`crate::state::NavAction`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ActionParseError {
    #[error("empty action")]
    Empty,
    #[error("unknown action {0:?}")]
    UnknownAction(String),
    #[error("unknown overlay {0:?}")]
    UnknownOverlay(String),
    #[error("action {action:?} requires a payload")]
    MissingPayload { action: String },
    #[error("action {action:?} does not take a payload")]
    UnexpectedPayload { action: String },
}
