use thiserror::Error;

use crate::state::{OverlayKind, Route};

/// A broken navigation contract. These signal a bug in the store or a caller
/// bypassing it, never a recoverable runtime condition.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    #[error("composite route {0:?} stored as the current route")]
    CompositeRoute(Route),
    #[error("return route {route:?} kept while overlay is {overlay:?}")]
    DanglingReturnRoute { route: Route, overlay: OverlayKind },
}
