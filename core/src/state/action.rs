//! Value-level navigation intents.

use serde::{Deserialize, Serialize};

use super::types::{OverlayKind, Route};

/// One call into the store, as data. Lets event sources queue or log intents
/// and hand them to [`super::NavigationStore::dispatch`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum NavAction {
    Navigate { route: Route },
    ShowOverlay { kind: OverlayKind },
    HideOverlay,
    GoHome,
    GoProfile,
    GoSettings,
}

impl From<Route> for NavAction {
    fn from(route: Route) -> Self {
        Self::Navigate { route }
    }
}

impl From<OverlayKind> for NavAction {
    fn from(kind: OverlayKind) -> Self {
        Self::ShowOverlay { kind }
    }
}
