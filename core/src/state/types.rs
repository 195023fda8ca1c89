//! Route, overlay and event types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::InvariantViolation;

use super::tabs::Tab;

/// Primary screen, or a composite request that resolves to one.
///
/// The three `*With*` variants are requests only: the store decomposes them
/// into a base route plus an overlay and never keeps them as the current route.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(tag = "route", rename_all = "snake_case")]
pub enum Route {
    #[default]
    Home,
    Search,
    Favorites,
    Profile,
    Settings,

    Detail { id: String },
    FavoriteItem { id: String },
    SearchResults { query: String },

    /// Profile with the settings overlay on top.
    ProfileWithSettings,
    /// Favorite item with its item settings overlay on top.
    FavoriteItemWithSettings { id: String },
    /// Detail screen with the filter overlay on top.
    DetailWithFilter { id: String },
}

/// What floats above the current route. Exactly one value is active;
/// `None` means nothing is shown.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(tag = "overlay", rename_all = "snake_case")]
pub enum OverlayKind {
    #[default]
    None,
    Settings,
    Filter,
    Notification,
    ItemSettings { item_id: String },
}

impl OverlayKind {
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

/// Consumer-facing view of the store: what to render right now.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NavigationSnapshot {
    pub current_route: Route,
    pub active_overlay: OverlayKind,
}

impl NavigationSnapshot {
    pub fn is_overlay_visible(&self) -> bool {
        !self.active_overlay.is_none()
    }

    /// Tab highlighted for the current route, if any.
    pub fn selected_tab(&self) -> Option<Tab> {
        Tab::for_route(&self.current_route)
    }

    /// Renderers call this before matching on `current_route`; a composite
    /// route here means the store contract was broken upstream.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        if self.current_route.is_composite() {
            return Err(InvariantViolation::CompositeRoute(
                self.current_route.clone(),
            ));
        }
        Ok(())
    }
}

/// Notification published after every committed mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum NavEvent {
    /// `navigate` committed. `requested` is the route as passed in, which
    /// may be composite; `snapshot.current_route` never is.
    Navigated {
        requested: Route,
        previous: NavigationSnapshot,
        snapshot: NavigationSnapshot,
        timestamp: DateTime<Utc>,
    },
    OverlayShown {
        kind: OverlayKind,
        snapshot: NavigationSnapshot,
        timestamp: DateTime<Utc>,
    },
    /// `restored_route` is set when closing the overlay rolled the route back.
    OverlayHidden {
        restored_route: Option<Route>,
        snapshot: NavigationSnapshot,
        timestamp: DateTime<Utc>,
    },
}

impl NavEvent {
    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            Self::Navigated { timestamp, .. } => *timestamp,
            Self::OverlayShown { timestamp, .. } => *timestamp,
            Self::OverlayHidden { timestamp, .. } => *timestamp,
        }
    }

    /// State committed by the mutation that produced this event.
    pub fn snapshot(&self) -> &NavigationSnapshot {
        match self {
            Self::Navigated { snapshot, .. }
            | Self::OverlayShown { snapshot, .. }
            | Self::OverlayHidden { snapshot, .. } => snapshot,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_json_shape() {
        let snapshot = NavigationSnapshot {
            current_route: Route::SearchResults {
                query: "tea".to_string(),
            },
            active_overlay: OverlayKind::ItemSettings {
                item_id: "5".to_string(),
            },
        };

        let value = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "current_route": { "route": "search_results", "query": "tea" },
                "active_overlay": { "overlay": "item_settings", "item_id": "5" },
            })
        );

        let restored: NavigationSnapshot = serde_json::from_value(value).unwrap();
        assert_eq!(restored, snapshot);
    }

    #[test]
    fn test_composite_snapshot_fails_check() {
        let snapshot = NavigationSnapshot {
            current_route: Route::ProfileWithSettings,
            active_overlay: OverlayKind::Settings,
        };
        assert_eq!(
            snapshot.check_invariants(),
            Err(InvariantViolation::CompositeRoute(Route::ProfileWithSettings))
        );
    }
}
