//! Composite route decomposition and the pure transition rules.

use crate::error::InvariantViolation;

use super::types::{NavigationSnapshot, OverlayKind, Route};

impl Route {
    /// True for the request-only variants that resolve to route + overlay.
    pub fn is_composite(&self) -> bool {
        matches!(
            self,
            Self::ProfileWithSettings
                | Self::FavoriteItemWithSettings { .. }
                | Self::DetailWithFilter { .. }
        )
    }

    /// Base route and overlay for a composite request, `None` for a plain route.
    ///
    /// This table is closed: adding a composite variant means adding its arm here.
    pub fn decompose(&self) -> Option<(Route, OverlayKind)> {
        match self {
            Self::ProfileWithSettings => Some((Route::Profile, OverlayKind::Settings)),
            Self::FavoriteItemWithSettings { id } => Some((
                Route::FavoriteItem { id: id.clone() },
                OverlayKind::ItemSettings {
                    item_id: id.clone(),
                },
            )),
            Self::DetailWithFilter { id } => {
                Some((Route::Detail { id: id.clone() }, OverlayKind::Filter))
            }
            Self::Home
            | Self::Search
            | Self::Favorites
            | Self::Profile
            | Self::Settings
            | Self::Detail { .. }
            | Self::FavoriteItem { .. }
            | Self::SearchResults { .. } => None,
        }
    }

    /// Short header label.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Search => "Search",
            Self::Favorites => "Favorites",
            Self::Profile | Self::ProfileWithSettings => "Profile",
            Self::Settings => "Settings",
            Self::Detail { .. } | Self::DetailWithFilter { .. } => "Details",
            Self::FavoriteItem { .. } | Self::FavoriteItemWithSettings { .. } => "Favorite",
            Self::SearchResults { .. } => "Results",
        }
    }
}

impl OverlayKind {
    pub fn title(&self) -> &'static str {
        match self {
            Self::None => "",
            Self::Settings => "Settings",
            Self::Filter => "Filter",
            Self::Notification => "Notifications",
            Self::ItemSettings { .. } => "Item settings",
        }
    }
}

/// Full machine state, including the hidden return slot.
///
/// Only the store holds one of these; consumers see [`NavigationSnapshot`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct NavigationState {
    pub(crate) current_route: Route,
    pub(crate) active_overlay: OverlayKind,
    pub(crate) pending_return_route: Option<Route>,
}

impl NavigationState {
    pub(crate) fn snapshot(&self) -> NavigationSnapshot {
        NavigationSnapshot {
            current_route: self.current_route.clone(),
            active_overlay: self.active_overlay.clone(),
        }
    }

    /// Composite requests remember the route in effect before the call;
    /// plain routes drop any remembered route and close the overlay.
    pub(crate) fn navigate(&mut self, route: Route) {
        match route.decompose() {
            Some((base, overlay)) => {
                let previous = std::mem::replace(&mut self.current_route, base);
                self.pending_return_route = Some(previous);
                self.active_overlay = overlay;
            }
            None => {
                self.pending_return_route = None;
                self.current_route = route;
                self.active_overlay = OverlayKind::None;
            }
        }
    }

    /// Replaces the active overlay. The route never moves; the return slot
    /// survives unless `kind` is `None`, which drops it without restoring.
    pub(crate) fn show_overlay(&mut self, kind: OverlayKind) {
        if kind.is_none() {
            self.pending_return_route = None;
        }
        self.active_overlay = kind;
    }

    /// Closes the overlay and returns the route restored from the return slot, if any.
    pub(crate) fn hide_overlay(&mut self) -> Option<Route> {
        self.active_overlay = OverlayKind::None;
        let restored = self.pending_return_route.take()?;
        self.current_route = restored.clone();
        Some(restored)
    }

    pub(crate) fn check_invariants(&self) -> Result<(), InvariantViolation> {
        self.snapshot().check_invariants()?;
        if let Some(route) = &self.pending_return_route {
            if self.active_overlay.is_none() {
                return Err(InvariantViolation::DanglingReturnRoute {
                    route: route.clone(),
                    overlay: self.active_overlay.clone(),
                });
            }
        }
        Ok(())
    }
}
