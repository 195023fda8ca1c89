//! Tab bar selection derived from the current route.

use serde::{Deserialize, Serialize};

use super::types::Route;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tab {
    Home,
    Search,
    Favorites,
    Profile,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Home, Tab::Search, Tab::Favorites, Tab::Profile];

    /// Tab that owns `route`. Settings is reached from the header, not the tab
    /// bar, so it highlights nothing.
    pub fn for_route(route: &Route) -> Option<Tab> {
        match route {
            Route::Home | Route::Detail { .. } | Route::DetailWithFilter { .. } => Some(Tab::Home),
            Route::Search | Route::SearchResults { .. } => Some(Tab::Search),
            Route::Favorites
            | Route::FavoriteItem { .. }
            | Route::FavoriteItemWithSettings { .. } => Some(Tab::Favorites),
            Route::Profile | Route::ProfileWithSettings => Some(Tab::Profile),
            Route::Settings => None,
        }
    }

    /// Route a tap on this tab navigates to.
    pub fn root_route(self) -> Route {
        match self {
            Tab::Home => Route::Home,
            Tab::Search => Route::Search,
            Tab::Favorites => Route::Favorites,
            Tab::Profile => Route::Profile,
        }
    }
}
