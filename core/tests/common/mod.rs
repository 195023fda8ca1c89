use std::sync::{Arc, Mutex};

use navstate_core::api::{NavAction, NavEvent, NavigationStore, OverlayKind, Route};
use proptest::prelude::*;

/// Collect every event the store delivers to synchronous observers.
pub fn record_events(store: &NavigationStore) -> Arc<Mutex<Vec<NavEvent>>> {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    store.subscribe(move |event| sink.lock().unwrap().push(event.clone()));
    seen
}

pub fn any_route() -> impl Strategy<Value = Route> {
    prop_oneof![3 => plain_route(), 1 => composite_route()]
}

fn plain_route() -> impl Strategy<Value = Route> {
    let id = "[a-z0-9]{0,4}";
    prop_oneof![
        Just(Route::Home),
        Just(Route::Search),
        Just(Route::Favorites),
        Just(Route::Profile),
        Just(Route::Settings),
        id.prop_map(|id| Route::Detail { id }),
        id.prop_map(|id| Route::FavoriteItem { id }),
        id.prop_map(|query| Route::SearchResults { query }),
    ]
}

fn composite_route() -> impl Strategy<Value = Route> {
    let id = "[a-z0-9]{0,4}";
    prop_oneof![
        Just(Route::ProfileWithSettings),
        id.prop_map(|id| Route::FavoriteItemWithSettings { id }),
        id.prop_map(|id| Route::DetailWithFilter { id }),
    ]
}

pub fn any_overlay() -> impl Strategy<Value = OverlayKind> {
    prop_oneof![
        Just(OverlayKind::None),
        Just(OverlayKind::Settings),
        Just(OverlayKind::Filter),
        Just(OverlayKind::Notification),
        "[a-z0-9]{0,4}".prop_map(|item_id| OverlayKind::ItemSettings { item_id }),
    ]
}

pub fn any_action() -> impl Strategy<Value = NavAction> {
    prop_oneof![
        4 => any_route().prop_map(|route| NavAction::Navigate { route }),
        2 => any_overlay().prop_map(|kind| NavAction::ShowOverlay { kind }),
        3 => Just(NavAction::HideOverlay),
        1 => Just(NavAction::GoHome),
        1 => Just(NavAction::GoProfile),
        1 => Just(NavAction::GoSettings),
    ]
}
