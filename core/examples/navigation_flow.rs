//! Navigation store walkthrough
//!
//! Wires a store the way an application root would: one store, a broadcast
//! listener for logging, and a synchronous observer standing in for the
//! renderer.

use anyhow::Result;
use navstate_core::api::{NavEvent, NavigationStore, OverlayKind, Route, Tab};
use tokio::sync::broadcast::error::RecvError;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let store = NavigationStore::new();
    let handle = store.handle();

    let mut event_rx = store.subscribe_events();
    let listener = tokio::spawn(async move {
        loop {
            match event_rx.recv().await {
                Ok(NavEvent::OverlayHidden {
                    restored_route: Some(route),
                    ..
                }) => println!("  <- returned to {:?}", route),
                Ok(_) => {}
                Err(RecvError::Lagged(n)) => println!("  (missed {n} events)"),
                Err(RecvError::Closed) => break,
            }
        }
    });

    // "renderer": re-draw on every committed change
    store.subscribe(|event| {
        let state = event.snapshot();
        if let Err(violation) = state.check_invariants() {
            panic!("refusing to render: {violation}");
        }
        let overlay = if state.is_overlay_visible() {
            format!(" + [{}]", state.active_overlay.title())
        } else {
            String::new()
        };
        let tab = state
            .selected_tab()
            .map(|t| format!("{t:?}"))
            .unwrap_or_else(|| "-".to_string());
        println!("render: {}{} (tab {})", state.current_route.title(), overlay, tab);
    });

    println!("[1] tab bar: Search");
    handle.select_tab(Tab::Search);

    println!("[2] search results");
    handle.navigate(Route::SearchResults {
        query: "coffee".to_string(),
    });

    println!("[3] favorite #5 with its settings");
    handle.navigate(Route::FavoriteItemWithSettings {
        id: "5".to_string(),
    });

    println!("[4] close overlay");
    handle.hide_overlay();

    println!("[5] detail #7, then the filter on its own");
    handle.navigate(Route::Detail { id: "7".to_string() });
    handle.show_overlay(OverlayKind::Filter);
    handle.hide_overlay();

    println!("[6] header: settings");
    handle.go_settings();

    drop(handle);
    drop(store);
    listener.await?;

    println!("\nDone");
    Ok(())
}
