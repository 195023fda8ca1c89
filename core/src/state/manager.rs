//! Navigation store

use super::action::NavAction;
use super::tabs::Tab;
use super::transitions::NavigationState;
use super::types::{NavEvent, NavigationSnapshot, OverlayKind, Route};
use crate::config::NavigationConfig;
use chrono::Utc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::broadcast;

type Observer = Arc<dyn Fn(&NavEvent) + Send + Sync>;

/// Token returned by [`NavigationStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

/// Navigation store.
///
/// Built once at the application root and handed out by clone or
/// [`NavigationStore::handle`]. Every entry point commits the route and the
/// overlay under one lock, then notifies observers with the committed state.
#[derive(Clone)]
pub struct NavigationStore {
    inner: Arc<NavigationStoreInner>,
}

struct NavigationStoreInner {
    state: Mutex<NavigationState>,
    /// Synchronous observers, called in registration order
    observers: Mutex<Vec<(SubscriptionId, Observer)>>,
    next_subscription: AtomicU64,
    /// Event broadcast channel for async consumers
    event_tx: broadcast::Sender<NavEvent>,
    check_invariants: bool,
}

impl NavigationStore {
    /// Store at `Home` with no overlay, using default settings.
    pub fn new() -> Self {
        Self::with_config(&NavigationConfig::default())
    }

    pub fn with_config(config: &NavigationConfig) -> Self {
        // broadcast::channel panics on zero capacity
        let (event_tx, _) = broadcast::channel(config.event_channel_capacity.max(1));

        let inner = NavigationStoreInner {
            state: Mutex::new(NavigationState::default()),
            observers: Mutex::new(Vec::new()),
            next_subscription: AtomicU64::new(1),
            event_tx,
            check_invariants: config.check_invariants,
        };

        Self {
            inner: Arc::new(inner),
        }
    }

    pub fn handle(&self) -> NavigationStoreHandle {
        NavigationStoreHandle {
            store: self.clone(),
        }
    }

    pub fn current_route(&self) -> Route {
        self.lock_state().current_route.clone()
    }

    pub fn active_overlay(&self) -> OverlayKind {
        self.lock_state().active_overlay.clone()
    }

    /// Route and overlay read under a single lock.
    pub fn snapshot(&self) -> NavigationSnapshot {
        self.lock_state().snapshot()
    }

    pub fn is_overlay_visible(&self) -> bool {
        !self.lock_state().active_overlay.is_none()
    }

    pub fn selected_tab(&self) -> Option<Tab> {
        Tab::for_route(&self.lock_state().current_route)
    }

    /// Register a callback fired after every committed mutation.
    ///
    /// Callbacks run on the mutating thread once the state lock is released,
    /// so they may read from or call back into the store.
    pub fn subscribe<F>(&self, observer: F) -> SubscriptionId
    where
        F: Fn(&NavEvent) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.inner.next_subscription.fetch_add(1, Ordering::Relaxed));
        self.lock_observers().push((id, Arc::new(observer)));
        tracing::trace!(subscription = id.0, "navigation observer registered");
        id
    }

    /// Returns false if `id` was not registered (or already removed).
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut observers = self.lock_observers();
        let before = observers.len();
        observers.retain(|(existing, _)| *existing != id);
        observers.len() != before
    }

    /// Subscribe to the event stream. Slow receivers lag; they never block the store.
    pub fn subscribe_events(&self) -> broadcast::Receiver<NavEvent> {
        self.inner.event_tx.subscribe()
    }

    /// Go to `route`. Composite routes open their overlay on top of the base
    /// route and remember the route they replaced; plain routes close any
    /// overlay and forget the remembered route.
    pub fn navigate(&self, route: Route) {
        let (previous, snapshot) = self.commit(
            |state| {
                let previous = state.snapshot();
                state.navigate(route.clone());
                previous
            },
            |previous, snapshot| NavEvent::Navigated {
                requested: route.clone(),
                previous: previous.clone(),
                snapshot,
                timestamp: Utc::now(),
            },
        );

        tracing::debug!(
            requested = ?route,
            from = ?previous.current_route,
            to = ?snapshot.current_route,
            overlay = ?snapshot.active_overlay,
            "navigate"
        );
    }

    /// Show `kind` over the current route, replacing any open overlay.
    ///
    /// The route never changes here. `OverlayKind::None` closes the overlay and
    /// forgets any composite return route instead of restoring it; observers
    /// get `OverlayHidden` with no restored route.
    pub fn show_overlay(&self, kind: OverlayKind) {
        let (_, snapshot) = self.commit(
            |state| state.show_overlay(kind.clone()),
            |_, snapshot| {
                if kind.is_none() {
                    NavEvent::OverlayHidden {
                        restored_route: None,
                        snapshot,
                        timestamp: Utc::now(),
                    }
                } else {
                    NavEvent::OverlayShown {
                        kind: kind.clone(),
                        snapshot,
                        timestamp: Utc::now(),
                    }
                }
            },
        );

        tracing::debug!(overlay = ?snapshot.active_overlay, "show overlay");
    }

    /// Close the overlay. If it was opened by a composite route, the route in
    /// effect before that request is restored.
    pub fn hide_overlay(&self) {
        let (restored, snapshot) = self.commit(
            |state| state.hide_overlay(),
            |restored, snapshot| NavEvent::OverlayHidden {
                restored_route: restored.clone(),
                snapshot,
                timestamp: Utc::now(),
            },
        );

        tracing::debug!(
            restored = ?restored,
            route = ?snapshot.current_route,
            "hide overlay"
        );
    }

    pub fn go_home(&self) {
        self.navigate(Route::Home);
    }

    pub fn go_profile(&self) {
        self.navigate(Route::Profile);
    }

    pub fn go_settings(&self) {
        self.navigate(Route::Settings);
    }

    /// Tab bar tap.
    pub fn select_tab(&self, tab: Tab) {
        self.navigate(tab.root_route());
    }

    pub fn dispatch(&self, action: NavAction) {
        match action {
            NavAction::Navigate { route } => self.navigate(route),
            NavAction::ShowOverlay { kind } => self.show_overlay(kind),
            NavAction::HideOverlay => self.hide_overlay(),
            NavAction::GoHome => self.go_home(),
            NavAction::GoProfile => self.go_profile(),
            NavAction::GoSettings => self.go_settings(),
        }
    }

    /// Apply `mutate` and build the event under the state lock, then hand the
    /// event to observers after the lock is dropped.
    ///
    /// The broadcast send happens under the lock so the event stream follows
    /// commit order even with several mutating threads.
    fn commit<R, M, E>(&self, mutate: M, event: E) -> (R, NavigationSnapshot)
    where
        M: FnOnce(&mut NavigationState) -> R,
        E: FnOnce(&R, NavigationSnapshot) -> NavEvent,
    {
        let (output, snapshot, event) = {
            let mut state = self.lock_state();
            let output = mutate(&mut state);

            if self.inner.check_invariants {
                let checked = state.check_invariants();
                debug_assert!(checked.is_ok(), "navigation invariant broken: {checked:?}");
                if let Err(violation) = checked {
                    tracing::warn!(%violation, "navigation invariant broken");
                }
            }

            let snapshot = state.snapshot();
            let event = event(&output, snapshot.clone());
            // Err only means there are no receivers right now
            let _ = self.inner.event_tx.send(event.clone());
            (output, snapshot, event)
        };

        self.notify_observers(&event);
        (output, snapshot)
    }

    fn notify_observers(&self, event: &NavEvent) {
        // clone the list so observers can (un)subscribe from inside the callback
        let observers: Vec<Observer> = self
            .lock_observers()
            .iter()
            .map(|(_, observer)| Arc::clone(observer))
            .collect();

        tracing::trace!(observers = observers.len(), "delivering navigation event");
        for observer in observers {
            observer(event);
        }
    }

    fn lock_state(&self) -> MutexGuard<'_, NavigationState> {
        self.inner
            .state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn lock_observers(&self) -> MutexGuard<'_, Vec<(SubscriptionId, Observer)>> {
        self.inner
            .observers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    #[cfg(test)]
    pub(crate) fn pending_return_route(&self) -> Option<Route> {
        self.lock_state().pending_return_route.clone()
    }
}

impl Default for NavigationStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for NavigationStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NavigationStore")
            .field("state", &self.snapshot())
            .field("observers", &self.lock_observers().len())
            .finish()
    }
}

/// Consumer handle: what a screen, header or tab bar needs, without the
/// subscription management.
#[derive(Clone, Debug)]
pub struct NavigationStoreHandle {
    store: NavigationStore,
}

impl NavigationStoreHandle {
    pub fn snapshot(&self) -> NavigationSnapshot {
        self.store.snapshot()
    }

    pub fn navigate(&self, route: Route) {
        self.store.navigate(route)
    }

    pub fn show_overlay(&self, kind: OverlayKind) {
        self.store.show_overlay(kind)
    }

    pub fn hide_overlay(&self) {
        self.store.hide_overlay()
    }

    pub fn go_home(&self) {
        self.store.go_home()
    }

    pub fn go_profile(&self) {
        self.store.go_profile()
    }

    pub fn go_settings(&self) {
        self.store.go_settings()
    }

    pub fn select_tab(&self, tab: Tab) {
        self.store.select_tab(tab)
    }
}
