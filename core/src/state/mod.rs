//! # Navigation state
//!
//! Two observable values, the primary route and the active overlay, plus one
//! hidden slot remembering where to return when a composite-derived overlay
//! closes.
//!
//! - `types`: routes, overlays, snapshots and events
//! - `transitions`: composite decomposition and the pure transition rules
//! - `manager`: the store that serializes mutations and notifies observers
//! - `tabs`: tab bar selection derived from the route
//! - `action`: navigation intents as values

pub mod action;
pub mod manager;
pub mod tabs;
pub mod transitions;
pub mod types;

pub use action::NavAction;
pub use manager::{NavigationStore, NavigationStoreHandle, SubscriptionId};
pub use tabs::Tab;
pub use types::{NavEvent, NavigationSnapshot, OverlayKind, Route};
