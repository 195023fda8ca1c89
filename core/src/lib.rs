//! navstate-core: route + overlay navigation store.
//!
//! The store keeps two observable values (the primary route and the active
//! overlay) and resolves composite navigation requests into that pair.
//! Renderers read a [`state::NavigationSnapshot`] and call back into the
//! store; nothing here knows how screens are drawn.

pub mod api;
pub mod config;
pub mod error;
pub mod state;
