//! navstate-cli library - exposes modules for unit tests

pub mod actions;
pub mod commands;
pub mod events;
