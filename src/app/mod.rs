//! Application-level modules for the meeting scheduler.
//!
//! This module contains the centralized state and the coordinators that
//! persist preferences and apply the theme.

mod app_state;
mod theme_coordinator;
mod settings_coordinator;

pub use app_state::{AppState, Preferences};
pub use theme_coordinator::ThemeCoordinator;
pub use settings_coordinator::SettingsCoordinator;
