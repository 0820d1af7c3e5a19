//! GUI-only state components for the scheduler.
//!
//! The scheduling state itself lives in `meetslot::SchedulerController`.
//! This module holds what only the window cares about:
//! - Theme state (theme manager, current theme)
//! - Layout state (grid sizing, selector filters, initial scroll)

mod theme_state;
mod layout_state;

pub use theme_state::ThemeState;
pub use layout_state::LayoutState;
