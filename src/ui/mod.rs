//! UI panel rendering subsystem
//!
//! - Header panel (timezone selectors, duration, theme selector)
//! - Grid panel (the week of half-hour cells with time label columns)
//! - Proposal panel (generated text, copy and clear buttons)
//! - Panel manager (panel orchestration and layout)
//! - Input handling (grid pointer interactions)

pub mod header;
pub mod grid_panel;
pub mod proposal_panel;
pub mod panel_manager;
pub mod input;
