//! Input handling subsystem for UI interactions.
//!
//! This module contains all input handling logic:
//! - Week grid pointer handling (press, drag-paint, release, right-click clear)

pub mod grid_input_handler;
