//! Pure geometry used by the week grid renderer and input handler.

pub mod grid_geometry;
