//! Color mapping for week grid cells.
//!
//! Cell colors come from the controller's three-way classification; this
//! module only decides which palette entry each class uses.

use egui::Color32;
use meetslot::{CellClass, ThemeColors};

/// Fill color for a cell of the given class.
pub fn cell_color(class: CellClass, colors: &ThemeColors) -> Color32 {
    match class {
        CellClass::Selected => colors.cell_selected,
        CellClass::BusinessHours => colors.cell_business,
        CellClass::OffHours => colors.cell_off_hours,
    }
}

/// Fill color for a hovered cell: the normal color, slightly darkened.
pub fn hovered_cell_color(class: CellClass, colors: &ThemeColors) -> Color32 {
    meetslot::adjust_brightness(cell_color(class, colors), 0.9)
}
