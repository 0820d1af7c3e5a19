//! Week grid pointer handling.
//!
//! Translates raw pointer state into the selection commands the scheduler
//! understands. Hit-testing happens here; the scheduler only ever sees the
//! cell the pointer is over (or `None` when it is over no cell).
//!
//! - Primary press on a cell starts a drag that toggles it
//! - Primary drag paints every cell between the anchor and the pointer
//! - Primary release anywhere ends the drag
//! - Secondary click clears a single cell

use eframe::egui;
use meetslot::Cell;

use crate::domain::grid_geometry::GridGeometry;

/// One pointer event on the grid, in the order it happened this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridInput {
    /// Primary button pressed over a cell
    Pressed(Cell),
    /// Pointer moved while the primary button is held during a drag
    DraggedOver(Option<Cell>),
    /// Primary button released
    Released,
    /// Secondary click on a cell
    RightClicked(Cell),
}

/// Collects this frame's grid pointer events.
///
/// # Arguments
/// * `ctx` - The egui context for input access
/// * `response` - Response of the allocated grid area
/// * `geometry` - Current grid layout for hit-testing
/// * `visible_rect` - Part of the grid currently on screen (scroll clip)
/// * `is_dragging` - Whether a drag is in progress in the scheduler
///
/// # Returns
/// The events to forward to the scheduler, in order
pub fn handle_grid_input(
    ctx: &egui::Context,
    response: &egui::Response,
    geometry: &GridGeometry,
    visible_rect: egui::Rect,
    is_dragging: bool,
) -> Vec<GridInput> {
    let mut events = Vec::new();

    let (pointer_pos, pressed, down, released) = ctx.input(|i| {
        (
            i.pointer.interact_pos(),
            i.pointer.primary_pressed(),
            i.pointer.primary_down(),
            i.pointer.primary_released(),
        )
    });

    // Positions scrolled out of view map to no cell
    let hovered_cell = pointer_pos
        .filter(|pos| visible_rect.contains(*pos))
        .and_then(|pos| geometry.cell_at(pos));

    if pressed && response.contains_pointer() {
        if let Some(cell) = hovered_cell {
            events.push(GridInput::Pressed(cell));
        }
    } else if down && is_dragging {
        events.push(GridInput::DraggedOver(hovered_cell));
    }

    if released {
        events.push(GridInput::Released);
    }

    if response.secondary_clicked() {
        if let Some(cell) = response.interact_pointer_pos().and_then(|pos| geometry.cell_at(pos)) {
            events.push(GridInput::RightClicked(cell));
        }
    }

    events
}
