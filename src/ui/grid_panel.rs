//! Week grid panel UI rendering
//!
//! Draws the fixed column headers, then a vertically scrollable area with
//! one row per half-hour slot: the user's time, the other party's time, and
//! seven day cells colored by the scheduler's cell classification.

use eframe::egui;
use egui::{Align2, FontId, ScrollArea, Sense, Stroke, StrokeKind};
use meetslot::{Cell, ThemeColors, DAYS_PER_WEEK, SLOTS_PER_DAY};

use crate::app::AppState;
use crate::domain::grid_geometry::{GridGeometry, LABEL_COLUMNS};
use crate::presentation::color_mapping;
use crate::ui::input::grid_input_handler::{self, GridInput};

const HEADER_HEIGHT: f32 = 24.0;

/// Renders the week grid and returns this frame's pointer events.
pub fn render_grid_panel(
    ui: &mut egui::Ui,
    state: &mut AppState,
    theme_colors: &ThemeColors,
) -> Vec<GridInput> {
    // Reserve the scrollbar's width so headers line up with the scrolled rows
    let grid_width = ui.available_width() - ui.spacing().scroll.allocated_width();
    let probe = GridGeometry::fit(
        egui::Pos2::ZERO,
        grid_width,
        state.layout.time_column_width(),
        state.layout.min_day_column_width(),
        state.layout.row_height(),
    );

    render_column_headers(ui, state, &probe, theme_colors);

    let mut scroll_area = ScrollArea::vertical()
        .id_salt("week_grid")
        .auto_shrink([false, false])
        .drag_to_scroll(false);
    if let Some(offset) = state.layout.take_initial_scroll() {
        scroll_area = scroll_area.vertical_scroll_offset(offset);
    }

    scroll_area
        .show(ui, |ui| {
            let (rect, response) = ui.allocate_exact_size(probe.size(), Sense::click_and_drag());
            let geometry = GridGeometry { origin: rect.min, ..probe };
            let visible_rect = ui.clip_rect();

            let events = grid_input_handler::handle_grid_input(
                ui.ctx(),
                &response,
                &geometry,
                visible_rect,
                state.scheduler.selection().is_dragging(),
            );

            let hovered = ui
                .ctx()
                .pointer_hover_pos()
                .filter(|pos| visible_rect.contains(*pos))
                .and_then(|pos| geometry.cell_at(pos));

            paint_rows(ui, state, &geometry, visible_rect, hovered, theme_colors);
            events
        })
        .inner
}

/// Paints "My Time", "Other Time" and the day headers above the grid.
fn render_column_headers(
    ui: &mut egui::Ui,
    state: &AppState,
    probe: &GridGeometry,
    theme_colors: &ThemeColors,
) {
    let (header_rect, _) =
        ui.allocate_exact_size(egui::vec2(ui.available_width(), HEADER_HEIGHT), Sense::hover());
    let geometry = GridGeometry {
        origin: header_rect.min,
        ..*probe
    };
    let painter = ui.painter();
    let font = FontId::proportional(13.0);

    let titles = ["My Time".to_string(), "Other Time".to_string()]
        .into_iter()
        .chain((0..DAYS_PER_WEEK).map(|day| state.scheduler.day_header(day)));

    for (column, title) in titles.enumerate() {
        let rect = geometry.header_rect(column, header_rect.top(), HEADER_HEIGHT);
        painter.rect_stroke(rect, 0.0, Stroke::new(1.0, theme_colors.border), StrokeKind::Inside);
        painter.text(rect.center(), Align2::CENTER_CENTER, title, font.clone(), theme_colors.text);
    }
}

/// Paints every row that intersects the visible area.
fn paint_rows(
    ui: &egui::Ui,
    state: &AppState,
    geometry: &GridGeometry,
    visible_rect: egui::Rect,
    hovered: Option<Cell>,
    theme_colors: &ThemeColors,
) {
    let painter = ui.painter();
    let font = FontId::proportional(12.0);
    let border = Stroke::new(1.0, theme_colors.border);

    for slot in 0..SLOTS_PER_DAY {
        if !geometry.label_rect(slot, 0).intersects(visible_rect) {
            continue;
        }

        let (own_time, other_time) = state.scheduler.time_labels(slot);
        for (column, text) in [own_time, other_time].into_iter().enumerate().take(LABEL_COLUMNS) {
            let rect = geometry.label_rect(slot, column);
            painter.rect_filled(rect, 0.0, theme_colors.cell_business);
            painter.rect_stroke(rect, 0.0, border, StrokeKind::Inside);
            painter.text(rect.center(), Align2::CENTER_CENTER, text, font.clone(), theme_colors.cell_text);
        }

        for day in 0..DAYS_PER_WEEK {
            let Some(cell) = Cell::new(day, slot) else {
                continue;
            };
            let class = state.scheduler.cell_class(cell);
            let fill = if hovered == Some(cell) {
                color_mapping::hovered_cell_color(class, theme_colors)
            } else {
                color_mapping::cell_color(class, theme_colors)
            };
            let rect = geometry.cell_rect(cell);
            painter.rect_filled(rect, 0.0, fill);
            painter.rect_stroke(rect, 0.0, border, StrokeKind::Inside);
        }
    }
}
