//! Coordinate transformations between screen space and grid cells.
//!
//! The grid is laid out as two fixed-width time label columns followed by
//! seven equal day columns, one row per half-hour slot. These functions are
//! stateless and can be tested without a UI.

use egui::{pos2, vec2, Pos2, Rect};
use meetslot::{Cell, DAYS_PER_WEEK, SLOTS_PER_DAY};

/// Number of time label columns left of the day columns ("My Time", "Other Time").
pub const LABEL_COLUMNS: usize = 2;

/// Screen layout of the week grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridGeometry {
    /// Top-left corner of slot 0's row
    pub origin: Pos2,
    pub time_column_width: f32,
    pub day_column_width: f32,
    pub row_height: f32,
}

impl GridGeometry {
    /// Fits the day columns into `available_width`, never narrower than `min_day_column_width`.
    pub fn fit(
        origin: Pos2,
        available_width: f32,
        time_column_width: f32,
        min_day_column_width: f32,
        row_height: f32,
    ) -> Self {
        let days_width = available_width - time_column_width * LABEL_COLUMNS as f32;
        let day_column_width = (days_width / DAYS_PER_WEEK as f32).max(min_day_column_width);
        Self {
            origin,
            time_column_width,
            day_column_width,
            row_height,
        }
    }

    /// Total size of the grid including label columns.
    pub fn size(&self) -> egui::Vec2 {
        vec2(
            self.time_column_width * LABEL_COLUMNS as f32 + self.day_column_width * DAYS_PER_WEEK as f32,
            self.row_height * SLOTS_PER_DAY as f32,
        )
    }

    /// Left edge of the first day column.
    fn days_left(&self) -> f32 {
        self.origin.x + self.time_column_width * LABEL_COLUMNS as f32
    }

    /// Rectangle of one day cell.
    pub fn cell_rect(&self, cell: Cell) -> Rect {
        let min = pos2(
            self.days_left() + cell.day() as f32 * self.day_column_width,
            self.origin.y + cell.slot() as f32 * self.row_height,
        );
        Rect::from_min_size(min, vec2(self.day_column_width, self.row_height))
    }

    /// Rectangle of a time label (`column` 0 = own time, 1 = other time).
    pub fn label_rect(&self, slot: usize, column: usize) -> Rect {
        let min = pos2(
            self.origin.x + column as f32 * self.time_column_width,
            self.origin.y + slot as f32 * self.row_height,
        );
        Rect::from_min_size(min, vec2(self.time_column_width, self.row_height))
    }

    /// Rectangle of a column header placed `height` above the grid.
    ///
    /// Columns 0 and 1 are the time labels, 2.. are the days.
    pub fn header_rect(&self, column: usize, top: f32, height: f32) -> Rect {
        let (left, width) = if column < LABEL_COLUMNS {
            (self.origin.x + column as f32 * self.time_column_width, self.time_column_width)
        } else {
            (
                self.days_left() + (column - LABEL_COLUMNS) as f32 * self.day_column_width,
                self.day_column_width,
            )
        };
        Rect::from_min_size(pos2(left, top), vec2(width, height))
    }

    /// The day cell under `pos`, or `None` over labels or outside the grid.
    pub fn cell_at(&self, pos: Pos2) -> Option<Cell> {
        let x = pos.x - self.days_left();
        let y = pos.y - self.origin.y;
        if x < 0.0 || y < 0.0 || self.day_column_width <= 0.0 || self.row_height <= 0.0 {
            return None;
        }
        let day = (x / self.day_column_width).floor() as usize;
        let slot = (y / self.row_height).floor() as usize;
        Cell::new(day, slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry() -> GridGeometry {
        GridGeometry {
            origin: pos2(10.0, 100.0),
            time_column_width: 50.0,
            day_column_width: 80.0,
            row_height: 20.0,
        }
    }

    #[test]
    fn test_cell_at_maps_positions() {
        let g = geometry();
        // Day columns start at x = 10 + 2 * 50 = 110
        assert_eq!(g.cell_at(pos2(111.0, 101.0)), Cell::new(0, 0));
        assert_eq!(g.cell_at(pos2(190.0, 141.0)), Cell::new(1, 2));
        assert_eq!(g.cell_at(pos2(110.0 + 7.0 * 80.0 - 1.0, 100.0 + 48.0 * 20.0 - 1.0)), Cell::new(6, 47));
    }

    #[test]
    fn test_cell_at_outside_grid() {
        let g = geometry();
        assert_eq!(g.cell_at(pos2(60.0, 120.0)), None); // over a time label
        assert_eq!(g.cell_at(pos2(150.0, 99.0)), None); // above the first row
        assert_eq!(g.cell_at(pos2(110.0 + 7.0 * 80.0 + 1.0, 120.0)), None);
        assert_eq!(g.cell_at(pos2(150.0, 100.0 + 48.0 * 20.0 + 1.0)), None);
    }

    #[test]
    fn test_cell_rect_round_trips_through_cell_at() {
        let g = geometry();
        for cell in Cell::all() {
            assert_eq!(g.cell_at(g.cell_rect(cell).center()), Some(cell));
        }
    }

    #[test]
    fn test_fit_respects_minimum_width() {
        let g = GridGeometry::fit(pos2(0.0, 0.0), 800.0, 50.0, 60.0, 20.0);
        assert_eq!(g.day_column_width, 100.0);
        let narrow = GridGeometry::fit(pos2(0.0, 0.0), 300.0, 50.0, 60.0, 20.0);
        assert_eq!(narrow.day_column_width, 60.0);
        assert_eq!(narrow.size(), vec2(100.0 + 420.0, 960.0));
    }
}
