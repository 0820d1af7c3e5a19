//! Week grid addressing.
//!
//! The scheduling grid is seven day columns by forty-eight half-hour rows.
//! A [`Cell`] can only be constructed inside that domain, so every selection
//! key is valid by construction.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};

/// Number of day columns in the displayed week (Monday first).
pub const DAYS_PER_WEEK: usize = 7;

/// Number of half-hour slots in one day.
pub const SLOTS_PER_DAY: usize = 48;

/// Width of one slot in minutes.
pub const SLOT_MINUTES: i64 = 30;

/// Total number of addressable cells (7 x 48).
pub const CELL_COUNT: usize = DAYS_PER_WEEK * SLOTS_PER_DAY;

/// One (day, slot) position in the week grid.
///
/// Ordering is by day, then slot, which matches the flattened drag ordinal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell {
    day: u8,
    slot: u8,
}

impl Cell {
    /// Creates a cell, returning `None` when either index is out of range.
    pub fn new(day: usize, slot: usize) -> Option<Self> {
        if day < DAYS_PER_WEEK && slot < SLOTS_PER_DAY {
            Some(Self {
                day: day as u8,
                slot: slot as u8,
            })
        } else {
            None
        }
    }

    /// Recovers a cell from its flattened ordinal (`day * 48 + slot`).
    pub fn from_ordinal(ordinal: usize) -> Option<Self> {
        Self::new(ordinal / SLOTS_PER_DAY, ordinal % SLOTS_PER_DAY)
    }

    /// Day index in `0..7`, Monday = 0.
    pub fn day(&self) -> usize {
        self.day as usize
    }

    /// Slot index in `0..48`, slot 0 = 00:00-00:30.
    pub fn slot(&self) -> usize {
        self.slot as usize
    }

    /// Position in the single flattened sequence used by drag selection.
    pub fn ordinal(&self) -> usize {
        self.day() * SLOTS_PER_DAY + self.slot()
    }

    /// First and last cell of a day, for range queries over ordered sets.
    pub(crate) fn day_bounds(day: usize) -> Option<(Self, Self)> {
        Some((Self::new(day, 0)?, Self::new(day, SLOTS_PER_DAY - 1)?))
    }

    /// Iterates every cell of the grid in ordinal order.
    pub fn all() -> impl Iterator<Item = Cell> {
        (0..CELL_COUNT).filter_map(Cell::from_ordinal)
    }
}

/// Wall-clock start of `slot` on `date`.
///
/// `slot` may be [`SLOTS_PER_DAY`] (one past the last slot), which yields
/// midnight of the following day. This is how range ends roll over.
pub fn slot_start(date: NaiveDate, slot: usize) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN) + TimeDelta::minutes(slot as i64 * SLOT_MINUTES)
}

/// Formats a slot's start as `HH:MM` on a 24-hour clock.
pub fn slot_time_label(slot: usize) -> String {
    let minutes = slot as i64 * SLOT_MINUTES;
    format!("{:02}:{:02}", (minutes / 60) % 24, minutes % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_cell_domain_is_checked() {
        assert!(Cell::new(0, 0).is_some());
        assert!(Cell::new(6, 47).is_some());
        assert!(Cell::new(7, 0).is_none());
        assert!(Cell::new(0, 48).is_none());
        assert_eq!(Cell::all().count(), CELL_COUNT);
    }

    #[test]
    fn test_ordinal_flattening() {
        let last_of_monday = Cell::new(0, 47).unwrap();
        let first_of_tuesday = Cell::new(1, 0).unwrap();
        assert_eq!(last_of_monday.ordinal() + 1, first_of_tuesday.ordinal());
        assert_eq!(Cell::from_ordinal(48), Some(first_of_tuesday));
        assert_eq!(Cell::from_ordinal(CELL_COUNT), None);
    }

    #[test]
    fn test_slot_start_rolls_over_at_end_of_day() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
        let start = slot_start(date, 16);
        assert_eq!((start.hour(), start.minute()), (8, 0));

        let end = slot_start(date, SLOTS_PER_DAY);
        assert_eq!(end.date(), NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
        assert_eq!((end.hour(), end.minute()), (0, 0));
    }

    #[test]
    fn test_slot_time_label() {
        assert_eq!(slot_time_label(0), "00:00");
        assert_eq!(slot_time_label(17), "08:30");
        assert_eq!(slot_time_label(47), "23:30");
    }
}
