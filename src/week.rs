//! The displayed week.

use chrono::{Datelike, Days, NaiveDate};

/// Calendar date of day-index 0 (a Monday) for the displayed week.
///
/// Only one week is ever shown; the anchor is recomputed from "today"
/// whenever the week is established and no history is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekAnchor(NaiveDate);

impl WeekAnchor {
    /// Most recent Monday on or before `today`.
    pub fn containing(today: NaiveDate) -> Self {
        let back = today.weekday().num_days_from_monday() as u64;
        Self(today - Days::new(back))
    }

    /// The Monday this week starts on.
    pub fn monday(&self) -> NaiveDate {
        self.0
    }

    /// Calendar date for a day index (`anchor + day`).
    pub fn date_of(&self, day: usize) -> NaiveDate {
        self.0 + Days::new(day as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    #[test]
    fn test_anchor_is_monday_on_or_before_today() {
        // 2024-03-07 is a Thursday
        let thursday = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        let week = WeekAnchor::containing(thursday);
        assert_eq!(week.monday(), NaiveDate::from_ymd_opt(2024, 3, 4).unwrap());
        assert_eq!(week.monday().weekday(), Weekday::Mon);

        let monday = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
        assert_eq!(WeekAnchor::containing(monday).monday(), monday);

        let sunday = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        assert_eq!(WeekAnchor::containing(sunday).monday(), monday);
    }

    #[test]
    fn test_date_of_crosses_month_boundary() {
        let week = WeekAnchor::containing(NaiveDate::from_ymd_opt(2024, 4, 29).unwrap());
        assert_eq!(week.date_of(0), NaiveDate::from_ymd_opt(2024, 4, 29).unwrap());
        assert_eq!(week.date_of(6), NaiveDate::from_ymd_opt(2024, 5, 5).unwrap());
    }
}
