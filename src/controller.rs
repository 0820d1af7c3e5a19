//! Glue between UI events, the selection model and the proposal generator.
//!
//! Every command runs to completion synchronously and leaves the cached
//! proposal text up to date, so the UI only ever reads from the controller.

use chrono::{NaiveDate, Timelike};
use chrono_tz::Tz;
use tracing::{debug, info};

use crate::grid::{slot_start, slot_time_label, Cell, DAYS_PER_WEEK, SLOTS_PER_DAY};
use crate::proposal::{generate, MeetingDuration, ProposalRequest};
use crate::selection::SlotSelectionModel;
use crate::timezone::{convert, FALLBACK_TIMEZONE_ID, UTC_TIMEZONE_ID};
use crate::traits::{ClipboardSink, TimezoneProvider};
use crate::week::WeekAnchor;

/// Timezone the user's own grid defaults to.
pub const DEFAULT_SOURCE_TIMEZONE_ID: &str = "America/Los_Angeles";

/// Timezone the proposal is written for by default.
pub const DEFAULT_TARGET_TIMEZONE_ID: &str = UTC_TIMEZONE_ID;

/// First business hour in the target zone (inclusive).
pub const BUSINESS_START_HOUR: u32 = 8;

/// End of business hours in the target zone (exclusive).
pub const BUSINESS_END_HOUR: u32 = 18;

/// How the renderer should paint a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellClass {
    /// Part of the selection
    Selected,
    /// Unselected, inside the other party's business hours
    BusinessHours,
    /// Unselected, outside business hours
    OffHours,
}

/// Returns true if `slot` on `date` in `source` starts inside business hours in `target`.
///
/// A slot whose local time cannot be resolved counts as outside business hours.
pub fn is_business_hours(date: NaiveDate, slot: usize, source: Tz, target: Tz) -> bool {
    match convert(slot_start(date, slot), source, target) {
        Ok(there) => (BUSINESS_START_HOUR..BUSINESS_END_HOUR).contains(&there.hour()),
        Err(e) => {
            debug!("Treating slot {} on {} as off hours: {:#}", slot, date, e);
            false
        }
    }
}

/// Owns the scheduling state and exposes the commands a UI invokes.
pub struct SchedulerController {
    catalog: Box<dyn TimezoneProvider>,
    model: SlotSelectionModel,
    source_label: String,
    target_label: String,
    duration: MeetingDuration,
    week: WeekAnchor,
    /// Reference date for the row time labels
    today: NaiveDate,
    /// Business-hours flag per (day, slot), rebuilt when zones or the week change
    business_hours: [[bool; SLOTS_PER_DAY]; DAYS_PER_WEEK],
    proposal: String,
}

impl SchedulerController {
    /// Creates a controller for the week containing `today`, with the default zones.
    pub fn new(catalog: Box<dyn TimezoneProvider>, today: NaiveDate) -> Self {
        let source_label = default_label(catalog.as_ref(), DEFAULT_SOURCE_TIMEZONE_ID);
        let target_label = default_label(catalog.as_ref(), DEFAULT_TARGET_TIMEZONE_ID);

        let mut controller = Self {
            catalog,
            model: SlotSelectionModel::new(),
            source_label,
            target_label,
            duration: MeetingDuration::default(),
            week: WeekAnchor::containing(today),
            today,
            business_hours: [[false; SLOTS_PER_DAY]; DAYS_PER_WEEK],
            proposal: String::new(),
        };
        controller.rebuild_business_hours();
        controller.refresh_proposal();
        controller
    }

    // ===== Queries =====

    /// The timezone catalog backing the selectors.
    pub fn catalog(&self) -> &dyn TimezoneProvider {
        self.catalog.as_ref()
    }

    /// Current proposal text.
    pub fn proposal(&self) -> &str {
        &self.proposal
    }

    /// Read access to the selection.
    pub fn selection(&self) -> &SlotSelectionModel {
        &self.model
    }

    pub fn source_label(&self) -> &str {
        &self.source_label
    }

    pub fn target_label(&self) -> &str {
        &self.target_label
    }

    /// Canonical id of the user's own zone.
    pub fn source_timezone_id(&self) -> &str {
        self.catalog.resolve_timezone_id(&self.source_label)
    }

    /// Canonical id of the other party's zone.
    pub fn target_timezone_id(&self) -> &str {
        self.catalog.resolve_timezone_id(&self.target_label)
    }

    pub fn duration(&self) -> MeetingDuration {
        self.duration
    }

    pub fn week(&self) -> WeekAnchor {
        self.week
    }

    /// Date the row time labels are evaluated on.
    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Colour class of one cell.
    pub fn cell_class(&self, cell: Cell) -> CellClass {
        if self.model.is_selected(cell) {
            CellClass::Selected
        } else if self.business_hours[cell.day()][cell.slot()] {
            CellClass::BusinessHours
        } else {
            CellClass::OffHours
        }
    }

    /// Day column header, e.g. `Mon, Mar 04`.
    pub fn day_header(&self, day: usize) -> String {
        self.week.date_of(day).format("%a, %b %d").to_string()
    }

    /// Row labels for `slot`: own time and the other party's time, as of today.
    pub fn time_labels(&self, slot: usize) -> (String, String) {
        let other = match convert(slot_start(self.today, slot), self.source_tz(), self.target_tz()) {
            Ok(there) => there.format("%H:%M").to_string(),
            Err(_) => "--:--".to_string(),
        };
        (slot_time_label(slot), other)
    }

    // ===== Pointer commands =====

    /// Primary press on a cell: starts a drag that toggles it.
    pub fn cell_pressed(&mut self, cell: Cell) {
        self.model.begin_selection(cell);
        self.refresh_proposal();
    }

    /// Pointer moved during a press. Only a position over a valid cell extends the drag.
    pub fn pointer_over(&mut self, cell: Option<Cell>) {
        if let Some(cell) = cell {
            self.model.extend_selection(cell);
            self.refresh_proposal();
        }
    }

    /// Primary release, anywhere on screen.
    pub fn pointer_released(&mut self) {
        if self.model.is_dragging() {
            self.model.end_selection();
            self.refresh_proposal();
        }
    }

    /// Secondary click on a cell: deselects it.
    pub fn cell_right_clicked(&mut self, cell: Cell) {
        self.model.clear_cell(cell);
        self.refresh_proposal();
    }

    /// Deselects every cell.
    pub fn clear_all(&mut self) {
        self.model.clear_all();
        self.refresh_proposal();
    }

    // ===== Preference commands =====

    /// Selects the user's own zone by display label.
    pub fn set_source_timezone(&mut self, display_label: &str) {
        if self.source_label != display_label {
            self.source_label = display_label.to_string();
            debug!("Source timezone set to {}", self.source_timezone_id());
            self.rebuild_business_hours();
            self.refresh_proposal();
        }
    }

    /// Selects the other party's zone by display label.
    pub fn set_target_timezone(&mut self, display_label: &str) {
        if self.target_label != display_label {
            self.target_label = display_label.to_string();
            debug!("Target timezone set to {}", self.target_timezone_id());
            self.rebuild_business_hours();
            self.refresh_proposal();
        }
    }

    /// Selects the user's own zone by id. Returns false if the catalog lacks it.
    pub fn set_source_timezone_id(&mut self, timezone_id: &str) -> bool {
        match self.catalog.display_label_for(timezone_id).map(str::to_string) {
            Some(label) => {
                self.set_source_timezone(&label);
                true
            }
            None => false,
        }
    }

    /// Selects the other party's zone by id. Returns false if the catalog lacks it.
    pub fn set_target_timezone_id(&mut self, timezone_id: &str) -> bool {
        match self.catalog.display_label_for(timezone_id).map(str::to_string) {
            Some(label) => {
                self.set_target_timezone(&label);
                true
            }
            None => false,
        }
    }

    pub fn set_duration(&mut self, duration: MeetingDuration) {
        if self.duration != duration {
            self.duration = duration;
            self.refresh_proposal();
        }
    }

    /// Re-establishes the displayed week from `today`. The selection is kept.
    pub fn reset_week(&mut self, today: NaiveDate) {
        self.today = today;
        let week = WeekAnchor::containing(today);
        if week != self.week {
            info!("Displayed week now starts {}", week.monday());
            self.week = week;
        }
        self.rebuild_business_hours();
        self.refresh_proposal();
    }

    // ===== Output =====

    /// Writes the current proposal to the clipboard.
    pub fn copy_proposal(&self, sink: &mut dyn ClipboardSink) -> anyhow::Result<()> {
        sink.write_text(&self.proposal)?;
        info!("Copied proposal ({} selected slots) to clipboard", self.model.selected_count());
        Ok(())
    }

    // ===== Internals =====

    fn source_tz(&self) -> Tz {
        self.catalog.resolve_tz(&self.source_label)
    }

    fn target_tz(&self) -> Tz {
        self.catalog.resolve_tz(&self.target_label)
    }

    fn rebuild_business_hours(&mut self) {
        let (source, target) = (self.source_tz(), self.target_tz());
        for day in 0..DAYS_PER_WEEK {
            let date = self.week.date_of(day);
            for slot in 0..SLOTS_PER_DAY {
                self.business_hours[day][slot] = is_business_hours(date, slot, source, target);
            }
        }
    }

    fn refresh_proposal(&mut self) {
        let request = ProposalRequest {
            selection: &self.model,
            source_tz: self.source_tz(),
            target_tz: self.target_tz(),
            target_label: &self.target_label,
            duration_label: self.duration.label(),
            week: self.week,
        };
        self.proposal = generate(&request);
    }
}

/// Display label for `timezone_id`, else the UTC entry, else the fallback id itself.
fn default_label(catalog: &dyn TimezoneProvider, timezone_id: &str) -> String {
    catalog
        .display_label_for(timezone_id)
        .or_else(|| catalog.display_label_for(UTC_TIMEZONE_ID))
        .unwrap_or(FALLBACK_TIMEZONE_ID)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proposal::NO_SELECTION_LINE;
    use crate::timezone::{tz_from_id, TimezoneCatalog};
    use chrono::{TimeZone, Utc};

    fn catalog() -> Box<dyn TimezoneProvider> {
        let now = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
        Box::new(TimezoneCatalog::from_ids(
            ["America/Los_Angeles", "America/New_York", "Africa/Lagos", "UTC"],
            now,
        ))
    }

    fn wednesday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 17).unwrap()
    }

    fn cell(day: usize, slot: usize) -> Cell {
        Cell::new(day, slot).unwrap()
    }

    #[test]
    fn test_defaults() {
        let controller = SchedulerController::new(catalog(), wednesday());
        assert_eq!(controller.source_label(), "(UTC-08:00) US Pacific Time");
        assert_eq!(controller.target_label(), "(UTC+00:00) UTC");
        assert_eq!(controller.week().monday(), NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
        assert_eq!(controller.proposal().lines().nth(1), Some(NO_SELECTION_LINE));
    }

    #[test]
    fn test_business_hours_bounds() {
        let date = wednesday();
        let utc = tz_from_id("UTC");
        assert!(!is_business_hours(date, 15, utc, utc));
        assert!(is_business_hours(date, 16, utc, utc));
        assert!(is_business_hours(date, 35, utc, utc));
        assert!(!is_business_hours(date, 36, utc, utc));
    }

    #[test]
    fn test_cell_classes_follow_target_zone() {
        let mut controller = SchedulerController::new(catalog(), wednesday());
        // Los Angeles 00:00 = 08:00 UTC in January
        assert_eq!(controller.cell_class(cell(0, 0)), CellClass::BusinessHours);
        assert_eq!(controller.cell_class(cell(0, 19)), CellClass::BusinessHours);
        assert_eq!(controller.cell_class(cell(0, 20)), CellClass::OffHours);

        controller.cell_pressed(cell(0, 20));
        controller.pointer_released();
        assert_eq!(controller.cell_class(cell(0, 20)), CellClass::Selected);

        controller.set_target_timezone("(UTC-08:00) US Pacific Time");
        assert_eq!(controller.cell_class(cell(0, 0)), CellClass::OffHours);
        assert_eq!(controller.cell_class(cell(0, 16)), CellClass::BusinessHours);
        assert_eq!(controller.cell_class(cell(0, 20)), CellClass::Selected);
    }

    #[test]
    fn test_business_hours_use_each_cells_own_date() {
        // Week of 2024-03-04; New York springs forward on Sunday 2024-03-10
        let mut controller =
            SchedulerController::new(catalog(), NaiveDate::from_ymd_opt(2024, 3, 6).unwrap());
        assert!(controller.set_source_timezone_id("America/New_York"));

        // 13:00 New York is 18:00 UTC on Monday and 17:00 UTC on Sunday
        assert_eq!(controller.cell_class(cell(0, 26)), CellClass::OffHours);
        assert_eq!(controller.cell_class(cell(6, 26)), CellClass::BusinessHours);
    }

    #[test]
    fn test_pointer_over_gap_does_not_extend() {
        let mut controller = SchedulerController::new(catalog(), wednesday());
        controller.cell_pressed(cell(1, 10));
        controller.pointer_over(None);
        controller.pointer_over(Some(cell(1, 12)));
        controller.pointer_released();
        controller.pointer_over(Some(cell(1, 20)));
        assert_eq!(controller.selection().selected_slots(1), vec![10, 11, 12]);
    }

    #[test]
    fn test_timezone_change_keeps_selection_and_rewrites_proposal() {
        let mut controller = SchedulerController::new(catalog(), wednesday());
        controller.set_source_timezone("(UTC+00:00) UTC");
        controller.cell_pressed(cell(0, 18));
        controller.pointer_over(Some(cell(0, 19)));
        controller.pointer_released();
        assert!(controller.proposal().contains("* Monday, Jan 15: 09:00 - 10:00"));

        controller.set_target_timezone("(UTC+01:00) Lagos");
        assert!(controller.proposal().contains("(all (UTC+01:00) Lagos)"));
        assert!(controller.proposal().contains("* Monday, Jan 15: 10:00 - 11:00"));
        assert_eq!(controller.selection().selected_count(), 2);
    }

    #[test]
    fn test_unknown_label_resolves_to_fallback() {
        let mut controller = SchedulerController::new(catalog(), wednesday());
        controller.set_source_timezone("(UTC+09:00) Nowhere");
        assert_eq!(controller.source_timezone_id(), FALLBACK_TIMEZONE_ID);
        assert_eq!(controller.time_labels(16), ("08:00".to_string(), "08:00".to_string()));
    }

    #[test]
    fn test_set_timezone_by_id() {
        let mut controller = SchedulerController::new(catalog(), wednesday());
        assert!(controller.set_target_timezone_id("America/New_York"));
        assert_eq!(controller.target_label(), "(UTC-05:00) US Eastern Time");
        assert!(!controller.set_target_timezone_id("Asia/Tokyo"));
        assert_eq!(controller.target_timezone_id(), "America/New_York");
    }

    #[test]
    fn test_time_labels_and_headers() {
        let controller = SchedulerController::new(catalog(), wednesday());
        assert_eq!(controller.time_labels(18), ("09:00".to_string(), "17:00".to_string()));
        assert_eq!(controller.day_header(0), "Mon, Jan 15");
        assert_eq!(controller.day_header(6), "Sun, Jan 21");
    }

    #[test]
    fn test_duration_change() {
        let mut controller = SchedulerController::new(catalog(), wednesday());
        controller.set_duration(MeetingDuration::OneHour);
        assert!(controller.proposal().starts_with("Would an hour during"));
    }

    #[test]
    fn test_reset_week_moves_dates_but_keeps_cells() {
        let mut controller = SchedulerController::new(catalog(), wednesday());
        controller.set_source_timezone("(UTC+00:00) UTC");
        controller.cell_pressed(cell(0, 18));
        controller.pointer_released();

        controller.reset_week(NaiveDate::from_ymd_opt(2024, 1, 23).unwrap());
        assert_eq!(controller.week().monday(), NaiveDate::from_ymd_opt(2024, 1, 22).unwrap());
        assert!(controller.proposal().contains("* Monday, Jan 22: 09:00 - 09:30"));
    }

    #[test]
    fn test_reset_week_within_week_moves_time_labels() {
        let monday = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
        let sunday = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        let mut controller = SchedulerController::new(catalog(), monday);
        assert!(controller.set_source_timezone_id("America/New_York"));
        assert_eq!(controller.time_labels(26).1, "18:00");

        controller.reset_week(sunday);
        assert_eq!(controller.today(), sunday);
        assert_eq!(controller.week().monday(), monday);
        assert_eq!(controller.time_labels(26).1, "17:00");
    }
}
