//! Centralized application state for the scheduler GUI.
//!
//! The scheduling core lives in [`SchedulerController`]; the GUI adds the
//! theme and layout components around it, following the same State pattern
//! of small focused components with intent-revealing methods.

use chrono::{Local, NaiveDate};
use meetslot::{MeetingDuration, SchedulerController, TimezoneCatalog};
use meetslot::controller::{DEFAULT_SOURCE_TIMEZONE_ID, DEFAULT_TARGET_TIMEZONE_ID};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::state::{LayoutState, ThemeState};

/// User preferences restored across sessions. Selections are never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    /// Canonical id of the user's own timezone
    pub source_timezone_id: String,
    /// Canonical id of the other party's timezone
    pub target_timezone_id: String,
    pub duration: MeetingDuration,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            source_timezone_id: DEFAULT_SOURCE_TIMEZONE_ID.to_string(),
            target_timezone_id: DEFAULT_TARGET_TIMEZONE_ID.to_string(),
            duration: MeetingDuration::default(),
        }
    }
}

/// Main application state composed of focused state components.
pub struct AppState {
    /// Selection, timezones and the generated proposal
    pub scheduler: SchedulerController,

    /// Theme and styling state
    pub theme: ThemeState,

    /// UI layout state
    pub layout: LayoutState,

    /// Transient feedback shown under the proposal (e.g. after copying)
    pub status_message: Option<String>,
}

impl AppState {
    /// Creates the state for today's week with a theme and preferences loaded from storage.
    pub fn with_preferences(theme_name: String, preferences: &Preferences) -> Self {
        Self::for_date(Local::now().date_naive(), theme_name, preferences)
    }

    /// Creates the state for the week containing `today`.
    pub fn for_date(today: NaiveDate, theme_name: String, preferences: &Preferences) -> Self {
        let mut scheduler = SchedulerController::new(Box::new(TimezoneCatalog::new()), today);

        if !scheduler.set_source_timezone_id(&preferences.source_timezone_id) {
            warn!("Stored timezone {} is not in the catalog", preferences.source_timezone_id);
        }
        if !scheduler.set_target_timezone_id(&preferences.target_timezone_id) {
            warn!("Stored timezone {} is not in the catalog", preferences.target_timezone_id);
        }
        scheduler.set_duration(preferences.duration);

        Self {
            scheduler,
            theme: ThemeState::with_theme(theme_name),
            layout: LayoutState::new(),
            status_message: None,
        }
    }

    /// Snapshot of the preferences worth persisting.
    ///
    /// A zone the catalog cannot list again is stored as its default, so a
    /// restart never tries to restore an id it would reject.
    pub fn preferences(&self) -> Preferences {
        let defaults = Preferences::default();
        let source_id = self.scheduler.source_timezone_id();
        let target_id = self.scheduler.target_timezone_id();
        Preferences {
            source_timezone_id: self.restorable_id(source_id, defaults.source_timezone_id),
            target_timezone_id: self.restorable_id(target_id, defaults.target_timezone_id),
            duration: self.scheduler.duration(),
        }
    }

    /// Re-establishes the displayed week when the calendar day has changed.
    pub fn refresh_week(&mut self) {
        self.refresh_for_date(Local::now().date_naive());
    }

    /// Moves the scheduler to `today` if it is on another date.
    ///
    /// The row time labels depend on the date, so this runs on every day
    /// change and not only when a new week starts.
    pub fn refresh_for_date(&mut self, today: NaiveDate) {
        if today != self.scheduler.today() {
            self.scheduler.reset_week(today);
        }
    }

    fn restorable_id(&self, timezone_id: &str, default_id: String) -> String {
        if self.scheduler.catalog().display_label_for(timezone_id).is_some() {
            timezone_id.to_string()
        } else {
            default_id
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn march_monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 4).unwrap()
    }

    #[test]
    fn test_refresh_within_week_updates_today() {
        let mut state = AppState::for_date(march_monday(), "Dark".to_string(), &Preferences::default());
        // 12:00 Los Angeles is 20:00 UTC before the change
        assert_eq!(state.scheduler.time_labels(24).1, "20:00");

        let sunday = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        state.refresh_for_date(sunday);
        assert_eq!(state.scheduler.today(), sunday);
        assert_eq!(state.scheduler.week().monday(), march_monday());
        assert_eq!(state.scheduler.time_labels(24).1, "19:00");
    }

    #[test]
    fn test_preferences_never_store_unlisted_ids() {
        let mut state = AppState::for_date(march_monday(), "Dark".to_string(), &Preferences::default());
        state.scheduler.set_source_timezone("(UTC+05:00) Nowhere");
        assert_eq!(state.scheduler.source_timezone_id(), meetslot::FALLBACK_TIMEZONE_ID);

        let preferences = state.preferences();
        assert_eq!(preferences.source_timezone_id, DEFAULT_SOURCE_TIMEZONE_ID);
        assert_eq!(preferences.target_timezone_id, DEFAULT_TARGET_TIMEZONE_ID);
    }

    #[test]
    fn test_preferences_round_trip_listed_ids() {
        let preferences = Preferences {
            source_timezone_id: "America/Chicago".to_string(),
            target_timezone_id: "Africa/Nairobi".to_string(),
            duration: MeetingDuration::OneHour,
        };
        let state = AppState::for_date(march_monday(), "Dark".to_string(), &preferences);
        assert_eq!(state.preferences(), preferences);
    }
}
