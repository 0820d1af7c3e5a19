use chrono_tz::Tz;

use crate::timezone::{tz_from_id, TimezoneEntry, FALLBACK_TIMEZONE_ID};

/// Source of selectable timezones.
///
/// Display labels are what the user picks; the canonical timezone id is what
/// every conversion uses. All label lookups funnel through
/// [`resolve_timezone_id`](TimezoneProvider::resolve_timezone_id) so an
/// unknown label resolves the same way everywhere.
pub trait TimezoneProvider {
    /// All entries in display order
    fn list(&self) -> &[TimezoneEntry];

    /// Maps a display label to its timezone id, or `Etc/UTC` when unknown.
    fn resolve_timezone_id(&self, display_label: &str) -> &str {
        self.list()
            .iter()
            .find(|entry| entry.display_label == display_label)
            .map(|entry| entry.timezone_id.as_str())
            .unwrap_or(FALLBACK_TIMEZONE_ID)
    }

    /// Maps a display label to a zone. Never fails.
    fn resolve_tz(&self, display_label: &str) -> Tz {
        tz_from_id(self.resolve_timezone_id(display_label))
    }

    /// Reverse lookup: the display label for a timezone id
    fn display_label_for(&self, timezone_id: &str) -> Option<&str> {
        self.list()
            .iter()
            .find(|entry| entry.timezone_id == timezone_id)
            .map(|entry| entry.display_label.as_str())
    }

    /// Entries whose label contains `query`, ignoring case.
    fn filter(&self, query: &str) -> Vec<&TimezoneEntry> {
        let query = query.to_lowercase();
        self.list()
            .iter()
            .filter(|entry| entry.display_label.to_lowercase().contains(&query))
            .collect()
    }
}

/// Destination for the generated proposal text.
pub trait ClipboardSink {
    /// Replaces the clipboard contents with `text`
    fn write_text(&mut self, text: &str) -> anyhow::Result<()>;
}
