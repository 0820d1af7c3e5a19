//! Meeting proposal text generation.
//!
//! Turns the selected cells into one line per day, each listing merged time
//! ranges converted into the other party's timezone. Generation is a pure
//! function of the [`ProposalRequest`]; it never fails and never performs I/O.

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::grid::{slot_start, DAYS_PER_WEEK};
use crate::selection::{SelectionRange, SlotSelectionModel};
use crate::timezone::{convert, convert_endpoint};
use crate::week::WeekAnchor;

/// Body line used when nothing is selected.
pub const NO_SELECTION_LINE: &str = "No times selected yet.";

/// Closing line appended to every proposal.
pub const CLOSING_LINE: &str =
    "If none of these are convenient, I'm happy to adjust to your availability.";

/// Meeting lengths offered to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MeetingDuration {
    #[default]
    ThirtyMinutes,
    OneHour,
}

impl MeetingDuration {
    /// All durations in selector order.
    pub const ALL: [MeetingDuration; 2] = [MeetingDuration::ThirtyMinutes, MeetingDuration::OneHour];

    /// Phrase used in the proposal header
    pub fn label(&self) -> &'static str {
        match self {
            MeetingDuration::ThirtyMinutes => "30 minutes",
            MeetingDuration::OneHour => "an hour",
        }
    }
}

/// Everything the generator needs. Holds no state of its own.
#[derive(Debug, Clone, Copy)]
pub struct ProposalRequest<'a> {
    pub selection: &'a SlotSelectionModel,
    /// Zone the grid is laid out in
    pub source_tz: Tz,
    /// Zone the proposal is written for
    pub target_tz: Tz,
    /// Label of the target zone, quoted in the header
    pub target_label: &'a str,
    pub duration_label: &'a str,
    pub week: WeekAnchor,
}

/// Builds the full proposal text.
pub fn generate(request: &ProposalRequest<'_>) -> String {
    let mut lines = vec![format!(
        "Would {} during any of the following times (all {}) work for you?",
        request.duration_label, request.target_label
    )];

    let day_lines: Vec<String> = (0..DAYS_PER_WEEK)
        .filter_map(|day| day_line(request, day))
        .collect();

    if day_lines.is_empty() {
        lines.push(NO_SELECTION_LINE.to_string());
    } else {
        lines.extend(day_lines);
    }

    lines.push(CLOSING_LINE.to_string());
    lines.join("\n")
}

/// `* Monday, Mar 04: 09:00 - 10:00, ...` for one day, or `None` if the day has no ranges.
///
/// The date shown is the source-side date even when conversion crosses midnight.
fn day_line(request: &ProposalRequest<'_>, day: usize) -> Option<String> {
    let date = request.week.date_of(day);
    let ranges: Vec<String> = request
        .selection
        .selection_ranges(day)
        .into_iter()
        .filter_map(|range| {
            match format_range(date, range, request.source_tz, request.target_tz) {
                Ok(text) => Some(text),
                Err(e) => {
                    debug!("Omitting range {:?} on {}: {:#}", range, date, e);
                    None
                }
            }
        })
        .collect();

    if ranges.is_empty() {
        return None;
    }
    Some(format!("* {}: {}", date.format("%A, %b %d"), ranges.join(", ")))
}

/// Formats one run as `HH:MM - HH:MM` in the target zone.
///
/// The end is exclusive (`end + 1`), and each endpoint is converted on its own
/// so a DST change inside the run is reflected correctly. A start that falls
/// in a DST gap or overlap is an error; an end in one is resolved.
pub fn format_range(
    date: chrono::NaiveDate,
    range: SelectionRange,
    source_tz: Tz,
    target_tz: Tz,
) -> anyhow::Result<String> {
    let start = convert(slot_start(date, range.start), source_tz, target_tz)?;
    let end = convert_endpoint(slot_start(date, range.end + 1), source_tz, target_tz)?;
    Ok(format!("{} - {}", start.format("%H:%M"), end.format("%H:%M")))
}
