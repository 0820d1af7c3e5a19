//! Timezone catalog and conversion helpers.
//!
//! The catalog is a precomputed, sorted list of offset-labelled entries used
//! to populate the timezone selectors. The offset stored on each entry is a
//! snapshot taken when the catalog is built and is only used for labelling
//! and ordering. All real conversions go through [`convert`], which applies
//! the DST rules of the specific calendar date being converted.

use std::collections::{HashMap, HashSet};

use anyhow::{anyhow, Result};
use chrono::{DateTime, LocalResult, NaiveDateTime, Offset, TimeDelta, TimeZone, Utc};
use chrono_tz::Tz;
use once_cell::sync::Lazy;
use tracing::{debug, info};

use crate::traits::TimezoneProvider;

/// Id every unresolvable display label falls back to.
pub const FALLBACK_TIMEZONE_ID: &str = "Etc/UTC";

/// Id of the UTC entry that is always present in the catalog.
pub const UTC_TIMEZONE_ID: &str = "UTC";

/// Region whose zones are listed in addition to the curated US set.
pub const DEFAULT_REGION_PREFIX: &str = "Africa/";

/// Curated US zones, in the order they are offered.
pub const US_TIMEZONES: [&str; 6] = [
    "America/Los_Angeles",
    "America/Denver",
    "America/Chicago",
    "America/New_York",
    "America/Anchorage",
    "Pacific/Honolulu",
];

static US_TIMEZONE_NAMES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("America/Los_Angeles", "US Pacific Time"),
        ("America/Denver", "US Mountain Time"),
        ("America/Chicago", "US Central Time"),
        ("America/New_York", "US Eastern Time"),
        ("America/Anchorage", "US Alaska Time"),
        ("Pacific/Honolulu", "US Hawaii Time"),
    ])
});

/// One selectable timezone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimezoneEntry {
    /// Label shown to the user, e.g. `(UTC-08:00) US Pacific Time`
    pub display_label: String,
    /// Canonical IANA id used for every conversion
    pub timezone_id: String,
    /// UTC offset at catalog build time (may be negative)
    pub utc_offset: TimeDelta,
}

/// Sorted list of timezone entries, built once at startup.
#[derive(Debug, Clone)]
pub struct TimezoneCatalog {
    entries: Vec<TimezoneEntry>,
}

impl Default for TimezoneCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl TimezoneCatalog {
    /// Builds the standard catalog (US zones, African zones, UTC) at the current instant.
    pub fn new() -> Self {
        Self::build(Utc::now(), DEFAULT_REGION_PREFIX)
    }

    /// Builds the catalog for the curated US set, every zone under
    /// `region_prefix`, and UTC, labelling offsets as of `now`.
    pub fn build(now: DateTime<Utc>, region_prefix: &str) -> Self {
        let regional = chrono_tz::TZ_VARIANTS
            .iter()
            .map(|tz| tz.name())
            .filter(|name| name.starts_with(region_prefix));

        let ids = US_TIMEZONES
            .iter()
            .copied()
            .chain(regional)
            .chain(std::iter::once(UTC_TIMEZONE_ID));

        let catalog = Self::from_ids(ids, now);
        info!(
            "Built timezone catalog with {} entries (region '{}')",
            catalog.entries.len(),
            region_prefix
        );
        catalog
    }

    /// Builds a catalog from an explicit list of ids.
    ///
    /// Ids that fail to resolve are skipped. Duplicates keep their first
    /// occurrence. The UTC entry is always added if the list lacks it.
    pub fn from_ids<'a>(ids: impl IntoIterator<Item = &'a str>, now: DateTime<Utc>) -> Self {
        let mut seen = HashSet::new();
        let mut entries = Vec::new();

        for id in ids {
            if !seen.insert(id) {
                continue;
            }
            match catalog_entry(id, now) {
                Ok(entry) => entries.push(entry),
                Err(e) => debug!("Skipping timezone {}: {:#}", id, e),
            }
        }

        if !seen.contains(UTC_TIMEZONE_ID) {
            entries.push(utc_entry());
        }

        entries.sort_by(|a, b| {
            a.utc_offset
                .cmp(&b.utc_offset)
                .then_with(|| a.timezone_id.cmp(&b.timezone_id))
        });

        Self { entries }
    }
}

impl TimezoneProvider for TimezoneCatalog {
    fn list(&self) -> &[TimezoneEntry] {
        &self.entries
    }
}

/// Computes one catalog entry for `id` as of `now`.
fn catalog_entry(id: &str, now: DateTime<Utc>) -> Result<TimezoneEntry> {
    let tz: Tz = id
        .parse()
        .map_err(|_| anyhow!("unknown timezone id '{}'", id))?;

    let offset_seconds = tz
        .offset_from_utc_datetime(&now.naive_utc())
        .fix()
        .local_minus_utc();

    Ok(TimezoneEntry {
        display_label: format!("({}) {}", format_utc_offset(offset_seconds), friendly_name(id)),
        timezone_id: id.to_string(),
        utc_offset: TimeDelta::seconds(offset_seconds as i64),
    })
}

fn utc_entry() -> TimezoneEntry {
    TimezoneEntry {
        display_label: format!("({}) {}", format_utc_offset(0), UTC_TIMEZONE_ID),
        timezone_id: UTC_TIMEZONE_ID.to_string(),
        utc_offset: TimeDelta::zero(),
    }
}

/// Curated name for US zones, otherwise the last path segment with spaces.
fn friendly_name(id: &str) -> String {
    if let Some(name) = US_TIMEZONE_NAMES.get(id) {
        return name.to_string();
    }
    id.rsplit('/').next().unwrap_or(id).replace('_', " ")
}

/// Formats an offset in seconds as `UTC+HH:MM` / `UTC-HH:MM`.
pub fn format_utc_offset(offset_seconds: i32) -> String {
    let sign = if offset_seconds >= 0 { '+' } else { '-' };
    let total_minutes = offset_seconds.unsigned_abs() / 60;
    format!("UTC{}{:02}:{:02}", sign, total_minutes / 60, total_minutes % 60)
}

/// Resolves a canonical id to a zone, falling back to `Etc/UTC`.
pub fn tz_from_id(id: &str) -> Tz {
    id.parse().unwrap_or(chrono_tz::Etc::UTC)
}

/// Localizes `local` as wall-clock time in `from` and converts it to `to`.
///
/// Local times that are ambiguous or skipped by a DST transition in `from`
/// are reported as errors; callers decide whether to omit the value.
pub fn convert(local: NaiveDateTime, from: Tz, to: Tz) -> Result<DateTime<Tz>> {
    match from.from_local_datetime(&local) {
        LocalResult::Single(dt) => Ok(dt.with_timezone(&to)),
        LocalResult::Ambiguous(_, _) => Err(anyhow!("{} is ambiguous in {}", local, from.name())),
        LocalResult::None => Err(anyhow!("{} does not exist in {}", local, from.name())),
    }
}

/// Step used when searching backwards for the offset in force before a DST gap.
const GAP_SEARCH_STEP_MINUTES: i64 = 30;
/// Searching stops after two days; no zone has skipped more than one.
const GAP_SEARCH_STEPS: i64 = 96;

/// Like [`convert`], but resolves times a DST transition makes unclear.
///
/// An ambiguous time takes its earlier instant. A time skipped by a gap is
/// read with the offset in force just before the gap, which lands on the
/// instant the gap ends. Used for the exclusive end of a range, which is
/// never itself a selected slot.
pub fn convert_endpoint(local: NaiveDateTime, from: Tz, to: Tz) -> Result<DateTime<Tz>> {
    match from.from_local_datetime(&local) {
        LocalResult::Single(dt) => Ok(dt.with_timezone(&to)),
        LocalResult::Ambiguous(earliest, _) => Ok(earliest.with_timezone(&to)),
        LocalResult::None => {
            let offset_seconds = offset_before_gap(local, from)
                .ok_or_else(|| anyhow!("no offset found before {} in {}", local, from.name()))?;
            let utc = local - TimeDelta::seconds(offset_seconds as i64);
            Ok(to.from_utc_datetime(&utc))
        }
    }
}

/// UTC offset in seconds of the last unambiguous local time before `local`.
fn offset_before_gap(local: NaiveDateTime, tz: Tz) -> Option<i32> {
    (1..=GAP_SEARCH_STEPS).find_map(|step| {
        let earlier = local - TimeDelta::minutes(GAP_SEARCH_STEP_MINUTES * step);
        match tz.offset_from_local_datetime(&earlier) {
            LocalResult::Single(offset) => Some(offset.fix().local_minus_utc()),
            _ => None,
        }
    })
}
