pub mod grid;
pub mod week;
pub mod traits;
pub mod timezone;
pub mod selection;
pub mod proposal;
pub mod controller;
pub mod theme;

// Export traits
pub use traits::{TimezoneProvider, ClipboardSink};

// Export grid addressing
pub use grid::{Cell, DAYS_PER_WEEK, SLOTS_PER_DAY, slot_start, slot_time_label};
pub use week::WeekAnchor;

// Export timezone catalog and conversion
pub use timezone::{
    TimezoneCatalog, TimezoneEntry, convert, convert_endpoint, tz_from_id,
    FALLBACK_TIMEZONE_ID, UTC_TIMEZONE_ID
};

// Export selection state machine
pub use selection::{SlotSelectionModel, SelectionRange, merge_runs};

// Export proposal generation
pub use proposal::{generate, MeetingDuration, ProposalRequest};

// Export controller
pub use controller::{SchedulerController, CellClass, is_business_hours};

// Export theme support
pub use theme::{Theme, ThemeColors, ThemeManager, hex_to_color32, adjust_brightness};
