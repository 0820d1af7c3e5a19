//! UI layout state management.
//!
//! Grid sizing and the text typed into the timezone selector filters.

/// Row shown at the top of the grid on the first frame (06:00).
const INITIAL_TOP_SLOT: usize = 12;

/// State related to UI layout and sizing.
#[derive(Debug, Clone)]
pub struct LayoutState {
    /// Height of one half-hour row in points
    row_height: f32,
    /// Width of each of the two time label columns
    time_column_width: f32,
    /// Lower bound for day column width; columns stretch beyond this
    min_day_column_width: f32,
    /// Filter text for the "My Time Zone" selector
    source_filter: String,
    /// Filter text for the "Other Time Zone" selector
    target_filter: String,
    /// Whether the grid has been scrolled to its initial position
    initial_scroll_done: bool,
}

impl Default for LayoutState {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutState {
    /// Creates a new layout state with default values.
    pub fn new() -> Self {
        Self {
            row_height: 22.0,
            time_column_width: 72.0,
            min_day_column_width: 90.0,
            source_filter: String::new(),
            target_filter: String::new(),
            initial_scroll_done: false,
        }
    }

    pub fn row_height(&self) -> f32 {
        self.row_height
    }

    pub fn time_column_width(&self) -> f32 {
        self.time_column_width
    }

    pub fn min_day_column_width(&self) -> f32 {
        self.min_day_column_width
    }

    pub fn source_filter_mut(&mut self) -> &mut String {
        &mut self.source_filter
    }

    pub fn target_filter_mut(&mut self) -> &mut String {
        &mut self.target_filter
    }

    /// Returns the scroll offset to apply this frame, once.
    pub fn take_initial_scroll(&mut self) -> Option<f32> {
        if self.initial_scroll_done {
            return None;
        }
        self.initial_scroll_done = true;
        Some(self.row_height * INITIAL_TOP_SLOT as f32)
    }
}
