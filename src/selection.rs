//! Slot selection state and the click / drag / clear state machine.
//!
//! Drag painting treats the grid as one flattened sequence ordered by
//! `day * 48 + slot`, so a drag from the end of one day into the next only
//! touches the cells between the two pointer positions, while a drag across
//! several days paints every intermediate day in full.

use std::collections::BTreeSet;

use crate::grid::{Cell, SLOTS_PER_DAY};

/// A maximal run of consecutive selected slots within one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionRange {
    /// First selected slot
    pub start: usize,
    /// Last selected slot (inclusive)
    pub end: usize,
}

/// Transient state of an in-progress drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct DragState {
    /// Cell the drag started on
    anchor: Cell,
    /// Cell most recently painted to
    last: Cell,
    /// Value painted onto every cell the drag covers
    paint_value: bool,
}

/// Tracks which cells are selected and the drag gesture that edits them.
///
/// Absence from the set means "not selected".
#[derive(Debug, Clone, Default)]
pub struct SlotSelectionModel {
    selected: BTreeSet<Cell>,
    drag: Option<DragState>,
}

impl SlotSelectionModel {
    /// Creates an empty selection with no drag in progress.
    pub fn new() -> Self {
        Self::default()
    }

    // ===== Queries =====

    /// Returns true if `cell` is selected.
    pub fn is_selected(&self, cell: Cell) -> bool {
        self.selected.contains(&cell)
    }

    /// Returns true while a drag gesture is active.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Returns true if any cell in the week is selected.
    pub fn has_selection(&self) -> bool {
        !self.selected.is_empty()
    }

    /// Number of selected cells.
    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    /// Sorted slot indices selected on `day`.
    pub fn selected_slots(&self, day: usize) -> Vec<usize> {
        match Cell::day_bounds(day) {
            Some((first, last)) => self
                .selected
                .range(first..=last)
                .map(|cell| cell.slot())
                .collect(),
            None => Vec::new(),
        }
    }

    /// Merged runs of selected slots on `day`. Runs never cross days.
    pub fn selection_ranges(&self, day: usize) -> Vec<SelectionRange> {
        merge_runs(&self.selected_slots(day))
    }

    // ===== Direct mutation =====

    /// Sets the selected state of one cell.
    pub fn set_state(&mut self, cell: Cell, selected: bool) {
        if selected {
            self.selected.insert(cell);
        } else {
            self.selected.remove(&cell);
        }
    }

    /// Deselects one cell. Drag state is left untouched, so this is safe mid-drag.
    pub fn clear_cell(&mut self, cell: Cell) {
        self.set_state(cell, false);
    }

    /// Deselects every cell.
    pub fn clear_all(&mut self) {
        self.selected.clear();
    }

    // ===== Drag state machine =====

    /// Starts a drag on `cell`, toggling it.
    ///
    /// The value painted for the rest of the drag is the inverse of the
    /// clicked cell's current state. Any previous drag is discarded.
    pub fn begin_selection(&mut self, cell: Cell) {
        let paint_value = !self.is_selected(cell);
        self.drag = Some(DragState {
            anchor: cell,
            last: cell,
            paint_value,
        });
        self.set_state(cell, paint_value);
    }

    /// Paints every cell between the drag anchor and `cell`.
    ///
    /// Ignored when no drag is active or the pointer has not moved to a new cell.
    pub fn extend_selection(&mut self, cell: Cell) {
        let Some(drag) = self.drag else {
            return;
        };
        if cell == drag.last {
            return;
        }

        let from = drag.anchor.ordinal().min(cell.ordinal());
        let to = drag.anchor.ordinal().max(cell.ordinal());
        for painted in (from..=to).filter_map(Cell::from_ordinal) {
            self.set_state(painted, drag.paint_value);
        }

        self.drag = Some(DragState { last: cell, ..drag });
    }

    /// Finishes the drag. Whatever has been painted stays painted.
    pub fn end_selection(&mut self) {
        self.drag = None;
    }
}

/// Merges sorted slot indices into maximal runs of consecutive values.
pub fn merge_runs(slots: &[usize]) -> Vec<SelectionRange> {
    let mut runs: Vec<SelectionRange> = Vec::new();
    for &slot in slots {
        if slot >= SLOTS_PER_DAY {
            continue;
        }
        match runs.last_mut() {
            Some(run) if slot == run.end + 1 => run.end = slot,
            _ => runs.push(SelectionRange { start: slot, end: slot }),
        }
    }
    runs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::CELL_COUNT;

    fn cell(day: usize, slot: usize) -> Cell {
        Cell::new(day, slot).unwrap()
    }

    fn selected_cells(model: &SlotSelectionModel) -> Vec<(usize, usize)> {
        Cell::all()
            .filter(|c| model.is_selected(*c))
            .map(|c| (c.day(), c.slot()))
            .collect()
    }

    #[test]
    fn test_set_then_clear_is_unselected() {
        let mut model = SlotSelectionModel::new();
        for c in Cell::all() {
            model.set_state(c, true);
            model.set_state(c, false);
            assert!(!model.is_selected(c));
        }
        assert!(!model.has_selection());
    }

    #[test]
    fn test_click_toggles() {
        let mut model = SlotSelectionModel::new();
        model.begin_selection(cell(2, 20));
        model.end_selection();
        assert!(model.is_selected(cell(2, 20)));

        model.begin_selection(cell(2, 20));
        model.end_selection();
        assert!(!model.is_selected(cell(2, 20)));
    }

    #[test]
    fn test_drag_across_day_boundary_selects_only_adjacent_cells() {
        let mut model = SlotSelectionModel::new();
        model.begin_selection(cell(0, 47));
        model.extend_selection(cell(1, 0));
        model.end_selection();
        assert_eq!(selected_cells(&model), vec![(0, 47), (1, 0)]);
    }

    #[test]
    fn test_drag_across_several_days_fills_intermediate_days() {
        let mut model = SlotSelectionModel::new();
        model.begin_selection(cell(0, 10));
        model.extend_selection(cell(3, 5));
        model.end_selection();

        let expected = (cell(0, 10).ordinal()..=cell(3, 5).ordinal()).count();
        assert_eq!(model.selected_count(), expected);
        assert_eq!(model.selected_slots(1).len(), SLOTS_PER_DAY);
        assert_eq!(model.selected_slots(2).len(), SLOTS_PER_DAY);
        assert!(!model.is_selected(cell(0, 9)));
        assert!(!model.is_selected(cell(3, 6)));
    }

    #[test]
    fn test_drag_backwards_paints_same_range() {
        let mut model = SlotSelectionModel::new();
        model.begin_selection(cell(4, 30));
        model.extend_selection(cell(4, 26));
        model.end_selection();
        assert_eq!(model.selected_slots(4), vec![26, 27, 28, 29, 30]);
    }

    #[test]
    fn test_drag_starting_on_selected_cell_erases() {
        let mut model = SlotSelectionModel::new();
        for slot in 10..20 {
            model.set_state(cell(1, slot), true);
        }
        model.begin_selection(cell(1, 12));
        model.extend_selection(cell(1, 15));
        model.end_selection();
        assert_eq!(model.selected_slots(1), vec![10, 11, 16, 17, 18, 19]);
    }

    #[test]
    fn test_shrinking_drag_keeps_previously_painted_cells() {
        let mut model = SlotSelectionModel::new();
        model.begin_selection(cell(0, 0));
        model.extend_selection(cell(0, 5));
        model.extend_selection(cell(0, 2));
        model.end_selection();
        assert_eq!(model.selected_slots(0), vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_extend_without_begin_is_noop() {
        let mut model = SlotSelectionModel::new();
        model.extend_selection(cell(3, 3));
        assert!(!model.has_selection());

        model.begin_selection(cell(0, 0));
        model.end_selection();
        model.extend_selection(cell(0, 4));
        assert_eq!(model.selected_slots(0), vec![0]);
    }

    #[test]
    fn test_begin_while_dragging_starts_fresh() {
        let mut model = SlotSelectionModel::new();
        model.begin_selection(cell(0, 0));
        model.extend_selection(cell(0, 3));
        // No release; a new press arrives on another day
        model.begin_selection(cell(5, 10));
        model.extend_selection(cell(5, 11));
        model.end_selection();

        assert_eq!(model.selected_slots(0), vec![0, 1, 2, 3]);
        assert_eq!(model.selected_slots(5), vec![10, 11]);
        assert_eq!(model.selected_count(), 6);
    }

    #[test]
    fn test_clear_cell_mid_drag_preserves_drag() {
        let mut model = SlotSelectionModel::new();
        model.begin_selection(cell(2, 0));
        model.extend_selection(cell(2, 3));
        model.clear_cell(cell(2, 1));
        assert!(model.is_dragging());
        assert_eq!(model.selected_slots(2), vec![0, 2, 3]);

        model.extend_selection(cell(2, 4));
        model.end_selection();
        assert_eq!(model.selected_slots(2), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_repeated_extend_to_last_cell_is_ignored() {
        let mut model = SlotSelectionModel::new();
        model.begin_selection(cell(0, 0));
        model.extend_selection(cell(0, 2));
        model.clear_cell(cell(0, 1));
        model.extend_selection(cell(0, 2));
        assert_eq!(model.selected_slots(0), vec![0, 2]);
    }

    #[test]
    fn test_merge_runs() {
        assert_eq!(
            merge_runs(&[10, 11, 12, 15]),
            vec![
                SelectionRange { start: 10, end: 12 },
                SelectionRange { start: 15, end: 15 },
            ]
        );
        assert!(merge_runs(&[]).is_empty());
        assert_eq!(merge_runs(&[47]), vec![SelectionRange { start: 47, end: 47 }]);
    }

    #[test]
    fn test_clear_all() {
        let mut model = SlotSelectionModel::new();
        model.begin_selection(cell(0, 0));
        model.extend_selection(cell(6, 47));
        model.end_selection();
        assert_eq!(model.selected_count(), CELL_COUNT);
        model.clear_all();
        assert!(!model.has_selection());
    }
}
