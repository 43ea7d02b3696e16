//! State of the player picker.

/// Direction to move the selection in the picker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CycleDirection {
    Up,
    Down,
}

/// The visible slice of the candidate list.
#[derive(Clone, PartialEq, Debug)]
pub struct ViewportState {
    pub offset: usize,
    pub height: usize,
}

/// Complete state of the picker between two key presses.
#[derive(Clone, PartialEq, Debug)]
pub struct SelectionState {
    /// Position in the currently displayed (possibly filtered) list
    pub selected_index: usize,
    pub viewport: ViewportState,
    pub is_filtering: bool,
    pub filter_text: String,
}

impl SelectionState {
    pub fn new(height: usize) -> Self {
        Self {
            selected_index: 0,
            viewport: ViewportState {
                offset: 0,
                height: height.max(1),
            },
            is_filtering: false,
            filter_text: String::new(),
        }
    }

    /// Moves the selection one row, stopping at the first and last rows.
    /// The viewport follows the selection.
    #[must_use]
    pub fn move_selection(&self, direction: CycleDirection, item_count: usize) -> Self {
        let mut state = self.clone();
        if item_count == 0 {
            return state;
        }

        match direction {
            CycleDirection::Up => {
                state.selected_index = state.selected_index.saturating_sub(1);
            }
            CycleDirection::Down => {
                state.selected_index = (state.selected_index + 1).min(item_count - 1);
            }
        }

        state.scroll_to_selection();
        state
    }

    /// Adapts the viewport to a new list height.
    #[must_use]
    pub fn resize(&self, height: usize, item_count: usize) -> Self {
        let mut state = self.clone();
        state.viewport.height = height.max(1);

        // Growing taller shows more rows above the selection
        let last_offset = item_count.saturating_sub(state.viewport.height);
        state.viewport.offset = state.viewport.offset.min(last_offset);

        state.scroll_to_selection();
        state
    }

    /// Replaces the filter text, returning to the top of the list.
    #[must_use]
    pub fn with_filter_text(&self, filter_text: String) -> Self {
        let mut state = self.clone();
        state.filter_text = filter_text;
        state.selected_index = 0;
        state.viewport.offset = 0;
        state
    }

    #[must_use]
    pub fn start_filtering(&self) -> Self {
        let mut state = self.clone();
        state.is_filtering = true;
        state
    }

    #[must_use]
    pub fn stop_filtering(&self) -> Self {
        let mut state = self.with_filter_text(String::new());
        state.is_filtering = false;
        state
    }

    fn scroll_to_selection(&mut self) {
        let height = self.viewport.height;
        if self.selected_index < self.viewport.offset {
            self.viewport.offset = self.selected_index;
        } else if self.selected_index >= self.viewport.offset + height {
            self.viewport.offset = self.selected_index + 1 - height;
        }
    }
}
