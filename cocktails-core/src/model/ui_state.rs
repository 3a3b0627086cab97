//! src/model/ui_state.rs
//! ============================================================================
//! # UIState: selection, scrolling, input mode, overlays
//!
//! Everything here is presentation state: which row is highlighted, how far
//! the table is scrolled, whether keystrokes go to the search box, and
//! whether a redraw is pending. Nothing in here is persisted.

/// Where keystrokes go on the listing screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UIMode {
    Browse,
    Search,
}

// All overlays (mutually exclusive modals)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UIOverlay {
    None,
    Help,
}

#[derive(Debug, Clone)]
pub struct UIState {
    /// Highlighted row in the visible list.
    pub selected: usize,
    /// First visible row of the table body.
    pub scroll_offset: usize,
    /// Number of body rows the table can show; 0 until the first resize.
    pub list_height: usize,
    pub mode: UIMode,
    pub overlay: UIOverlay,
    redraw: bool,
}

impl UIState {
    pub fn new() -> Self {
        Self {
            selected: 0,
            scroll_offset: 0,
            list_height: 0,
            mode: UIMode::Browse,
            overlay: UIOverlay::None,
            redraw: true,
        }
    }

    // --- Selection/scrolling ---
    pub fn move_selection_up(&mut self, len: usize) {
        if len > 0 {
            self.selected = self.selected.saturating_sub(1);
            self.ensure_selected_visible(len);
        }
    }

    pub fn move_selection_down(&mut self, len: usize) {
        if len > 0 {
            let at_end = self.selected + 1 >= len;
            self.selected = self.selected.saturating_add(1).min(len - 1);
            self.ensure_selected_visible(len);
            if at_end {
                self.scroll_to_sentinel(len);
            }
        }
    }

    pub fn page_up(&mut self, len: usize, step: usize) {
        if len > 0 {
            self.selected = self.selected.saturating_sub(step.max(1));
            self.ensure_selected_visible(len);
        }
    }

    pub fn page_down(&mut self, len: usize, step: usize) {
        if len > 0 {
            let at_end = self.selected + 1 >= len;
            self.selected = self.selected.saturating_add(step.max(1)).min(len - 1);
            self.ensure_selected_visible(len);
            if at_end {
                self.scroll_to_sentinel(len);
            }
        }
    }

    pub fn select_first(&mut self, len: usize) {
        self.selected = 0;
        self.ensure_selected_visible(len);
    }

    pub fn select_last(&mut self, len: usize) {
        self.selected = len.saturating_sub(1);
        self.ensure_selected_visible(len);
    }

    /// Keeps selection and scroll offset valid after the list changed size.
    pub fn clamp_to(&mut self, len: usize) {
        self.selected = self.selected.min(len.saturating_sub(1));
        self.ensure_selected_visible(len);
    }

    pub fn set_list_height(&mut self, height: usize, len: usize) {
        self.list_height = height;
        self.ensure_selected_visible(len);
    }

    fn ensure_selected_visible(&mut self, len: usize) {
        if len == 0 {
            self.scroll_offset = 0;
            return;
        }

        let height = self.list_height.max(1);
        // Reaching the last item also brings the sentinel row into view.
        let bottom = if self.selected + 1 == len && height > 1 {
            len
        } else {
            self.selected
        };

        if self.selected < self.scroll_offset {
            self.scroll_offset = self.selected;
        } else if bottom >= self.scroll_offset + height {
            self.scroll_offset = bottom + 1 - height;
        }

        // Never scroll further than needed to show the last item and the sentinel.
        let max_offset = (len + 1).saturating_sub(height);
        self.scroll_offset = self.scroll_offset.min(max_offset);
    }

    /// Pushing past the last item scrolls the sentinel into view, even when
    /// the viewport only has room for one row.
    fn scroll_to_sentinel(&mut self, len: usize) {
        self.scroll_offset = (len + 1).saturating_sub(self.list_height.max(1));
    }

    /// The sentinel sits on row `len`, directly after the last item.
    pub fn sentinel_visible(&self, len: usize) -> bool {
        self.list_height > 0 && len < self.scroll_offset + self.list_height
    }

    // --- Modes/overlay management ---
    pub fn toggle_help_overlay(&mut self) {
        self.overlay = match self.overlay {
            UIOverlay::Help => UIOverlay::None,
            UIOverlay::None => UIOverlay::Help,
        };
    }

    pub fn close_all_overlays(&mut self) {
        self.overlay = UIOverlay::None;
    }

    pub fn set_mode(&mut self, mode: UIMode) {
        self.mode = mode;
    }

    // --- Redraw bookkeeping ---
    pub fn request_redraw(&mut self) {
        self.redraw = true;
    }

    pub fn needs_redraw(&self) -> bool {
        self.redraw
    }

    pub fn clear_redraw(&mut self) {
        self.redraw = false;
    }
}

impl Default for UIState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_height(height: usize) -> UIState {
        let mut ui = UIState::new();
        ui.set_list_height(height, 0);
        ui
    }

    #[test]
    fn test_scrolls_to_follow_selection() {
        let mut ui = with_height(3);
        for _ in 0..4 {
            ui.move_selection_down(10);
        }
        assert_eq!(ui.selected, 4);
        assert_eq!(ui.scroll_offset, 2);

        ui.select_first(10);
        assert_eq!(ui.scroll_offset, 0);

        ui.select_last(10);
        assert_eq!(ui.selected, 9);
        assert_eq!(ui.scroll_offset, 8);
    }

    #[test]
    fn test_sentinel_visibility() {
        let mut ui = with_height(5);
        // 3 items + sentinel fit
        assert!(ui.sentinel_visible(3));
        // 10 items, top of list: sentinel below the fold
        assert!(!ui.sentinel_visible(10));

        ui.move_selection_down(10);
        ui.page_down(10, 7);
        // item 8 is the bottom row, sentinel is two further
        assert_eq!(ui.scroll_offset, 4);
        assert!(!ui.sentinel_visible(10));

        // reaching the last item scrolls the sentinel into view
        ui.move_selection_down(10);
        assert!(ui.sentinel_visible(10));

        // an empty list shows the sentinel on the first row
        ui.clamp_to(0);
        assert!(ui.sentinel_visible(0));
    }

    #[test]
    fn test_sentinel_hidden_before_first_layout() {
        let ui = UIState::new();
        assert!(!ui.sentinel_visible(0));
    }

    #[test]
    fn test_one_row_viewport_reaches_sentinel() {
        let mut ui = with_height(1);
        ui.move_selection_down(3);
        ui.select_last(3);
        assert_eq!(ui.scroll_offset, 2);
        assert!(!ui.sentinel_visible(3));

        // one more step down shows the sentinel row
        ui.move_selection_down(3);
        assert_eq!(ui.selected, 2);
        assert!(ui.sentinel_visible(3));

        // moving back up returns to the items
        ui.move_selection_up(3);
        assert!(!ui.sentinel_visible(3));

        ui.select_last(3);
        ui.page_down(3, 10);
        assert!(ui.sentinel_visible(3));
    }

    #[test]
    fn test_clamp_after_shrink() {
        let mut ui = with_height(4);
        ui.select_last(20);
        ui.clamp_to(2);
        assert_eq!(ui.selected, 1);
        assert_eq!(ui.scroll_offset, 0);
    }

    #[test]
    fn test_page_moves() {
        let mut ui = with_height(4);
        ui.page_down(25, 10);
        assert_eq!(ui.selected, 10);
        ui.page_down(25, 10);
        ui.page_down(25, 10);
        assert_eq!(ui.selected, 24);
        ui.page_up(25, 30);
        assert_eq!(ui.selected, 0);
    }

    #[test]
    fn test_help_toggle() {
        let mut ui = UIState::new();
        ui.toggle_help_overlay();
        assert_eq!(ui.overlay, UIOverlay::Help);
        ui.toggle_help_overlay();
        assert_eq!(ui.overlay, UIOverlay::None);
    }
}
