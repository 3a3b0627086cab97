//! src/controller/action_dispatcher.rs
//! ============================================================================
//! # ActionDispatcher: applies actions and task results to `AppState`
//!
//! Every handler runs to completion synchronously. After each one the
//! sentinel is re-checked, so a re-rendered or newly revealed sentinel can
//! request the next page in the same step.

use tracing::{debug, trace};

use crate::{
    controller::{actions::Action, event_loop::TaskResult, keymap::KeyContext},
    model::{
        app_state::AppState,
        ui_state::{UIMode, UIOverlay},
    },
};

/// Counters reported in the exit log.
#[derive(Debug, Clone, Copy, Default)]
pub struct DispatcherStats {
    pub total_actions: u64,
    pub total_tasks: u64,
    pub pages_requested: u64,
}

#[derive(Debug, Default)]
pub struct ActionDispatcher {
    stats: DispatcherStats,
}

impl ActionDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_stats(&self) -> DispatcherStats {
        self.stats
    }

    /// Which key bindings apply right now.
    pub fn key_context(state: &AppState) -> KeyContext {
        if state.ui.overlay == UIOverlay::Help {
            KeyContext::Help
        } else if !state.screen.is_listing() {
            KeyContext::Detail
        } else if state.ui.mode == UIMode::Search {
            KeyContext::Search
        } else {
            KeyContext::Browse
        }
    }

    /// Applies one action. Returns `false` when the application should exit.
    pub fn handle(&mut self, state: &mut AppState, action: Action) -> bool {
        self.stats.total_actions += 1;
        trace!(?action, "Handling action");

        let len = state.visible_len();
        let page_step = state.config.ui.page_step;

        match action {
            Action::Quit => return false,

            Action::Resize(_, _) => state.ui.request_redraw(),

            Action::MoveSelectionUp => state.ui.move_selection_up(len),
            Action::MoveSelectionDown => state.ui.move_selection_down(len),
            Action::PageUp => state.ui.page_up(len, page_step),
            Action::PageDown => state.ui.page_down(len, page_step),
            Action::SelectFirst => state.ui.select_first(len),
            Action::SelectLast => state.ui.select_last(len),

            Action::OpenSelected => {
                if let Some(item) = state.highlighted_item().cloned() {
                    state.ui.set_mode(UIMode::Browse);
                    state.screen.select(item);
                }
            }
            Action::Back => {
                state.screen.back();
            }

            Action::ToggleFavorite => {
                if let Some(now_favorite) = state.toggle_current_favorite() {
                    debug!(now_favorite, "Favorite toggled");
                }
            }
            Action::ToggleAlcoholic => {
                state.filter.toggle_alcoholic();
                state.recompute_view();
            }
            Action::ToggleNonAlcoholic => {
                state.filter.toggle_non_alcoholic();
                state.recompute_view();
            }
            Action::ToggleFavoritesOnly => {
                state.filter.toggle_favorites_only();
                state.recompute_view();
            }

            Action::EnterSearch => state.ui.set_mode(UIMode::Search),
            Action::ExitSearch => state.ui.set_mode(UIMode::Browse),
            Action::SearchInput(c) => {
                state.filter.query.push(c);
                state.ui.select_first(len);
                state.recompute_view();
            }
            Action::SearchBackspace => {
                if state.filter.query.pop().is_some() {
                    state.recompute_view();
                }
            }
            Action::ClearSearch => {
                if !state.filter.query.is_empty() {
                    state.filter.query.clear();
                    state.recompute_view();
                }
            }

            Action::LoadMore => {
                if state.loader.request_next_page() {
                    self.stats.pages_requested += 1;
                }
            }

            Action::ToggleHelp => state.ui.toggle_help_overlay(),
            Action::CloseOverlay => state.ui.close_all_overlays(),
        }

        state.ui.request_redraw();
        self.after_update(state);
        true
    }

    /// Applies a finished background task.
    pub fn handle_task(&mut self, state: &mut AppState, task: TaskResult) {
        self.stats.total_tasks += 1;

        match task {
            TaskResult::PageLoaded { page, result } => {
                if state.loader.apply(page, result) {
                    state.recompute_view();
                }
                // loading indicator changes either way
                state.ui.request_redraw();
            }
        }

        self.after_update(state);
    }

    /// Re-evaluates the sentinel after any state change.
    pub fn after_update(&mut self, state: &mut AppState) {
        if state.check_sentinel() {
            self.stats.pages_requested += 1;
        }
    }
}
