//! src/controller/actions.rs
//! ============================================================================
//! # Actions: Centralized Application Commands
//!
//! Defines the `Action` enum, the high-level user intents the application can
//! respond to. Raw terminal events are translated into actions by the key map;
//! background task results travel separately as `TaskResult`.

/// Represents a high-level action that the application can perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Quit the application.
    Quit,
    /// A terminal resize event.
    Resize(u16, u16),

    /// Move selection up.
    MoveSelectionUp,
    /// Move selection down.
    MoveSelectionDown,
    PageUp,
    PageDown,
    SelectFirst,
    SelectLast,

    /// Open the detail view for the highlighted cocktail.
    OpenSelected,
    /// Leave the detail view.
    Back,

    /// Like/unlike the highlighted row, or the cocktail shown in detail.
    ToggleFavorite,
    ToggleAlcoholic,
    ToggleNonAlcoholic,
    ToggleFavoritesOnly,

    /// Focus the search box.
    EnterSearch,
    /// Leave the search box, keeping the query.
    ExitSearch,
    SearchInput(char),
    SearchBackspace,
    ClearSearch,

    /// Request the next page without waiting for the sentinel.
    LoadMore,

    /// Toggle the help overlay visibility.
    ToggleHelp,
    CloseOverlay,
}
