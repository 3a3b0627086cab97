pub mod error;

pub mod config;

pub mod catalog {
    pub mod source;
    pub use source::{CatalogSource, HttpCatalogSource};

    pub mod loader;
    pub use loader::PaginationLoader;
}

pub mod controller {

    pub mod actions;
    pub use actions::Action;

    pub mod action_dispatcher;
    pub use action_dispatcher::{ActionDispatcher, DispatcherStats};

    pub mod event_loop;
    pub use event_loop::{EventLoop, MetricsSnap, TaskResult};

    pub mod keymap;
    pub use keymap::{KeyContext, KeyMap};

    pub mod sentinel;
}

pub mod model {
    pub mod app_state;

    pub mod catalog;
    pub use catalog::{CatalogItem, CatalogPage, ItemId, PageMeta};

    pub mod favorites;
    pub use favorites::{FavoritesStorage, FavoritesStore, FileStorage, MemoryStorage};

    pub mod navigation;
    pub use navigation::Screen;

    pub mod pagination;
    pub use pagination::{PageDenied, PaginationCursor};

    pub mod view_filter;
    pub use view_filter::{ViewFilter, derive_view};

    pub mod ui_state;
    pub use ui_state::{UIMode, UIOverlay, UIState};
}

pub mod view {
    pub mod icons;

    pub mod theme;

    pub mod ui;

    pub mod components {
        pub mod cocktail_table;
        pub use cocktail_table::CocktailTable;
        pub mod detail_view;
        pub use detail_view::DetailView;
        pub mod filter_bar;
        pub use filter_bar::FilterBar;
        pub mod help_overlay;
        pub use help_overlay::HelpOverlay;
        pub mod search_bar;
        pub use search_bar::SearchBar;
        pub mod status_bar;
        pub use status_bar::StatusBar;
    }
}

pub mod logging;
pub use logging::Logger;

pub use error::AppError;

pub use model::{app_state::AppState, ui_state::UIState};
