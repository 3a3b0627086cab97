//! src/model/app_state.rs
//! ============================================================================
//! # AppState: single owner of everything the UI shows
//!
//! `AppState` holds each piece of state exactly once and lets exactly one
//! component write it:
//! - the [`PaginationLoader`] writes the collection and cursor,
//! - the [`FavoritesStore`] writes the favorites set,
//! - the filter, screen, and UI state are written by dispatched actions.
//!
//! Every mutation that can change what the table shows ends with
//! [`AppState::recompute_view`], which rebuilds the visible list from scratch
//! and gives the sentinel row a new identity.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::{
    catalog::{loader::PaginationLoader, source::CatalogSource},
    config::Config,
    controller::{
        event_loop::TaskResult,
        sentinel::{SentinelId, SentinelTrigger},
    },
    model::{
        catalog::CatalogItem,
        favorites::FavoritesStore,
        navigation::Screen,
        ui_state::UIState,
        view_filter::{ViewFilter, derive_view},
    },
};

pub struct AppState {
    pub config: Arc<Config>,
    pub loader: PaginationLoader,
    pub favorites: FavoritesStore,
    pub filter: ViewFilter,
    pub screen: Screen,
    pub ui: UIState,
    sentinel: SentinelTrigger,
    visible: Vec<usize>,
    view_generation: u64,
}

impl AppState {
    /// Construct a new, ready-to-use AppState. No page is requested yet.
    pub fn new(
        config: Arc<Config>,
        source: Arc<dyn CatalogSource>,
        favorites: FavoritesStore,
        task_tx: mpsc::UnboundedSender<TaskResult>,
    ) -> Self {
        let mut state = Self {
            config,
            loader: PaginationLoader::new(source, task_tx),
            favorites,
            filter: ViewFilter::default(),
            screen: Screen::Listing,
            ui: UIState::new(),
            sentinel: SentinelTrigger::new(),
            visible: Vec::new(),
            view_generation: 0,
        };
        state.recompute_view();
        state
    }

    /// Rebuilds the visible list from the collection, filter, and favorites.
    pub fn recompute_view(&mut self) {
        let favorites = &self.favorites;
        self.visible = derive_view(self.loader.items(), &self.filter, |id| {
            favorites.is_favorite(id)
        });
        self.view_generation += 1;
        self.ui.clamp_to(self.visible.len());
        self.ui.request_redraw();

        debug!(
            visible = self.visible.len(),
            total = self.loader.items().len(),
            generation = self.view_generation,
            "View recomputed"
        );
    }

    /// Rows of the table, in display order.
    pub fn visible_items(&self) -> impl ExactSizeIterator<Item = &CatalogItem> + '_ {
        let items = self.loader.items();
        self.visible.iter().map(move |&idx| &items[idx])
    }

    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    pub fn highlighted_item(&self) -> Option<&CatalogItem> {
        self.visible
            .get(self.ui.selected)
            .map(|&idx| &self.loader.items()[idx])
    }

    pub fn is_favorite(&self, item: &CatalogItem) -> bool {
        self.favorites.is_favorite(item.id)
    }

    pub fn sentinel_id(&self) -> SentinelId {
        SentinelId(self.view_generation)
    }

    /// The sentinel only exists while the listing is on screen.
    pub fn sentinel_visible(&self) -> bool {
        self.screen.is_listing() && self.ui.sentinel_visible(self.visible.len())
    }

    /// Feeds the current sentinel visibility to the trigger and requests the
    /// next page on a visibility edge. Returns whether a request was issued.
    pub fn check_sentinel(&mut self) -> bool {
        let edge = self
            .sentinel
            .observe(self.sentinel_id(), self.sentinel_visible());

        if !edge || self.loader.is_loading() || self.loader.is_exhausted() {
            return false;
        }

        let requested = self.loader.request_next_page();
        if requested {
            self.ui.request_redraw();
        }
        requested
    }

    /// Starts the session by fetching page 1.
    pub fn start(&mut self) -> bool {
        info!("Starting catalog session");
        let requested = self.loader.request_next_page();
        self.ui.request_redraw();
        requested
    }

    /// Toggles the favorite flag of whichever cocktail the user is looking at.
    pub fn toggle_current_favorite(&mut self) -> Option<bool> {
        let id = match &self.screen {
            Screen::Detail(item) => item.id,
            Screen::Listing => self.highlighted_item()?.id,
        };

        let now_favorite = self.favorites.toggle(id);
        self.recompute_view();
        Some(now_favorite)
    }

    pub fn status_line(&self) -> String {
        let cursor = self.loader.cursor();
        let pages = if self.loader.is_exhausted() {
            format!("all {} pages", cursor.last_page())
        } else {
            format!(
                "page {}/{}",
                cursor.current_page().saturating_sub(1),
                cursor.last_page()
            )
        };

        format!(
            "{} shown | {} loaded | {} | ♥ {}",
            self.visible.len(),
            self.loader.items().len(),
            pages,
            self.favorites.len()
        )
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::{
        catalog::loader::tests::{FakeCatalog, cocktail, paged},
        model::favorites::MemoryStorage,
    };
    use tokio::sync::mpsc::UnboundedReceiver;

    pub(crate) fn state_with(
        catalog: Arc<FakeCatalog>,
        favorites: &str,
    ) -> (AppState, UnboundedReceiver<TaskResult>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let favorites = FavoritesStore::hydrate(Box::new(MemoryStorage::with_contents(favorites)));
        let state = AppState::new(Arc::new(Config::default()), catalog, favorites, tx);
        (state, rx)
    }

    pub(crate) async fn settle(state: &mut AppState, rx: &mut UnboundedReceiver<TaskResult>) {
        let TaskResult::PageLoaded { page, result } = rx.recv().await.expect("task result");
        if state.loader.apply(page, result) {
            state.recompute_view();
        }
    }

    fn visible_names(state: &AppState) -> Vec<String> {
        state.visible_items().map(|i| i.name.clone()).collect()
    }

    #[tokio::test]
    async fn test_favorites_rank_first_after_load() {
        let catalog = Arc::new(FakeCatalog::with_pages(vec![vec![
            cocktail(1, "A", true),
            cocktail(2, "B", false),
            cocktail(3, "C", true),
        ]]));
        let (mut state, mut rx) = state_with(catalog, "[3]");

        assert!(state.start());
        settle(&mut state, &mut rx).await;
        assert_eq!(visible_names(&state), ["C", "A", "B"]);
    }

    #[tokio::test]
    async fn test_sentinel_loads_until_screen_is_full() {
        let catalog = Arc::new(FakeCatalog::with_pages(paged(5, 3)));
        let (mut state, mut rx) = state_with(catalog.clone(), "[]");
        state.ui.set_list_height(8, 0);

        state.start();
        settle(&mut state, &mut rx).await;

        // 3 items + sentinel fit in 8 rows: the fresh sentinel fires
        assert!(state.check_sentinel());
        assert!(!state.check_sentinel());
        settle(&mut state, &mut rx).await;

        // 6 items + sentinel still fit
        assert!(state.check_sentinel());
        settle(&mut state, &mut rx).await;

        // 9 items: sentinel below the fold
        assert!(!state.check_sentinel());
        assert_eq!(catalog.requests(), vec![1, 2, 3]);

        // scrolling to the bottom reveals it
        let len = state.visible_len();
        state.ui.select_last(len);
        assert!(state.check_sentinel());
        assert!(!state.check_sentinel());
    }

    #[tokio::test]
    async fn test_visible_sentinel_does_not_refire_without_rerender() {
        let catalog = Arc::new(FakeCatalog::with_pages(paged(3, 2)));
        let (mut state, mut rx) = state_with(catalog.clone(), "[]");
        state.ui.set_list_height(20, 0);

        state.start();
        settle(&mut state, &mut rx).await;
        catalog.fail_page(2);

        assert!(state.check_sentinel());
        settle(&mut state, &mut rx).await;

        // failure: nothing re-rendered, sentinel continuously visible
        assert!(!state.check_sentinel());
        assert!(!state.check_sentinel());
        assert_eq!(catalog.requests(), vec![1, 2]);

        // hide and show again: retry of the same page
        state.screen.select(cocktail(1, "x", true));
        assert!(!state.check_sentinel());
        state.screen.back();
        catalog.heal_page(2);
        assert!(state.check_sentinel());
        assert_eq!(state.loader.cursor().in_flight(), Some(2));
        settle(&mut state, &mut rx).await;
        assert_eq!(catalog.requests(), vec![1, 2, 2]);
        assert_eq!(state.visible_len(), 4);
    }

    #[tokio::test]
    async fn test_exhausted_catalog_ignores_visibility() {
        let catalog = Arc::new(FakeCatalog::with_pages(paged(1, 2)));
        let (mut state, mut rx) = state_with(catalog.clone(), "[]");
        state.ui.set_list_height(20, 0);

        state.start();
        settle(&mut state, &mut rx).await;
        assert!(state.loader.is_exhausted());

        for _ in 0..3 {
            state.recompute_view();
            assert!(!state.check_sentinel());
        }
        assert_eq!(catalog.requests(), vec![1]);
    }

    #[tokio::test]
    async fn test_detail_toggle_is_shared_with_listing() {
        let catalog = Arc::new(FakeCatalog::with_pages(vec![vec![
            cocktail(1, "A", true),
            cocktail(2, "B", false),
        ]]));
        let (mut state, mut rx) = state_with(catalog, "[]");
        state.start();
        settle(&mut state, &mut rx).await;

        let b = state.visible_items().nth(1).cloned().unwrap();
        state.screen.select(b.clone());
        assert_eq!(state.toggle_current_favorite(), Some(true));
        assert!(state.is_favorite(&b));

        state.screen.back();
        assert_eq!(visible_names(&state), ["B", "A"]);
    }

    #[test]
    fn test_toggle_on_empty_listing_is_noop() {
        let (mut state, _rx) = state_with(Arc::new(FakeCatalog::default()), "[]");
        assert_eq!(state.toggle_current_favorite(), None);
        assert!(state.favorites.is_empty());
    }
}
