//! ``src/catalog/loader.rs``
//!
//! # `PaginationLoader`: incremental, serial page acquisition
//!
//! Owns the accumulated collection and the pagination cursor. A page request
//! spawns one Tokio task that reports back through the task channel; the event
//! loop hands the result to [`PaginationLoader::apply`]. At most one request is
//! in flight, so pages are appended in request order.

use std::{collections::HashSet, sync::Arc};

use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, error, info, warn};

use crate::{
    catalog::source::CatalogSource,
    controller::event_loop::TaskResult,
    error::AppError,
    model::{
        catalog::{CatalogItem, CatalogPage, ItemId},
        pagination::PaginationCursor,
    },
};

pub struct PaginationLoader {
    source: Arc<dyn CatalogSource>,
    task_tx: UnboundedSender<TaskResult>,
    cursor: PaginationCursor,
    items: Vec<CatalogItem>,
    seen: HashSet<ItemId>,
    last_error: Option<String>,
}

impl PaginationLoader {
    pub fn new(source: Arc<dyn CatalogSource>, task_tx: UnboundedSender<TaskResult>) -> Self {
        Self {
            source,
            task_tx,
            cursor: PaginationCursor::new(),
            items: Vec::new(),
            seen: HashSet::new(),
            last_error: None,
        }
    }

    /// Issues a fetch for `page` if nothing is in flight and the catalog is
    /// not exhausted. Returns whether a request was started.
    pub fn request_page(&mut self, page: u32) -> bool {
        if let Err(denied) = self.cursor.begin(page) {
            debug!(page, ?denied, "Page request refused");
            return false;
        }

        info!(page, "Requesting catalog page");

        let source = Arc::clone(&self.source);
        let task_tx = self.task_tx.clone();
        let _fetch_handle = tokio::spawn(async move {
            let result = source.fetch_page(page).await;
            if task_tx.send(TaskResult::PageLoaded { page, result }).is_err() {
                debug!(page, "Event loop gone, dropping page result");
            }
        });

        true
    }

    pub fn request_next_page(&mut self) -> bool {
        self.request_page(self.cursor.current_page())
    }

    /// Applies a finished request. Returns `true` when a page was accepted,
    /// even if every item in it was a duplicate: the cursor still advanced.
    ///
    /// Failures are logged and leave the collection untouched; the same page
    /// will be requested again on the next trigger.
    pub fn apply(&mut self, page: u32, result: Result<CatalogPage, AppError>) -> bool {
        match result {
            Ok(catalog_page) => {
                if !self.cursor.complete(page, catalog_page.meta.last_page) {
                    warn!(page, in_flight = ?self.cursor.in_flight(), "Ignoring unexpected page");
                    return false;
                }

                self.last_error = None;
                let appended = self.append(catalog_page.data);
                info!(
                    page,
                    appended,
                    total = self.items.len(),
                    last_page = self.cursor.last_page(),
                    "Catalog page loaded"
                );
                true
            }
            Err(e) => {
                if !self.cursor.fail(page) {
                    warn!(page, "Ignoring failure for a page that is not in flight: {}", e);
                    return false;
                }

                error!(page, "Error loading cocktails: {}", e);
                self.last_error = Some(e.short_label());
                false
            }
        }
    }

    fn append(&mut self, incoming: Vec<CatalogItem>) -> usize {
        let before = self.items.len();

        for item in incoming {
            if self.seen.insert(item.id) {
                self.items.push(item);
            } else {
                warn!(id = item.id, "Skipping duplicate catalog item");
            }
        }

        self.items.len() - before
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub const fn cursor(&self) -> &PaginationCursor {
        &self.cursor
    }

    pub const fn is_loading(&self) -> bool {
        self.cursor.is_loading()
    }

    pub const fn is_exhausted(&self) -> bool {
        self.cursor.is_exhausted()
    }

    /// Short description of the last failed request, cleared on success.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}
