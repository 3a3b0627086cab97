//! src/model/pagination.rs
//! ============================================================================
//! # PaginationCursor: serial page bookkeeping
//!
//! Tracks which page comes next, how many pages the catalog reported, and the
//! single page request that may be in flight. Invariant:
//! `1 <= current_page <= last_page + 1`, and a page is only handed out when
//! nothing is in flight and `current_page <= last_page`.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationCursor {
    /// Next page to request (1-based).
    current_page: u32,
    /// Last page as reported by the catalog; 1 until the first response.
    last_page: u32,
    in_flight: Option<u32>,
}

/// Why a page could not be handed out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageDenied {
    InFlight(u32),
    Exhausted,
    /// Requested page is not the next one in sequence.
    OutOfOrder { requested: u32, expected: u32 },
}

impl PaginationCursor {
    pub const fn new() -> Self {
        Self {
            current_page: 1,
            last_page: 1,
            in_flight: None,
        }
    }

    pub const fn current_page(&self) -> u32 {
        self.current_page
    }

    pub const fn last_page(&self) -> u32 {
        self.last_page
    }

    pub const fn in_flight(&self) -> Option<u32> {
        self.in_flight
    }

    pub const fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    pub const fn is_exhausted(&self) -> bool {
        self.current_page > self.last_page
    }

    /// Marks `page` as in flight if the guard allows it.
    pub fn begin(&mut self, page: u32) -> Result<(), PageDenied> {
        if let Some(pending) = self.in_flight {
            return Err(PageDenied::InFlight(pending));
        }
        if self.is_exhausted() {
            return Err(PageDenied::Exhausted);
        }
        if page != self.current_page {
            return Err(PageDenied::OutOfOrder {
                requested: page,
                expected: self.current_page,
            });
        }

        self.in_flight = Some(page);
        Ok(())
    }

    /// Records a successful response for the in-flight page.
    ///
    /// Returns `false` (and changes nothing) if `page` is not the one in flight.
    pub fn complete(&mut self, page: u32, reported_last_page: u32) -> bool {
        if self.in_flight != Some(page) {
            return false;
        }

        self.in_flight = None;
        self.current_page = page + 1;
        // The catalog may shrink between requests; never let the cursor run
        // more than one page past the end.
        self.last_page = reported_last_page.max(page);
        true
    }

    /// Clears the guard after a failed request; the same page is retried next time.
    pub fn fail(&mut self, page: u32) -> bool {
        if self.in_flight != Some(page) {
            return false;
        }

        self.in_flight = None;
        true
    }
}

impl Default for PaginationCursor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let cursor = PaginationCursor::new();
        assert_eq!(cursor.current_page(), 1);
        assert_eq!(cursor.last_page(), 1);
        assert!(!cursor.is_loading());
        assert!(!cursor.is_exhausted());
    }

    #[test]
    fn test_single_flight_guard() {
        let mut cursor = PaginationCursor::new();
        cursor.begin(1).unwrap();

        assert_eq!(cursor.begin(1), Err(PageDenied::InFlight(1)));
        assert_eq!(cursor.begin(2), Err(PageDenied::InFlight(1)));

        assert!(cursor.complete(1, 3));
        assert_eq!(cursor.current_page(), 2);
        cursor.begin(2).unwrap();
        assert_eq!(cursor.begin(3), Err(PageDenied::InFlight(2)));
    }

    #[test]
    fn test_exhaustion_after_last_page() {
        let mut cursor = PaginationCursor::new();
        cursor.begin(1).unwrap();
        assert!(cursor.complete(1, 2));
        cursor.begin(2).unwrap();
        assert!(cursor.complete(2, 2));

        assert!(cursor.is_exhausted());
        assert_eq!(cursor.current_page(), cursor.last_page() + 1);
        assert_eq!(cursor.begin(3), Err(PageDenied::Exhausted));
    }

    #[test]
    fn test_failure_keeps_page_for_retry() {
        let mut cursor = PaginationCursor::new();
        cursor.begin(1).unwrap();
        assert!(cursor.fail(1));

        assert!(!cursor.is_loading());
        assert_eq!(cursor.current_page(), 1);
        cursor.begin(1).unwrap();
    }

    #[test]
    fn test_stale_completion_is_ignored() {
        let mut cursor = PaginationCursor::new();
        assert!(!cursor.complete(1, 5));
        cursor.begin(1).unwrap();
        assert!(!cursor.complete(2, 5));
        assert!(!cursor.fail(3));
        assert_eq!(cursor.in_flight(), Some(1));
    }

    #[test]
    fn test_out_of_order_request_denied() {
        let mut cursor = PaginationCursor::new();
        assert_eq!(
            cursor.begin(3),
            Err(PageDenied::OutOfOrder {
                requested: 3,
                expected: 1
            })
        );
    }

    #[test]
    fn test_shrinking_catalog_stays_bounded() {
        let mut cursor = PaginationCursor::new();
        cursor.begin(1).unwrap();
        cursor.complete(1, 4);
        cursor.begin(2).unwrap();
        cursor.complete(2, 1);

        assert!(cursor.is_exhausted());
        assert!(cursor.current_page() <= cursor.last_page() + 1);
    }
}
