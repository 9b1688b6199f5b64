//! Catalog browsing session state.
//!
//! Owns the accumulated character collection and drives paged fetching.
//! Consumers read published snapshots and mutate only through the three
//! operations; change notifications go out over a watch channel for UI
//! updates.

use std::sync::Arc;

use tokio::sync::{Mutex, watch};
use tracing::{debug, warn};

use rickdex_core::{Character, CharacterPage, CharacterStatus, RequestError};
use rickdex_fetch::{ApiRequest, RequestClient};

/// First page number the catalog serves.
const FIRST_PAGE: u32 = 1;

/// Status code the catalog answers past the last page.
const END_OF_PAGES_STATUS: u16 = 404;

// ============================================================================
// Snapshot
// ============================================================================

/// Read-only view of a session, published to consumers.
#[derive(Debug, Clone, Default)]
pub struct CatalogSnapshot {
    /// Characters currently exposed, per the active filter.
    pub visible: Vec<Character>,
    /// True while a page fetch is in flight.
    pub loading: bool,
    /// The most recently surfaced error, if any.
    pub last_error: Option<RequestError>,
    /// True once the server has signaled no further pages.
    pub exhausted: bool,
    /// The status filter currently applied, if any.
    pub active_filter: Option<CharacterStatus>,
}

// ============================================================================
// Inner State
// ============================================================================

/// Internal state for a session. All mutation happens under one lock so
/// consumers never observe a partially updated cache/cursor/exhausted triple.
struct SessionInner {
    /// Every character fetched so far, across all pages, unfiltered.
    /// Append-only for the lifetime of the session.
    cache: Vec<Character>,
    /// Characters exposed to consumers, per the active filter.
    visible: Vec<Character>,
    /// Next page number to request.
    cursor: u32,
    /// True once the server signaled no further pages. Permanent for the
    /// session.
    exhausted: bool,
    /// True while a fetch is in flight. Gates re-entry.
    loading: bool,
    /// The most recently surfaced error.
    last_error: Option<RequestError>,
    /// The status filter currently applied. "No filter" is `None` here;
    /// the empty string exists only at the wire boundary.
    active_filter: Option<CharacterStatus>,
}

impl SessionInner {
    fn new() -> Self {
        Self {
            cache: Vec::new(),
            visible: Vec::new(),
            cursor: FIRST_PAGE,
            exhausted: false,
            loading: false,
            last_error: None,
            active_filter: None,
        }
    }

    /// Recomputes `visible` from `cache`, preserving order.
    fn refresh_visible(&mut self) {
        self.visible = match self.active_filter {
            Some(status) => self
                .cache
                .iter()
                .filter(|c| c.status == status)
                .cloned()
                .collect(),
            None => self.cache.clone(),
        };
    }

    /// Folds a successfully fetched page into the session.
    fn apply_page(&mut self, page: u32, delivery: CharacterPage) {
        // A page whose first id is already cached is a duplicate delivery of
        // an already-seen page. Only the first id is compared; partial
        // overlap is not detected.
        let duplicate = delivery
            .characters
            .first()
            .is_some_and(|first| self.cache.iter().any(|c| c.id == first.id));
        if duplicate {
            debug!(page, "Duplicate page delivery, discarding");
            return;
        }

        let fetched = delivery.characters.len();
        let has_next = delivery.has_next();

        self.cache.extend(delivery.characters);
        self.refresh_visible();
        self.exhausted = !has_next;
        if !self.exhausted {
            self.cursor += 1;
        }

        debug!(
            page,
            fetched,
            total = self.cache.len(),
            exhausted = self.exhausted,
            "Page appended"
        );
    }

    /// Folds a failed fetch into the session.
    fn apply_failure(&mut self, page: u32, err: RequestError) {
        if err.status_code() == Some(END_OF_PAGES_STATUS) {
            // The catalog answers 404 past the last page; not a fault.
            debug!(page, "Server signaled end of pages");
            self.exhausted = true;
            return;
        }

        warn!(page, error = %err, "Fetch failed");
        self.last_error = Some(err);
    }

    fn snapshot(&self) -> CatalogSnapshot {
        CatalogSnapshot {
            visible: self.visible.clone(),
            loading: self.loading,
            last_error: self.last_error.clone(),
            exhausted: self.exhausted,
            active_filter: self.active_filter,
        }
    }
}

// ============================================================================
// Catalog Session
// ============================================================================

/// A single browsing session over the character catalog.
///
/// The session accumulates pages into an in-memory collection and applies
/// the status filter client-side, over already-fetched data. Filtering
/// trades completeness for responsiveness: a filter may under-represent
/// items not yet paged in.
///
/// Cheap to clone; clones share the same state. Observable via
/// [`subscribe`](Self::subscribe) for UI updates.
pub struct CatalogSession {
    client: RequestClient,
    inner: Arc<Mutex<SessionInner>>,
    notify: watch::Sender<CatalogSnapshot>,
}

impl CatalogSession {
    /// Creates a session over the given request client.
    pub fn new(client: RequestClient) -> Self {
        let (notify, _) = watch::channel(CatalogSnapshot::default());
        Self {
            client,
            inner: Arc::new(Mutex::new(SessionInner::new())),
            notify,
        }
    }

    // ========================================================================
    // Fetching
    // ========================================================================

    /// Fetches the next catalog page and folds it into the session.
    ///
    /// A no-op while a fetch is already in flight or once the catalog is
    /// exhausted. A 404 from the server is the catalog's end-of-pages signal
    /// and becomes `exhausted` rather than an error; every other failure
    /// lands in `last_error` and leaves the cursor in place, so invoking
    /// this again retries the same page.
    pub async fn fetch_next_page(&self) {
        let (page, filter) = {
            let mut inner = self.inner.lock().await;
            if inner.loading || inner.exhausted {
                debug!(
                    loading = inner.loading,
                    exhausted = inner.exhausted,
                    "Fetch skipped"
                );
                return;
            }
            inner.loading = true;
            inner.last_error = None;
            (inner.cursor, inner.active_filter)
        };
        self.publish().await;

        let request = ApiRequest::character_page(page, filter);
        let result: Result<CharacterPage, RequestError> = self.client.perform(&request).await;

        {
            let mut inner = self.inner.lock().await;
            match result {
                Ok(delivery) => inner.apply_page(page, delivery),
                Err(err) => inner.apply_failure(page, err),
            }
            inner.loading = false;
        }
        self.publish().await;
    }

    // ========================================================================
    // Filtering
    // ========================================================================

    /// Restricts the visible collection to characters with the given status.
    ///
    /// Operates over already-fetched data only; never triggers a fetch and
    /// never touches the cursor or exhaustion.
    pub async fn apply_filter(&self, status: CharacterStatus) {
        {
            let mut inner = self.inner.lock().await;
            inner.active_filter = Some(status);
            inner.refresh_visible();
        }
        self.publish().await;
        debug!(filter = %status, "Filter applied");
    }

    /// Removes the active filter and exposes the full collection again.
    pub async fn clear_filter(&self) {
        {
            let mut inner = self.inner.lock().await;
            inner.active_filter = None;
            inner.refresh_visible();
        }
        self.publish().await;
        debug!("Filter cleared");
    }

    // ========================================================================
    // Snapshot Access
    // ========================================================================

    /// Returns the current snapshot.
    pub async fn snapshot(&self) -> CatalogSnapshot {
        self.inner.lock().await.snapshot()
    }

    /// Characters currently exposed, per the active filter.
    pub async fn visible(&self) -> Vec<Character> {
        self.inner.lock().await.visible.clone()
    }

    /// True while a page fetch is in flight.
    pub async fn is_loading(&self) -> bool {
        self.inner.lock().await.loading
    }

    /// The most recently surfaced error, if any.
    pub async fn last_error(&self) -> Option<RequestError> {
        self.inner.lock().await.last_error.clone()
    }

    /// True while the server may still have further pages.
    pub async fn has_more(&self) -> bool {
        !self.inner.lock().await.exhausted
    }

    /// The status filter currently applied, if any.
    pub async fn active_filter(&self) -> Option<CharacterStatus> {
        self.inner.lock().await.active_filter
    }

    // ========================================================================
    // Observable
    // ========================================================================

    /// Subscribes to session changes.
    pub fn subscribe(&self) -> watch::Receiver<CatalogSnapshot> {
        self.notify.subscribe()
    }

    /// Publishes the current snapshot to subscribers.
    async fn publish(&self) {
        let snapshot = self.inner.lock().await.snapshot();
        let _ = self.notify.send(snapshot);
    }
}

impl Clone for CatalogSession {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            inner: Arc::clone(&self.inner),
            notify: self.notify.clone(),
        }
    }
}
