//! Session context tying the loader to the derived view.
//!
//! ViewSession is created at session start and owns everything the presentation layer
//! talks to: the shared loader (record store + fetch cursor) and the current query and
//! page window. Every inbound operation recomputes the view, reconciles the page index,
//! and returns the resulting [`ViewSnapshot`].

use crate::model::{PageSize, Record};
use crate::source::PageFetcher;
use crate::state::loader::{IncrementalLoader, LoadOutcome};
use crate::state::page_size::next_page_size;
use crate::view_state::{compute_view, paginate, reconcile, ViewPage, ViewQuery};
use std::num::NonZeroUsize;
use std::sync::Arc;
use tracing::{debug, warn};

/// Session-level settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOptions {
    /// Base client page size; also the per-page size requested from the server.
    pub base_page_size: PageSize,
    /// Apply [`next_page_size`] after each successful load-more.
    pub auto_grow_page_size: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            base_page_size: PageSize::default(),
            auto_grow_page_size: true,
        }
    }
}

/// Everything the presentation layer can observe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewSnapshot {
    /// Records on the current client page.
    pub visible_records: Vec<Record>,
    /// 1-based client page index after reconciliation.
    pub page_index: usize,
    /// Client pages in the filtered view, at least 1.
    pub page_count: usize,
    /// Records per client page.
    pub page_size: usize,
    /// Records left after filtering.
    pub filtered_count: usize,
    /// Distinct records in the store.
    pub total_loaded_count: usize,
    /// Whether a fetch is in flight.
    pub is_loading: bool,
    /// Message of the last failed fetch.
    pub last_error_message: Option<String>,
    /// Every server page has been consumed.
    pub server_pages_exhausted: bool,
}

/// Explicit session context over one loader.
#[derive(Debug)]
pub struct ViewSession<F> {
    loader: Arc<IncrementalLoader<F>>,
    options: SessionOptions,
    query: ViewQuery,
    page: ViewPage,
}

impl<F: PageFetcher> ViewSession<F> {
    /// Session over a shared loader, on page 1 with an empty query.
    pub fn new(loader: Arc<IncrementalLoader<F>>, options: SessionOptions) -> Self {
        Self {
            loader,
            options,
            query: ViewQuery::default(),
            page: ViewPage::new(options.base_page_size.as_non_zero()),
        }
    }

    /// Session with a fresh loader over `fetcher`.
    pub fn with_fetcher(fetcher: F, options: SessionOptions) -> Self {
        Self::new(Arc::new(IncrementalLoader::new(fetcher)), options)
    }

    /// Shared loader owning the store and cursor.
    pub fn loader(&self) -> &Arc<IncrementalLoader<F>> {
        &self.loader
    }

    /// Current query.
    pub fn query(&self) -> &ViewQuery {
        &self.query
    }

    /// Current page window.
    pub fn page(&self) -> ViewPage {
        self.page
    }

    /// Settings this session was created with.
    pub fn options(&self) -> SessionOptions {
        self.options
    }

    fn base_page_size(&self) -> NonZeroUsize {
        self.options.base_page_size.as_non_zero()
    }

    // ===== Inbound operations =====

    /// Replace the query wholesale.
    pub fn set_query(&mut self, query: ViewQuery) -> ViewSnapshot {
        self.query = query;
        self.snapshot()
    }

    /// Change the client page size. A size of 0 is ignored.
    pub fn set_page_size(&mut self, page_size: usize) -> ViewSnapshot {
        match NonZeroUsize::new(page_size) {
            Some(size) => self.page = self.page.with_page_size(size),
            None => warn!("Ignoring page size of 0"),
        }
        self.snapshot()
    }

    /// Jump to a client page.
    ///
    /// An index past the last page goes back to page 1 on reconciliation; 0 is read as 1.
    pub fn set_page_index(&mut self, page_index: usize) -> ViewSnapshot {
        self.page = self.page.with_page_index(page_index);
        self.snapshot()
    }

    /// Step forward one client page, staying on the last page.
    pub fn next_page(&mut self) -> ViewSnapshot {
        let current = self.snapshot();
        let target = (current.page_index + 1).min(current.page_count);
        self.set_page_index(target)
    }

    /// Step back one client page, staying on the first page.
    pub fn prev_page(&mut self) -> ViewSnapshot {
        self.set_page_index(self.page.page_index().saturating_sub(1).max(1))
    }

    /// Flip ascending and descending.
    pub fn toggle_sort_direction(&mut self) -> ViewSnapshot {
        self.query.sort_direction = self.query.sort_direction.toggle();
        self.snapshot()
    }

    /// Fetch server page 1.
    pub async fn trigger_initial_load(&mut self) -> ViewSnapshot {
        self.loader.load_initial(self.base_page_size()).await;
        self.snapshot()
    }

    /// Fetch the next server page and, on success, apply the page-size policy.
    pub async fn trigger_load_more(&mut self) -> ViewSnapshot {
        let base = self.base_page_size();
        let outcome = self.loader.load_next(base).await;

        if let LoadOutcome::Loaded { cursor, .. } = outcome {
            if self.options.auto_grow_page_size {
                let grown = next_page_size(self.page.page_size(), cursor.last_fetched(), base);
                debug!(
                    from = self.page.page_size().get(),
                    to = grown.get(),
                    "Client page size after load more"
                );
                self.page = self.page.with_page_size(grown);
            }
        }

        self.snapshot()
    }

    // ===== Derivation =====

    /// Recompute the view, reconcile the page index, and report observable state.
    pub fn snapshot(&mut self) -> ViewSnapshot {
        let loaded = self.loader.view();
        let filtered = compute_view(&loaded.records, &self.query);

        let mut slice = paginate(&filtered, self.page);
        let reconciled = reconcile(self.page, slice.page_count);
        if reconciled != self.page {
            debug!(
                from = self.page.page_index(),
                page_count = slice.page_count,
                "Page index out of range, back to first page"
            );
            self.page = reconciled;
            slice = paginate(&filtered, self.page);
        }

        ViewSnapshot {
            visible_records: slice.visible,
            page_index: self.page.page_index(),
            page_count: slice.page_count,
            page_size: self.page.page_size().get(),
            filtered_count: filtered.len(),
            total_loaded_count: loaded.records.len(),
            is_loading: loaded.is_loading,
            last_error_message: loaded.last_error.map(|e| e.message()),
            server_pages_exhausted: loaded.cursor.is_exhausted(),
        }
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
