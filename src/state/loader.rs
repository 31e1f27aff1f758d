//! Incremental server page loading.
//!
//! The loader owns the session's [`RecordStore`] and [`FetchCursor`] and advances them one
//! server page at a time. At most one fetch is in flight: the loading flag is taken before
//! the fetch starts and released by a drop guard, so it clears on success, on failure, and
//! when the fetch future is dropped or panics. Calls made while a fetch is in flight are
//! dropped, not queued.

use crate::model::{FetchCursor, FetchError, Record, RecordStore};
use crate::source::PageFetcher;
use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::{debug, info, warn};

/// Why a load request did nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Another fetch is still running.
    InFlight,
    /// Every server page has been consumed.
    Exhausted,
}

/// Result of one load request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Server page `page` was fetched and merged.
    Loaded {
        /// Server page number that was fetched.
        page: u32,
        /// Records in the page, duplicates included.
        received: usize,
        /// Cursor after the page was recorded.
        cursor: FetchCursor,
    },
    /// No fetch was issued and no state changed.
    Skipped(SkipReason),
    /// The fetch failed; store and cursor are unchanged.
    Failed(FetchError),
}

impl LoadOutcome {
    /// True for [`LoadOutcome::Loaded`].
    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadOutcome::Loaded { .. })
    }
}

/// Store, cursor and last error read together under one lock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderView {
    /// Loaded records in first-insertion order.
    pub records: Vec<Record>,
    /// Server pages consumed so far.
    pub cursor: FetchCursor,
    /// Failure of the most recent fetch, if it failed.
    pub last_error: Option<FetchError>,
    /// Whether a fetch was in flight when the view was taken.
    pub is_loading: bool,
}

#[derive(Debug, Default)]
struct LoaderState {
    store: RecordStore,
    cursor: FetchCursor,
    last_error: Option<FetchError>,
}

/// Holds the loading flag for the lifetime of one fetch.
struct LoadGuard<'a>(&'a AtomicBool);

impl<'a> LoadGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for LoadGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Sequential page advancement against a [`PageFetcher`].
#[derive(Debug)]
pub struct IncrementalLoader<F> {
    fetcher: F,
    state: Mutex<LoaderState>,
    loading: AtomicBool,
}

impl<F: PageFetcher> IncrementalLoader<F> {
    /// Loader with an empty store and a `{0, 1}` cursor.
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            state: Mutex::new(LoaderState::default()),
            loading: AtomicBool::new(false),
        }
    }

    /// Fetch server page 1 and merge it. Run once at startup; safe to retry after failure.
    pub async fn load_initial(&self, per_page: NonZeroUsize) -> LoadOutcome {
        let Some(_guard) = LoadGuard::acquire(&self.loading) else {
            debug!("Initial load skipped: fetch already in flight");
            return LoadOutcome::Skipped(SkipReason::InFlight);
        };

        self.fetch_and_merge(1, per_page).await
    }

    /// Fetch the page after the last one consumed.
    ///
    /// No-op while a fetch is in flight or once the cursor is exhausted.
    pub async fn load_next(&self, per_page: NonZeroUsize) -> LoadOutcome {
        let Some(_guard) = LoadGuard::acquire(&self.loading) else {
            debug!("Load more skipped: fetch already in flight");
            return LoadOutcome::Skipped(SkipReason::InFlight);
        };

        let cursor = self.cursor();
        if cursor.is_exhausted() {
            debug!(
                last_fetched = cursor.last_fetched(),
                total_pages = cursor.total_pages(),
                "Load more skipped: server pages exhausted"
            );
            return LoadOutcome::Skipped(SkipReason::Exhausted);
        }

        self.fetch_and_merge(cursor.next_page(), per_page).await
    }

    async fn fetch_and_merge(&self, page: u32, per_page: NonZeroUsize) -> LoadOutcome {
        self.lock().last_error = None;

        match self.fetcher.fetch_page(page, per_page).await {
            Ok(fetched) => {
                let received = fetched.records.len();
                let mut state = self.lock();
                state.store = state.store.merge(fetched.records);
                state.cursor = state.cursor.record_page(page, fetched.total_pages);

                info!(
                    page,
                    received,
                    total_loaded = state.store.len(),
                    total_pages = state.cursor.total_pages(),
                    "Server page merged"
                );

                LoadOutcome::Loaded {
                    page,
                    received,
                    cursor: state.cursor,
                }
            }
            Err(error) => {
                warn!(page, code = ?error.code(), error = %error, "Server page fetch failed");
                self.lock().last_error = Some(error.clone());
                LoadOutcome::Failed(error)
            }
        }
    }

    fn lock(&self) -> MutexGuard<'_, LoaderState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Whether a fetch is in flight.
    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::Acquire)
    }

    /// Current fetch cursor.
    pub fn cursor(&self) -> FetchCursor {
        self.lock().cursor
    }

    /// `cursor.last_fetched >= cursor.total_pages`.
    pub fn is_exhausted(&self) -> bool {
        self.cursor().is_exhausted()
    }

    /// Failure of the most recent fetch, cleared when the next one starts.
    pub fn last_error(&self) -> Option<FetchError> {
        self.lock().last_error.clone()
    }

    /// Distinct records loaded so far.
    pub fn total_loaded(&self) -> usize {
        self.lock().store.len()
    }

    /// Copy of the store as it is right now.
    pub fn store(&self) -> RecordStore {
        self.lock().store.clone()
    }

    /// Consistent view of store, cursor and last error.
    pub fn view(&self) -> LoaderView {
        let state = self.lock();
        LoaderView {
            records: state.store.to_vec(),
            cursor: state.cursor,
            last_error: state.last_error.clone(),
            is_loading: self.is_loading(),
        }
    }

    /// Snapshot of the loaded records in first-insertion order.
    pub fn records(&self) -> Vec<Record> {
        self.lock().store.to_vec()
    }

    /// The underlying page source.
    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
