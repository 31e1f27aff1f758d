//! In-memory page source.
//!
//! Serves a fixed list of pages; page `n` is `pages[n - 1]` and the total is the number of
//! pages. Individual pages can be scripted to fail once, which is how loader failure paths
//! are exercised without a network.

use crate::model::{FetchError, Record};
use crate::source::{FetchedPage, PageFetcher};
use async_trait::async_trait;
use std::collections::HashMap;
use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// [`PageFetcher`] serving pre-built pages from memory.
#[derive(Debug, Default)]
pub struct StaticFetcher {
    pages: Vec<Vec<Record>>,
    failures: Mutex<HashMap<u32, FetchError>>,
    calls: AtomicUsize,
}

impl StaticFetcher {
    /// Fetcher whose page `n` is `pages[n - 1]`.
    pub fn new(pages: Vec<Vec<Record>>) -> Self {
        Self {
            pages,
            failures: Mutex::new(HashMap::new()),
            calls: AtomicUsize::new(0),
        }
    }

    /// Make the next request for `page` fail with `error`.
    pub fn fail_once(&self, page: u32, error: FetchError) {
        self.failures
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .insert(page, error);
    }

    /// Number of `fetch_page` calls served so far, failures included.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn total_pages(&self) -> u32 {
        u32::try_from(self.pages.len()).unwrap_or(u32::MAX).max(1)
    }
}

#[async_trait]
impl PageFetcher for StaticFetcher {
    async fn fetch_page(&self, page: u32, _per_page: NonZeroUsize) -> Result<FetchedPage, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let scripted = self
            .failures
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .remove(&page);
        if let Some(error) = scripted {
            return Err(error);
        }

        // Past-the-end pages come back empty, like the HTTP endpoint does
        let records = page
            .checked_sub(1)
            .and_then(|index| self.pages.get(index as usize))
            .cloned()
            .unwrap_or_default();

        Ok(FetchedPage::new(records, self.total_pages()))
    }
}
