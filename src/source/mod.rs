//! Paged record sources.
//!
//! This module provides the remote paged-fetch capability the loader consumes:
//! - [`PageFetcher`]: one `fetch_page` call, success or [`FetchError`]
//! - [`HttpFetcher`]: the collection endpoint over HTTP
//! - [`StaticFetcher`]: pre-built pages served from memory

use crate::model::{FetchError, Record};
use async_trait::async_trait;
use std::num::NonZeroUsize;

pub mod http;
pub mod memory;

pub use http::{HttpFetcher, HttpFetcherOptions};
pub use memory::StaticFetcher;

/// One server page of records plus total-page metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedPage {
    /// Records in server order.
    pub records: Vec<Record>,
    /// Total number of server pages, always at least 1.
    pub total_pages: u32,
}

impl FetchedPage {
    /// Page of `records`; a `total_pages` of 0 is read as 1.
    pub fn new(records: Vec<Record>, total_pages: u32) -> Self {
        Self {
            records,
            total_pages: total_pages.max(1),
        }
    }
}

/// Remote paged-fetch capability.
///
/// Implementations must tolerate being called repeatedly with the same arguments;
/// the loader may re-request a page.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch 1-based server page `page` with `per_page` records per page.
    async fn fetch_page(&self, page: u32, per_page: NonZeroUsize) -> Result<FetchedPage, FetchError>;
}

#[async_trait]
impl<F: PageFetcher + ?Sized> PageFetcher for std::sync::Arc<F> {
    async fn fetch_page(&self, page: u32, per_page: NonZeroUsize) -> Result<FetchedPage, FetchError> {
        (**self).fetch_page(page, per_page).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetched_page_clamps_total_to_one() {
        let page = FetchedPage::new(Vec::new(), 0);
        assert_eq!(page.total_pages, 1);
    }

    #[tokio::test]
    async fn arc_fetcher_delegates() {
        let inner = std::sync::Arc::new(StaticFetcher::new(vec![vec![Record::new(1)]]));
        let page = inner
            .fetch_page(1, NonZeroUsize::MIN)
            .await
            .expect("page 1 exists");
        assert_eq!(page.records, vec![Record::new(1)]);
        assert_eq!(inner.calls(), 1);
    }
}
