//! Server-side fetch progress.

/// How many server pages have been consumed and how many exist.
///
/// Invariants: `total_pages >= 1`, `last_fetched <= total_pages`, and `last_fetched`
/// never decreases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchCursor {
    last_fetched: u32,
    total_pages: u32,
}

impl Default for FetchCursor {
    fn default() -> Self {
        Self {
            last_fetched: 0,
            total_pages: 1,
        }
    }
}

impl FetchCursor {
    /// Cursor before anything has been fetched: `{0, 1}`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Highest server page fetched so far; 0 before the first fetch.
    pub fn last_fetched(&self) -> u32 {
        self.last_fetched
    }

    /// Total server pages as last reported.
    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    /// Page number the next load-more action requests.
    pub fn next_page(&self) -> u32 {
        self.last_fetched.saturating_add(1)
    }

    /// True once every server page has been consumed.
    pub fn is_exhausted(&self) -> bool {
        self.last_fetched >= self.total_pages
    }

    /// Cursor after `page` was fetched successfully and reported `total_pages`.
    ///
    /// Re-fetching an earlier page does not move the cursor backwards. A total smaller than
    /// what has already been consumed is raised to keep `last_fetched <= total_pages`.
    pub fn record_page(self, page: u32, total_pages: u32) -> Self {
        let last_fetched = self.last_fetched.max(page);
        Self {
            last_fetched,
            total_pages: total_pages.max(1).max(last_fetched),
        }
    }
}
