//! Client-side pagination over the derived view.
//!
//! Client pages are independent of server page boundaries. Whenever the page count is
//! recomputed and the current index falls outside it, the index goes back to 1, never
//! to the last page.

use crate::model::Record;
use std::num::NonZeroUsize;

/// Requested window into the filtered view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewPage {
    page_size: NonZeroUsize,
    page_index: usize,
}

impl ViewPage {
    /// First page of `page_size` records.
    pub fn new(page_size: NonZeroUsize) -> Self {
        Self {
            page_size,
            page_index: 1,
        }
    }

    /// Page `page_index` of `page_size` records. An index of 0 becomes 1.
    pub fn at(page_size: NonZeroUsize, page_index: usize) -> Self {
        Self {
            page_size,
            page_index: page_index.max(1),
        }
    }

    /// Records per client page.
    pub fn page_size(&self) -> NonZeroUsize {
        self.page_size
    }

    /// 1-based client page index.
    pub fn page_index(&self) -> usize {
        self.page_index
    }

    /// Same index with a different page size.
    pub fn with_page_size(self, page_size: NonZeroUsize) -> Self {
        Self { page_size, ..self }
    }

    /// Same page size at a different index. An index of 0 becomes 1.
    pub fn with_page_index(self, page_index: usize) -> Self {
        Self::at(self.page_size, page_index)
    }
}

/// Visible slice of the view plus the page count it was cut from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSlice {
    /// Records on the requested page; empty when the index is out of range.
    pub visible: Vec<Record>,
    /// `max(1, ceil(len / page_size))`.
    pub page_count: usize,
}

/// `max(1, ceil(len / page_size))`.
pub fn page_count(len: usize, page_size: NonZeroUsize) -> usize {
    len.div_ceil(page_size.get()).max(1)
}

/// Slice `filtered` to the requested page.
///
/// An index past the last page yields an empty slice; see [`reconcile`].
pub fn paginate(filtered: &[Record], page: ViewPage) -> PageSlice {
    let size = page.page_size.get();
    let start = (page.page_index - 1).saturating_mul(size);
    let end = start.saturating_add(size).min(filtered.len());

    let visible = filtered.get(start..end).map(<[Record]>::to_vec).unwrap_or_default();

    PageSlice {
        visible,
        page_count: page_count(filtered.len(), page.page_size),
    }
}

/// Reset the page index to 1 when it exceeds `page_count`.
pub fn reconcile(page: ViewPage, page_count: usize) -> ViewPage {
    if page.page_index > page_count {
        page.with_page_index(1)
    } else {
        page
    }
}
