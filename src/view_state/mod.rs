//! View-state layer - filtering, sorting and client pagination
//!
//! Pure functions over a snapshot of the loaded records. Nothing here owns state;
//! callers pass the query and page window in by value.
//!
//! # Module Structure
//!
//! - `query`: ViewQuery, SortField, SortDirection - the search/filter/sort intent
//! - `engine`: compute_view - conjunctive filters followed by a stable sort
//! - `paginator`: ViewPage, paginate, reconcile - fixed-size client pages

pub mod engine;
pub mod paginator;
pub mod query;

pub use engine::{active_filters, apply_filters, compute_view, sort_records, RecordFilter};
pub use paginator::{page_count, paginate, reconcile, PageSlice, ViewPage};
pub use query::{SortDirection, SortField, ViewQuery};
