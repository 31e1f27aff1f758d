//! Session state: incremental loading and the view session context.
//!
//! The loader is the only component that suspends (on the remote fetch); everything the
//! session derives from it is recomputed synchronously from a store snapshot.

pub mod loader;
pub mod page_size;
pub mod session;

// Re-export for convenience
pub use loader::{IncrementalLoader, LoadOutcome, LoaderView, SkipReason};
pub use page_size::next_page_size;
pub use session::{SessionOptions, ViewSession, ViewSnapshot};
