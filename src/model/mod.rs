//! Domain model types (pure).
//!
//! Records, the deduplicating store, the server fetch cursor and the error taxonomy.

pub mod cursor;
pub mod error;
pub mod page_size;
pub mod record;
pub mod record_store;

// Re-export for convenience
pub use cursor::FetchCursor;
pub use error::{AppError, FetchError, InvalidRecord};
pub use page_size::{InvalidPageSize, PageSize};
pub use record::{RawRecord, Record, RecordId};
pub use record_store::RecordStore;
