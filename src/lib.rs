//! User directory viewer (userdir)
//!
//! Searchable, filterable, sortable, paginated view over records loaded page by page
//! from a remote collection endpoint.
//!
//! Pure core, thin shell: `model` and `view_state` are pure, `state` owns the one
//! suspending operation (the page fetch), and `source`, `view`, `config` and `logging`
//! are the I/O edges.

pub mod config;
pub mod logging;
pub mod model;
pub mod source;
pub mod state;
pub mod view;
pub mod view_state;

#[cfg(test)]
mod test_harness;
