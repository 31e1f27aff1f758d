//! Presentation shell.
//!
//! Turns a [`ViewSnapshot`](crate::state::ViewSnapshot) into text. Holds no state and
//! makes no decisions; everything shown is already computed by the session.

pub mod table;

pub use table::{render_table, EMPTY_MESSAGE};
