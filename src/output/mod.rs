//! Output module for persisting and displaying scraped records
//!
//! The spreadsheet writer serializes records straight through serde, so
//! the column set and order always follow [`crate::extract::ProfileRecord`]'s
//! field order.

mod spreadsheet;

pub use spreadsheet::{render_table, write_spreadsheet};
