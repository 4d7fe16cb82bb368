//! SQLite backend for the Roster student store.
//!
//! Wraps [`tokio_rusqlite`] so all database access runs on a dedicated thread
//! without blocking the async runtime. Each student is one row; its nested
//! parts (address, subject list) are kept as JSON documents in TEXT columns.

mod encode;
mod schema;
mod store;

pub mod error;

pub use error::{Error, Result};
pub use store::SqliteStore;
