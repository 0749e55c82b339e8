//! In-memory adapter implementations for testing.
//!
//! The store holds rows exactly as the `PostgreSQL` queries would return
//! them and runs them through the same conversion and assembly, so
//! row-order and partial-result behaviour can be exercised without a
//! database.

mod content_store;

pub use content_store::{InMemoryContentStore, MalformedRow, RowKind};
