//! Storage adapters for broadcast content.
//!
//! This module provides concrete implementations of the
//! [`BroadcastContentRepository`] port. Adapters own every storage concern;
//! rows are decoded into [`models`] with nullable columns and turned into
//! domain entities by the shared assembly in [`conversion`].
//!
//! # Available Adapters
//!
//! - [`memory::InMemoryContentStore`]: seeded rows for tests and fixtures
//! - [`postgres::PostgresContentRepository`]: `PostgreSQL` reads through
//!   Diesel
//!
//! [`BroadcastContentRepository`]: crate::content::ports::BroadcastContentRepository

pub mod conversion;
pub mod memory;
pub mod models;
pub mod postgres;
