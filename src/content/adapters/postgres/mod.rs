//! `PostgreSQL` adapter for broadcast content reads.

pub mod queries;
mod repository;

pub use repository::{ContentPgPool, PostgresContentRepository, StatementTimeout};
