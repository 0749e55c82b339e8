//! Broadcast content: read-side assembly of live-blog broadcast feeds.
//!
//! This crate turns the normalized relational storage of a broadcast into
//! client-ready aggregates: broadcast metadata, info texts, sport score
//! history, header display order, and published comments with resolved
//! author identities.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Entities, value coalescing, and identity resolution
//! - **Ports**: The repository trait and its partial-result shape
//! - **Adapters**: `PostgreSQL` and in-memory implementations of the port
//! - **Services**: Whole-feed assembly with a degraded-feed policy
//!
//! # Modules
//!
//! - [`content`]: The content bounded context
//! - [`config`]: TOML and environment configuration, pool construction

pub mod config;
pub mod content;
