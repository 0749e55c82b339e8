//! Live-feed content assembly for broadcasts.
//!
//! Reads the persisted state of a broadcast (a live-blog event keyed by its
//! public article identifier) and assembles the client-facing aggregates:
//! broadcast metadata, info texts, sport score history, header sort order,
//! and published thread comments. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
