//! Port contracts for broadcast content assembly.
//!
//! Ports define infrastructure-agnostic interfaces used by content services.

pub mod repository;

pub use repository::{
    Assembled, BroadcastContentRepository, ContentRepositoryError, ContentRepositoryResult,
};

#[cfg(test)]
pub use repository::MockBroadcastContentRepository;
