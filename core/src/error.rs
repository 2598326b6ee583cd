//! Error types for the items domain.
//!
//! # Design
//! There is no not-found variant. A repository answers an unknown id with
//! `Ok(None)` and the caller maps that to its own response.

use thiserror::Error;

/// Failures reported by an `ItemsRepository` backend.
#[derive(Debug, Clone, Error)]
pub enum RepositoryError {
    /// The backing store failed to complete the operation.
    #[error("storage failure: {0}")]
    Storage(String),
}

/// Reasons an input DTO is rejected before it reaches the repository.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("name must not be empty")]
    EmptyName,

    #[error("price must be a non-negative number, got {0}")]
    InvalidPrice(f64),
}
