//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No `sqlx` types in any signature
//! - Traits are minimal and CRUD-focused for repositories

pub mod advert_repository;

use thiserror::Error;

use crate::validation::{QueryError, ValidationError};

pub use advert_repository::AdvertRepository;

/// Domain-specific errors for repository operations.
///
/// This error type abstracts away storage implementation details (e.g., sqlx errors)
/// and provides a clean interface for services to handle storage failures.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The requested entity was not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// An entity with the same unique name already exists.
    #[error("Already exists: {0}")]
    AlreadyExists(String),

    /// A constraint other than name uniqueness was violated.
    #[error("Constraint violation: {0}")]
    Constraint(String),

    /// Storage backend error (connection, transaction, query).
    #[error("Storage error: {0}")]
    Storage(String),
}

/// Core error type for semantic domain errors.
///
/// Adapters map this to their own error types (HTTP status codes, log levels).
/// Every variant except `Storage` is an expected outcome of a well-formed
/// request; see [`CoreError::is_expected`].
#[derive(Debug, Error)]
pub enum CoreError {
    /// Another advert already uses this name.
    #[error("item with name '{0}' already exists")]
    NameAlreadyExists(String),

    /// No advert with this ID.
    #[error("no content found with id: {0}")]
    ItemNotExists(i64),

    /// The store holds no adverts at all. Not a failure.
    #[error("there are no items")]
    NoItems,

    /// Advert fields failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Query string failed validation.
    #[error(transparent)]
    Query(#[from] QueryError),

    /// A storage constraint rejected the data (e.g. a duplicated photo URL).
    #[error("constraint violated: {0}")]
    Constraint(String),

    /// Unexpected storage failure, with the operation that hit it.
    #[error("{context}: {source}")]
    Storage {
        context: &'static str,
        #[source]
        source: RepositoryError,
    },
}

impl CoreError {
    /// Wrap an unexpected repository failure with call-site context.
    #[must_use]
    pub const fn storage(context: &'static str, source: RepositoryError) -> Self {
        Self::Storage { context, source }
    }

    /// Whether this error is a normal domain outcome rather than a fault.
    #[must_use]
    pub const fn is_expected(&self) -> bool {
        !matches!(self, Self::Storage { .. })
    }
}
