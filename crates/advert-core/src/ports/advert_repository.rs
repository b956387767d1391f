//! Advert repository trait definition.
//!
//! This port defines the interface for advert persistence operations.
//! Implementations must handle all storage details internally.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::{Advert, AdvertSummary, NewAdvert};

/// Repository for advert persistence operations.
///
/// An advert and its photo URLs form one unit: every write touches both
/// inside a single transaction, and a failed write leaves nothing behind.
///
/// # Design Rules
///
/// - No `sqlx` types in signatures
/// - Uniqueness failures surface as `RepositoryError::AlreadyExists`, never
///   as a storage error that callers would have to inspect
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AdvertRepository: Send + Sync {
    /// Insert a new advert and its photo URLs.
    ///
    /// Returns the persisted advert with its assigned ID.
    /// Returns `Err(RepositoryError::AlreadyExists)` if the name is taken.
    async fn store(&self, advert: &NewAdvert) -> Result<Advert, RepositoryError>;

    /// Get an advert with all of its photo URLs, in insertion order.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the advert doesn't exist.
    async fn get_by_id(&self, id: i64) -> Result<Advert, RepositoryError>;

    /// List every advert (summary fields only) in creation order.
    async fn fetch(&self) -> Result<Vec<AdvertSummary>, RepositoryError>;

    /// Overwrite an advert's mutable fields and replace its photo URLs.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the advert doesn't exist.
    /// Returns `Err(RepositoryError::AlreadyExists)` if the new name is taken.
    async fn update(&self, advert: &Advert) -> Result<(), RepositoryError>;

    /// Delete an advert together with its photo URLs.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the advert doesn't exist.
    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
}
