//! Advert service - orchestrates advert CRUD operations.

use std::sync::Arc;

use chrono::Utc;
use tracing::debug;

use crate::domain::{
    Advert, AdvertInput, AdvertSummary, CREATED_AT_FORMAT, ListQuery, NewAdvert, Page,
};
use crate::ports::{AdvertRepository, CoreError, RepositoryError};
use crate::validation::{validate_advert_patch, validate_new_advert};

use super::pagination::paginate;

/// Service for advert operations.
///
/// Validates input, stamps creation time, and translates repository
/// outcomes into domain errors. Storage details stay behind the injected
/// `AdvertRepository`.
pub struct AdvertService {
    repo: Arc<dyn AdvertRepository>,
}

impl AdvertService {
    /// Create a new advert service with the given repository.
    pub fn new(repo: Arc<dyn AdvertRepository>) -> Self {
        Self { repo }
    }

    /// Validate and persist a new advert. Returns the assigned ID.
    pub async fn create(&self, input: AdvertInput) -> Result<i64, CoreError> {
        validate_new_advert(&input)?;

        let created_at = Utc::now().format(CREATED_AT_FORMAT).to_string();
        let advert = NewAdvert::from_input(input, created_at);

        match self.repo.store(&advert).await {
            Ok(stored) => {
                debug!(id = stored.id, name = %stored.name, "advert created");
                Ok(stored.id)
            }
            Err(RepositoryError::AlreadyExists(_)) => Err(CoreError::NameAlreadyExists(advert.name)),
            Err(RepositoryError::Constraint(msg)) => Err(CoreError::Constraint(msg)),
            Err(e) => Err(CoreError::storage("AdvertService - Create", e)),
        }
    }

    /// Get an advert with all of its photo URLs.
    pub async fn get_by_id(&self, id: i64) -> Result<Advert, CoreError> {
        self.repo.get_by_id(id).await.map_err(|e| match e {
            RepositoryError::NotFound(_) => CoreError::ItemNotExists(id),
            e => CoreError::storage("AdvertService - GetById", e),
        })
    }

    /// List adverts, sorted and paged per `query`.
    ///
    /// Returns `Err(CoreError::NoItems)` when the store is empty.
    pub async fn get_all(&self, query: &ListQuery) -> Result<Page<AdvertSummary>, CoreError> {
        let adverts = self
            .repo
            .fetch()
            .await
            .map_err(|e| CoreError::storage("AdvertService - GetAll", e))?;

        if adverts.is_empty() {
            return Err(CoreError::NoItems);
        }
        Ok(paginate(adverts, query))
    }

    /// Apply a partial update to an existing advert.
    ///
    /// Empty or zero fields in `patch` leave the stored value unchanged.
    pub async fn update(&self, id: i64, patch: AdvertInput) -> Result<(), CoreError> {
        validate_advert_patch(&patch)?;

        let mut advert = self.get_by_id(id).await?;
        advert.apply_patch(patch);

        match self.repo.update(&advert).await {
            Ok(()) => {
                debug!(id, "advert updated");
                Ok(())
            }
            Err(RepositoryError::NotFound(_)) => Err(CoreError::ItemNotExists(id)),
            Err(RepositoryError::AlreadyExists(_)) => Err(CoreError::NameAlreadyExists(advert.name)),
            Err(RepositoryError::Constraint(msg)) => Err(CoreError::Constraint(msg)),
            Err(e) => Err(CoreError::storage("AdvertService - Update", e)),
        }
    }

    /// Delete an advert and its photo URLs.
    pub async fn delete(&self, id: i64) -> Result<(), CoreError> {
        self.repo.delete(id).await.map_err(|e| match e {
            RepositoryError::NotFound(_) => CoreError::ItemNotExists(id),
            e => CoreError::storage("AdvertService - Delete", e),
        })
    }
}
