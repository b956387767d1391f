//! Composition utilities for building the advert service with `SQLite` backends.
//!
//! This module provides factory functions for wiring up the application
//! with `SQLite` repositories. It is focused purely on construction and
//! should not contain any domain logic.

use sqlx::SqlitePool;
use std::path::Path;
use std::sync::Arc;

use advert_core::AdvertService;

use crate::repositories::SqliteAdvertRepository;
use crate::setup::setup_database;

/// Factory for creating repository and service instances with `SQLite` backends.
///
/// This struct provides composition utilities only, no domain logic.
pub struct CoreFactory;

impl CoreFactory {
    /// Open (or create) the database file and apply the schema.
    pub async fn create_pool(db_path: &Path) -> anyhow::Result<SqlitePool> {
        setup_database(db_path).await
    }

    /// Create an advert repository from a pool.
    pub fn advert_repository(pool: SqlitePool) -> Arc<SqliteAdvertRepository> {
        Arc::new(SqliteAdvertRepository::new(pool))
    }

    /// Build an `AdvertService` backed by `SQLite`.
    ///
    /// This is the recommended way for adapters to obtain the service.
    ///
    /// # Example
    ///
    /// ```ignore
    /// use advert_db::{CoreFactory, setup_database};
    ///
    /// let pool = setup_database(&db_path).await?;
    /// let service = CoreFactory::build_advert_service(pool);
    /// ```
    pub fn build_advert_service(pool: SqlitePool) -> AdvertService {
        AdvertService::new(Self::advert_repository(pool))
    }
}

/// Test database helper for integration tests.
///
/// Provides an in-memory `SQLite` database with the production schema
/// already applied.
#[cfg(any(test, feature = "test-utils"))]
pub struct TestDb {
    pool: SqlitePool,
}

#[cfg(any(test, feature = "test-utils"))]
impl TestDb {
    /// Create a new in-memory test database with full schema.
    pub async fn new() -> anyhow::Result<Self> {
        let pool = crate::setup::setup_test_database().await?;
        Ok(Self { pool })
    }

    /// Create an advert repository using this test database.
    pub fn advert_repository(&self) -> SqliteAdvertRepository {
        SqliteAdvertRepository::new(self.pool.clone())
    }

    /// Build an `AdvertService` using this test database.
    pub fn advert_service(&self) -> AdvertService {
        CoreFactory::build_advert_service(self.pool.clone())
    }
}
