//! `SQLite` implementation of the `AdvertRepository` trait.

use async_trait::async_trait;
use sqlx::{SqliteConnection, SqlitePool};

use advert_core::{Advert, AdvertRepository, AdvertSummary, NewAdvert, RepositoryError};

use super::row_mappers::{ADVERT_SELECT_COLUMNS, AdvertRow};

/// `SQLite` implementation of the `AdvertRepository` trait.
///
/// Adverts live in `adverts`; their photo URLs live in `photo_urls`, one
/// row per URL with its position in the list. Every operation that touches
/// both tables runs in one transaction.
pub struct SqliteAdvertRepository {
    pool: SqlitePool,
}

impl SqliteAdvertRepository {
    /// Create a new `SQLite` advert repository.
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

fn storage(e: sqlx::Error) -> RepositoryError {
    RepositoryError::Storage(e.to_string())
}

/// Map `SQLx` write errors, separating uniqueness failures by table.
fn map_write_error(e: sqlx::Error, name: &str) -> RepositoryError {
    if let sqlx::Error::Database(db_err) = &e {
        let msg = db_err.message();
        if db_err.is_unique_violation() || msg.contains("UNIQUE constraint failed") {
            if msg.contains("adverts.name") {
                return RepositoryError::AlreadyExists(name.to_string());
            }
            return RepositoryError::Constraint(msg.to_string());
        }
    }
    storage(e)
}

async fn insert_photo_urls(
    conn: &mut SqliteConnection,
    advert_id: i64,
    urls: &[String],
    name: &str,
) -> Result<(), RepositoryError> {
    for (position, url) in (0_i64..).zip(urls) {
        sqlx::query("INSERT INTO photo_urls (advert_id, position, url) VALUES (?, ?, ?)")
            .bind(advert_id)
            .bind(position)
            .bind(url)
            .execute(&mut *conn)
            .await
            .map_err(|e| map_write_error(e, name))?;
    }
    Ok(())
}

#[async_trait]
impl AdvertRepository for SqliteAdvertRepository {
    async fn store(&self, advert: &NewAdvert) -> Result<Advert, RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(storage)?;

        let id: i64 = sqlx::query_scalar(
            "INSERT INTO adverts (name, description, price, main_photo_url, created_at)
             VALUES (?, ?, ?, ?, ?) RETURNING id",
        )
        .bind(&advert.name)
        .bind(&advert.description)
        .bind(advert.price)
        .bind(advert.main_photo_url())
        .bind(&advert.created_at)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| map_write_error(e, &advert.name))?;

        insert_photo_urls(&mut tx, id, &advert.photo_urls, &advert.name).await?;

        tx.commit().await.map_err(storage)?;

        Ok(Advert {
            id,
            name: advert.name.clone(),
            description: advert.description.clone(),
            price: advert.price,
            main_photo_url: advert.main_photo_url().to_string(),
            photo_urls: advert.photo_urls.clone(),
            created_at: advert.created_at.clone(),
        })
    }

    async fn get_by_id(&self, id: i64) -> Result<Advert, RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(storage)?;

        let query = format!("SELECT {ADVERT_SELECT_COLUMNS} FROM adverts WHERE id = ?");
        let row: AdvertRow = sqlx::query_as(&query)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(storage)?
            .ok_or_else(|| RepositoryError::NotFound(format!("Advert with ID {id}")))?;

        let urls: Vec<String> =
            sqlx::query_scalar("SELECT url FROM photo_urls WHERE advert_id = ? ORDER BY position")
                .bind(id)
                .fetch_all(&mut *tx)
                .await
                .map_err(storage)?;

        tx.commit().await.map_err(storage)?;

        Ok(row.into_advert(urls))
    }

    async fn fetch(&self) -> Result<Vec<AdvertSummary>, RepositoryError> {
        let query = format!("SELECT {ADVERT_SELECT_COLUMNS} FROM adverts ORDER BY created_at, id");

        let rows: Vec<AdvertRow> = sqlx::query_as(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(storage)?;

        Ok(rows.into_iter().map(AdvertRow::into_summary).collect())
    }

    async fn update(&self, advert: &Advert) -> Result<(), RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(storage)?;

        let result = sqlx::query(
            "UPDATE adverts SET name = ?, description = ?, price = ?, main_photo_url = ? WHERE id = ?",
        )
        .bind(&advert.name)
        .bind(&advert.description)
        .bind(advert.price)
        .bind(&advert.main_photo_url)
        .bind(advert.id)
        .execute(&mut *tx)
        .await
        .map_err(|e| map_write_error(e, &advert.name))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!(
                "Advert with ID {}",
                advert.id
            )));
        }

        sqlx::query("DELETE FROM photo_urls WHERE advert_id = ?")
            .bind(advert.id)
            .execute(&mut *tx)
            .await
            .map_err(storage)?;

        insert_photo_urls(&mut tx, advert.id, &advert.photo_urls, &advert.name).await?;

        tx.commit().await.map_err(storage)?;
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(storage)?;

        sqlx::query("DELETE FROM photo_urls WHERE advert_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(storage)?;

        let result = sqlx::query("DELETE FROM adverts WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(storage)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!("Advert with ID {id}")));
        }

        tx.commit().await.map_err(storage)?;
        Ok(())
    }
}
