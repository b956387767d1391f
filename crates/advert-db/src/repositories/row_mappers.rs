//! Row mapping helpers for `SQLite` queries.

use advert_core::{Advert, AdvertSummary};

/// Shared SELECT column list for advert queries.
pub const ADVERT_SELECT_COLUMNS: &str =
    "id, name, description, price, main_photo_url, created_at";

/// One row of the `adverts` table.
#[derive(sqlx::FromRow)]
pub struct AdvertRow {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: i64,
    pub main_photo_url: String,
    pub created_at: String,
}

impl AdvertRow {
    /// Combine the row with its photo URLs into a full advert.
    pub fn into_advert(self, photo_urls: Vec<String>) -> Advert {
        Advert {
            id: self.id,
            name: self.name,
            description: self.description,
            price: self.price,
            main_photo_url: self.main_photo_url,
            photo_urls,
            created_at: self.created_at,
        }
    }

    pub fn into_summary(self) -> AdvertSummary {
        AdvertSummary {
            id: self.id,
            name: self.name,
            description: self.description,
            price: self.price,
            main_photo_url: self.main_photo_url,
            created_at: self.created_at,
        }
    }
}
