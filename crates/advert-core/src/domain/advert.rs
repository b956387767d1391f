//! Advert domain types.
//!
//! These types represent adverts in the system, independent of any
//! infrastructure concerns (database, HTTP, etc.).

use serde::{Deserialize, Serialize};

/// Timestamp format used for `created_at` (`YYYY-MM-DD HH:MM:SS`).
pub const CREATED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// ─────────────────────────────────────────────────────────────────────────────
// Persisted Types
// ─────────────────────────────────────────────────────────────────────────────

/// An advert that exists in the store with an assigned ID.
///
/// `main_photo_url` always mirrors the first entry of `photo_urls`.
/// Use `NewAdvert` for adverts that haven't been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Advert {
    /// Store-assigned ID; never changes after creation.
    pub id: i64,
    /// Unique human-readable name.
    pub name: String,
    pub description: String,
    pub price: i64,
    /// First entry of `photo_urls`.
    pub main_photo_url: String,
    /// Ordered photo URLs (1 to 3 entries).
    pub photo_urls: Vec<String>,
    /// Creation timestamp in [`CREATED_AT_FORMAT`].
    pub created_at: String,
}

/// List-view projection of an advert.
///
/// The list endpoint does not join photo URLs, so only the main photo is
/// carried here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvertSummary {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: i64,
    pub main_photo_url: String,
    pub created_at: String,
}

/// An advert to be inserted into the store (no ID yet).
///
/// After insertion, the repository returns an `Advert` with the assigned ID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAdvert {
    pub name: String,
    pub description: String,
    pub price: i64,
    pub photo_urls: Vec<String>,
    pub created_at: String,
}

impl NewAdvert {
    /// Build a new advert from validated input, stamped with `created_at`.
    #[must_use]
    pub fn from_input(input: AdvertInput, created_at: String) -> Self {
        Self {
            name: input.name,
            description: input.description,
            price: input.price,
            photo_urls: input.photo_urls,
            created_at,
        }
    }

    /// The main photo URL (first entry of `photo_urls`, empty if none).
    #[must_use]
    pub fn main_photo_url(&self) -> &str {
        self.photo_urls.first().map_or("", String::as_str)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Input Types
// ─────────────────────────────────────────────────────────────────────────────

/// Client-supplied advert fields, used for both create and partial update.
///
/// Missing JSON keys deserialize to their zero value. For updates a zero
/// value means "leave unchanged".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvertInput {
    pub name: String,
    pub description: String,
    pub price: i64,
    pub photo_urls: Vec<String>,
}

impl Advert {
    /// Overwrite fields with the non-empty, non-zero values of `patch`.
    ///
    /// A supplied `photo_urls` list replaces the existing one entirely and
    /// `main_photo_url` is recomputed from it. `id` and `created_at` are
    /// never touched.
    pub fn apply_patch(&mut self, patch: AdvertInput) {
        if !patch.name.is_empty() {
            self.name = patch.name;
        }
        if !patch.description.is_empty() {
            self.description = patch.description;
        }
        if patch.price != 0 {
            self.price = patch.price;
        }
        if !patch.photo_urls.is_empty() {
            self.photo_urls = patch.photo_urls;
            self.main_photo_url = self.photo_urls[0].clone();
        }
    }
}
