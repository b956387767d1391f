//! Advert DTOs.
//!
//! Field names are `snake_case` on the wire.

use advert_core::{Advert, AdvertSummary};
use serde::Serialize;

/// Full projection of one advert (`?fields=true`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdvertDto {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: i64,
    pub main_photo_url: String,
    pub photo_urls: Vec<String>,
    pub created_at: String,
}

impl From<Advert> for AdvertDto {
    fn from(a: Advert) -> Self {
        Self {
            id: a.id,
            name: a.name,
            description: a.description,
            price: a.price,
            main_photo_url: a.main_photo_url,
            photo_urls: a.photo_urls,
            created_at: a.created_at,
        }
    }
}

/// Reduced projection of one advert (default for item reads).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdvertBriefDto {
    pub name: String,
    pub price: i64,
    pub main_photo_url: String,
}

impl From<Advert> for AdvertBriefDto {
    fn from(a: Advert) -> Self {
        Self {
            name: a.name,
            price: a.price,
            main_photo_url: a.main_photo_url,
        }
    }
}

/// Item read result: full or reduced, chosen by the `fields` query flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AdvertItemDto {
    Full(AdvertDto),
    Brief(AdvertBriefDto),
}

impl AdvertItemDto {
    pub fn project(advert: Advert, full: bool) -> Self {
        if full {
            Self::Full(advert.into())
        } else {
            Self::Brief(advert.into())
        }
    }
}

/// List entry. Photo URLs other than the main one are not included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdvertSummaryDto {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: i64,
    pub main_photo_url: String,
    pub created_at: String,
}

impl From<AdvertSummary> for AdvertSummaryDto {
    fn from(a: AdvertSummary) -> Self {
        Self {
            id: a.id,
            name: a.name,
            description: a.description,
            price: a.price,
            main_photo_url: a.main_photo_url,
            created_at: a.created_at,
        }
    }
}

/// Body entry returned by create.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CreatedDto {
    pub id: i64,
}
