//! Core domain types.
//!
//! These types represent the pure domain model, independent of any
//! infrastructure concerns (database, HTTP, etc.).
//!
//! # Structure
//!
//! - `advert` - Advert types (`Advert`, `NewAdvert`, `AdvertSummary`, `AdvertInput`)
//! - `query` - Typed list/read request context (`ListQuery`, `Page`)

mod advert;
mod query;

pub use advert::{Advert, AdvertInput, AdvertSummary, CREATED_AT_FORMAT, NewAdvert};
pub use query::{ListQuery, Page, SortBy, SortOrder};
