//! Core domain types, ports and services for the advert service.
//!
//! This crate has no knowledge of HTTP or SQL. Adapters (`advert-db`,
//! `advert-axum`) depend on it, never the other way round.

pub mod domain;
pub mod ports;
pub mod services;
pub mod validation;

// Re-export commonly used types for convenience
pub use domain::{
    Advert, AdvertInput, AdvertSummary, CREATED_AT_FORMAT, ListQuery, NewAdvert, Page, SortBy,
    SortOrder,
};
pub use ports::{AdvertRepository, CoreError, RepositoryError};
pub use services::{AdvertService, paginate};
pub use validation::{
    QueryError, RawQuery, ValidationError, parse_list_query, validate_advert_patch,
    validate_new_advert,
};
