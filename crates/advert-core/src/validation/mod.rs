//! Input validation for adverts and query strings.
//!
//! Validation is pure and runs before any service call. Each validator
//! reports only its first violation.

mod advert;
mod query;

pub use advert::{
    MAX_DESCRIPTION_CHARS, MAX_NAME_CHARS, MAX_PHOTO_URLS, ValidationError,
    validate_advert_patch, validate_new_advert,
};
pub use query::{QueryError, RawQuery, parse_list_query};
