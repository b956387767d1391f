//! Typed request context for advert reads.
//!
//! Query-string values are validated once at the edge (see
//! [`crate::validation::parse_list_query`]) and then travel through the
//! handlers and services as a `ListQuery`.

use serde::{Deserialize, Serialize};

/// Column the advert list is ordered by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortBy {
    #[default]
    CreatedAt,
    Price,
}

impl SortBy {
    /// Parse the `sort_by` query value.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "created_at" => Some(Self::CreatedAt),
            "price" => Some(Self::Price),
            _ => None,
        }
    }
}

/// Direction of the list ordering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// Parse the `order_by` query value.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "asc" => Some(Self::Asc),
            "desc" => Some(Self::Desc),
            _ => None,
        }
    }
}

/// Validated query parameters for the advert routes.
///
/// Every field is `None`/`false` when the parameter was absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListQuery {
    /// Page size.
    pub limit: Option<u32>,
    /// Number of rows skipped before the page starts.
    pub offset: Option<u32>,
    pub sort_by: Option<SortBy>,
    pub order_by: Option<SortOrder>,
    /// `fields=true`: render the full projection on single-item reads.
    pub fields: bool,
}

/// One page of a list result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Number of pages of size `limit` needed for the whole result (at least 1).
    pub max_page: u32,
}
