//! Query-string validation for the advert routes.

use thiserror::Error;

use crate::domain::{ListQuery, SortBy, SortOrder};

/// Raw query parameters as they arrive on the wire.
///
/// An empty value (`?limit=`) is treated the same as an absent one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawQuery {
    pub fields: Option<String>,
    pub sort_by: Option<String>,
    pub order_by: Option<String>,
    pub offset: Option<String>,
    pub limit: Option<String>,
}

impl RawQuery {
    /// Collect decoded `key=value` pairs.
    ///
    /// A repeated key keeps its first value; unknown keys are ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut raw = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "fields" => &mut raw.fields,
                "sort_by" => &mut raw.sort_by,
                "order_by" => &mut raw.order_by,
                "offset" => &mut raw.offset,
                "limit" => &mut raw.limit,
                _ => continue,
            };
            slot.get_or_insert_with(|| value.into());
        }
        raw
    }
}

/// A rejected query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("'fields=' query value should be 'true'")]
    Fields,

    #[error("'sort_by=' query value should be either 'created_at' or 'price'")]
    SortBy,

    #[error("'order_by=' query value should be either 'asc' or 'desc'")]
    OrderBy,

    #[error("'offset=' query value should be positive number")]
    Offset,

    #[error("'limit=' query value should be positive number")]
    Limit,
}

impl QueryError {
    /// Short error class shared by every query failure.
    pub const TITLE: &'static str = "queries have wrong value";
}

fn present(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|v| !v.is_empty())
}

fn positive(value: &str) -> Option<u32> {
    value.parse::<u32>().ok().filter(|n| *n > 0)
}

/// Validate raw query parameters into a [`ListQuery`].
///
/// Each parameter is checked on its own; when several are wrong the first
/// one in `fields`, `sort_by`, `order_by`, `offset`, `limit` order is reported.
pub fn parse_list_query(raw: &RawQuery) -> Result<ListQuery, QueryError> {
    let mut query = ListQuery::default();
    let mut first_error = None;
    let mut reject = |err: QueryError| {
        first_error.get_or_insert(err);
    };

    if let Some(v) = present(raw.fields.as_ref()) {
        if v == "true" {
            query.fields = true;
        } else {
            reject(QueryError::Fields);
        }
    }

    if let Some(v) = present(raw.sort_by.as_ref()) {
        match SortBy::parse(v) {
            Some(s) => query.sort_by = Some(s),
            None => reject(QueryError::SortBy),
        }
    }

    if let Some(v) = present(raw.order_by.as_ref()) {
        match SortOrder::parse(v) {
            Some(o) => query.order_by = Some(o),
            None => reject(QueryError::OrderBy),
        }
    }

    if let Some(v) = present(raw.offset.as_ref()) {
        match positive(v) {
            Some(n) => query.offset = Some(n),
            None => reject(QueryError::Offset),
        }
    }

    if let Some(v) = present(raw.limit.as_ref()) {
        match positive(v) {
            Some(n) => query.limit = Some(n),
            None => reject(QueryError::Limit),
        }
    }

    match first_error {
        Some(err) => Err(err),
        None => Ok(query),
    }
}
