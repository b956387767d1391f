//! Sorting and paging of advert lists.

use std::cmp::Ordering;

use crate::domain::{AdvertSummary, ListQuery, Page, SortBy, SortOrder};

fn compare(a: &AdvertSummary, b: &AdvertSummary, sort_by: SortBy) -> Ordering {
    let primary = match sort_by {
        SortBy::CreatedAt => a.created_at.cmp(&b.created_at),
        SortBy::Price => a.price.cmp(&b.price),
    };
    primary.then_with(|| a.id.cmp(&b.id))
}

/// Number of pages of size `limit` needed for `total` rows (minimum 1).
fn max_page(total: usize, limit: Option<u32>) -> u32 {
    let Some(limit) = limit.filter(|l| *l > 0) else {
        return 1;
    };
    let pages = total.div_ceil(limit as usize).max(1);
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// Order `items` per `query`, then cut the requested page.
///
/// Ordering defaults to `created_at` ascending; `id` breaks ties so the
/// result is deterministic. `offset` rows are skipped before `limit` rows
/// are taken. `max_page` is computed from the full list.
#[must_use]
pub fn paginate(mut items: Vec<AdvertSummary>, query: &ListQuery) -> Page<AdvertSummary> {
    let sort_by = query.sort_by.unwrap_or_default();
    match query.order_by.unwrap_or_default() {
        SortOrder::Asc => items.sort_by(|a, b| compare(a, b, sort_by)),
        SortOrder::Desc => items.sort_by(|a, b| compare(b, a, sort_by)),
    }

    let max_page = max_page(items.len(), query.limit);
    let offset = query.offset.map_or(0, |o| o as usize);
    let limit = query.limit.map_or(usize::MAX, |l| l as usize);

    Page {
        items: items.into_iter().skip(offset).take(limit).collect(),
        max_page,
    }
}
