//! Client-side pagination over the loaded catalog.
//!
//! The catalog resource is fetched whole; pages are cut out of it here.
//! Page numbers are 1-indexed and always clamped into `[1, total_pages]`.

use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;

/// Number of pages needed for `count` items, never less than one.
pub fn total_pages(count: usize, page_size: NonZeroUsize) -> usize {
    count.div_ceil(page_size.get()).max(1)
}

/// Clamp a requested page into `[1, total_pages]`.
///
/// Requests are signed so that "previous" from page 1 lands on 0 and is
/// pulled back up.
pub fn clamp_page(requested: i64, total_pages: usize) -> usize {
    let last = total_pages.max(1);
    if requested < 1 {
        return 1;
    }
    usize::try_from(requested).map_or(last, |page| page.min(last))
}

/// Items visible on `page`.
///
/// Returns `items[(page-1)*page_size .. page*page_size]`, cut short at the
/// end of the list; empty when the page starts past the end.
pub fn slice<T>(items: &[T], page: usize, page_size: NonZeroUsize) -> &[T] {
    let size = page_size.get();
    let start = page.saturating_sub(1).saturating_mul(size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(size).min(items.len());
    &items[start..end]
}

/// Pagination info.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pagination {
    /// Current page (1-indexed).
    pub page: usize,
    /// Items per page.
    pub per_page: NonZeroUsize,
    /// Total number of items.
    pub total: usize,
    /// Total number of pages.
    pub total_pages: usize,
    /// Whether there's a next page.
    pub has_next: bool,
    /// Whether there's a previous page.
    pub has_prev: bool,
}

impl Pagination {
    /// Create pagination info, clamping `page` into range.
    pub fn new(page: usize, per_page: NonZeroUsize, total: usize) -> Self {
        let total_pages = total_pages(total, per_page);
        let page = clamp_page(i64::try_from(page).unwrap_or(i64::MAX), total_pages);

        Self {
            page,
            per_page,
            total,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1,
        }
    }

    /// Cut this page out of `items`.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        slice(items, self.page, self.per_page)
    }

    /// All page numbers, for the numbered navigation.
    pub fn page_numbers(&self) -> Vec<usize> {
        (1..=self.total_pages).collect()
    }
}
