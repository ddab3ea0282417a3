//! Pure pagination math and item-slice helpers.

use super::error::{PaginationError, Result};

/// Compute the number of pages for a paginated list.
pub fn number_of_pages(item_count: usize, items_per_page: usize) -> Result<usize> {
    if items_per_page == 0 {
        return Err(PaginationError::InvalidItemsPerPage);
    }

    Ok(item_count.div_ceil(items_per_page))
}

/// Index of the first item shown on a one-based page.
pub fn offset(items_per_page: usize, selected_page: usize) -> usize {
    items_per_page.saturating_mul(selected_page.saturating_sub(1))
}

/// Return the items of the page starting at `offset`.
///
/// The slice is shorter than `items_per_page` on the last page and empty when
/// `offset` lies past the end.
pub fn slice<T>(items: &[T], offset: usize, items_per_page: usize) -> &[T] {
    let start = offset.min(items.len());
    let end = start.saturating_add(items_per_page).min(items.len());
    &items[start..end]
}

/// Clamp a requested page into a valid range.
pub fn clamp_page(page: usize, number_of_pages: usize) -> usize {
    page.clamp(1, number_of_pages.max(1))
}

/// Parse a one-based page argument.
///
/// Returns `Some(page)` when the value is valid (`>= 1`), otherwise `None`.
/// A missing argument means the first page.
pub fn parse_one_based_page(raw: Option<&str>) -> Option<usize> {
    match raw {
        Some(value) => value.trim().parse::<usize>().ok().filter(|page| *page >= 1),
        None => Some(1),
    }
}
