//! Page arithmetic shared by the players pager and the accounts carousel.

/// Accounts shown per carousel page.
pub const ACCOUNTS_PER_PAGE: usize = 5;

/// Number of pages needed for `len` items; 0 for no items.
pub fn page_count(len: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 0;
    }
    len.div_ceil(per_page)
}

/// Items of page `page` (0-based); `None` when the page does not exist.
pub fn page_slice<T>(items: &[T], page: usize, per_page: usize) -> Option<&[T]> {
    if per_page == 0 {
        return None;
    }
    let start = page.checked_mul(per_page)?;
    if start >= items.len() {
        return None;
    }
    let end = start.saturating_add(per_page).min(items.len());
    Some(&items[start..end])
}

pub fn has_prev(page: usize) -> bool {
    page > 0
}

pub fn has_next(page: usize, pages: usize) -> bool {
    page + 1 < pages
}
