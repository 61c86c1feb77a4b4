//! Pagination helpers

use crate::constants::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

/// Resolve `page`/`per_page` query values: pages start at 1, sizes are capped
pub fn page_params(page: Option<u32>, per_page: Option<u32>) -> (u32, u32) {
    let page = page.unwrap_or(1).max(1);
    let per_page = per_page
        .unwrap_or(DEFAULT_PAGE_SIZE)
        .clamp(1, MAX_PAGE_SIZE);
    (page, per_page)
}

/// SQL `OFFSET`/`LIMIT` for a resolved page
pub fn page_bounds(page: u32, per_page: u32) -> (i64, i64) {
    let (page, per_page) = page_params(Some(page), Some(per_page));
    let offset = (page as i64 - 1) * per_page as i64;
    (offset, per_page as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_params_defaults() {
        assert_eq!(page_params(None, None), (1, DEFAULT_PAGE_SIZE));
        assert_eq!(page_params(Some(0), Some(0)), (1, 1));
        assert_eq!(page_params(Some(3), Some(500)), (3, MAX_PAGE_SIZE));
    }

    #[test]
    fn test_page_bounds() {
        assert_eq!(page_bounds(1, 20), (0, 20));
        assert_eq!(page_bounds(3, 10), (20, 10));
        assert_eq!(page_bounds(0, 10), (0, 10));
    }
}
