//! Page requests and pagination metadata.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Number of page links shown by a page picker when none is configured.
pub const DEFAULT_PAGE_WINDOW: u64 = 5;

/// Caller-supplied page number (1-based) and page size.
///
/// Values are signed because they come straight from query strings; anything
/// below 1 is rejected by [`PageRequest::normalize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub page: i64,
    pub size: i64,
}

/// Zero-based offset and limit for a storage query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub offset: u64,
    pub limit: u64,
}

impl PageRequest {
    pub fn new(page: i64, size: i64) -> Self {
        Self { page, size }
    }

    pub fn normalize(&self) -> Result<PageWindow, DomainError> {
        if self.page < 1 {
            return Err(DomainError::InvalidPageRequest(format!(
                "page must be at least 1, got {}",
                self.page
            )));
        }
        if self.size < 1 {
            return Err(DomainError::InvalidPageRequest(format!(
                "size must be at least 1, got {}",
                self.size
            )));
        }

        let limit = self.size as u64;
        let offset = (self.page as u64 - 1).checked_mul(limit).ok_or_else(|| {
            DomainError::InvalidPageRequest(format!(
                "page {} with size {} is out of range",
                self.page, self.size
            ))
        })?;

        Ok(PageWindow { offset, limit })
    }
}

/// Where a page sits inside the full result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub total_count: u64,
    pub total_pages: u64,
    pub current_page: u64,
    pub page_size: u64,
    /// First page link of the picker block containing `current_page`.
    pub start_page: u64,
    /// Last page link of that block, clamped to `total_pages`.
    pub end_page: u64,
    pub has_next: bool,
    pub has_previous: bool,
}

impl PageInfo {
    pub fn compute(total_count: u64, page_size: u64, current_page: u64) -> Self {
        Self::with_window(total_count, page_size, current_page, DEFAULT_PAGE_WINDOW)
    }

    pub fn with_window(total_count: u64, page_size: u64, current_page: u64, window: u64) -> Self {
        let page_size = page_size.max(1);
        let window = window.max(1);
        let total_pages = total_count.div_ceil(page_size);

        let (start_page, end_page) = if total_pages == 0 {
            (0, 0)
        } else {
            let block_end = current_page.max(1).div_ceil(window).saturating_mul(window);
            let block_start = block_end - window + 1;
            let end_page = block_end.min(total_pages);
            (block_start.min(end_page), end_page)
        };

        Self {
            total_count,
            total_pages,
            current_page,
            page_size,
            start_page,
            end_page,
            has_next: current_page < total_pages,
            has_previous: current_page > 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_converts_to_offset_and_limit() {
        let window = PageRequest::new(3, 10).normalize().unwrap();
        assert_eq!(window, PageWindow { offset: 20, limit: 10 });

        let first = PageRequest::new(1, 7).normalize().unwrap();
        assert_eq!(first.offset, 0);
    }

    #[test]
    fn normalize_rejects_values_below_one() {
        for (page, size) in [(0, 10), (-1, 10), (1, 0), (1, -5)] {
            let err = PageRequest::new(page, size).normalize().unwrap_err();
            assert!(matches!(err, DomainError::InvalidPageRequest(_)), "{page}/{size}");
        }
    }

    #[test]
    fn normalize_rejects_overflowing_offset() {
        let err = PageRequest::new(i64::MAX, i64::MAX).normalize().unwrap_err();
        assert!(matches!(err, DomainError::InvalidPageRequest(_)));
    }

    #[test]
    fn total_pages_is_ceiling_of_count_over_size() {
        for size in 1..=12u64 {
            for total in 0..=60u64 {
                let info = PageInfo::compute(total, size, 1);
                assert_eq!(info.total_pages, total.div_ceil(size));
                assert_eq!(info.total_pages == 0, total == 0);
                assert!(info.start_page <= info.end_page);
                assert!(info.end_page <= info.total_pages);
            }
        }
    }

    #[test]
    fn empty_result_set() {
        let info = PageInfo::compute(0, 10, 1);
        assert_eq!(info.total_pages, 0);
        assert!(!info.has_next);
        assert!(!info.has_previous);
        assert_eq!((info.start_page, info.end_page), (0, 0));
    }

    #[test]
    fn middle_page_of_three() {
        let info = PageInfo::compute(25, 10, 2);
        assert_eq!(info.total_pages, 3);
        assert!(info.has_next);
        assert!(info.has_previous);
        assert_eq!((info.start_page, info.end_page), (1, 3));
    }

    #[test]
    fn window_is_block_aligned() {
        let info = PageInfo::with_window(500, 10, 7, 5);
        assert_eq!((info.start_page, info.end_page), (6, 10));

        let last_block = PageInfo::with_window(120, 10, 12, 5);
        assert_eq!((last_block.start_page, last_block.end_page), (11, 12));
    }

    #[test]
    fn page_past_the_end_is_not_an_error() {
        let info = PageInfo::compute(25, 10, 9);
        assert!(!info.has_next);
        assert!(info.has_previous);
        assert_eq!((info.start_page, info.end_page), (3, 3));
    }

    #[test]
    fn zero_size_and_window_do_not_panic() {
        let info = PageInfo::with_window(3, 0, 1, 0);
        assert_eq!(info.total_pages, 3);
        assert_eq!((info.start_page, info.end_page), (1, 1));
    }
}
