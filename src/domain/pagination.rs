//! Page arithmetic shared by the list and access-log queries.

/// Page size used when the caller passes nothing usable.
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// A clamped, 1-indexed page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page_number: i64,
    pub page_size: i64,
}

impl PageRequest {
    /// Clamps out-of-range input: a page number below 1 becomes 1 and a page
    /// size below 1 becomes [`DEFAULT_PAGE_SIZE`].
    pub fn new(page_number: i64, page_size: i64) -> Self {
        Self {
            page_number: if page_number < 1 { 1 } else { page_number },
            page_size: if page_size < 1 {
                DEFAULT_PAGE_SIZE
            } else {
                page_size
            },
        }
    }

    pub fn offset(&self) -> i64 {
        (self.page_number - 1).saturating_mul(self.page_size)
    }

    pub fn limit(&self) -> i64 {
        self.page_size
    }

    /// `ceil(total / page_size)`; zero items means zero pages.
    pub fn total_pages(&self, total: i64) -> i64 {
        if total <= 0 {
            return 0;
        }
        total / self.page_size + i64::from(total % self.page_size != 0)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(1, DEFAULT_PAGE_SIZE)
    }
}

/// One page of results with the totals needed for navigation.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page_number: i64,
    pub page_size: i64,
    pub total_items: i64,
    pub total_pages: i64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, request: PageRequest, total_items: i64) -> Self {
        Self {
            items,
            page_number: request.page_number,
            page_size: request.page_size,
            total_items,
            total_pages: request.total_pages(total_items),
        }
    }
}
