//! Paginator: zero-indexed, bounded slices of an ordered list.

/// Page used when the request names none.
pub const DEFAULT_PAGE_NUMBER: usize = 0;

/// Page size used when the request names none.
pub const DEFAULT_PAGE_SIZE: usize = 3;

/// Zero-indexed page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page_number: usize,
    pub page_size: usize,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page_number: DEFAULT_PAGE_NUMBER,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageRequest {
    /// Fill absent values with the defaults.
    pub fn new(page_number: Option<usize>, page_size: Option<usize>) -> Self {
        Self {
            page_number: page_number.unwrap_or(DEFAULT_PAGE_NUMBER),
            page_size: page_size.unwrap_or(DEFAULT_PAGE_SIZE),
        }
    }

    /// Half-open index range of this page within `len` items.
    ///
    /// Both ends are clamped to `len`, so a page past the end is empty.
    pub fn bounds(&self, len: usize) -> (usize, usize) {
        let from = self.page_number.saturating_mul(self.page_size).min(len);
        let to = from.saturating_add(self.page_size).min(len);
        (from, to)
    }
}

/// Take the requested page out of `items`.
pub fn paginate<T>(mut items: Vec<T>, page: PageRequest) -> Vec<T> {
    let (from, to) = page.bounds(items.len());
    items.truncate(to);
    items.drain(..from);
    items
}
