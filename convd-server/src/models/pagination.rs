//! Pagination with a fixed page size
//!
//! The API always returns at most 50 rows per page; only the page number
//! is caller-controlled. Anything that does not parse as a page number
//! falls back to page 1 rather than erroring.

/// Rows per page, fixed by the API contract.
pub const PAGE_SIZE: u32 = 50;

/// A validated 1-indexed page number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page(u32);

impl Page {
    /// Create a page, clamped to a minimum of 1.
    pub fn new(page: u32) -> Self {
        Self(page.max(1))
    }

    /// Page 1.
    pub fn first() -> Self {
        Self(1)
    }

    /// Lenient parse of the raw `page` query value. Absent, empty, or
    /// non-numeric input defaults to page 1.
    pub fn from_query_value(raw: Option<&str>) -> Self {
        raw.and_then(|v| v.trim().parse::<u32>().ok())
            .map(Self::new)
            .unwrap_or_else(Self::first)
    }

    /// SQL LIMIT value.
    pub fn limit(&self) -> i64 {
        PAGE_SIZE as i64
    }

    /// SQL OFFSET value.
    pub fn offset(&self) -> i64 {
        ((self.0 - 1) as i64) * PAGE_SIZE as i64
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_calculation() {
        assert_eq!(Page::new(1).offset(), 0);
        assert_eq!(Page::new(2).offset(), 50);
        assert_eq!(Page::new(4).offset(), 150);
        assert_eq!(Page::new(1).limit(), 50);
    }

    #[test]
    fn clamps_page_zero() {
        assert_eq!(Page::new(0), Page::first());
    }

    #[test]
    fn lenient_query_parsing() {
        assert_eq!(Page::from_query_value(None), Page::first());
        assert_eq!(Page::from_query_value(Some("")), Page::first());
        assert_eq!(Page::from_query_value(Some("abc")), Page::first());
        assert_eq!(Page::from_query_value(Some("-3")), Page::first());
        assert_eq!(Page::from_query_value(Some("0")), Page::first());
        assert_eq!(Page::from_query_value(Some("2")), Page::new(2));
        assert_eq!(Page::from_query_value(Some(" 7 ")), Page::new(7));
    }

    #[test]
    fn large_pages_do_not_overflow_offset() {
        let page = Page::new(u32::MAX);
        assert!(page.offset() > 0);
    }
}
