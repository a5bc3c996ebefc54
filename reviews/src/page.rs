//! Page math shared by list endpoints and the navigation bar.
//!
//! DESIGN
//! ======
//! The server resolves the requested page against the row count and slices
//! with `offset`/`limit`; the client renders First / Prev / window / Next /
//! Last from the same struct. An out-of-range page falls back to the first
//! page instead of rendering an empty list.

use serde::{Deserialize, Serialize};

/// Rows per page.
pub const PAGE_SIZE: u32 = 10;

/// Pages shown on each side of the current one in the navigation window.
pub const PAGE_DEVIATION: u32 = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Current page, 1-based.
    pub page: u32,
    pub page_size: u32,
    /// Total number of pages; zero when there are no rows.
    pub page_count: u32,
    pub total: u64,
}

impl Pagination {
    /// Resolve a raw `page` query value against `total` rows.
    ///
    /// Anything that is not a plain decimal number, zero, or a page past the
    /// end resolves to page 1.
    #[must_use]
    pub fn resolve(raw_page: Option<&str>, total: u64, page_size: u32) -> Self {
        let page_size = page_size.max(1);
        let page_count = u32::try_from(total.div_ceil(u64::from(page_size))).unwrap_or(u32::MAX);
        let requested = raw_page
            .filter(|p| !p.is_empty() && p.bytes().all(|b| b.is_ascii_digit()))
            .and_then(|p| p.parse::<u32>().ok())
            .unwrap_or(1);
        let page = if requested == 0 || requested > page_count { 1 } else { requested };
        Self { page, page_size, page_count, total }
    }

    /// Row offset of the first item on the current page.
    #[must_use]
    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.page_size)
    }

    #[must_use]
    pub fn limit(&self) -> u64 {
        u64::from(self.page_size)
    }

    /// Last page reachable from the navigation bar (at least 1).
    #[must_use]
    pub fn last_page(&self) -> u32 {
        self.page_count.max(1)
    }

    #[must_use]
    pub fn prev_page(&self) -> u32 {
        self.page.saturating_sub(1).max(1)
    }

    #[must_use]
    pub fn next_page(&self) -> u32 {
        if self.page < self.page_count { self.page + 1 } else { self.last_page() }
    }

    /// Page numbers listed in the navigation bar, at most `2 * PAGE_DEVIATION + 1`.
    #[must_use]
    pub fn window(&self) -> std::ops::RangeInclusive<u32> {
        let span = 2 * PAGE_DEVIATION + 1;
        if self.page_count <= span {
            return 1..=self.page_count;
        }
        if self.page <= PAGE_DEVIATION {
            return 1..=span;
        }
        if self.page + PAGE_DEVIATION > self.page_count {
            return (self.page_count - 2 * PAGE_DEVIATION)..=self.page_count;
        }
        (self.page - PAGE_DEVIATION)..=(self.page + PAGE_DEVIATION)
    }
}

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;
