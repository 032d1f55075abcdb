//! Fixed-size page windows over an ordered, counted result set.
//!
//! Pure arithmetic: the window knows nothing about filmworks. The repository
//! turns it into `LIMIT`/`OFFSET`, the API layer into `prev`/`next` links.

use crate::error::CoreError;

/// Number of items on every page except possibly the last.
pub const PAGE_SIZE: i64 = 50;

// ---------------------------------------------------------------------------
// Requested page
// ---------------------------------------------------------------------------

/// A page number as requested by a client, before range checking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageNumber {
    /// An explicit 1-indexed page. Not yet validated, may be zero or negative.
    Number(i64),
    /// The last page, whatever its number turns out to be.
    Last,
}

impl Default for PageNumber {
    fn default() -> Self {
        Self::Number(1)
    }
}

impl PageNumber {
    /// Interpret the raw `?page=` query value.
    ///
    /// - missing or non-numeric -> page 1
    /// - `last` -> the last page
    /// - any integer is passed through; range errors surface in [`PageWindow::new`]
    pub fn from_query(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("last") => Self::Last,
            Some(value) => value.parse().map(Self::Number).unwrap_or_default(),
            None => Self::default(),
        }
    }
}

// ---------------------------------------------------------------------------
// Page window
// ---------------------------------------------------------------------------

/// A validated page over `count` items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    /// 1-indexed page number.
    pub number: i64,
    /// `ceil(count / PAGE_SIZE)`, zero for an empty set.
    pub total_pages: i64,
    /// Total items across all pages.
    pub count: i64,
}

impl PageWindow {
    /// Resolve `page` against a result set of `count` items.
    ///
    /// Page 1 is always valid, even when there are no items. Anything outside
    /// `1..=max(total_pages, 1)` fails with [`CoreError::PageOutOfRange`];
    /// nothing is clamped.
    pub fn new(count: i64, page: PageNumber) -> Result<Self, CoreError> {
        let count = count.max(0);
        let total_pages = total_pages(count);
        let last_valid = total_pages.max(1);

        let number = match page {
            PageNumber::Number(n) => n,
            PageNumber::Last => last_valid,
        };

        if !(1..=last_valid).contains(&number) {
            return Err(CoreError::PageOutOfRange {
                page: number,
                total_pages,
            });
        }

        Ok(Self {
            number,
            total_pages,
            count,
        })
    }

    /// Zero-based index of the first item on this page.
    pub fn offset(&self) -> i64 {
        (self.number - 1) * PAGE_SIZE
    }

    /// Number of items on this page.
    pub fn len(&self) -> i64 {
        (self.count - self.offset()).clamp(0, PAGE_SIZE)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn prev(&self) -> Option<i64> {
        (self.number > 1).then(|| self.number - 1)
    }

    pub fn next(&self) -> Option<i64> {
        (self.number < self.total_pages).then(|| self.number + 1)
    }

    /// The part of an already materialized, fully ordered sequence that falls
    /// on this page.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let len = items.len();
        let start = usize::try_from(self.offset()).unwrap_or(usize::MAX).min(len);
        let end = start
            .saturating_add(usize::try_from(PAGE_SIZE).unwrap_or(usize::MAX))
            .min(len);
        &items[start..end]
    }
}

/// `ceil(count / PAGE_SIZE)`, with zero pages for zero items.
pub fn total_pages(count: i64) -> i64 {
    if count <= 0 {
        0
    } else {
        (count + PAGE_SIZE - 1) / PAGE_SIZE
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
