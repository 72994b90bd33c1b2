use std::ops::Range;

/// Page sizes offered in the table footers
pub const ROWS_PER_PAGE_OPTIONS: [usize; 3] = [10, 20, 50];

/// Client-side paging over a fully loaded collection. Pages are 1-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    rows_per_page: usize,
    page: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            rows_per_page: ROWS_PER_PAGE_OPTIONS[0],
            page: 1,
        }
    }
}

impl Pagination {
    pub fn new(rows_per_page: usize, page: usize) -> Self {
        Self {
            rows_per_page: rows_per_page.max(1),
            page: page.max(1),
        }
    }

    pub fn rows_per_page(&self) -> usize {
        self.rows_per_page
    }

    pub fn page(&self) -> usize {
        self.page
    }

    /// Index of the first row on the current page
    pub fn first_row(&self) -> usize {
        (self.page - 1) * self.rows_per_page
    }

    /// Rows of a `total`-sized collection shown on the current page
    pub fn range(&self, total: usize) -> Range<usize> {
        let start = self.first_row().min(total);
        let end = (self.first_row() + self.rows_per_page).min(total);
        start..end
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[self.range(items.len())]
    }

    /// Number of pages; an empty collection still has one (empty) page
    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.rows_per_page).max(1)
    }

    /// Change the page size, keeping the first visible row on screen
    pub fn with_rows_per_page(self, rows_per_page: usize) -> Self {
        let rows_per_page = rows_per_page.max(1);
        let page = (self.first_row() + 1).div_ceil(rows_per_page);
        Self::new(rows_per_page, page)
    }

    /// Pull the page back inside the collection after it shrank
    pub fn clamped(self, total: usize) -> Self {
        Self::new(self.rows_per_page, self.page.min(self.page_count(total)))
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self, total: usize) -> bool {
        self.page < self.page_count(total)
    }

    pub fn previous(self) -> Self {
        Self::new(self.rows_per_page, self.page.saturating_sub(1))
    }

    pub fn next(self, total: usize) -> Self {
        Self::new(self.rows_per_page, (self.page + 1).min(self.page_count(total)))
    }

    /// Footer text such as `11-20 of 42`
    pub fn summary(&self, total: usize) -> String {
        let range = self.range(total);
        if range.is_empty() {
            return format!("0-0 of {}", total);
        }
        format!("{}-{} of {}", range.start + 1, range.end, total)
    }
}
