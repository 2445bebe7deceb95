use std::ops::Range;

pub const DEFAULT_PAGE_SIZE: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageDirection {
    Previous,
    Next,
}

/// 1-based page cursor over a row count supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: usize,
    page_size: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl Pagination {
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    #[cfg(test)]
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_pages(&self, row_count: usize) -> usize {
        row_count.div_ceil(self.page_size)
    }

    pub fn offset(&self) -> usize {
        (self.page - 1) * self.page_size
    }

    pub fn range(&self, row_count: usize) -> Range<usize> {
        let start = self.offset().min(row_count);
        let end = (start + self.page_size).min(row_count);
        start..end
    }

    /// Moves one page. Returns false when already at the boundary.
    pub fn step(&mut self, direction: PageDirection, row_count: usize) -> bool {
        let total = self.total_pages(row_count);
        match direction {
            PageDirection::Previous if self.page > 1 => {
                self.page -= 1;
                true
            }
            PageDirection::Next if self.page < total => {
                self.page += 1;
                true
            }
            _ => false,
        }
    }

    /// Pulls the cursor back into `[1, total_pages]`; 1 when there are no rows.
    pub fn clamp(&mut self, row_count: usize) {
        let total = self.total_pages(row_count).max(1);
        self.page = self.page.clamp(1, total);
    }
}
