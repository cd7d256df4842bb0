/// How many of the filtered results are visible for a given cursor.
pub fn visible_count(filtered_total: usize, page: usize, page_size: usize) -> usize {
    filtered_total.min(page.saturating_mul(page_size))
}

/// Monotonically growing window over the filtered result set. The page
/// only ever moves forward ("load more") or snaps back to 1; stale pages
/// must never show residue from a previous filter or catalog state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    page: usize,
    page_size: usize,
}

impl Pager {
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn advance(&mut self) {
        self.page += 1;
    }

    pub fn reset(&mut self) {
        self.page = 1;
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.page = 1;
    }

    pub fn visible(&self, filtered_total: usize) -> usize {
        visible_count(filtered_total, self.page, self.page_size)
    }
}
