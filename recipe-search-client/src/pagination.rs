use crate::r#static::PAGE_SIZE;

/// Position within a paged result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    current_page: u32,
    total_results: u64,
    page_size: u32,
}

impl Pagination {
    pub fn new(current_page: u32, total_results: u64, page_size: u32) -> Self {
        Self {
            current_page: current_page.max(1),
            total_results,
            page_size: page_size.max(1),
        }
    }

    pub fn with_default_page_size(current_page: u32, total_results: u64) -> Self {
        Self::new(current_page, total_results, PAGE_SIZE)
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn total_pages(&self) -> u32 {
        let pages = self.total_results.div_ceil(u64::from(self.page_size));
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages()
    }

    /// Controls are only worth showing when there is somewhere to go.
    pub fn is_visible(&self) -> bool {
        self.total_pages() > 1
    }

    pub fn next(&self) -> Option<u32> {
        self.has_next().then(|| self.current_page + 1)
    }

    pub fn previous(&self) -> Option<u32> {
        self.has_previous().then(|| self.current_page - 1)
    }

    pub fn contains(&self, page: u32) -> bool {
        page >= 1 && page <= self.total_pages().max(1)
    }
}
