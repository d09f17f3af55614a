use crate::{
    api::{ListQuery, Paged},
    components::data_table::TableRow,
};

pub const PAGE_SIZE: u32 = 10;

/// Last page that can hold records for `total`, never below 1.
pub fn last_page_for(total: u64, per_page: u32) -> u32 {
    let per_page = u64::from(per_page.max(1));
    let pages = total.div_ceil(per_page).max(1);
    u32::try_from(pages).unwrap_or(u32::MAX)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageOutcome {
    Applied,
    /// The requested page came back empty; the view moved to this page and
    /// must fetch again.
    StepBack(u32),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListState {
    pub page: u32,
    pub per_page: u32,
    pub total: u64,
    pub search: String,
    pub loading: bool,
    pub rows: Vec<TableRow>,
}

impl Default for ListState {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: PAGE_SIZE,
            total: 0,
            search: String::new(),
            loading: false,
            rows: Vec::new(),
        }
    }
}

impl ListState {
    pub fn query(&self, searchable: bool) -> ListQuery {
        ListQuery {
            page: self.page,
            per_page: self.per_page,
            search: (searchable && !self.search.is_empty()).then(|| self.search.clone()),
        }
    }

    pub fn page_count(&self) -> u32 {
        last_page_for(self.total, self.per_page)
    }

    /// Returns whether the page actually changed.
    pub fn go_to_page(&mut self, page: u32) -> bool {
        let page = page.max(1);
        if page == self.page {
            return false;
        }
        self.page = page;
        true
    }

    pub fn apply_search(&mut self, term: &str) {
        self.search = term.trim().to_string();
        self.page = 1;
    }

    pub fn begin_fetch(&mut self) {
        self.loading = true;
    }

    pub fn apply_page(&mut self, result: Paged<TableRow>) -> PageOutcome {
        self.total = result.total;
        if result.data.is_empty() && self.page > 1 {
            let target = last_page_for(result.total, self.per_page).min(self.page - 1);
            self.page = target;
            return PageOutcome::StepBack(target);
        }
        self.rows = result.data;
        self.loading = false;
        PageOutcome::Applied
    }

    /// Keeps the previous rows.
    pub fn fail_fetch(&mut self) {
        self.loading = false;
    }
}
