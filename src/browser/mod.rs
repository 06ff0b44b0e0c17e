use serde::Serialize;

use crate::facet;
use crate::filter::{self, FilterCriteria, FilterDimension};
use crate::pagination::{self, PageToken, PAGE_SIZE};
use crate::record::Record;
use crate::source::{self, DataSource, LoadError};

#[derive(Clone, Debug, Serialize)]
pub struct BrowserView<'a> {
    pub loading: bool,
    pub total_count: usize,
    pub matched_count: usize,
    pub current_page: usize,
    pub total_pages: usize,
    pub first_index: usize,
    pub last_index: usize,
    pub has_prev: bool,
    pub has_next: bool,
    pub pages: Vec<PageToken>,
    pub criteria: &'a FilterCriteria,
    pub visible: Vec<&'a Record>,
    pub locations: Vec<String>,
    pub employment_types: Vec<String>,
    pub selected: Option<&'a Record>,
}

#[derive(Debug)]
pub struct Browser {
    records: Vec<Record>,
    criteria: FilterCriteria,
    current_page: usize,
    selected_id: Option<usize>,
    loading: bool,
    last_error: Option<String>,
}

impl Default for Browser {
    fn default() -> Self {
        Self::new()
    }
}

impl Browser {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            criteria: FilterCriteria::default(),
            current_page: 1,
            selected_id: None,
            loading: true,
            last_error: None,
        }
    }

    pub fn with_records(records: Vec<Record>) -> Self {
        let mut browser = Self::new();
        browser.apply_load(Ok(records));
        browser
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn begin_load(&mut self) {
        self.loading = true;
    }

    // A failed load leaves an empty record set; filters and selection survive.
    pub fn apply_load(&mut self, result: Result<Vec<Record>, LoadError>) {
        match result {
            Ok(records) => {
                log::info!("loaded {} job postings", records.len());
                self.records = records;
                self.last_error = None;
            }
            Err(e) => {
                log::error!("error loading job postings: {e}");
                self.records = Vec::new();
                self.last_error = Some(e.to_string());
            }
        }
        self.current_page = 1;
        self.loading = false;
    }

    pub async fn reload(&mut self, source: &DataSource) {
        self.begin_load();
        let result = source::load_records(source).await;
        self.apply_load(result);
    }

    pub fn set_filter(&mut self, dimension: FilterDimension, value: impl Into<String>) {
        let value = value.into();
        log::debug!("filter {} -> {:?}", dimension.label(), value);
        self.criteria.set(dimension, value);
        self.current_page = 1;
    }

    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
        self.current_page = 1;
    }

    pub fn clear_filters(&mut self) {
        self.set_criteria(FilterCriteria::default());
    }

    pub fn matched(&self) -> Vec<&Record> {
        filter::apply(&self.records, &self.criteria)
    }

    pub fn total_pages(&self) -> usize {
        pagination::total_pages(self.matched().len(), PAGE_SIZE)
    }

    pub fn set_page(&mut self, page: usize) {
        self.current_page = page.max(1);
    }

    pub fn next_page(&mut self) {
        if self.current_page < self.total_pages() {
            self.current_page += 1;
        }
    }

    pub fn prev_page(&mut self) {
        if self.current_page > 1 {
            self.current_page -= 1;
        }
    }

    pub fn select(&mut self, id: usize) {
        self.selected_id = Some(id);
    }

    pub fn clear_selection(&mut self) {
        self.selected_id = None;
    }

    pub fn selected_id(&self) -> Option<usize> {
        self.selected_id
    }

    pub fn selected(&self) -> Option<&Record> {
        let id = self.selected_id?;
        self.records.iter().find(|r| r.id == id)
    }

    pub fn view(&self) -> BrowserView<'_> {
        let matched = self.matched();
        let page = pagination::paginate(&matched, PAGE_SIZE, self.current_page);
        BrowserView {
            loading: self.loading,
            total_count: self.records.len(),
            matched_count: matched.len(),
            current_page: self.current_page,
            total_pages: page.total_pages,
            first_index: page.first_index,
            last_index: page.last_index,
            has_prev: self.current_page > 1,
            has_next: self.current_page < page.total_pages,
            pages: pagination::compressed_page_numbers(self.current_page, page.total_pages),
            criteria: &self.criteria,
            visible: page.slice.to_vec(),
            locations: facet::locations(&self.records),
            employment_types: facet::employment_types(&self.records),
            selected: self.selected(),
        }
    }
}
