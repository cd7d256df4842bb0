use crate::catalog::model::EventRecord;
use crate::catalog::store::{CatalogError, CatalogStore};
use crate::filter::criteria::{DatePreset, FilterCriteria};
use crate::filter::engine::apply;
use crate::filter::pagination::Pager;
use chrono::NaiveDate;
use tracing::debug;

/// One browsing session: the catalog plus the active criteria and the
/// growing visible window. Every criteria change and every catalog
/// mutation snaps the window back to the first page before the next read;
/// a stale page must never survive a filter or collection change.
#[derive(Debug)]
pub struct CatalogBrowser {
    store: CatalogStore,
    criteria: FilterCriteria,
    pager: Pager,
}

impl CatalogBrowser {
    pub fn new(page_size: usize) -> Self {
        Self {
            store: CatalogStore::new(),
            criteria: FilterCriteria::default(),
            pager: Pager::new(page_size),
        }
    }

    pub fn store(&self) -> &CatalogStore {
        &self.store
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn page(&self) -> usize {
        self.pager.page()
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.criteria.query = query.into();
        self.pager.reset();
    }

    pub fn set_tag_tokens(&mut self, tag_tokens: impl Into<String>) {
        self.criteria.tag_tokens = tag_tokens.into();
        self.pager.reset();
    }

    pub fn set_date_preset(&mut self, preset: DatePreset) {
        debug!("Period preset set to '{}'", <&'static str>::from(preset));
        self.criteria.date_preset = preset;
        self.pager.reset();
    }

    /// Absolute bounds override the preset for as long as either is set.
    pub fn set_date_range(&mut self, from: Option<NaiveDate>, to: Option<NaiveDate>) {
        self.criteria.from_date = from;
        self.criteria.to_date = to;
        self.pager.reset();
    }

    pub fn clear_date_range(&mut self) {
        self.set_date_range(None, None);
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.pager.set_page_size(page_size);
    }

    /// "Load more": grows the visible window by one page.
    pub fn load_more(&mut self) {
        self.pager.advance();
    }

    pub fn replace_all(&mut self, records: Vec<EventRecord>) {
        self.store.replace_all(records);
        self.pager.reset();
    }

    pub fn import_document(&mut self, payload: &str) -> Result<usize, CatalogError> {
        let count = self.store.import(payload)?;
        self.pager.reset();

        Ok(count)
    }

    pub fn add(&mut self, record: EventRecord) {
        self.store.add(record);
        self.pager.reset();
    }

    pub fn update(&mut self, index: usize, record: EventRecord) -> Result<(), CatalogError> {
        self.store.update(index, record)?;
        self.pager.reset();

        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> Result<EventRecord, CatalogError> {
        let removed = self.store.remove(index)?;
        self.pager.reset();

        Ok(removed)
    }

    pub fn export_snapshot(&self) -> String {
        self.store.export_snapshot()
    }

    /// The whole filtered sequence, catalog order preserved.
    pub fn filtered(&self) -> Vec<&EventRecord> {
        apply(self.store.events(), &self.criteria)
    }

    pub fn total_filtered(&self) -> usize {
        self.filtered().len()
    }

    /// The visible prefix of the filtered sequence.
    pub fn visible(&self) -> Vec<&EventRecord> {
        let mut filtered = self.filtered();
        filtered.truncate(self.pager.visible(filtered.len()));

        filtered
    }
}
