use crate::catalog::dto::parse_document;
use crate::catalog::model::EventRecord;
use tracing::{info, warn};

/// In-memory event collection. Single writer, single reader: the browsing
/// session applies one mutation at a time and re-filters afterwards, so
/// positional indices are only valid against the current collection.
#[derive(Debug, Default)]
pub struct CatalogStore {
    events: Vec<EventRecord>,
}

#[derive(Debug, PartialEq, Eq)]
pub enum CatalogError {
    UnreadableSource,
    InvalidDocument,
    IndexOutOfBounds { index: usize, len: usize },
}

impl CatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[EventRecord] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn replace_all(&mut self, records: Vec<EventRecord>) {
        self.events = records;
    }

    /// Bulk import of a whole document. A rejected document leaves the
    /// current collection exactly as it was.
    pub fn import(&mut self, payload: &str) -> Result<usize, CatalogError> {
        let records = parse_document(payload)?;
        let count = records.len();

        self.events = records;
        info!("Imported {count} event(s)");

        Ok(count)
    }

    /// New events go to the front: most recent first.
    pub fn add(&mut self, record: EventRecord) {
        self.events.insert(0, record);
    }

    pub fn update(&mut self, index: usize, record: EventRecord) -> Result<(), CatalogError> {
        let len = self.events.len();

        match self.events.get_mut(index) {
            Some(slot) => {
                *slot = record;
                Ok(())
            }
            None => {
                warn!("Ignoring update at stale index {index} (catalog has {len} events)");
                Err(CatalogError::IndexOutOfBounds { index, len })
            }
        }
    }

    pub fn remove(&mut self, index: usize) -> Result<EventRecord, CatalogError> {
        let len = self.events.len();

        if index >= len {
            warn!("Ignoring removal at stale index {index} (catalog has {len} events)");
            return Err(CatalogError::IndexOutOfBounds { index, len });
        }

        Ok(self.events.remove(index))
    }

    /// Serializes the full collection (no filtering applied), pretty-printed,
    /// with field names as stored.
    pub fn export_snapshot(&self) -> String {
        serde_json::to_string_pretty(&self.events).expect("Catalog serialization failed")
    }
}
