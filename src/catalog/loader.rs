use crate::catalog::dto::parse_document;
use crate::catalog::model::EventRecord;
use crate::catalog::store::CatalogError;
use tokio::fs;
use tracing::{error, info};

/// Reads the startup catalog document from disk. This is the only async
/// edge of the crate; everything past it is synchronous computation over
/// the loaded records. Callers may degrade a failure to an empty catalog.
pub async fn load_catalog(path: &str) -> Result<Vec<EventRecord>, CatalogError> {
    let payload = fs::read_to_string(path).await.map_err(|err| {
        error!("Failed reading catalog source '{path}': {err}");
        CatalogError::UnreadableSource
    })?;

    let records = parse_document(&payload)?;
    info!("Loaded {} event(s) from '{path}'", records.len());

    Ok(records)
}
