//! Dataset loading
//!
//! Orchestrates fetching a dataset payload from the service and parsing
//! it into a [`TableData`]. The fetch itself goes through the
//! [`DatasetFetcher`] seam so tests and alternative transports can
//! stand in for the live API client.

use crate::api::ApiError;
use crate::data::csv_parser::parse_csv;
use crate::data::error::{DataError, DataResult};
use crate::data::table::TableData;
use async_trait::async_trait;

/// Fetches raw dataset bytes by identifier.
///
/// Implemented by [`ApiClient`](crate::api::ApiClient); transport
/// failures surface as [`ApiError`] and are propagated by the loader
/// without retries.
#[async_trait]
pub trait DatasetFetcher {
    async fn fetch_dataset(&self, id: &str) -> Result<Vec<u8>, ApiError>;
}

/// Fetch and parse a dataset.
///
/// Fails with [`DataError::MissingId`] before any network call when the
/// id is empty. The payload is decoded as UTF-8 (lossily; the byte
/// encoding is the service's concern) and handed to the CSV parser.
pub async fn load_dataset(fetcher: &impl DatasetFetcher, dataset_id: &str) -> DataResult<TableData> {
    if dataset_id.is_empty() {
        return Err(DataError::MissingId);
    }

    tracing::debug!(dataset_id, "loading dataset");
    let blob = fetcher.fetch_dataset(dataset_id).await?;

    if blob.is_empty() {
        return Err(DataError::EmptyBlob);
    }

    let text = String::from_utf8_lossy(&blob);
    if text.trim().is_empty() {
        return Err(DataError::EmptyText);
    }

    let table = parse_csv(&text)?;
    tracing::debug!(
        rows = table.row_count(),
        columns = table.column_count(),
        "dataset loaded"
    );
    Ok(table)
}
