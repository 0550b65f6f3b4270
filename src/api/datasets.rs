//! Dataset service: upload, listing, and retrieval.
//!
//! File bytes cross the wire base64-encoded inside JSON, matching the
//! service's connect contract for `bytes` fields.

use super::{ApiClient, ApiError};
use crate::constants::{ROUTE_GET_DATASET, ROUTE_LIST_DATASETS, ROUTE_UPLOAD_DATASET};
use crate::data::DatasetFetcher;
use crate::types::DatasetSummary;
use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
struct UploadDatasetRequest<'a> {
    filename: &'a str,
    data: String,
}

#[derive(Deserialize)]
struct UploadDatasetResponse {
    id: String,
}

#[derive(Serialize)]
struct GetDatasetRequest<'a> {
    id: &'a str,
}

#[derive(Deserialize)]
struct GetDatasetResponse {
    data: Option<String>,
}

#[derive(Deserialize)]
struct ListDatasetsResponse {
    #[serde(default)]
    datasets: Vec<DatasetSummary>,
}

impl ApiClient {
    /// Upload a CSV file; returns the new dataset's id.
    ///
    /// Callers should run `validate_dataset_file` first; the service
    /// enforces its own limits as well.
    pub async fn upload_dataset(&self, filename: &str, bytes: &[u8]) -> Result<String, ApiError> {
        let request = UploadDatasetRequest {
            filename,
            data: BASE64.encode(bytes),
        };
        let response: UploadDatasetResponse = self.post(ROUTE_UPLOAD_DATASET, &request).await?;
        tracing::info!(filename, id = %response.id, "dataset uploaded");
        Ok(response.id)
    }

    /// List the signed-in user's datasets.
    pub async fn list_datasets(&self) -> Result<Vec<DatasetSummary>, ApiError> {
        let response: ListDatasetsResponse =
            self.post(ROUTE_LIST_DATASETS, &serde_json::json!({})).await?;
        Ok(response.datasets)
    }

    /// Fetch a dataset's raw bytes.
    pub async fn get_dataset(&self, id: &str) -> Result<Vec<u8>, ApiError> {
        let response: GetDatasetResponse = self.post(ROUTE_GET_DATASET, &GetDatasetRequest { id }).await?;
        let data = response
            .data
            .ok_or_else(|| ApiError::BadResponse("no data field in response".to_string()))?;
        Ok(BASE64.decode(data)?)
    }
}

#[async_trait]
impl DatasetFetcher for ApiClient {
    async fn fetch_dataset(&self, id: &str) -> Result<Vec<u8>, ApiError> {
        self.get_dataset(id).await
    }
}
