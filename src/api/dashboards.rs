//! Dashboard service: creation and public retrieval.

use super::{ApiClient, ApiError};
use crate::constants::{ROUTE_CREATE_DASHBOARD, ROUTE_GET_DASHBOARD};
use crate::types::{ChartDefinition, Dashboard};
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateDashboardRequest<'a> {
    dataset_id: &'a str,
    visualizations: &'a [ChartDefinition],
}

#[derive(Deserialize)]
struct CreateDashboardResponse {
    id: String,
}

#[derive(Serialize)]
struct GetDashboardRequest<'a> {
    id: &'a str,
}

impl ApiClient {
    /// Persist a dashboard; returns the id used in its public URL.
    pub async fn create_dashboard(
        &self,
        dataset_id: &str,
        visualizations: &[ChartDefinition],
    ) -> Result<String, ApiError> {
        let request = CreateDashboardRequest {
            dataset_id,
            visualizations,
        };
        let response: CreateDashboardResponse = self.post(ROUTE_CREATE_DASHBOARD, &request).await?;
        tracing::info!(id = %response.id, "dashboard created");
        Ok(response.id)
    }

    /// Fetch a dashboard by id. Public: no token required.
    pub async fn get_dashboard(&self, id: &str) -> Result<Dashboard, ApiError> {
        self.post(ROUTE_GET_DASHBOARD, &GetDashboardRequest { id })
            .await
    }
}
