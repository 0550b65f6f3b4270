//! Application-wide constants.
//!
//! Centralizes magic numbers to make the codebase more maintainable
//! and self-documenting.

// ============================================================================
// Dataset Limits
// ============================================================================

/// Maximum dataset upload size in bytes (10 MiB)
pub const MAX_DATASET_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Fraction of numeric cells a column needs (strictly more than) to be
/// classified as numeric
pub const NUMERIC_COLUMN_THRESHOLD: f64 = 0.7;

// ============================================================================
// Service Routes
// ============================================================================

/// Auth service endpoints
pub const ROUTE_LOGIN: &str = "/contracts.auth.v1.AuthService/Login";
pub const ROUTE_SIGNUP: &str = "/contracts.auth.v1.AuthService/Signup";

/// Dataset service endpoints
pub const ROUTE_UPLOAD_DATASET: &str = "/contracts.dataset.v1.DatasetService/UploadDataset";
pub const ROUTE_GET_DATASET: &str = "/contracts.dataset.v1.DatasetService/GetDataset";
pub const ROUTE_LIST_DATASETS: &str =
    "/contracts.dataset.v1.DatasetService/GetAllDatasetsFromUser";

/// Dashboard service endpoints
pub const ROUTE_CREATE_DASHBOARD: &str = "/contracts.viz.v1.DashboardService/CreateDashboard";
pub const ROUTE_GET_DASHBOARD: &str = "/contracts.viz.v1.DashboardService/GetDashboard";

// ============================================================================
// Session
// ============================================================================

/// Directory name under the platform config dir for persisted state
pub const CONFIG_DIR_NAME: &str = "chartboard";

/// File name of the persisted session token
pub const SESSION_FILE_NAME: &str = "session.json";
