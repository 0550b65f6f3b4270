//! Upload validation and display helpers.

use crate::constants::MAX_DATASET_SIZE_BYTES;

/// Validate a dataset file before upload.
///
/// Returns a user-facing message when the file is not acceptable:
/// anything without a `.csv` extension (case-insensitive) or above the
/// size ceiling is rejected before any bytes leave the client.
pub fn validate_dataset_file(name: &str, size_bytes: u64) -> Option<String> {
    if !name.to_lowercase().ends_with(".csv") {
        return Some("Please select a valid CSV file".to_string());
    }

    if size_bytes > MAX_DATASET_SIZE_BYTES {
        return Some("File size must be less than 10MB".to_string());
    }

    None
}

/// Format a byte count for display ("1.5 MB").
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let exponent = ((bytes as f64).ln() / 1024f64.ln()).floor() as usize;
    let exponent = exponent.min(UNITS.len() - 1);
    let value = bytes as f64 / 1024f64.powi(exponent as i32);

    // Two decimals, without trailing zeros
    let rounded = (value * 100.0).round() / 100.0;
    format!("{} {}", rounded, UNITS[exponent])
}

/// Build the shareable public URL for a dashboard.
pub fn dashboard_url(base_url: &str, dashboard_id: &str) -> String {
    format!("{}/dashboard/{}", base_url.trim_end_matches('/'), dashboard_id)
}
