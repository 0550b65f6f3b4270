//! Error types for dataset operations
//!
//! Provides unified error handling for dataset loading, parsing, and
//! chart series extraction.

use crate::api::ApiError;
use thiserror::Error;

/// Errors that can occur while loading or parsing a dataset
#[derive(Error, Debug)]
pub enum DataError {
    /// CSV payload contained no non-blank lines
    #[error("CSV content is empty")]
    EmptyInput,

    /// Header line yielded no fields
    #[error("CSV content has no headers")]
    NoHeaders,

    /// Dataset identifier was empty
    #[error("dataset id is required")]
    MissingId,

    /// The service returned a zero-length payload
    #[error("dataset file is empty or not found")]
    EmptyBlob,

    /// The payload decoded to empty or all-whitespace text
    #[error("dataset file contains no data")]
    EmptyText,

    /// A chart referenced a column that does not exist in the table
    #[error("column not found: {0}")]
    ColumnNotFound(String),

    /// Transport-layer failure from the API client, propagated unchanged
    #[error("transport failure: {0}")]
    Transport(#[from] ApiError),
}

/// Result type alias for dataset operations
pub type DataResult<T> = Result<T, DataError>;
