//! Test helpers and builders for reducing boilerplate in tests.
//!
//! This module provides:
//! - `TestTableBuilder` - Builder pattern for creating tables cell by cell
//! - `StubFetcher` - In-memory stand-in for the dataset fetch collaborator

use async_trait::async_trait;
use chartboard::api::ApiError;
use chartboard::data::{Cell, DatasetFetcher, TableData};
use std::sync::atomic::{AtomicUsize, Ordering};

// ============================================================================
// TestTableBuilder - Builder pattern for creating test tables
// ============================================================================

/// Builder for creating test tables without going through the parser.
///
/// # Example
/// ```ignore
/// let table = TestTableBuilder::new(&["a", "b"])
///     .with_row(&[num(1.0), text("x")])
///     .build();
/// ```
pub struct TestTableBuilder {
    headers: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl TestTableBuilder {
    pub fn new(headers: &[&str]) -> Self {
        Self {
            headers: headers.iter().map(|h| (*h).to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn with_row(mut self, cells: &[Cell]) -> Self {
        assert_eq!(
            cells.len(),
            self.headers.len(),
            "row width must match header count"
        );
        self.rows.push(cells.to_vec());
        self
    }

    pub fn build(self) -> TableData {
        TableData {
            headers: self.headers,
            rows: self.rows,
        }
    }
}

/// Shorthand for a number cell.
pub fn num(value: f64) -> Cell {
    Cell::Number(value)
}

/// Shorthand for a text cell.
pub fn text(value: &str) -> Cell {
    Cell::Text(value.to_string())
}

// ============================================================================
// StubFetcher - In-memory dataset fetch collaborator
// ============================================================================

/// Stub fetch collaborator serving a fixed payload (or failing), with a
/// call counter to assert whether a fetch was attempted.
pub struct StubFetcher {
    payload: Option<Vec<u8>>,
    pub calls: AtomicUsize,
}

impl StubFetcher {
    /// Serve the given bytes for every fetch.
    pub fn serving(payload: impl Into<Vec<u8>>) -> Self {
        Self {
            payload: Some(payload.into()),
            calls: AtomicUsize::new(0),
        }
    }

    /// Fail every fetch with a transport-level error.
    pub fn failing() -> Self {
        Self {
            payload: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DatasetFetcher for StubFetcher {
    async fn fetch_dataset(&self, _id: &str) -> Result<Vec<u8>, ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.payload {
            Some(bytes) => Ok(bytes.clone()),
            None => Err(ApiError::Status {
                status: 503,
                body: "service unavailable".to_string(),
            }),
        }
    }
}
