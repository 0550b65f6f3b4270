//! Tests for the dataset loader orchestration.

use crate::helpers::StubFetcher;
use chartboard::data::{Cell, DataError, load_dataset};

#[tokio::test]
async fn empty_id_fails_without_fetching() {
    let fetcher = StubFetcher::serving("a,b\n1,2");

    let err = load_dataset(&fetcher, "").await.unwrap_err();

    assert!(matches!(err, DataError::MissingId));
    assert_eq!(fetcher.call_count(), 0);
}

#[tokio::test]
async fn empty_blob_is_rejected() {
    let fetcher = StubFetcher::serving(Vec::new());

    let err = load_dataset(&fetcher, "ds-1").await.unwrap_err();

    assert!(matches!(err, DataError::EmptyBlob));
    assert_eq!(fetcher.call_count(), 1);
}

#[tokio::test]
async fn whitespace_only_blob_is_rejected() {
    let fetcher = StubFetcher::serving("  \n \t \n");

    let err = load_dataset(&fetcher, "ds-1").await.unwrap_err();

    assert!(matches!(err, DataError::EmptyText));
}

#[tokio::test]
async fn transport_failure_propagates() {
    let fetcher = StubFetcher::failing();

    let err = load_dataset(&fetcher, "ds-1").await.unwrap_err();

    assert!(matches!(err, DataError::Transport(_)));
}

#[tokio::test]
async fn successful_load_parses_payload() {
    let fetcher = StubFetcher::serving("x,y\nhello,2\n");

    let table = load_dataset(&fetcher, "ds-1").await.unwrap();

    assert_eq!(table.headers, vec!["x", "y"]);
    assert_eq!(
        table.rows[0],
        vec![Cell::Text("hello".to_string()), Cell::Number(2.0)]
    );
}
