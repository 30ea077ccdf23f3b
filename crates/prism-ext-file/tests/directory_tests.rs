//! Integration tests for `JsonDirectoryStore` against real directories.

use std::fs;

use prism_ext_file::JsonDirectoryStore;
use prism_traits::{PortfolioStore, TraitError};
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, contents: &str) {
    fs::write(dir.path().join(name), contents).unwrap();
}

fn populated() -> TempDir {
    let dir = TempDir::new().unwrap();
    write(
        &dir,
        "income.json",
        r#"{"id": "income", "name": "Income Sleeve", "asOf": "2026-02-28",
            "holdings": [{"name": "Bonds", "weight": 100, "assetClass": "Fixed Income"}]}"#,
    );
    write(&dir, "bare.json", r#"{"holdings": []}"#);
    write(&dir, "notes.txt", "not a portfolio");
    fs::create_dir(dir.path().join("archive.json")).unwrap();
    dir
}

#[tokio::test]
async fn lists_json_files_with_defaults() {
    let dir = populated();
    let store = JsonDirectoryStore::new(dir.path());

    let listings = store.list_portfolios().await.unwrap();
    assert_eq!(listings.len(), 2);

    // sorted by file name
    assert_eq!(listings[0].id, "bare");
    assert_eq!(listings[0].name, "bare.json");
    assert_eq!(listings[0].as_of, "unknown");

    assert_eq!(listings[1].id, "income");
    assert_eq!(listings[1].name, "Income Sleeve");
    assert_eq!(listings[1].as_of, "2026-02-28");
}

#[tokio::test]
async fn numeric_metadata_does_not_break_listing() {
    let dir = populated();
    write(
        &dir,
        "legacy.json",
        r#"{"id": 2019, "asOf": 20260131, "holdings": [{"name": "Cash", "weight": 100}]}"#,
    );
    let store = JsonDirectoryStore::new(dir.path());

    let listings = store.list_portfolios().await.unwrap();
    assert_eq!(listings.len(), 3);
    assert_eq!(listings[2].id, "2019");
    assert_eq!(listings[2].name, "legacy.json");
    assert_eq!(listings[2].as_of, "20260131");

    let raw = store.fetch_portfolio("legacy").await.unwrap();
    assert_eq!(raw.holdings().len(), 1);
}

#[tokio::test]
async fn fetches_by_id() {
    let dir = populated();
    let store = JsonDirectoryStore::new(dir.path());

    let raw = store.fetch_portfolio("income").await.unwrap();
    assert_eq!(raw.holdings().len(), 1);

    let bare = store.fetch_portfolio("bare").await.unwrap();
    assert!(bare.holdings().is_empty());
}

#[tokio::test]
async fn unknown_or_unsafe_ids_are_not_found() {
    let dir = populated();
    let store = JsonDirectoryStore::new(dir.path());

    for id in ["missing", "../income", "archive"] {
        let err = store.fetch_portfolio(id).await.unwrap_err();
        assert!(matches!(err, TraitError::NotFound(_)), "{id}: {err}");
    }
}

#[tokio::test]
async fn malformed_file_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    write(&dir, "broken.json", "{ holdings: ");
    let store = JsonDirectoryStore::new(dir.path());

    let err = store.fetch_portfolio("broken").await.unwrap_err();
    assert!(matches!(err, TraitError::ParseError(_)));
    assert!(store.list_portfolios().await.is_err());
}

#[tokio::test]
async fn missing_directory_is_an_io_error() {
    let dir = TempDir::new().unwrap();
    let store = JsonDirectoryStore::new(dir.path().join("nope"));
    let err = store.list_portfolios().await.unwrap_err();
    assert!(matches!(err, TraitError::IoError(_)));
}
