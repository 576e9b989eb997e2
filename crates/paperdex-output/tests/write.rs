//! Integration tests for writing output documents to disk.

use paperdex_model::{OutputDocument, Record};
use paperdex_output::{OutputError, write};
use tempfile::TempDir;

fn document() -> OutputDocument {
    let mut record = Record::new();
    record.push("Title", "Détection d'anomalies");
    record.push("Year", "2023");
    OutputDocument {
        pillars: vec!["Detection".to_string(), "Prevention".to_string()],
        papers: vec![record],
        facets: None,
    }
}

#[test]
fn writes_utf8_json() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("data.json");

    write(&document(), &path, false).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.contains("Détection d'anomalies"));
    let value: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(value["papers"][0]["Year"], "2023");
    assert!(value.get("facets").is_none());
}

#[test]
fn rewriting_is_byte_identical() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("data.json");

    write(&document(), &path, false).unwrap();
    let first = std::fs::read(&path).unwrap();
    write(&document(), &path, false).unwrap();
    let second = std::fs::read(&path).unwrap();

    assert_eq!(first, second);
}

#[test]
fn creates_parent_directories() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("site").join("assets").join("data.json");

    write(&document(), &path, true).unwrap();

    assert!(path.is_file());
}

#[test]
fn unwritable_target_is_write_error() {
    let dir = TempDir::new().unwrap();
    // The target path is an existing directory.
    let err = write(&document(), dir.path(), false).unwrap_err();
    assert!(matches!(err, OutputError::Write { .. }));
}
