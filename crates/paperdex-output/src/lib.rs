//! JSON output for the paper metadata export.
//!
//! Documents are written as UTF-8 without ASCII escaping, so accented author
//! names appear literally in the file.

use std::fs;
use std::path::{Path, PathBuf};

use paperdex_model::OutputDocument;
use thiserror::Error;
use tracing::info;

/// Errors that can occur while writing the output document.
#[derive(Debug, Error)]
pub enum OutputError {
    /// Serialization failed before anything was written.
    #[error("failed to serialize document: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Filesystem failure creating or writing the file.
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for output operations.
pub type Result<T> = std::result::Result<T, OutputError>;

/// Serializes a document, compact or indented by two spaces.
pub fn to_json(document: &OutputDocument, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(document)?
    } else {
        serde_json::to_string(document)?
    };
    Ok(json)
}

/// Writes a document to `path`, creating missing parent directories.
pub fn write(document: &OutputDocument, path: &Path, pretty: bool) -> Result<()> {
    let json = to_json(document, pretty)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| OutputError::Write {
            path: path.to_path_buf(),
            source,
        })?;
    }
    fs::write(path, json.as_bytes()).map_err(|source| OutputError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!(
        path = %path.display(),
        bytes = json.len(),
        papers = document.paper_count(),
        "document written"
    );
    Ok(())
}
