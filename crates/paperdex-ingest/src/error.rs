//! Error types for workbook ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a workbook.
#[derive(Debug, Error)]
pub enum IngestError {
    // === Source Not Found ===
    /// Input path does not exist.
    #[error("workbook not found: {path}")]
    SourceNotFound { path: PathBuf },

    /// Requested sheet is not in the workbook.
    #[error("sheet '{sheet}' not found in {path} (available: {})", available.join(", "))]
    SheetNotFound {
        path: PathBuf,
        sheet: String,
        available: Vec<String>,
    },

    /// Workbook has no sheets to fall back on.
    #[error("workbook has no sheets: {path}")]
    NoSheets { path: PathBuf },

    // === Malformed Source ===
    /// File exists but is not a readable workbook.
    #[error("failed to parse workbook {path}: {message}")]
    MalformedSource { path: PathBuf, message: String },
}

impl IngestError {
    /// True for the "path or sheet does not exist" family.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::SourceNotFound { .. } | Self::SheetNotFound { .. } | Self::NoSheets { .. }
        )
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::SourceNotFound {
            path: PathBuf::from("/path/to/check.xlsx"),
        };
        assert_eq!(err.to_string(), "workbook not found: /path/to/check.xlsx");
    }

    #[test]
    fn test_sheet_not_found_lists_available() {
        let err = IngestError::SheetNotFound {
            path: PathBuf::from("check.xlsx"),
            sheet: "Papers".to_string(),
            available: vec!["Sheet1".to_string(), "Notes".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "sheet 'Papers' not found in check.xlsx (available: Sheet1, Notes)"
        );
        assert!(err.is_not_found());
    }

    #[test]
    fn test_malformed_is_not_not_found() {
        let err = IngestError::MalformedSource {
            path: PathBuf::from("broken.xlsx"),
            message: "invalid zip header".to_string(),
        };
        assert!(!err.is_not_found());
    }
}
