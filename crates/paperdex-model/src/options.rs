//! Export configuration and the two built-in presets.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::document::Facet;

/// Fixed pillar list, in display order.
pub const DEFAULT_PILLARS: [&str; 5] = [
    "Generation",
    "Prevention",
    "Detection",
    "Recovery/Mitigation",
    "Analysis/Learning",
];

/// Default facet keys and labels.
pub const DEFAULT_FACETS: [(&str, &str); 8] = [
    ("Pillar", "Pillar"),
    ("Technique", "Technique"),
    ("DataSource", "Data source"),
    ("ApplicationContext", "Application context"),
    ("DatasetAvailable", "Dataset available"),
    ("SourceOfAnomaly", "Source of anomaly"),
    ("NatureOfAnomaly", "Nature of anomaly"),
    ("DetectionApproach", "Detection approach"),
];

/// Cell texts treated as missing values.
pub const DEFAULT_NA_VALUES: [&str; 19] = [
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Column read when pillars are derived from the data.
pub const DEFAULT_PILLAR_COLUMN: &str = "Pillar";

pub const DEFAULT_OUTPUT: &str = "data.json";

/// Where the `pillars` array comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PillarSource {
    /// Use the configured pillar list as-is.
    #[default]
    Fixed,
    /// Collect distinct trimmed values of the pillar column.
    Derived,
}

impl fmt::Display for PillarSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed => f.write_str("fixed"),
            Self::Derived => f.write_str("derived"),
        }
    }
}

/// Named bundles of defaults matching the two historical exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Preset {
    /// `check.xlsx`, sheet `Papers`, fixed pillars, facets included.
    #[default]
    Curated,
    /// `final.xlsx`, first sheet, derived pillars, no facets.
    Derived,
}

/// Everything one export run needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportOptions {
    /// Workbook to read.
    pub input: PathBuf,
    /// JSON file to write.
    pub output: PathBuf,
    /// Sheet to read; `None` selects the first sheet.
    pub sheet: Option<String>,
    pub pillar_source: PillarSource,
    /// Whether the document carries a `facets` array.
    pub include_facets: bool,
    /// Pillar list used with [`PillarSource::Fixed`].
    pub pillars: Vec<String>,
    pub facets: Vec<Facet>,
    /// Column read with [`PillarSource::Derived`].
    pub pillar_column: String,
    /// Exact cell texts treated as missing.
    pub na_values: Vec<String>,
    /// Indent the JSON output.
    pub pretty: bool,
}

impl ExportOptions {
    /// Defaults for a preset.
    pub fn for_preset(preset: Preset) -> Self {
        match preset {
            Preset::Curated => Self::curated(),
            Preset::Derived => Self::derived(),
        }
    }

    /// `check.xlsx` / `Papers`, fixed pillars and the facet list.
    pub fn curated() -> Self {
        Self {
            input: PathBuf::from("check.xlsx"),
            output: PathBuf::from(DEFAULT_OUTPUT),
            sheet: Some("Papers".to_string()),
            pillar_source: PillarSource::Fixed,
            include_facets: true,
            pillars: default_pillars(),
            facets: default_facets(),
            pillar_column: DEFAULT_PILLAR_COLUMN.to_string(),
            na_values: default_na_values(),
            pretty: false,
        }
    }

    /// `final.xlsx` / first sheet, pillars derived from the data, no facets.
    pub fn derived() -> Self {
        Self {
            input: PathBuf::from("final.xlsx"),
            sheet: None,
            pillar_source: PillarSource::Derived,
            include_facets: false,
            ..Self::curated()
        }
    }
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self::curated()
    }
}

pub fn default_pillars() -> Vec<String> {
    DEFAULT_PILLARS.iter().map(|p| (*p).to_string()).collect()
}

pub fn default_facets() -> Vec<Facet> {
    DEFAULT_FACETS
        .iter()
        .map(|(key, label)| Facet::new(*key, *label))
        .collect()
}

pub fn default_na_values() -> Vec<String> {
    DEFAULT_NA_VALUES.iter().map(|v| (*v).to_string()).collect()
}
