//! Option resolution: preset defaults, then the TOML config file, then flags.

use std::fs;
use std::path::{Path, PathBuf};

use paperdex_model::{ExportOptions, Facet, PillarSource, Preset};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Errors raised while reading a config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Contents of a config file. Every key is optional.
///
/// ```toml
/// preset = "derived"
/// input = "final.xlsx"
/// pillar_column = "Pillar"
/// na_values = []
///
/// [[facets]]
/// key = "Venue"
/// label = "Venue"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub preset: Option<Preset>,
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub sheet: Option<String>,
    /// Read the first sheet even if the preset names one.
    pub first_sheet: Option<bool>,
    pub pillar_source: Option<PillarSource>,
    pub include_facets: Option<bool>,
    pub pillars: Option<Vec<String>>,
    pub facets: Option<Vec<Facet>>,
    pub pillar_column: Option<String>,
    pub na_values: Option<Vec<String>>,
    pub pretty: Option<bool>,
}

impl ConfigFile {
    /// Parses config text; `path` is only used for error messages.
    pub fn parse(text: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&text, path)?;
        debug!(path = %path.display(), "config file loaded");
        Ok(config)
    }

    /// Overwrites every option the file sets.
    pub fn apply(self, options: &mut ExportOptions) {
        if let Some(input) = self.input {
            options.input = input;
        }
        if let Some(output) = self.output {
            options.output = output;
        }
        if let Some(sheet) = self.sheet {
            options.sheet = Some(sheet);
        }
        if self.first_sheet == Some(true) {
            options.sheet = None;
        }
        if let Some(source) = self.pillar_source {
            options.pillar_source = source;
        }
        if let Some(include) = self.include_facets {
            options.include_facets = include;
        }
        if let Some(pillars) = self.pillars {
            options.pillars = pillars;
        }
        if let Some(facets) = self.facets {
            options.facets = facets;
        }
        if let Some(column) = self.pillar_column {
            options.pillar_column = column;
        }
        if let Some(na_values) = self.na_values {
            options.na_values = na_values;
        }
        if let Some(pretty) = self.pretty {
            options.pretty = pretty;
        }
    }
}

/// Command-line overrides; `None` / `false` leave the option alone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExportOverrides {
    pub preset: Option<Preset>,
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub sheet: Option<String>,
    pub first_sheet: bool,
    pub pillar_source: Option<PillarSource>,
    pub include_facets: Option<bool>,
    pub pillar_column: Option<String>,
    pub pretty: bool,
}

impl ExportOverrides {
    pub fn apply(self, options: &mut ExportOptions) {
        if let Some(input) = self.input {
            options.input = input;
        }
        if let Some(output) = self.output {
            options.output = output;
        }
        if let Some(sheet) = self.sheet {
            options.sheet = Some(sheet);
        }
        if self.first_sheet {
            options.sheet = None;
        }
        if let Some(source) = self.pillar_source {
            options.pillar_source = source;
        }
        if let Some(include) = self.include_facets {
            options.include_facets = include;
        }
        if let Some(column) = self.pillar_column {
            options.pillar_column = column;
        }
        if self.pretty {
            options.pretty = true;
        }
    }
}

/// Layers preset defaults, the optional config file and command-line flags.
///
/// The preset comes from the flags first, then the config file, then
/// [`Preset::Curated`].
pub fn resolve_options(
    config: Option<ConfigFile>,
    overrides: ExportOverrides,
) -> ExportOptions {
    let config = config.unwrap_or_default();
    let preset = overrides.preset.or(config.preset).unwrap_or_default();
    let mut options = ExportOptions::for_preset(preset);
    config.apply(&mut options);
    overrides.apply(&mut options);
    debug!(
        ?preset,
        input = %options.input.display(),
        output = %options.output.display(),
        sheet = ?options.sheet,
        pillar_source = %options.pillar_source,
        include_facets = options.include_facets,
        "options resolved"
    );
    options
}
