//! CLI argument definitions for the paper metadata export.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use paperdex_cli::config::ExportOverrides;
use paperdex_model::{PillarSource, Preset};

#[derive(Parser)]
#[command(
    name = "paperdex",
    version,
    about = "Export a paper metadata workbook to the viewer's data.json",
    long_about = "Export a paper metadata workbook to the viewer's data.json.\n\n\
                  With no arguments, reads sheet 'Papers' of check.xlsx and writes\n\
                  data.json with the fixed pillar list and facet definitions.",
    args_conflicts_with_subcommands = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub export: ExportArgs,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Prefix log lines with a timestamp.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the sheets of a workbook.
    Sheets(SheetsArgs),
}

#[derive(Args)]
pub struct SheetsArgs {
    /// Workbook to inspect.
    #[arg(value_name = "WORKBOOK")]
    pub path: PathBuf,
}

#[derive(Args)]
pub struct ExportArgs {
    /// Defaults to start from (curated: check.xlsx/Papers, derived: final.xlsx/first sheet).
    #[arg(long = "preset", value_enum)]
    pub preset: Option<PresetArg>,

    /// TOML config file layered over the preset.
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Input workbook.
    #[arg(short = 'i', long = "input", value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Output JSON file.
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Sheet to read.
    #[arg(long = "sheet", value_name = "NAME", conflicts_with = "first_sheet")]
    pub sheet: Option<String>,

    /// Read the first sheet of the workbook.
    #[arg(long = "first-sheet")]
    pub first_sheet: bool,

    /// Where the pillar list comes from.
    #[arg(long = "pillars", value_enum)]
    pub pillars: Option<PillarSourceArg>,

    /// Include facet definitions in the output.
    #[arg(long = "facets", overrides_with = "no_facets")]
    pub facets: bool,

    /// Omit facet definitions from the output.
    #[arg(long = "no-facets", overrides_with = "facets")]
    pub no_facets: bool,

    /// Column holding each paper's pillar (used with --pillars derived).
    #[arg(long = "pillar-column", value_name = "NAME")]
    pub pillar_column: Option<String>,

    /// Indent the JSON output.
    #[arg(long = "pretty")]
    pub pretty: bool,

    /// Print per-column fill counts after the summary.
    #[arg(long = "stats")]
    pub stats: bool,
}

impl ExportArgs {
    /// Converts flags into option overrides.
    pub fn overrides(&self) -> ExportOverrides {
        let include_facets = if self.facets {
            Some(true)
        } else if self.no_facets {
            Some(false)
        } else {
            None
        };
        ExportOverrides {
            preset: self.preset.map(Preset::from),
            input: self.input.clone(),
            output: self.output.clone(),
            sheet: self.sheet.clone(),
            first_sheet: self.first_sheet,
            pillar_source: self.pillars.map(PillarSource::from),
            include_facets,
            pillar_column: self.pillar_column.clone(),
            pretty: self.pretty,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum PresetArg {
    Curated,
    Derived,
}

impl From<PresetArg> for Preset {
    fn from(value: PresetArg) -> Self {
        match value {
            PresetArg::Curated => Self::Curated,
            PresetArg::Derived => Self::Derived,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum PillarSourceArg {
    Fixed,
    Derived,
}

impl From<PillarSourceArg> for PillarSource {
    fn from(value: PillarSourceArg) -> Self {
        match value {
            PillarSourceArg::Fixed => Self::Fixed,
            PillarSourceArg::Derived => Self::Derived,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
