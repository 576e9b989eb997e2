//! Subcommand handlers invoked from `main`.

use anyhow::{Context, Result};
use paperdex_cli::config::{ConfigFile, resolve_options};
use paperdex_cli::pipeline::{ExportReport, run_export};
use paperdex_cli::summary::sheets_table;
use tracing::info_span;

use crate::cli::{ExportArgs, SheetsArgs};

pub fn run_sheets(args: &SheetsArgs) -> Result<()> {
    let names = paperdex_ingest::list_sheets(&args.path)
        .with_context(|| format!("list sheets of {}", args.path.display()))?;
    println!("{}", sheets_table(&names));
    Ok(())
}

pub fn run_export_command(args: &ExportArgs) -> Result<ExportReport> {
    let span = info_span!("resolve_options");
    let config = span.in_scope(|| {
        args.config
            .as_deref()
            .map(ConfigFile::load)
            .transpose()
            .context("load config")
    })?;
    let options = resolve_options(config, args.overrides());
    run_export(&options)
}
