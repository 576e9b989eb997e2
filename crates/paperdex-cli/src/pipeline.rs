//! Export pipeline: load, normalize, write.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use paperdex_model::{ExportOptions, OutputDocument, PillarSource};
use tracing::{info, info_span};

/// Fill count for one output column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnStat {
    pub name: String,
    /// Records with a non-empty value.
    pub filled: usize,
}

/// What a finished export produced.
#[derive(Debug, Clone)]
pub struct ExportReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub pillar_source: PillarSource,
    pub papers: usize,
    pub pillars: usize,
    pub columns: Vec<ColumnStat>,
}

/// Runs one export with fully resolved options.
pub fn run_export(options: &ExportOptions) -> Result<ExportReport> {
    let span = info_span!("export", input = %options.input.display());
    let _guard = span.enter();
    let start = Instant::now();

    let table = paperdex_ingest::load(&options.input, options.sheet.as_deref())
        .with_context(|| format!("load {}", options.input.display()))?;
    let document = paperdex_transform::normalize(table, options);
    paperdex_output::write(&document, &options.output, options.pretty)
        .with_context(|| format!("write {}", options.output.display()))?;

    let report = ExportReport {
        input: options.input.clone(),
        output: options.output.clone(),
        pillar_source: options.pillar_source,
        papers: document.paper_count(),
        pillars: document.pillar_count(),
        columns: column_stats(&document),
    };
    info!(
        papers = report.papers,
        pillars = report.pillars,
        duration_ms = start.elapsed().as_millis(),
        "export complete"
    );
    Ok(report)
}

/// Non-empty value counts per column, in column order.
pub fn column_stats(document: &OutputDocument) -> Vec<ColumnStat> {
    let Some(first) = document.papers.first() else {
        return Vec::new();
    };
    let mut stats: Vec<ColumnStat> = first
        .keys()
        .map(|name| ColumnStat {
            name: name.to_string(),
            filled: 0,
        })
        .collect();
    for paper in &document.papers {
        for (stat, (_, value)) in stats.iter_mut().zip(paper.iter()) {
            if !value.is_empty() {
                stat.filled += 1;
            }
        }
    }
    stats
}
