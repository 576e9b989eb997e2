//! Document assembly and the end-to-end normalization pipeline.

use std::time::Instant;

use paperdex_model::{ExportOptions, Facet, OutputDocument, PillarSource, RawTable, Record};
use tracing::{info, info_span};

use crate::columns::filter_columns;
use crate::missing::fill_missing;
use crate::pillars::derive_pillars;
use crate::stringify::stringify;

/// Combines records, pillars and optional facets into the output document.
pub fn assemble(
    records: Vec<Record>,
    pillars: Vec<String>,
    facets: Option<Vec<Facet>>,
) -> OutputDocument {
    OutputDocument {
        pillars,
        papers: records,
        facets,
    }
}

/// Runs filter, fill, stringify, pillar selection and assembly.
pub fn normalize(table: RawTable, options: &ExportOptions) -> OutputDocument {
    let span = info_span!("normalize", pillar_source = %options.pillar_source);
    let _guard = span.enter();
    let start = Instant::now();
    let source_columns = table.width();

    let table = filter_columns(table);
    let table = fill_missing(table, &options.na_values);
    let records = stringify(table).into_records();

    let pillars = match options.pillar_source {
        PillarSource::Fixed => options.pillars.clone(),
        PillarSource::Derived => derive_pillars(&records, &options.pillar_column),
    };
    let facets = options.include_facets.then(|| options.facets.clone());

    let document = assemble(records, pillars, facets);
    info!(
        source_columns,
        papers = document.paper_count(),
        pillars = document.pillar_count(),
        facets = document.facets.as_ref().map_or(0, Vec::len),
        duration_ms = start.elapsed().as_millis(),
        "normalize complete"
    );
    document
}
