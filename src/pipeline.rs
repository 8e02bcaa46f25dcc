//! End-to-end analysis run: load, resolve, compute, report.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::analysis::stats::compute;
use crate::analysis::types::AnalysisResult;
use crate::columns::resolve;
use crate::config::AnalysisConfig;
use crate::error::AnalysisError;
use crate::loader::load;
use crate::output::{print_summary, write_report};

/// Analyzes one CSV file without writing anything.
#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub fn analyze(path: &Path) -> Result<AnalysisResult, AnalysisError> {
    let dataset = load(path)?;
    for (idx, name) in dataset.headers().iter().enumerate() {
        debug!(column = %name, kind = ?dataset.column_type(idx), "Column");
    }

    let columns = resolve(&dataset)?;
    info!(
        measurement = %columns.measurement.name,
        location = columns.location.as_ref().map(|c| c.name.as_str()),
        "Columns resolved"
    );

    let stats = compute(&dataset, &columns)?;
    Ok(AnalysisResult::build(path, &dataset, stats))
}

/// Runs the whole pipeline for `config` and returns the report path.
///
/// Nothing is written unless every stage before it succeeds.
pub fn run(config: &AnalysisConfig) -> Result<PathBuf, AnalysisError> {
    let input = config.resolve_input()?;
    info!(input = %input.display(), "Starting sensor analysis");

    let result = analyze(input)?;
    print_summary(&result);

    let path = write_report(&result, &config.output_dir)?;
    info!("Analysis completed");
    Ok(path)
}
