//! Output formatting and persistence for analysis reports.
//!
//! Supports the console summary and the JSON report file.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::analysis::types::AnalysisResult;
use crate::error::OutputError;

/// File name of the report inside the output directory.
pub const REPORT_FILE_NAME: &str = "kaikai_analysis_results.json";

/// Prints the human-readable summary to stdout.
pub fn print_summary(result: &AnalysisResult) {
    println!("\n{result}");
}

/// Writes `result` as pretty JSON to `<output_dir>/kaikai_analysis_results.json`.
///
/// Creates the directory and any missing parents. Overwrites an existing
/// report.
pub fn write_report(result: &AnalysisResult, output_dir: &Path) -> Result<PathBuf, OutputError> {
    fs::create_dir_all(output_dir).map_err(|source| OutputError::CreateDir {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let path = output_dir.join(REPORT_FILE_NAME);
    let json = serde_json::to_string_pretty(result).map_err(|source| OutputError::Json {
        path: path.clone(),
        source,
    })?;
    debug!(path = %path.display(), bytes = json.len(), "Writing report");

    fs::write(&path, json).map_err(|source| OutputError::Write {
        path: path.clone(),
        source,
    })?;

    info!(path = %path.display(), "Report saved");
    Ok(path)
}

/// Reads a report previously written by [`write_report`].
pub fn read_report(path: &Path) -> Result<AnalysisResult, OutputError> {
    let content = fs::read_to_string(path).map_err(|source| OutputError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| OutputError::Json {
        path: path.to_path_buf(),
        source,
    })
}
