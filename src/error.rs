//! Error types for each stage of the analysis pipeline.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading and parsing the input file.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be read from disk
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The text decoded but is not a well-formed table
    #[error("malformed CSV in {path}: {reason}")]
    Parse { path: PathBuf, reason: String },

    /// No candidate encoding could decode the file
    #[error("could not decode {path} with any of: {tried}")]
    EncodingExhausted { path: PathBuf, tried: String },
}

/// Errors raised while locating the columns the analysis needs.
#[derive(Debug, Error)]
pub enum ResolutionError {
    #[error("no PM2.5 column found (columns: {})", .columns.join(", "))]
    NoMeasurementColumn { columns: Vec<String> },

    #[error("PM2.5 column '{column}' is not numeric: row {row} holds '{value}'")]
    NonNumericMeasurement {
        column: String,
        row: usize,
        value: String,
    },
}

/// Errors raised by the statistics engine.
#[derive(Debug, Error)]
pub enum StatsError {
    /// Every measurement in the column is missing
    #[error("PM2.5 column '{column}' has no values to analyze")]
    EmptyData { column: String },
}

/// Errors raised while persisting the report.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("failed to create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write report {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read report {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid report JSON {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Top-level error for a single analysis run.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("input file not found: {requested} (fallback {fallback} missing too)")]
    InputNotFound { requested: PathBuf, fallback: PathBuf },

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Resolution(#[from] ResolutionError),

    #[error(transparent)]
    Stats(#[from] StatsError),

    #[error(transparent)]
    Output(#[from] OutputError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_measurement_column_lists_columns() {
        let err = ResolutionError::NoMeasurementColumn {
            columns: vec!["date".to_string(), "pm10".to_string()],
        };
        assert_eq!(err.to_string(), "no PM2.5 column found (columns: date, pm10)");
    }

    #[test]
    fn test_stage_errors_convert_into_analysis_error() {
        let err: AnalysisError = StatsError::EmptyData {
            column: "PM2.5".to_string(),
        }
        .into();

        assert!(matches!(err, AnalysisError::Stats(StatsError::EmptyData { .. })));
        assert_eq!(err.to_string(), "PM2.5 column 'PM2.5' has no values to analyze");
    }
}
