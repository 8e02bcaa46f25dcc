use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::error::AnalysisError;

pub const DEFAULT_INPUT: &str = "/app/data/capteur_temp.csv";
pub const DEFAULT_OUTPUT_DIR: &str = "/app/output";
/// Tried relative to the working directory when the input is missing.
pub const LOCAL_FALLBACK_INPUT: &str = "capteur_temp.csv";

/// Paths for one analysis run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisConfig {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub fallback_input: PathBuf,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            fallback_input: PathBuf::from(LOCAL_FALLBACK_INPUT),
        }
    }
}

impl AnalysisConfig {
    /// Builds a config from optional positional arguments.
    pub fn from_args(input: Option<PathBuf>, output_dir: Option<PathBuf>) -> Self {
        let defaults = Self::default();
        Self {
            input: input.unwrap_or(defaults.input),
            output_dir: output_dir.unwrap_or(defaults.output_dir),
            fallback_input: defaults.fallback_input,
        }
    }

    /// Returns the file to analyze: the configured input if it exists, else
    /// the local fallback.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::InputNotFound`] when neither exists.
    pub fn resolve_input(&self) -> Result<&Path, AnalysisError> {
        if self.input.exists() {
            return Ok(self.input.as_path());
        }

        warn!(path = %self.input.display(), "Input file not found");
        if self.fallback_input.exists() {
            info!(path = %self.fallback_input.display(), "Using local file");
            return Ok(self.fallback_input.as_path());
        }

        Err(AnalysisError::InputNotFound {
            requested: self.input.clone(),
            fallback: self.fallback_input.clone(),
        })
    }
}
