//! Data types produced by the analysis pipeline.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Summary statistics over the non-missing PM2.5 readings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pm25Stats {
    pub mean: f64,
    pub median: f64,
    pub max: f64,
    pub min: f64,
    pub who_exceedances: usize,
    pub who_exceedances_percent: f64,
}

/// The location with the highest mean PM2.5.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MostPollutedLocation {
    pub name: String,
    pub mean_pm25: f64,
}

/// Per-location aggregate. `mean` is `None` when every reading for the
/// location is missing.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationStats {
    pub name: String,
    pub mean: Option<f64>,
    pub count: usize,
}

/// Everything the statistics engine computes for one dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct Statistics {
    pub pm25: Pm25Stats,
    pub locations: Vec<LocationStats>,
    pub most_polluted_location: Option<MostPollutedLocation>,
}

/// The report written to `kaikai_analysis_results.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub timestamp: DateTime<Utc>,
    pub filepath: String,
    pub total_measurements: usize,
    pub pm25_stats: Pm25Stats,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub most_polluted_location: Option<MostPollutedLocation>,
}
