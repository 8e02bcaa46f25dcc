use tracing::debug;

use crate::analysis::location::{group_by_location, most_polluted};
use crate::analysis::types::{Pm25Stats, Statistics};
use crate::analysis::utility::{max, mean, median, min, pct};
use crate::columns::ResolvedColumns;
use crate::dataset::{Dataset, parse_number};
use crate::error::StatsError;

/// WHO 24-hour PM2.5 guideline, in µg/m³.
pub const WHO_PM25_THRESHOLD: f64 = 15.0;

impl Pm25Stats {
    /// Summarises non-missing readings. Returns `None` for empty input.
    ///
    /// `mean` is the arithmetic mean clamped to `[min, max]`. This differs from
    /// the unclamped IEEE result only when rounding in the sum pushes it past
    /// a bound; it is not a general correction for summation error.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        let (low, high) = (min(values)?, max(values)?);
        let exceedances = values.iter().filter(|&&v| v > WHO_PM25_THRESHOLD).count();

        Some(Pm25Stats {
            mean: mean(values)?.clamp(low, high),
            median: median(values)?,
            max: high,
            min: low,
            who_exceedances: exceedances,
            who_exceedances_percent: pct(exceedances, values.len()),
        })
    }
}

/// Computes PM2.5 statistics and the per-location breakdown.
///
/// `columns` must come from [`crate::columns::resolve`] on the same dataset.
///
/// # Errors
///
/// Returns [`StatsError::EmptyData`] if the measurement column has no
/// non-missing values.
pub fn compute(dataset: &Dataset, columns: &ResolvedColumns) -> Result<Statistics, StatsError> {
    let values: Vec<Option<f64>> = dataset
        .column(columns.measurement.index)
        .map(|cell| cell.and_then(parse_number))
        .collect();
    let present: Vec<f64> = values.iter().flatten().copied().collect();

    let pm25 = Pm25Stats::from_values(&present).ok_or_else(|| StatsError::EmptyData {
        column: columns.measurement.name.clone(),
    })?;
    debug!(
        present = present.len(),
        missing = values.len() - present.len(),
        "PM2.5 values collected"
    );

    let locations = match &columns.location {
        Some(location) => group_by_location(dataset.column(location.index), &values),
        None => Vec::new(),
    };
    for group in &locations {
        debug!(location = %group.name, mean = ?group.mean, count = group.count, "Location aggregate");
    }

    let most_polluted_location = most_polluted(&locations);

    Ok(Statistics {
        pm25,
        locations,
        most_polluted_location,
    })
}
