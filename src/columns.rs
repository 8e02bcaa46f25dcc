//! Column sniffing by header name.

use crate::dataset::Dataset;
use crate::error::ResolutionError;

const MEASUREMENT_NEEDLE: &str = "pm2.5";
const LOCATION_NEEDLE: &str = "location";
const PREFERRED_LOCATION: &str = "Location Name";

/// A column chosen for analysis, by name and position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnRef {
    pub name: String,
    pub index: usize,
}

/// The columns the statistics engine works from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedColumns {
    pub measurement: ColumnRef,
    pub location: Option<ColumnRef>,
}

/// Finds the PM2.5 column and, if any, the location column.
///
/// # Errors
///
/// Returns [`ResolutionError::NoMeasurementColumn`] when no header contains
/// "pm2.5", and [`ResolutionError::NonNumericMeasurement`] when the chosen
/// column holds text.
pub fn resolve(dataset: &Dataset) -> Result<ResolvedColumns, ResolutionError> {
    let headers = dataset.headers();

    let measurement = first_containing(headers, MEASUREMENT_NEEDLE).ok_or_else(|| {
        ResolutionError::NoMeasurementColumn {
            columns: headers.to_vec(),
        }
    })?;

    if let Err((row, value)) = dataset.numeric_column(measurement.index) {
        return Err(ResolutionError::NonNumericMeasurement {
            column: measurement.name,
            row,
            value,
        });
    }

    let location = dataset
        .column_index(PREFERRED_LOCATION)
        .map(|index| ColumnRef {
            name: PREFERRED_LOCATION.to_string(),
            index,
        })
        .or_else(|| first_containing(headers, LOCATION_NEEDLE));

    Ok(ResolvedColumns {
        measurement,
        location,
    })
}

/// First header, in column order, containing `needle` case-insensitively.
fn first_containing(headers: &[String], needle: &str) -> Option<ColumnRef> {
    headers
        .iter()
        .position(|h| h.to_lowercase().contains(needle))
        .map(|index| ColumnRef {
            name: headers[index].clone(),
            index,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset(headers: &[&str]) -> Dataset {
        let row = headers.iter().map(|_| "1".to_string()).collect();
        Dataset::new(headers.iter().map(|h| h.to_string()).collect(), vec![row])
    }

    #[test]
    fn test_first_measurement_match_wins() {
        let cols = resolve(&dataset(&["x", "PM2.5 (ug/m3)", "pm2.5_raw"])).unwrap();
        assert_eq!(cols.measurement.name, "PM2.5 (ug/m3)");
        assert_eq!(cols.measurement.index, 1);
        assert_eq!(cols.location, None);
    }

    #[test]
    fn test_no_measurement_column() {
        let err = resolve(&dataset(&["date", "pm10"])).unwrap_err();
        assert!(matches!(err, ResolutionError::NoMeasurementColumn { .. }));
    }

    #[test]
    fn test_exact_location_name_preferred() {
        let cols = resolve(&dataset(&["location_id", "pm2.5", "Location Name"])).unwrap();
        let location = cols.location.unwrap();
        assert_eq!(location.name, "Location Name");
        assert_eq!(location.index, 2);
    }

    #[test]
    fn test_location_substring_fallback() {
        let cols = resolve(&dataset(&["pm2.5", "Sensor LOCATION", "location_2"])).unwrap();
        assert_eq!(cols.location.unwrap().name, "Sensor LOCATION");
    }

    #[test]
    fn test_location_name_match_is_case_sensitive() {
        let cols = resolve(&dataset(&["location_id", "pm2.5", "location name"])).unwrap();
        assert_eq!(cols.location.unwrap().name, "location_id");
    }

    #[test]
    fn test_text_measurement_column_rejected() {
        let ds = Dataset::new(
            vec!["pm2.5".to_string()],
            vec![vec!["3".to_string()], vec!["n.d.".to_string()]],
        );
        match resolve(&ds).unwrap_err() {
            ResolutionError::NonNumericMeasurement { column, row, value } => {
                assert_eq!(column, "pm2.5");
                assert_eq!(row, 2);
                assert_eq!(value, "n.d.");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
