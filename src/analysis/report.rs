use std::fmt;
use std::path::Path;

use chrono::Utc;

use crate::analysis::types::{AnalysisResult, Statistics};
use crate::dataset::Dataset;

impl AnalysisResult {
    /// Assembles the report, stamping it with the current time.
    pub fn build(filepath: &Path, dataset: &Dataset, stats: Statistics) -> Self {
        AnalysisResult {
            timestamp: Utc::now(),
            filepath: filepath.display().to_string(),
            total_measurements: dataset.row_count(),
            pm25_stats: stats.pm25,
            most_polluted_location: stats.most_polluted_location,
        }
    }
}

/// Console summary block.
impl fmt::Display for AnalysisResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "PM2.5 analysis results:")?;
        writeln!(f, "  • PM2.5 mean: {:.1} µg/m³", self.pm25_stats.mean)?;
        writeln!(f, "  • PM2.5 max: {:.1} µg/m³", self.pm25_stats.max)?;
        write!(
            f,
            "  • WHO exceedances: {:.1}%",
            self.pm25_stats.who_exceedances_percent
        )?;
        if let Some(location) = &self.most_polluted_location {
            write!(
                f,
                "\n  • Most polluted location: {} ({:.1} µg/m³)",
                location.name, location.mean_pm25
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::stats::compute;
    use crate::columns::resolve;

    fn paris_lyon() -> Dataset {
        Dataset::new(
            vec!["Location Name".to_string(), "PM2.5 (ug/m3)".to_string()],
            vec![
                vec!["Paris".to_string(), "20".to_string()],
                vec!["Paris".to_string(), "10".to_string()],
                vec!["Lyon".to_string(), "30".to_string()],
                vec!["Lyon".to_string(), "".to_string()],
            ],
        )
    }

    #[test]
    fn test_build_counts_all_rows() {
        let ds = paris_lyon();
        let stats = compute(&ds, &resolve(&ds).unwrap()).unwrap();
        let before = Utc::now();
        let result = AnalysisResult::build(Path::new("data/capteur.csv"), &ds, stats);

        assert!(result.timestamp >= before);
        assert_eq!(result.filepath, "data/capteur.csv");
        assert_eq!(result.total_measurements, 4);
        assert_eq!(result.pm25_stats.mean, 20.0);
        assert_eq!(result.most_polluted_location.unwrap().name, "Lyon");
    }

    #[test]
    fn test_summary_lines() {
        let ds = paris_lyon();
        let stats = compute(&ds, &resolve(&ds).unwrap()).unwrap();
        let result = AnalysisResult::build(Path::new("x.csv"), &ds, stats);

        let summary = result.to_string();
        let lines: Vec<_> = summary.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[1], "  • PM2.5 mean: 20.0 µg/m³");
        assert_eq!(lines[2], "  • PM2.5 max: 30.0 µg/m³");
        assert_eq!(lines[3], "  • WHO exceedances: 66.7%");
        assert_eq!(lines[4], "  • Most polluted location: Lyon (30.0 µg/m³)");
    }

    #[test]
    fn test_summary_without_location() {
        let ds = Dataset::new(vec!["pm2.5".to_string()], vec![vec!["3".to_string()]]);
        let stats = compute(&ds, &resolve(&ds).unwrap()).unwrap();
        let result = AnalysisResult::build(Path::new("x.csv"), &ds, stats);

        assert!(!result.to_string().contains("Most polluted"));
    }
}
