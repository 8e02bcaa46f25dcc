//! PM2.5 statistics and report assembly.
//!
//! This module turns a resolved measurement column into summary statistics,
//! groups readings by location to find the most polluted site, and packages
//! everything into a timestamped [`types::AnalysisResult`].

pub mod location;
pub mod report;
pub mod stats;
pub mod types;
pub mod utility;
