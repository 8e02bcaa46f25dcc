//! CLI entry point for the Kaikai sensor analyzer.
//!
//! Reads one CSV export of IoT air-quality readings, prints a PM2.5 summary
//! and writes `kaikai_analysis_results.json` to the output directory.

use anyhow::Result;
use clap::Parser;
use kaikai_analyzer::config::AnalysisConfig;
use kaikai_analyzer::pipeline::run;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::{error, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "kaikai_analyzer")]
#[command(about = "Analyze PM2.5 readings from an IoT sensor CSV export", long_about = None)]
struct Cli {
    /// CSV file to analyze [default: /app/data/capteur_temp.csv]
    #[arg(value_name = "INPUT_FILE")]
    input: Option<PathBuf>,

    /// Directory the JSON report is written to [default: /app/output]
    #[arg(value_name = "OUTPUT_DIR")]
    output_dir: Option<PathBuf>,

    /// Also write JSON logs to this file
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Extra positional arguments are accepted and ignored
    #[arg(hide = true, value_name = "IGNORED")]
    _extra: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _guard = init_tracing(cli.log_file.as_deref())?;

    let config = AnalysisConfig::from_args(cli.input, cli.output_dir);

    match run(&config) {
        Ok(path) => {
            info!(path = %path.display(), "Analysis finished successfully");
            Ok(())
        }
        Err(e) => {
            error!(error = %e, "Analysis failed");
            Err(e.into())
        }
    }
}

/// Logging setup: colored stderr, plus a JSON log file when requested.
///
/// The returned guard must stay alive until exit so buffered lines are flushed.
fn init_tracing(log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let (json_layer, guard) = match log_file {
        Some(path) => {
            let log_dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            let log_file_name = path
                .file_name()
                .unwrap_or(OsStr::new("kaikai_analyzer.log"));

            let file_appender = tracing_appender::rolling::never(log_dir, log_file_name);
            let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

            let layer = fmt::layer()
                .json()
                .with_current_span(true)
                .with_span_list(true)
                .with_writer(non_blocking_file)
                .with_filter(
                    EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?),
                );
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    Ok(guard)
}
