//! Command execution for the charger uptime CLI
//!
//! Wires logging, parsing, computation and output rendering. The exit-code
//! and sentinel policy lives in `main`; everything here reports failures
//! through the crate error type.

use std::io::Write;
use std::time::{Duration, Instant};
use tracing::info;

use crate::app::models::StationUptime;
use crate::app::services::{report_parser, uptime};
use crate::cli::args::{Args, OutputFormat};
use crate::{Error, Result};

/// Summary of a completed run
#[derive(Debug, Clone, Default)]
pub struct RunStats {
    /// Number of stations declared in the input
    pub stations: usize,
    /// Number of chargers declared across all stations
    pub chargers: usize,
    /// Number of availability reports parsed
    pub reports: usize,
    /// Total wall-clock processing time
    pub processing_time: Duration,
}

/// Run the uptime computation end to end
///
/// Parses the input file, computes per-station uptime and writes the report
/// to stdout in the selected format.
pub fn run(args: &Args) -> Result<RunStats> {
    let start = Instant::now();

    info!("Processing input file: {}", args.input_file.display());

    let parsed = report_parser::parse_file(&args.input_file)?;
    let uptimes = uptime::compute_uptime(&parsed.registry, &parsed.reports);

    let results: Vec<StationUptime> = uptimes
        .into_iter()
        .map(|(station_id, uptime_percent)| StationUptime {
            station_id,
            uptime_percent,
        })
        .collect();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    render_report(&mut out, &results, args.output_format)?;

    let stats = RunStats {
        stations: parsed.registry.station_count(),
        chargers: parsed.registry.charger_count(),
        reports: parsed.reports.len(),
        processing_time: start.elapsed(),
    };

    info!(
        "Processed {} stations, {} chargers, {} reports in {:.2?}",
        stats.stations, stats.chargers, stats.reports, stats.processing_time
    );

    Ok(stats)
}

/// Set up structured logging on stderr
///
/// stdout is reserved for the report and the failure sentinel, so all log
/// output goes to stderr. `RUST_LOG` overrides the flag-derived level.
pub fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("charger_uptime={}", args.log_level())));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

/// Write the uptime report in the selected format
fn render_report(
    out: &mut impl Write,
    results: &[StationUptime],
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Plain => {
            for result in results {
                writeln!(out, "{} {}", result.station_id, result.uptime_percent)
                    .map_err(|e| Error::io("Failed to write report line", e))?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, results)
                .map_err(|e| Error::io("Failed to serialize report", e.into()))?;
            writeln!(out).map_err(|e| Error::io("Failed to write report", e))?;
        }
    }
    Ok(())
}
