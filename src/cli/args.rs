//! Command-line argument definitions for the charger uptime tool
//!
//! Defines the CLI interface using the clap derive API.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the charger uptime calculator
///
/// Reads one report file and prints one line per station to stdout,
/// ascending by station ID.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "charger_uptime",
    version,
    about = "Compute per-station uptime percentages from charger availability reports"
)]
pub struct Args {
    /// Input report file
    ///
    /// UTF-8 text with a `[Stations]` section followed by a
    /// `[Charger Availability Reports]` section.
    #[arg(value_name = "INPUT_FILE")]
    pub input_file: PathBuf,

    /// Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress log output except errors
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress log output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,

    /// Output format for the uptime report
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "plain",
        help = "Output format for the uptime report"
    )]
    pub output_format: OutputFormat,
}

/// Output format for computed results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One `<stationID> <uptimePercent>` line per station
    Plain,
    /// JSON array of per-station records
    Json,
}

impl Args {
    /// Map the verbosity flags to a tracing level name
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_mapping() {
        let mut args = Args {
            input_file: PathBuf::from("input.txt"),
            verbose: 0,
            quiet: false,
            output_format: OutputFormat::Plain,
        };
        assert_eq!(args.log_level(), "warn");

        args.verbose = 1;
        assert_eq!(args.log_level(), "info");

        args.verbose = 5;
        assert_eq!(args.log_level(), "trace");

        args.verbose = 0;
        args.quiet = true;
        assert_eq!(args.log_level(), "error");
    }
}
