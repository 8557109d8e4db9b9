//! Charger Uptime Library
//!
//! A Rust library for computing per-station uptime percentages from a text
//! file describing charging stations, their chargers, and time-stamped
//! availability reports.
//!
//! This library provides tools for:
//! - Parsing the two-section report format with strict per-line validation
//! - Indexing stations and charger ownership for O(1) lookups
//! - Merging overlapping "up" intervals per station
//! - Deriving floored integer uptime percentages over each station's
//!   observed time window

pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod report_parser;
        pub mod uptime;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{AvailabilityReport, Station, StationRegistry, StationUptime};

/// Result type alias for uptime processing
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for uptime processing operations
///
/// Parse failures carry the 1-based line number of the offending input line
/// so the driver can surface it without string matching.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Input file does not exist
    #[error("Input file not found: {path}")]
    FileNotFound { path: String },

    /// Input file exists but could not be read
    #[error("Failed to read input file '{path}': {source}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Data line encountered before any section header
    #[error("Data found before section header at line {line}")]
    DataBeforeHeader { line: usize },

    /// Section header duplicated or out of order
    #[error("Unexpected section header '{header}' at line {line}")]
    MisplacedSection { header: String, line: usize },

    /// Token is not a valid non-negative integer
    #[error("Invalid integer '{token}' at line {line}")]
    InvalidInteger { token: String, line: usize },

    /// Integer token outside its declared bit-width range
    #[error("{field} out of {width} range at line {line}")]
    ValueOutOfRange {
        field: &'static str,
        width: &'static str,
        line: usize,
    },

    /// Station ID declared more than once
    #[error("Duplicate station ID {station_id} at line {line}")]
    DuplicateStation { station_id: u32, line: usize },

    /// Charger ID declared more than once, anywhere in the file
    #[error("Duplicate charger ID {charger_id} at line {line}")]
    DuplicateCharger { charger_id: u32, line: usize },

    /// Report references a charger never declared under any station
    #[error("Unknown charger ID {charger_id} at line {line}")]
    UnknownCharger { charger_id: u32, line: usize },

    /// Report line with the wrong number of fields
    #[error("Invalid report format at line {line}: expected {expected} fields, found {found}")]
    MalformedReport {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// Up flag token is not `true` or `false`
    #[error("Invalid up value at line {line}: must be 'true' or 'false'")]
    InvalidUpFlag { line: usize },

    /// Report interval with `start >= end`
    #[error("Invalid time range at line {line}: start >= end")]
    InvalidTimeRange { line: usize },

    /// Input declared no stations at all
    #[error("No stations defined in input file")]
    NoStations,

    /// I/O failure outside input validation, e.g. writing the report
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a file read error
    pub fn file_read(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::FileRead {
            path: path.into(),
            source,
        }
    }

    /// Create a data before header error
    pub fn data_before_header(line: usize) -> Self {
        Self::DataBeforeHeader { line }
    }

    /// Create a misplaced section error
    pub fn misplaced_section(header: impl Into<String>, line: usize) -> Self {
        Self::MisplacedSection {
            header: header.into(),
            line,
        }
    }

    /// Create an invalid integer error
    pub fn invalid_integer(token: impl Into<String>, line: usize) -> Self {
        Self::InvalidInteger {
            token: token.into(),
            line,
        }
    }

    /// Create a value out of range error
    pub fn out_of_range(field: &'static str, width: &'static str, line: usize) -> Self {
        Self::ValueOutOfRange { field, width, line }
    }

    /// Create a duplicate station error
    pub fn duplicate_station(station_id: u32, line: usize) -> Self {
        Self::DuplicateStation { station_id, line }
    }

    /// Create a duplicate charger error
    pub fn duplicate_charger(charger_id: u32, line: usize) -> Self {
        Self::DuplicateCharger { charger_id, line }
    }

    /// Create an unknown charger error
    pub fn unknown_charger(charger_id: u32, line: usize) -> Self {
        Self::UnknownCharger { charger_id, line }
    }

    /// Create a malformed report error
    pub fn malformed_report(line: usize, expected: usize, found: usize) -> Self {
        Self::MalformedReport {
            line,
            expected,
            found,
        }
    }

    /// Create an invalid up flag error
    pub fn invalid_up_flag(line: usize) -> Self {
        Self::InvalidUpFlag { line }
    }

    /// Create an invalid time range error
    pub fn invalid_time_range(line: usize) -> Self {
        Self::InvalidTimeRange { line }
    }

    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Whether this error is an input-validation failure
    ///
    /// The driver renders validation failures as `Error: ...` and anything
    /// else as `Unexpected error: ...`.
    pub fn is_validation(&self) -> bool {
        !matches!(self, Self::Io { .. })
    }
}
