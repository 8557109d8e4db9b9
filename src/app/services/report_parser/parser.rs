//! Core input parser implementation
//!
//! Walks the file line by line, tracking the active section, and builds the
//! station registry before any report is validated against it. The section
//! policy is strict: each header may appear at most once, and the stations
//! section must be complete before the reports header is seen.

use std::path::Path;
use tracing::debug;

use super::field_parsers::{parse_id, parse_time, parse_up_flag};
use crate::app::models::{AvailabilityReport, Station, StationRegistry};
use crate::constants::{REPORT_FIELD_COUNT, REPORTS_HEADER, STATIONS_HEADER};
use crate::{Error, Result};

/// Fully validated parse output
#[derive(Debug, Clone)]
pub struct ParsedInput {
    pub registry: StationRegistry,
    pub reports: Vec<AvailabilityReport>,
}

/// Active section while walking the file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    None,
    Stations,
    Reports,
}

/// Parse the input file at `path`
///
/// Reads the whole file into memory and delegates to [`parse_str`]. A
/// missing or unreadable file is a validation failure like any other.
pub fn parse_file(path: &Path) -> Result<ParsedInput> {
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => Error::file_not_found(path.display().to_string()),
        _ => Error::file_read(path.display().to_string(), e),
    })?;

    parse_str(&content)
}

/// Parse input text into a station registry and validated reports
///
/// Fails fast at the first violation; errors carry the 1-based line number.
/// An input declaring zero stations is itself an error.
pub fn parse_str(content: &str) -> Result<ParsedInput> {
    let mut registry = StationRegistry::new();
    let mut reports = Vec::new();
    let mut section = Section::None;
    let mut stations_seen = false;
    let mut reports_seen = false;

    for (index, raw_line) in content.lines().enumerate() {
        let line_number = index + 1;
        let line = raw_line.trim();

        if line.is_empty() {
            continue;
        }

        if line == STATIONS_HEADER {
            // Stations must come first and only once
            if stations_seen || reports_seen {
                return Err(Error::misplaced_section(STATIONS_HEADER, line_number));
            }
            stations_seen = true;
            section = Section::Stations;
            continue;
        }

        if line == REPORTS_HEADER {
            if reports_seen || !stations_seen {
                return Err(Error::misplaced_section(REPORTS_HEADER, line_number));
            }
            reports_seen = true;
            section = Section::Reports;
            continue;
        }

        match section {
            Section::None => return Err(Error::data_before_header(line_number)),
            Section::Stations => parse_station_line(line, line_number, &mut registry)?,
            Section::Reports => {
                reports.push(parse_report_line(line, line_number, &registry)?);
            }
        }
    }

    if registry.is_empty() {
        return Err(Error::NoStations);
    }

    debug!(
        stations = registry.station_count(),
        chargers = registry.charger_count(),
        reports = reports.len(),
        "parsed input"
    );

    Ok(ParsedInput { registry, reports })
}

/// Parse one station line: `stationID [chargerID ...]`
fn parse_station_line(line: &str, line_number: usize, registry: &mut StationRegistry) -> Result<()> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some((station_token, charger_tokens)) = tokens.split_first() else {
        // Blank lines are filtered before dispatch
        return Ok(());
    };

    let station_id = parse_id(station_token, "Station ID", line_number)?;
    if registry.contains_station(station_id) {
        return Err(Error::duplicate_station(station_id, line_number));
    }

    let mut charger_ids = Vec::with_capacity(charger_tokens.len());
    for token in charger_tokens {
        let charger_id = parse_id(token, "Charger ID", line_number)?;
        // Uniqueness is file-global, including within this line
        if registry.owner_of(charger_id).is_some() || charger_ids.contains(&charger_id) {
            return Err(Error::duplicate_charger(charger_id, line_number));
        }
        charger_ids.push(charger_id);
    }

    registry.register(Station::new(station_id, charger_ids));
    Ok(())
}

/// Parse one report line: `chargerID startTime endTime upFlag`
fn parse_report_line(
    line: &str,
    line_number: usize,
    registry: &StationRegistry,
) -> Result<AvailabilityReport> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != REPORT_FIELD_COUNT {
        return Err(Error::malformed_report(
            line_number,
            REPORT_FIELD_COUNT,
            tokens.len(),
        ));
    }

    let charger_id = parse_id(tokens[0], "Charger ID", line_number)?;
    let start_time = parse_time(tokens[1], "Start time", line_number)?;
    let end_time = parse_time(tokens[2], "End time", line_number)?;
    let is_up = parse_up_flag(tokens[3], line_number)?;

    if start_time >= end_time {
        return Err(Error::invalid_time_range(line_number));
    }

    // The stations section is complete by the time any report is checked
    if registry.owner_of(charger_id).is_none() {
        return Err(Error::unknown_charger(charger_id, line_number));
    }

    Ok(AvailabilityReport {
        charger_id,
        start_time,
        end_time,
        is_up,
    })
}
