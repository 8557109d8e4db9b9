//! Application constants for the charger uptime tool

/// Header line opening the station declarations section
pub const STATIONS_HEADER: &str = "[Stations]";

/// Header line opening the availability reports section
pub const REPORTS_HEADER: &str = "[Charger Availability Reports]";

/// Exact number of whitespace-separated fields on a report line
pub const REPORT_FIELD_COUNT: usize = 4;

/// Sentinel line printed to stdout when a run fails
pub const ERROR_SENTINEL: &str = "ERROR";
