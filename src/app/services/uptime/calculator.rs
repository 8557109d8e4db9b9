//! Station uptime calculation over parsed availability reports

use std::collections::{BTreeMap, HashMap};
use tracing::debug;

use super::interval::{Interval, merge_intervals, total_covered};
use crate::app::models::{AvailabilityReport, StationRegistry};

/// Compute the uptime percentage for every declared station
///
/// Reports are grouped by owning station and each station is folded
/// independently. A station aggregates the reports of all its chargers into
/// one observation window; gaps inside that window count as downtime.
/// Stations with no reports at all get 0. The result has one entry per
/// declared station, keyed in ascending station ID order.
pub fn compute_uptime(
    registry: &StationRegistry,
    reports: &[AvailabilityReport],
) -> BTreeMap<u32, u8> {
    let mut grouped: HashMap<u32, Vec<&AvailabilityReport>> = HashMap::new();
    for report in reports {
        // Ownership is guaranteed by the parser; an unowned charger cannot
        // reach this point.
        if let Some(station_id) = registry.owner_of(report.charger_id) {
            grouped.entry(station_id).or_default().push(report);
        }
    }

    let mut uptimes = BTreeMap::new();
    for station in registry.stations() {
        let station_reports = grouped
            .get(&station.station_id)
            .map(Vec::as_slice)
            .unwrap_or(&[]);
        let percent = station_uptime(station_reports);
        debug!(
            station_id = station.station_id,
            reports = station_reports.len(),
            percent,
            "computed station uptime"
        );
        uptimes.insert(station.station_id, percent);
    }

    uptimes
}

/// Uptime percentage for a single station's reports
///
/// The observed window is `[min start, max end]` across all reports, up or
/// down. "Down" reports are not subtracted from anything; they only matter
/// in that they are excluded from the merged "up" set, so any uncovered
/// time counts as downtime.
fn station_uptime(reports: &[&AvailabilityReport]) -> u8 {
    if reports.is_empty() {
        // No observation window
        return 0;
    }

    let window_start = reports.iter().map(|r| r.start_time).min().unwrap_or(0);
    let window_end = reports.iter().map(|r| r.end_time).max().unwrap_or(0);
    let total = window_end - window_start;
    if total == 0 {
        // Degenerate window, unreachable while reports enforce start < end
        return 0;
    }

    let up_intervals: Vec<Interval> = reports
        .iter()
        .filter(|r| r.is_up)
        .map(|r| Interval::new(r.start_time, r.end_time))
        .collect();
    let up_time = total_covered(&merge_intervals(up_intervals));

    // Floored percentage in exact integer arithmetic; widened so the
    // multiplication cannot overflow at u64 time scales.
    (u128::from(up_time) * 100 / u128::from(total)) as u8
}
