//! Test support for the uptime calculator
//!
//! Shared builders for registries and reports used across the interval and
//! calculator tests.

mod interval_tests;

use crate::app::models::{AvailabilityReport, Station, StationRegistry};

/// Build a registry from `(station_id, charger_ids)` pairs
pub fn registry_of(stations: &[(u32, &[u32])]) -> StationRegistry {
    let mut registry = StationRegistry::new();
    for &(station_id, charger_ids) in stations {
        registry.register(Station::new(station_id, charger_ids.to_vec()));
    }
    registry
}

/// Shorthand report constructor
pub fn report(charger_id: u32, start_time: u64, end_time: u64, is_up: bool) -> AvailabilityReport {
    AvailabilityReport {
        charger_id,
        start_time,
        end_time,
        is_up,
    }
}
