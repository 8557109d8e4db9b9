//! Core data structures for uptime processing
//!
//! Defines the parsed record types, the station registry used for charger
//! ownership lookups, and the per-station result record.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// A charging station and the chargers it owns
///
/// Created once during parsing and immutable thereafter. A station may own
/// zero chargers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Station {
    pub station_id: u32,
    pub charger_ids: Vec<u32>,
}

impl Station {
    pub fn new(station_id: u32, charger_ids: Vec<u32>) -> Self {
        Self {
            station_id,
            charger_ids,
        }
    }
}

/// One observation interval reported for a charger
///
/// Invariant: `start_time < end_time`, enforced at parse time. Multiple
/// reports may reference the same charger and may overlap arbitrarily.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityReport {
    pub charger_id: u32,
    pub start_time: u64,
    pub end_time: u64,
    pub is_up: bool,
}

/// Station registry providing O(1) charger ownership lookups
///
/// Owns the declared stations, ordered by station ID, plus a charger to
/// station index. Charger IDs are unique across the whole registry: a
/// charger belongs to exactly one station.
#[derive(Debug, Clone, Default)]
pub struct StationRegistry {
    /// Declared stations keyed by station ID, iterated in ascending order
    stations: BTreeMap<u32, Station>,

    /// Owning station for every declared charger
    charger_owners: HashMap<u32, u32>,
}

impl StationRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a station and index its chargers
    ///
    /// The caller must have rejected duplicate station and charger IDs
    /// beforehand; the parser does so with line-numbered errors.
    pub fn register(&mut self, station: Station) {
        for &charger_id in &station.charger_ids {
            self.charger_owners.insert(charger_id, station.station_id);
        }
        self.stations.insert(station.station_id, station);
    }

    /// Get a station by ID
    pub fn get_station(&self, station_id: u32) -> Option<&Station> {
        self.stations.get(&station_id)
    }

    /// Check whether a station ID is already declared
    pub fn contains_station(&self, station_id: u32) -> bool {
        self.stations.contains_key(&station_id)
    }

    /// Look up the station owning a charger
    pub fn owner_of(&self, charger_id: u32) -> Option<u32> {
        self.charger_owners.get(&charger_id).copied()
    }

    /// Number of declared stations
    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    /// Number of declared chargers across all stations
    pub fn charger_count(&self) -> usize {
        self.charger_owners.len()
    }

    /// Whether no stations have been declared
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Iterate stations in ascending station ID order
    pub fn stations(&self) -> impl Iterator<Item = &Station> {
        self.stations.values()
    }
}

/// Computed uptime for a single station
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StationUptime {
    pub station_id: u32,
    /// Floored integer percentage in [0, 100]
    pub uptime_percent: u8,
}
